pub mod conversion_service;
pub mod info_service;
