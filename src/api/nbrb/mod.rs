pub mod client;
pub mod models;

pub use client::NbrbClient;
pub use models::NbrbError;
