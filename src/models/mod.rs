//! Data models shared by the HTTP layer, services, and upstream client

pub mod currency;

pub use currency::{CurrencyInfo, CurrencyRate};
