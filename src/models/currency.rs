use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency identified by its numeric ID and letter code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub id: i64,
    pub abbreviation: String,
}

/// One currency's exchange rate on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub id: i64,
    pub abbreviation: String,
    pub date: NaiveDate,
    pub rate: Decimal,
}
