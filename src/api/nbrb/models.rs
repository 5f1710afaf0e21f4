use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{CurrencyInfo, CurrencyRate};

/// Entry of the bank's published currency directory
#[derive(Debug, Clone, Deserialize)]
pub struct NbrbCurrency {
    #[serde(rename = "Cur_ID")]
    pub cur_id: i64,
    #[serde(rename = "Cur_Abbreviation")]
    pub cur_abbreviation: String,
}

/// One official rate quotation as published by the bank
#[derive(Debug, Clone, Deserialize)]
pub struct NbrbRate {
    #[serde(rename = "Cur_ID")]
    pub cur_id: i64,
    #[serde(rename = "Cur_Abbreviation")]
    pub cur_abbreviation: String,
    #[serde(rename = "Date")]
    pub date: NaiveDateTime,
    #[serde(rename = "Cur_OfficialRate")]
    pub cur_official_rate: Decimal,
}

impl From<NbrbCurrency> for CurrencyInfo {
    fn from(value: NbrbCurrency) -> Self {
        Self {
            id: value.cur_id,
            abbreviation: value.cur_abbreviation,
        }
    }
}

impl From<NbrbRate> for CurrencyRate {
    fn from(value: NbrbRate) -> Self {
        Self {
            id: value.cur_id,
            abbreviation: value.cur_abbreviation,
            date: value.date.date(),
            rate: value.cur_official_rate,
        }
    }
}

/// Errors raised while talking to the bank's API
#[derive(Debug, Error)]
pub enum NbrbError {
    /// 4xx response from the bank
    #[error("upstream rejected the request ({status}): {message}")]
    Client { status: u16, message: String },
    /// 5xx response from the bank
    #[error("upstream server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The request never produced a response
    #[error("upstream request failed: {0}")]
    Transport(String),
    /// The response body did not match the bank's wire format
    #[error("could not decode upstream response: {0}")]
    Decode(String),
}
