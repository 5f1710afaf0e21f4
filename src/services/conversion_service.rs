use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::sqlite::SqlitePool;
use tracing::{error, info};

use crate::db;
use crate::models::CurrencyRate;
use crate::utils::errors::ServiceError;

/// Result of a currency conversion
#[derive(Debug, PartialEq)]
pub struct Conversion {
    pub amount: Decimal,
    pub from: i64,
    pub to: i64,
    pub result: Decimal,
}

/// Convert an amount between two currencies using their stored rates
///
/// The supplied IDs are rate-record IDs. The result is
/// `amount * to_rate / from_rate` rounded half-up to 4 fractional digits.
/// Pure read + compute; nothing is written.
pub async fn convert(
    pool: &SqlitePool,
    from_id: i64,
    to_id: i64,
    amount: Option<Decimal>,
) -> Result<Conversion, ServiceError> {
    let amount = match amount {
        Some(a) if a > Decimal::ZERO => a,
        other => {
            error!("rejected conversion amount: {:?}", other);
            return Err(ServiceError::Validation(
                "amount must be greater than zero".to_string(),
            ));
        }
    };

    let from_row = db::currency_rate::get_by_id(pool, from_id).await?;
    let to_row = db::currency_rate::get_by_id(pool, to_id).await?;

    let (Some(from_row), Some(to_row)) = (from_row, to_row) else {
        error!("no rate record for currency {} or {}", from_id, to_id);
        return Err(ServiceError::NotFound(
            "one of the currencies in the pair was not found".to_string(),
        ));
    };

    let from_rate = positive_rate(from_row.0, &from_row.3)?;
    let to_rate = positive_rate(to_row.0, &to_row.3)?;

    let result = (amount * to_rate / from_rate)
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
    info!(
        "converted {} of currency {} into {} of currency {}",
        amount, from_id, result, to_id
    );

    Ok(Conversion {
        amount,
        from: from_id,
        to: to_id,
        result,
    })
}

/// List every stored rate record
pub async fn get_all_rates(pool: &SqlitePool) -> Result<Vec<CurrencyRate>, ServiceError> {
    let rows = db::currency_rate::get_all(pool).await?;
    rows.into_iter().map(rate_from_row).collect()
}

/// Get a stored rate record by ID
pub async fn get_rate_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<CurrencyRate>, ServiceError> {
    match db::currency_rate::get_by_id(pool, id).await? {
        Some(row) => Ok(Some(rate_from_row(row)?)),
        None => Ok(None),
    }
}

/// Create a rate record keyed on the ID supplied in the payload
pub async fn create_rate(
    pool: &SqlitePool,
    rate: CurrencyRate,
) -> Result<CurrencyRate, ServiceError> {
    validate(&rate)?;
    db::currency_rate::upsert(
        pool,
        rate.id,
        &rate.abbreviation,
        rate.date,
        &rate.rate.to_string(),
    )
    .await?;
    info!("created rate {} ({} @ {})", rate.id, rate.abbreviation, rate.date);
    Ok(rate)
}

/// Update a rate record; the path ID wins over any ID in the payload
pub async fn update_rate(
    pool: &SqlitePool,
    id: i64,
    mut rate: CurrencyRate,
) -> Result<CurrencyRate, ServiceError> {
    validate(&rate)?;
    rate.id = id;
    db::currency_rate::upsert(
        pool,
        rate.id,
        &rate.abbreviation,
        rate.date,
        &rate.rate.to_string(),
    )
    .await?;
    info!("updated rate {} ({} @ {})", rate.id, rate.abbreviation, rate.date);
    Ok(rate)
}

/// Delete a rate record; deleting an absent ID is a no-op
pub async fn delete_rate(pool: &SqlitePool, id: i64) -> Result<(), ServiceError> {
    let removed = db::currency_rate::delete(pool, id).await?;
    info!("deleted rate {} ({} row(s))", id, removed);
    Ok(())
}

/// List every stored rate for an abbreviation on a date
pub async fn rates_by_abbreviation_and_date(
    pool: &SqlitePool,
    abbreviation: &str,
    date: NaiveDate,
) -> Result<Vec<CurrencyRate>, ServiceError> {
    let rows = db::currency_rate::get_by_abbreviation_and_date(pool, abbreviation, date).await?;
    rows.into_iter().map(rate_from_row).collect()
}

fn validate(rate: &CurrencyRate) -> Result<(), ServiceError> {
    if rate.rate <= Decimal::ZERO {
        error!("rejected rate {}: {} is not positive", rate.id, rate.rate);
        return Err(ServiceError::Validation(
            "rate must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// A stored rate must parse and be strictly positive to take part in a conversion
fn positive_rate(id: i64, raw: &str) -> Result<Decimal, ServiceError> {
    match raw.parse::<Decimal>() {
        Ok(rate) if rate > Decimal::ZERO => Ok(rate),
        _ => {
            error!("stored rate for record {} is missing or not positive: {:?}", id, raw);
            Err(ServiceError::InvalidRate)
        }
    }
}

fn rate_from_row(
    (id, abbreviation, date, rate): (i64, String, NaiveDate, String),
) -> Result<CurrencyRate, ServiceError> {
    let rate = rate.parse::<Decimal>().map_err(|_| {
        error!("stored rate for record {} is not a valid decimal", id);
        ServiceError::InvalidRate
    })?;
    Ok(CurrencyRate {
        id,
        abbreviation,
        date,
        rate,
    })
}
