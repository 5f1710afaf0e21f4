use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;

/// List all stored rate records
pub async fn get_all(
    pool: &SqlitePool,
) -> Result<Vec<(i64, String, NaiveDate, String)>, sqlx::Error> {
    sqlx::query_as::<_, (i64, String, NaiveDate, String)>(
        "SELECT id, abbreviation, date, rate FROM currency_rate ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Get a rate record by ID
pub async fn get_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<(i64, String, NaiveDate, String)>, sqlx::Error> {
    sqlx::query_as::<_, (i64, String, NaiveDate, String)>(
        "SELECT id, abbreviation, date, rate FROM currency_rate WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get all rate records for an abbreviation on a date
pub async fn get_by_abbreviation_and_date(
    pool: &SqlitePool,
    abbreviation: &str,
    date: NaiveDate,
) -> Result<Vec<(i64, String, NaiveDate, String)>, sqlx::Error> {
    sqlx::query_as::<_, (i64, String, NaiveDate, String)>(
        "SELECT id, abbreviation, date, rate FROM currency_rate WHERE abbreviation = ? AND date = ?",
    )
    .bind(abbreviation)
    .bind(date)
    .fetch_all(pool)
    .await
}

/// Write a rate record, replacing any existing record with the same ID
pub async fn upsert(
    pool: &SqlitePool,
    id: i64,
    abbreviation: &str,
    date: NaiveDate,
    rate: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO currency_rate (id, abbreviation, date, rate) VALUES (?, ?, ?, ?) \
         ON CONFLICT(id) DO UPDATE SET abbreviation = excluded.abbreviation, \
         date = excluded.date, rate = excluded.rate",
    )
    .bind(id)
    .bind(abbreviation)
    .bind(date)
    .bind(rate)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a rate record by ID, returning the number of rows removed
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM currency_rate WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
