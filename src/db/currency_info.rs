use sqlx::sqlite::SqlitePool;

/// List all stored currencies
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<(i64, String)>, sqlx::Error> {
    sqlx::query_as::<_, (i64, String)>("SELECT id, abbreviation FROM currency_info ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Get a currency by ID
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<(i64, String)>, sqlx::Error> {
    sqlx::query_as::<_, (i64, String)>("SELECT id, abbreviation FROM currency_info WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Write a currency record, replacing any existing record with the same ID
pub async fn upsert(pool: &SqlitePool, id: i64, abbreviation: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO currency_info (id, abbreviation) VALUES (?, ?) \
         ON CONFLICT(id) DO UPDATE SET abbreviation = excluded.abbreviation",
    )
    .bind(id)
    .bind(abbreviation)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a currency by ID, returning the number of rows removed
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM currency_info WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
