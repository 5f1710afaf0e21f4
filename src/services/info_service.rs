use sqlx::sqlite::SqlitePool;
use tracing::{error, info};

use crate::db;
use crate::models::CurrencyInfo;
use crate::utils::errors::ServiceError;

/// List every currency stored in the database
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<CurrencyInfo>, ServiceError> {
    let rows = db::currency_info::get_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|(id, abbreviation)| CurrencyInfo { id, abbreviation })
        .collect())
}

/// Get a stored currency by ID
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<CurrencyInfo>, ServiceError> {
    let row = db::currency_info::get_by_id(pool, id).await?;
    Ok(row.map(|(id, abbreviation)| CurrencyInfo { id, abbreviation }))
}

/// Create a currency record keyed on the ID supplied in the payload
pub async fn create(pool: &SqlitePool, info: CurrencyInfo) -> Result<CurrencyInfo, ServiceError> {
    validate(&info)?;
    db::currency_info::upsert(pool, info.id, &info.abbreviation).await?;
    info!("created currency {} ({})", info.id, info.abbreviation);
    Ok(info)
}

/// Update a currency record; the path ID wins over any ID in the payload
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    mut info: CurrencyInfo,
) -> Result<CurrencyInfo, ServiceError> {
    validate(&info)?;
    info.id = id;
    db::currency_info::upsert(pool, info.id, &info.abbreviation).await?;
    info!("updated currency {} ({})", info.id, info.abbreviation);
    Ok(info)
}

/// Delete a currency record; deleting an absent ID is a no-op
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), ServiceError> {
    let removed = db::currency_info::delete(pool, id).await?;
    info!("deleted currency {} ({} row(s))", id, removed);
    Ok(())
}

fn validate(info: &CurrencyInfo) -> Result<(), ServiceError> {
    if info.abbreviation.trim().is_empty() {
        error!("rejected currency {}: empty abbreviation", info.id);
        return Err(ServiceError::Validation(
            "currency abbreviation must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn usd(id: i64) -> CurrencyInfo {
        CurrencyInfo {
            id,
            abbreviation: "USD".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_fetch_returns_equal_record() {
        let pool = test_pool().await;

        let created = create(&pool, usd(431)).await.unwrap();
        assert_eq!(created, usd(431));

        let fetched = get_by_id(&pool, 431).await.unwrap().unwrap();
        assert_eq!(fetched, usd(431));
    }

    #[tokio::test]
    async fn rejects_blank_abbreviations() {
        let pool = test_pool().await;

        for abbreviation in ["", "   "] {
            let info = CurrencyInfo {
                id: 1,
                abbreviation: abbreviation.to_string(),
            };
            let error = create(&pool, info.clone()).await.unwrap_err();
            assert!(matches!(error, ServiceError::Validation(_)));

            let error = update(&pool, 1, info).await.unwrap_err();
            assert!(matches!(error, ServiceError::Validation(_)));
        }

        assert!(get_by_id(&pool, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_forces_the_path_id() {
        let pool = test_pool().await;
        create(&pool, usd(2)).await.unwrap();

        let payload = CurrencyInfo {
            id: 9,
            abbreviation: "EUR".to_string(),
        };
        let updated = update(&pool, 2, payload).await.unwrap();

        assert_eq!(updated.id, 2);
        assert!(get_by_id(&pool, 9).await.unwrap().is_none());
        assert_eq!(
            get_by_id(&pool, 2).await.unwrap().unwrap().abbreviation,
            "EUR"
        );
    }

    #[tokio::test]
    async fn delete_then_fetch_is_absent_and_redelete_succeeds() {
        let pool = test_pool().await;
        create(&pool, usd(1)).await.unwrap();

        delete(&pool, 1).await.unwrap();
        assert!(get_by_id(&pool, 1).await.unwrap().is_none());

        delete(&pool, 1).await.unwrap();
    }

    #[tokio::test]
    async fn lists_all_stored_currencies() {
        let pool = test_pool().await;
        create(&pool, usd(431)).await.unwrap();
        create(
            &pool,
            CurrencyInfo {
                id: 451,
                abbreviation: "EUR".to_string(),
            },
        )
        .await
        .unwrap();

        let all = get_all(&pool).await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 431);
        assert_eq!(all[1].id, 451);
    }
}
