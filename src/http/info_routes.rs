use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::http::AppState;
use crate::models::CurrencyInfo;
use crate::services::info_service;
use crate::utils::errors::ServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_currencies).post(create_currency))
        .route("/db", get(list_currencies_from_db))
        .route(
            "/:id",
            get(get_currency).put(update_currency).delete(delete_currency),
        )
}

/// GET / — the currency directory as published by the upstream API
async fn list_currencies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurrencyInfo>>, ServiceError> {
    let currencies = state.nbrb.fetch_currencies().await?;
    Ok(Json(currencies))
}

/// GET /db — the currencies stored locally
async fn list_currencies_from_db(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurrencyInfo>>, ServiceError> {
    let currencies = info_service::get_all(&state.pool).await?;
    Ok(Json(currencies))
}

/// GET /:id
async fn get_currency(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CurrencyInfo>, ServiceError> {
    let currency = info_service::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("currency {} was not found", id)))?;
    Ok(Json(currency))
}

/// POST /
async fn create_currency(
    State(state): State<AppState>,
    Json(payload): Json<CurrencyInfo>,
) -> Result<Json<CurrencyInfo>, ServiceError> {
    let created = info_service::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /:id
async fn update_currency(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CurrencyInfo>,
) -> Result<Json<CurrencyInfo>, ServiceError> {
    let updated = info_service::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /:id
async fn delete_currency(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    info_service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
