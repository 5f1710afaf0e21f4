use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::http::AppState;
use crate::models::CurrencyRate;
use crate::services::conversion_service;
use crate::utils::errors::ServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rates).post(create_rate))
        .route("/convert", get(convert))
        .route("/by-abbreviation", get(rates_by_abbreviation))
        .route("/:id", get(get_rate).put(update_rate).delete(delete_rate))
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    from: i64,
    to: i64,
    amount: Option<Decimal>,
}

#[derive(Debug, Serialize)]
struct ConvertResponse {
    amount: Decimal,
    from: i64,
    to: i64,
    result: Decimal,
}

#[derive(Debug, Deserialize)]
struct AbbreviationParams {
    abbreviation: String,
    date: NaiveDate,
}

/// GET /convert?from&to&amount
async fn convert(
    State(state): State<AppState>,
    Query(params): Query<ConvertParams>,
) -> Result<Json<ConvertResponse>, ServiceError> {
    let conversion =
        conversion_service::convert(&state.pool, params.from, params.to, params.amount).await?;
    Ok(Json(ConvertResponse {
        amount: conversion.amount,
        from: conversion.from,
        to: conversion.to,
        result: conversion.result,
    }))
}

/// GET /
async fn list_rates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurrencyRate>>, ServiceError> {
    let rates = conversion_service::get_all_rates(&state.pool).await?;
    Ok(Json(rates))
}

/// GET /:id
async fn get_rate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CurrencyRate>, ServiceError> {
    let rate = conversion_service::get_rate_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("rate {} was not found", id)))?;
    Ok(Json(rate))
}

/// POST /
async fn create_rate(
    State(state): State<AppState>,
    Json(payload): Json<CurrencyRate>,
) -> Result<Json<CurrencyRate>, ServiceError> {
    let created = conversion_service::create_rate(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /:id
async fn update_rate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CurrencyRate>,
) -> Result<Json<CurrencyRate>, ServiceError> {
    let updated = conversion_service::update_rate(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /:id
async fn delete_rate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    conversion_service::delete_rate(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /by-abbreviation?abbreviation&date
async fn rates_by_abbreviation(
    State(state): State<AppState>,
    Query(params): Query<AbbreviationParams>,
) -> Result<Json<Vec<CurrencyRate>>, ServiceError> {
    let rates = conversion_service::rates_by_abbreviation_and_date(
        &state.pool,
        &params.abbreviation,
        params.date,
    )
    .await?;
    Ok(Json(rates))
}
