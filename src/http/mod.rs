use axum::Router;
use sqlx::sqlite::SqlitePool;

use crate::api::nbrb::NbrbClient;
use crate::cache::SimpleCache;

pub mod info_routes;
pub mod rate_routes;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub nbrb: NbrbClient,
    pub cache: SimpleCache,
}

/// Build the full API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/currency/info", info_routes::routes())
        .nest("/api/currency/rates", rate_routes::routes())
        .with_state(state)
}
