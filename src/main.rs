use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api::nbrb::NbrbClient;
use crate::cache::SimpleCache;
use crate::http::AppState;

mod api;
mod cache;
mod db;
mod http;
mod models;
mod services;
mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("exrates=debug".parse().unwrap())
                .add_directive("sqlx=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("Starting exrates service...");

    // Initialize database
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://exrates.db".to_string());
    info!("Initializing database...");
    let pool = match db::init_db(&database_url).await {
        Ok(p) => {
            info!("Database initialized successfully");
            p
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return;
        }
    };

    let nbrb = match std::env::var("NBRB_API_URL") {
        Ok(url) => NbrbClient::with_base_url(url),
        Err(_) => NbrbClient::new(),
    };

    let state = AppState {
        pool,
        nbrb,
        cache: SimpleCache::new(),
    };
    let app = http::router(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            return;
        }
    };
    info!("Listening on {}", bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
