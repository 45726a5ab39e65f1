//! Server-side review endpoints.
//!
//! A deliberately separate collaborator: its rusqlite table is independent of
//! the client-resident collection and nothing synchronizes the two. Exposes
//! `POST /reviews` (validated insert) and `GET /reviews` (all rows, newest
//! first).

pub mod config;
pub mod db;
pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;
use db::ReviewDb;
use routes::{list_reviews, submit_review};

/// Build the application router over a shared database handle.
pub fn router(db: Arc<ReviewDb>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/reviews", get(list_reviews).post(submit_review))
        .layer(cors)
        .with_state(db)
}

/// Start the server with environment-driven configuration.
pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    info!("Opening review database at {}", config.db_path);
    let db = Arc::new(ReviewDb::open(&config.db_path).expect("failed to open review database"));

    let app = router(db);
    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .expect("failed to bind listener");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    info!("Shutdown signal received");
}
