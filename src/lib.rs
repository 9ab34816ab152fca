pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod routes;
pub mod demo_request;
pub mod sendy;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::sendy::SendyClient;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Result<Router, reqwest::Error> {
    let sendy = SendyClient::new(&config.sendy)?;
    tracing::info!("Forwarding demo requests to {}", config.sendy.subscribe_url);

    let state: SharedState = Arc::new(AppState { pool, sendy });

    let app = Router::new()
        .merge(routes::intake_routes(config.max_body_size))
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state);

    Ok(app)
}

async fn health() -> &'static str {
    "ok"
}
