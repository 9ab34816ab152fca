pub mod demo_request;

use axum::http::{HeaderName, HeaderValue};
use axum::routing::post;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::SharedState;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Client-Info, Apikey";

pub fn intake_routes(max_body_size: usize) -> Router<SharedState> {
    Router::new()
        .route(
            "/v1/submit-demo-request",
            post(demo_request::submit)
                .options(demo_request::preflight)
                .fallback(demo_request::method_not_allowed),
        )
        .layer(RequestBodyLimitLayer::new(max_body_size))
        // Every response from the intake route is CORS allow-all, errors
        // included. Must wrap the body limit so 413s carry them too.
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
}
