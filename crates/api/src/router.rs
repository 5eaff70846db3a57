//! Application router: routes plus the HTTP middleware stack.
//!
//! `main.rs` and the integration tests both go through [`build_app_router`].

use std::time::Duration;

use axum::http::header::{InvalidHeaderValue, ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1";

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("Invalid CORS origin '{origin}': {source}")]
    InvalidCorsOrigin {
        origin: String,
        source: InvalidHeaderValue,
    },
}

/// Build the application with every route and middleware layer attached.
///
/// Fails only on configuration that cannot become HTTP headers.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Result<Router, RouterError> {
    let cors = build_cors_layer(&config.cors_origins)?;

    let app = Router::new()
        .merge(routes::health::router())
        .nest(API_PREFIX, routes::api_routes())
        .with_state(state);

    // Outermost first: CORS sees the raw request, panics are caught closest
    // to the handlers. `Router::layer` wraps outside-in, so the layers are
    // applied innermost first; each call boxes the response body, which
    // `CorsLayer` needs (`ResBody: Default`).
    let app = app
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER.clone(), MakeRequestUuid))
        .layer(cors);

    Ok(app)
}

/// CORS for the configured browser origins. The request id is exposed so
/// clients can quote it when reporting errors.
pub fn build_cors_layer(origins: &[String]) -> Result<CorsLayer, RouterError> {
    let allowed = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|source| RouterError::InvalidCorsOrigin {
                    origin: origin.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .expose_headers([REQUEST_ID_HEADER.clone()])
        .max_age(Duration::from_secs(3600)))
}
