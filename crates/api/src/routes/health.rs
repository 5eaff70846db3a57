//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// The process is up but the database did not answer.
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    /// Build the report from the outcome of a database ping.
    pub fn from_ping(ping: Result<(), sqlx::Error>) -> Self {
        let db_healthy = match ping {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Health check could not reach the database");
                false
            }
        };
        Self {
            status: if db_healthy {
                HealthStatus::Ok
            } else {
                HealthStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
///
/// Always 200; a database outage shows up as `"status": "degraded"`.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::from_ping(
        catalog_db::health_check(&state.pool).await,
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(report))
}
