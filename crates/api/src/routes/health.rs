//! Liveness probe, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Where remote Pokémon payloads are fetched from.
    pub upstream: String,
    /// Names currently held in the in-memory roster.
    pub roster_size: usize,
}

/// GET /health
///
/// The upstream API is reported but never probed, so the check stays cheap.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match pokedex_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };
    let roster_size = state.roster.read().await.len();

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        upstream: state.config.pokeapi_base_url.clone(),
        roster_size,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
