//! Handlers for the `/api/pokemons` resource.
//!
//! `GET` proxies the remote source. `POST`, `PUT` and `DELETE` operate on the
//! in-memory name roster only and never touch saved records.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pokedex_core::error::CoreError;
use pokedex_core::listing::collect_batch;
use pokedex_core::payload::ReducedPokemon;
use pokedex_core::source::Identifier;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{MemberCollection, MessageResponse};
use crate::state::AppState;

/// Request body for roster create/update.
///
/// Bodies that are not JSON, or whose `name` is not a string, read as a
/// missing name.
#[derive(Debug, Default, Deserialize)]
pub struct NameInput {
    pub name: Option<String>,
}

impl NameInput {
    fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Remote proxy
// ---------------------------------------------------------------------------

/// GET /api/pokemons/{name}
///
/// Returns the raw remote payload. Any upstream failure is a 404.
pub async fn get_one(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let payload = state
        .source
        .fetch(&Identifier::from(name.as_str()))
        .await
        .map_err(|e| {
            tracing::info!(name = %name, kind = e.kind(), error = %e, "Pokemon lookup failed");
            AppError::Core(CoreError::not_found("Pokemon", &name))
        })?;
    Ok(Json(payload.into_raw()))
}

/// GET /api/pokemons
///
/// Reduced entries for the first batch of ids. Ids that fail are left out.
pub async fn list(State(state): State<AppState>) -> Json<MemberCollection<ReducedPokemon>> {
    let outcome = collect_batch(state.source.as_ref()).await;
    if !outcome.skipped.is_empty() {
        tracing::warn!(
            skipped = ?outcome.skipped_ids(),
            returned = outcome.members.len(),
            "Batch listing returned partial results"
        );
    }
    Json(MemberCollection {
        member: outcome.members,
    })
}

// ---------------------------------------------------------------------------
// In-memory roster
// ---------------------------------------------------------------------------

/// POST /api/pokemons
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input = NameInput::parse(&body);
    state.roster.write().await.create(input.name.as_deref())?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Pokemon created successfully.",
        }),
    ))
}

/// PUT /api/pokemons/{name}
pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let input = NameInput::parse(&body);
    state
        .roster
        .write()
        .await
        .rename(&name, input.name.as_deref())?;
    Ok(Json(MessageResponse {
        message: "Pokemon updated successfully.",
    }))
}

/// DELETE /api/pokemons/{name}
pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.roster.write().await.remove(&name)?;
    Ok(Json(MessageResponse {
        message: "Pokemon deleted successfully.",
    }))
}
