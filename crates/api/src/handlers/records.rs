//! Handlers for the `/api/records` resource (saved Pokémon records).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pokedex_core::error::CoreError;
use pokedex_core::types::DbId;
use pokedex_db::models::pokemon::{CreatePokemon, SavedPokemon, UpdatePokemon};
use pokedex_db::repositories::PokemonRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Record";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found(ENTITY, id))
}

/// GET /api/records
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = PokemonRepo::list(&state.pool).await?;
    let data: Vec<SavedPokemon> = rows.into_iter().map(SavedPokemon::from).collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/records
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePokemon>,
) -> AppResult<impl IntoResponse> {
    let record = input.into_record();
    record.validate()?;
    let row = PokemonRepo::insert(&state.pool, &record).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SavedPokemon::from(row),
        }),
    ))
}

/// GET /api/records/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = PokemonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: SavedPokemon::from(row),
    }))
}

/// PUT /api/records/{id}
///
/// Partial update: absent fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePokemon>,
) -> AppResult<impl IntoResponse> {
    let row = PokemonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut record = row.to_record();
    input.apply_to(&mut record);
    record.validate()?;

    let row = PokemonRepo::update(&state.pool, id, &record)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: SavedPokemon::from(row),
    }))
}

/// DELETE /api/records/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PokemonRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
