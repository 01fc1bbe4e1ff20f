//! Handlers for the HTML pages.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use pokedex_core::form::{EditPokemonForm, FormErrors};
use pokedex_core::source::Identifier;
use serde::Deserialize;

use crate::editing::{prepare_edit, submit_edit, EditOutcome};
use crate::error::PageError;
use crate::state::AppState;
use crate::views;

const NOT_FOUND_MESSAGE: &str = "Pokémon not found.";
const NAME_MISSING_MESSAGE: &str = "Please enter a Pokémon name.";

/// Query parameters for `GET /pokemon/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

/// GET /
pub async fn home() -> Html<String> {
    Html(views::home_page())
}

/// GET /pokemon/{name}
///
/// Upstream failures render the error view with 200, whatever the cause.
pub async fn detail(State(state): State<AppState>, Path(name): Path<String>) -> Html<String> {
    render_detail(&state, &name).await
}

/// GET /pokemon/search?name=
///
/// A missing or empty name renders the error view without any upstream call.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    match params.name.as_deref() {
        Some(name) if !name.is_empty() => render_detail(&state, name).await,
        _ => Html(views::error_page(NAME_MISSING_MESSAGE)),
    }
}

async fn render_detail(state: &AppState, name: &str) -> Html<String> {
    match state.source.fetch(&Identifier::from(name)).await {
        Ok(payload) => Html(views::detail_page(&payload)),
        Err(e) => {
            tracing::info!(name, kind = e.kind(), error = %e, "Pokemon detail unavailable");
            Html(views::error_page(NOT_FOUND_MESSAGE))
        }
    }
}

/// GET /pokemon/{name}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    let record = prepare_edit(state.source.as_ref(), &name)
        .await
        .map_err(|_| PageError::NotFound(NOT_FOUND_MESSAGE.into()))?;
    let form = EditPokemonForm::from_record(&record);
    Ok(Html(views::edit_page(&name, &form, &FormErrors::default())))
}

/// POST /pokemon/{name}/edit
///
/// Saves and redirects to the detail page of the saved name, or re-renders
/// the form with 422.
pub async fn submit_edit_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<EditPokemonForm>,
) -> Result<Response, PageError> {
    let record = prepare_edit(state.source.as_ref(), &name)
        .await
        .map_err(|_| PageError::NotFound(NOT_FOUND_MESSAGE.into()))?;

    match submit_edit(&state.pool, record, form).await? {
        EditOutcome::Saved(row) => {
            tracing::info!(id = row.id, name = %row.name, "Pokemon record saved");
            Ok(Redirect::to(&views::pokemon_path(&row.name)).into_response())
        }
        EditOutcome::Invalid { form, errors } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::edit_page(&name, &form, &errors)),
        )
            .into_response()),
    }
}

/// POST /pokemon/{name}/delete
///
/// Deletion has no effect; the user is sent back home.
pub async fn delete(Path(name): Path<String>) -> Redirect {
    tracing::debug!(name = %name, "Delete requested from detail page (no-op)");
    Redirect::to("/")
}
