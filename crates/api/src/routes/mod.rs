pub mod health;
pub mod pages;
pub mod pokemons;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pokemons                    batch listing (GET), roster create (POST)
/// /pokemons/{name}             remote lookup (GET), roster update (PUT), roster delete (DELETE)
///
/// /records                     list, create saved records
/// /records/{id}                get, update, delete a saved record
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pokemons", pokemons::router())
        .nest("/records", records::router())
}
