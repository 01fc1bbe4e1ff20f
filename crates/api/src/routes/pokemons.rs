//! Route definitions for the `/pokemons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pokemons;
use crate::state::AppState;

/// Routes mounted at `/pokemons`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{name}   -> get_one
/// PUT    /{name}   -> update
/// DELETE /{name}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pokemons::list).post(pokemons::create))
        .route(
            "/{name}",
            get(pokemons::get_one)
                .put(pokemons::update)
                .delete(pokemons::delete),
        )
}
