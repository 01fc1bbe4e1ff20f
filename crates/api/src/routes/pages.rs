//! Route definitions for the HTML pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET  /                      -> home
/// GET  /pokemon/search        -> search (?name=)
/// GET  /pokemon/{name}        -> detail
/// GET  /pokemon/{name}/edit   -> edit_form
/// POST /pokemon/{name}/edit   -> submit_edit_form
/// POST /pokemon/{name}/delete -> delete (no-op, redirects home)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/pokemon/search", get(pages::search))
        .route("/pokemon/{name}", get(pages::detail))
        .route(
            "/pokemon/{name}/edit",
            get(pages::edit_form).post(pages::submit_edit_form),
        )
        .route("/pokemon/{name}/delete", post(pages::delete))
}
