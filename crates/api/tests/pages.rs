//! Integration tests for the HTML pages and the record editing flow.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::http::{header, StatusCode};
use common::{
    body_text, build_app_without_db, build_test_app, bulbasaur, get, pikachu, pokemon_body,
    post_form, StubSource,
};
use pokedex_api::editing::prepare_edit;
use pokedex_core::error::CoreError;
use pokedex_db::repositories::PokemonRepo;
use sqlx::PgPool;

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: home, detail and search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_renders() {
    let app = build_app_without_db(Arc::new(StubSource::default()));
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("action=\"/pokemon/search\""));
}

#[tokio::test]
async fn detail_renders_payload() {
    let app = build_app_without_db(Arc::new(StubSource::default().with_pokemon(pikachu())));
    let response = get(app, "/pokemon/pikachu").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<h1>pikachu</h1>"));
    assert!(html.contains("<li>lightning-rod</li>"));
}

#[tokio::test]
async fn detail_reflects_remote_source_on_every_visit() {
    let source = Arc::new(StubSource::default().with_pokemon(pikachu()));
    let app = build_app_without_db(source.clone());

    let html = body_text(get(app.clone(), "/pokemon/pikachu").await).await;
    assert!(html.contains("<li>electric</li>"));

    source.put(pokemon_body("pikachu", &["fairy"], &["pixilate"]));
    let html = body_text(get(app, "/pokemon/pikachu").await).await;
    assert!(html.contains("<li>fairy</li>"));
    assert!(html.contains("<li>pixilate</li>"));
    assert!(!html.contains("<li>electric</li>"));
    assert_eq!(source.call_count(), 2);
}

#[tokio::test]
async fn detail_of_unknown_pokemon_renders_error_view_with_200() {
    let app = build_app_without_db(Arc::new(StubSource::default()));
    let response = get(app, "/pokemon/agumon").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Pokémon not found."));
}

#[tokio::test]
async fn search_without_name_skips_fetch() {
    let source = Arc::new(StubSource::default().with_pokemon(pikachu()));
    let app = build_app_without_db(source.clone());

    for uri in ["/pokemon/search", "/pokemon/search?name="] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response)
            .await
            .contains("Please enter a Pokémon name."));
    }
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn search_renders_detail_or_error() {
    let app = build_app_without_db(Arc::new(StubSource::default().with_pokemon(pikachu())));

    let html = body_text(get(app.clone(), "/pokemon/search?name=pikachu").await).await;
    assert!(html.contains("<h1>pikachu</h1>"));

    let html = body_text(get(app, "/pokemon/search?name=Pikachu").await).await;
    assert!(html.contains("Pokémon not found."));
}

#[tokio::test]
async fn delete_is_a_noop_redirect_home() {
    let app = build_app_without_db(Arc::new(StubSource::default()));
    let response = post_form(app, "/pokemon/pikachu/delete", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

// ---------------------------------------------------------------------------
// Test: edit form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_form_is_prefilled_from_remote_payload() {
    let app = build_app_without_db(Arc::new(StubSource::default().with_pokemon(bulbasaur())));
    let response = get(app, "/pokemon/bulbasaur/edit").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("name=\"name\" value=\"bulbasaur\""));
    assert!(html.contains("name=\"type\" value=\"grass, poison\""));
    assert!(html.contains("name=\"abilities\" value=\"overgrow, chlorophyll\""));
}

#[tokio::test]
async fn prepare_edit_builds_transient_record() {
    let source = StubSource::default().with_pokemon(bulbasaur());

    let record = prepare_edit(&source, "bulbasaur").await.unwrap();
    assert_eq!(record.id, None);
    assert_eq!(record.types, vec!["grass", "poison"]);

    assert_matches!(
        prepare_edit(&source, "agumon").await,
        Err(CoreError::NotFound { entity: "Pokemon", .. })
    );
}

#[tokio::test]
async fn edit_form_for_unknown_pokemon_is_404() {
    let app = build_app_without_db(Arc::new(StubSource::default()));
    let response = get(app, "/pokemon/agumon/edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn valid_submission_saves_and_redirects(pool: PgPool) {
    let app = build_test_app(
        pool.clone(),
        Arc::new(StubSource::default().with_pokemon(bulbasaur())),
    );

    let response = post_form(
        app,
        "/pokemon/bulbasaur/edit",
        "name=Bulba+Prime&type=grass%2C+poison&abilities=overgrow",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/pokemon/Bulba%20Prime");

    let rows = PokemonRepo::find_by_name(&pool, "Bulba Prime").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].type_summary, "grass, poison");
    assert_eq!(rows[0].abilities, "overgrow");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_submission_rerenders_without_saving(pool: PgPool) {
    let app = build_test_app(
        pool.clone(),
        Arc::new(StubSource::default().with_pokemon(bulbasaur())),
    );

    let response = post_form(
        app,
        "/pokemon/bulbasaur/edit",
        "name=+++&type=grass&abilities=overgrow%2C+leaf-guard",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Name must be between 1 and 255 characters."));
    assert!(html.contains("value=\"overgrow, leaf-guard\""));
    assert_eq!(PokemonRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submission_for_unknown_pokemon_is_404(pool: PgPool) {
    let app = build_test_app(pool.clone(), Arc::new(StubSource::default()));

    let response = post_form(app, "/pokemon/agumon/edit", "name=x&type=y&abilities=z").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(PokemonRepo::count(&pool).await.unwrap(), 0);
}
