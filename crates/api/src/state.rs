use std::sync::Arc;

use pokedex_core::roster::NameRoster;
use pokedex_core::source::PokemonSource;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for saved records.
    pub pool: pokedex_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Remote Pokémon data source.
    pub source: Arc<dyn PokemonSource>,
    /// In-memory name list behind `/api/pokemons`. Never touches `pool`.
    pub roster: Arc<RwLock<NameRoster>>,
}

impl AppState {
    pub fn new(
        pool: pokedex_db::DbPool,
        config: ServerConfig,
        source: Arc<dyn PokemonSource>,
    ) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            source,
            roster: Arc::new(RwLock::new(NameRoster::new())),
        }
    }
}
