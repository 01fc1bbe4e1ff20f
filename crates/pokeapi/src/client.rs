//! REST client for `GET /api/v2/pokemon/{identifier}`.

use async_trait::async_trait;
use pokedex_core::payload::Payload;
use pokedex_core::source::{FetchError, Identifier, PokemonSource};
use reqwest::StatusCode;

/// Public PokéAPI endpoint the identifier is appended to.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// HTTP client for the remote Pokémon source.
///
/// No retry, no client-side timeout and no caching: every call to
/// [`PokemonSource::fetch`] is exactly one round trip.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client for `base_url`, e.g. [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The request URL for `identifier`, substituted verbatim.
    pub fn url_for(&self, identifier: &Identifier) -> String {
        format!("{}/{}", self.base_url, identifier)
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn fetch(&self, identifier: &Identifier) -> Result<Payload, FetchError> {
        let url = self.url_for(identifier);
        tracing::debug!(%url, "Fetching Pokemon");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(identifier.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

        Payload::new(value).ok_or_else(|| FetchError::Decode("body is not a JSON object".into()))
    }
}
