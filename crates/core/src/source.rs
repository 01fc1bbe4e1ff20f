//! The seam between the flows and the remote Pokémon data source.
//!
//! [`PokemonSource`] performs exactly one lookup per call. Implementations
//! must not retry or cache; callers decide what a failure means.

use std::fmt;

use async_trait::async_trait;

use crate::payload::Payload;

/// Lookup key for a single Pokémon: a name or a numeric id.
///
/// Both forms are substituted verbatim into the request path. Names are
/// case-sensitive and are not normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Name(String),
    Id(u32),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Name(name) => f.write_str(name),
            Identifier::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(id)
    }
}

/// Why a remote lookup failed.
///
/// The HTTP surface collapses every variant into one "not found" outcome;
/// the distinction exists for logging and for callers that want it.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The remote source answered 404 for this identifier.
    #[error("Pokemon '{0}' not found upstream")]
    NotFound(String),

    /// The remote source answered with another non-2xx status.
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// The request never completed (DNS, connect, TLS, reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The body could not be decoded into a JSON object.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short machine-readable label for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NotFound(_) => "not_found",
            FetchError::Status(_) => "status",
            FetchError::Transport(_) => "transport",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// A remote source of Pokémon payloads.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetch the payload for one identifier with a single round trip.
    async fn fetch(&self, identifier: &Identifier) -> Result<Payload, FetchError>;
}
