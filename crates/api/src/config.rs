//! Process configuration read from the environment.

use std::net::{IpAddr, SocketAddr};

use pokedex_pokeapi::DEFAULT_BASE_URL;

/// Settings for the HTTP server and its upstream.
///
/// | Env Var                | Default                              |
/// |------------------------|--------------------------------------|
/// | `HOST`                 | `0.0.0.0`                            |
/// | `PORT`                 | `3000`                               |
/// | `CORS_ORIGINS`         | `http://localhost:5173`              |
/// | `REQUEST_TIMEOUT_SECS` | `120`                                |
/// | `POKEAPI_BASE_URL`     | `https://pokeapi.co/api/v2/pokemon`  |
/// | `LOG_FORMAT`           | `pretty` (`json` for structured logs)|
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`; blanks are dropped.
    pub cors_origins: Vec<String>,
    /// The batch listing performs thirty sequential upstream calls, so this
    /// stays generous.
    pub request_timeout_secs: u64,
    /// Base URL the Pokémon identifier is appended to.
    pub pokeapi_base_url: String,
    pub json_logs: bool,
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// Panics on malformed numeric values so misconfiguration fails at
    /// startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "3000")
            .parse()
            .unwrap_or_else(|e| panic!("PORT must be a valid u16: {e}"));
        let request_timeout_secs = var("REQUEST_TIMEOUT_SECS", "120")
            .parse()
            .unwrap_or_else(|e| panic!("REQUEST_TIMEOUT_SECS must be a valid u64: {e}"));

        Self {
            host: var("HOST", "0.0.0.0"),
            port,
            cors_origins: var("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            request_timeout_secs,
            pokeapi_base_url: var("POKEAPI_BASE_URL", DEFAULT_BASE_URL),
            json_logs: var("LOG_FORMAT", "pretty").eq_ignore_ascii_case("json"),
        }
    }

    /// Address to bind the listener to.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
