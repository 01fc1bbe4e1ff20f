//! HTTP client for the public PokéAPI.
//!
//! Implements [`pokedex_core::source::PokemonSource`] with a single `GET`
//! per lookup using [`reqwest`].

pub mod client;

pub use client::{PokeApiClient, DEFAULT_BASE_URL};
