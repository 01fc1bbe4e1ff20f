//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod pokemon_repo;

pub use pokemon_repo::PokemonRepo;
