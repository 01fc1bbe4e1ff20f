//! Domain types and pure logic for the Pokédex service.
//!
//! Nothing in this crate performs I/O directly. Remote lookups go through the
//! [`source::PokemonSource`] trait, which the `pokedex-pokeapi` crate
//! implements over HTTP and tests implement with in-process stubs.

pub mod error;
pub mod form;
pub mod listing;
pub mod payload;
pub mod record;
pub mod roster;
pub mod source;
pub mod summary;
pub mod types;
