//! Request handlers.
//!
//! - [`pages`]: server-rendered HTML pages (home, detail, search, edit).
//! - [`pokemons`]: JSON proxy, batch listing and the in-memory name roster.
//! - [`records`]: JSON CRUD over saved records.

pub mod pages;
pub mod pokemons;
pub mod records;
