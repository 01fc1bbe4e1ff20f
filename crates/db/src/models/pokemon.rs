//! Saved Pokémon record model and DTOs.

use pokedex_core::record::PokemonRecord;
use pokedex_core::summary::split_summary;
use pokedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pokemons` table, summaries still joined.
#[derive(Debug, Clone, FromRow)]
pub struct PokemonRow {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    pub type_summary: String,
    pub abilities: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PokemonRow {
    /// Decode the row into the domain record.
    pub fn to_record(&self) -> PokemonRecord {
        PokemonRecord::from_columns(
            self.id,
            self.name.clone(),
            &self.type_summary,
            &self.abilities,
        )
    }
}

/// JSON shape of a saved record, with both summaries split into lists.
#[derive(Debug, Clone, Serialize)]
pub struct SavedPokemon {
    pub id: DbId,
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<PokemonRow> for SavedPokemon {
    fn from(row: PokemonRow) -> Self {
        Self {
            types: split_summary(&row.type_summary),
            abilities: split_summary(&row.abilities),
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a record directly through the records API.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePokemon {
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
}

impl CreatePokemon {
    /// Build a transient record with the name and components trimmed.
    pub fn into_record(self) -> PokemonRecord {
        PokemonRecord {
            id: None,
            name: self.name,
            types: self.types,
            abilities: self.abilities,
        }
        .normalized()
    }
}

/// DTO for updating an existing record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePokemon {
    pub name: Option<String>,
    pub types: Option<Vec<String>>,
    pub abilities: Option<Vec<String>>,
}

impl UpdatePokemon {
    /// Apply the present fields onto `record`, then trim it.
    pub fn apply_to(&self, record: &mut PokemonRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(types) = &self.types {
            record.types = types.clone();
        }
        if let Some(abilities) = &self.abilities {
            record.abilities = abilities.clone();
        }
        *record = std::mem::take(record).normalized();
    }
}
