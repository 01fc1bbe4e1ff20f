//! The locally persisted, simplified Pokémon record.

use serde::Serialize;

use crate::error::CoreError;
use crate::payload::Payload;
use crate::summary::{join_summary, split_summary};
use crate::types::DbId;

/// Maximum length of every stored string column.
pub const MAX_COLUMN_LEN: usize = 255;

/// A Pokémon record as edited and stored locally.
///
/// `types` and `abilities` are ordered name lists in memory and are only
/// flattened into summary strings at the storage boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PokemonRecord {
    /// Assigned by the store on first insert; `None` for transient records.
    pub id: Option<DbId>,
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
}

impl PokemonRecord {
    /// Build a transient record from a remote payload, rebuilding both lists
    /// from the full payload.
    pub fn from_payload(payload: &Payload) -> Result<Self, CoreError> {
        let name = payload
            .name()
            .ok_or_else(|| CoreError::not_found("Pokemon", "<unnamed payload>"))?;

        Ok(Self {
            id: None,
            name: name.to_string(),
            types: payload.type_names(),
            abilities: payload.ability_names(),
        })
    }

    /// Rebuild a record from its stored columns.
    pub fn from_columns(id: DbId, name: String, type_summary: &str, ability_summary: &str) -> Self {
        Self {
            id: Some(id),
            name,
            types: split_summary(type_summary),
            abilities: split_summary(ability_summary),
        }
    }

    /// The `type` column value.
    pub fn type_summary(&self) -> String {
        join_summary(&self.types)
    }

    /// The `abilities` column value.
    pub fn ability_summary(&self) -> String {
        join_summary(&self.abilities)
    }

    /// Trim the name and every component, dropping blank components.
    ///
    /// Direct writes go through this before [`validate`](Self::validate) so
    /// what is stored is exactly what reads back.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        for parts in [&mut self.types, &mut self.abilities] {
            *parts = parts
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
        }
        self
    }

    /// Check the column bounds before a direct write.
    ///
    /// Lengths are measured on the values as stored. Components must be
    /// non-blank and unpadded, since the summary codec trims on read.
    pub fn validate(&self) -> Result<(), CoreError> {
        let name_len = self.name.chars().count();
        if self.name.trim().is_empty() || name_len > MAX_COLUMN_LEN {
            return Err(CoreError::Validation(
                "Name must be between 1 and 255 characters.".into(),
            ));
        }
        for (field, summary, parts) in [
            ("types", self.type_summary(), &self.types),
            ("abilities", self.ability_summary(), &self.abilities),
        ] {
            if parts.is_empty() {
                return Err(CoreError::Validation(format!(
                    "{field} must contain at least one entry."
                )));
            }
            if parts.iter().any(|p| p.trim().is_empty() || p.trim() != p) {
                return Err(CoreError::Validation(format!(
                    "{field} entries must not be blank or padded with whitespace."
                )));
            }
            if summary.chars().count() > MAX_COLUMN_LEN {
                return Err(CoreError::Validation(format!(
                    "{field} must be at most 255 characters once joined."
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::payload::fixtures::body;

    #[test]
    fn from_payload_keeps_every_type_and_ability() {
        let payload = Payload::new(body(
            "charizard",
            &["fire", "flying"],
            &["blaze", "solar-power"],
            None,
        ))
        .unwrap();

        let record = PokemonRecord::from_payload(&payload).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.name, "charizard");
        assert_eq!(record.type_summary(), "fire, flying");
        assert_eq!(record.ability_summary(), "blaze, solar-power");
    }

    #[test]
    fn from_payload_without_name_is_not_found() {
        let payload = Payload::new(json!({ "types": [] })).unwrap();
        assert_matches!(
            PokemonRecord::from_payload(&payload),
            Err(CoreError::NotFound { entity: "Pokemon", .. })
        );
    }

    #[test]
    fn validate_enforces_column_bounds() {
        let mut record = PokemonRecord {
            id: None,
            name: "abra".into(),
            types: vec!["psychic".into()],
            abilities: vec!["synchronize".into()],
        };
        assert!(record.validate().is_ok());

        record.abilities = vec![];
        assert_matches!(record.validate(), Err(CoreError::Validation(msg)) if msg.starts_with("abilities"));

        record.abilities = vec!["y".repeat(256)];
        assert_matches!(record.validate(), Err(CoreError::Validation(_)));

        record.abilities = vec!["synchronize".into()];
        record.name = " ".into();
        assert_matches!(record.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn padded_overlong_name_fails_validation() {
        let record = PokemonRecord {
            id: None,
            name: format!("   {}   ", "a".repeat(255)),
            types: vec!["normal".into()],
            abilities: vec!["run-away".into()],
        };
        assert_matches!(record.validate(), Err(CoreError::Validation(_)));

        let record = record.normalized();
        assert_eq!(record.name.chars().count(), 255);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn blank_or_padded_components_fail_validation() {
        let record = PokemonRecord {
            id: None,
            name: "charmander".into(),
            types: vec![" fire ".into(), String::new()],
            abilities: vec!["blaze".into()],
        };
        assert_matches!(record.validate(), Err(CoreError::Validation(msg)) if msg.starts_with("types"));

        let record = record.normalized();
        assert_eq!(record.types, vec!["fire"]);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn valid_record_survives_the_storage_boundary() {
        let record = PokemonRecord {
            id: Some(9),
            name: "farfetch'd".into(),
            types: vec!["normal".into(), "flying".into()],
            abilities: vec!["keen-eye".into(), "a,b".into(), r"c\d".into()],
        };
        assert!(record.validate().is_ok());
        let stored = PokemonRecord::from_columns(
            9,
            record.name.clone(),
            &record.type_summary(),
            &record.ability_summary(),
        );
        assert_eq!(stored, record);
    }

    #[test]
    fn from_columns_splits_summaries() {
        let record = PokemonRecord::from_columns(7, "squirtle".into(), "water", "torrent, rain-dish");
        assert_eq!(record.id, Some(7));
        assert_eq!(record.types, vec!["water"]);
        assert_eq!(record.abilities, vec!["torrent", "rain-dish"]);
    }
}
