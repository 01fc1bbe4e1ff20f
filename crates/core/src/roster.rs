//! Ephemeral ordered list of Pokémon names behind the JSON CRUD endpoints.
//!
//! The roster is unrelated to the persisted record table: nothing written
//! here reaches the database and nothing stored there appears here.

use crate::error::CoreError;

/// Message returned for a missing or blank name.
pub const NAME_REQUIRED: &str = "Name is required.";

const ENTITY: &str = "Pokemon";

#[derive(Debug, Clone, Default)]
pub struct NameRoster {
    names: Vec<String>,
}

impl NameRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Append a name. Duplicates are allowed.
    pub fn create(&mut self, name: Option<&str>) -> Result<(), CoreError> {
        let name = required(name)?;
        self.names.push(name.to_string());
        Ok(())
    }

    /// Replace the first entry equal to `current` with `replacement`.
    ///
    /// The replacement is checked before the lookup, so a blank replacement
    /// is a validation failure even when `current` does not exist.
    pub fn rename(&mut self, current: &str, replacement: Option<&str>) -> Result<(), CoreError> {
        let replacement = required(replacement)?;
        let slot = self
            .names
            .iter_mut()
            .find(|name| name.as_str() == current)
            .ok_or_else(|| CoreError::not_found(ENTITY, current))?;
        *slot = replacement.to_string();
        Ok(())
    }

    /// Remove the first entry equal to `name`.
    pub fn remove(&mut self, name: &str) -> Result<(), CoreError> {
        let index = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| CoreError::not_found(ENTITY, name))?;
        self.names.remove(index);
        Ok(())
    }
}

fn required(name: Option<&str>) -> Result<&str, CoreError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(CoreError::Validation(NAME_REQUIRED.to_string())),
    }
}
