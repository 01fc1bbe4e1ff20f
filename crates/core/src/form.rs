//! The record edit form: binding, validation and per-field messages.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::record::{PokemonRecord, MAX_COLUMN_LEN};
use crate::summary::{join_summary, split_summary};

/// Form field name for the types summary.
pub const TYPE_FIELD: &str = "type";

/// URL-encoded edit form submitted from the edit page.
///
/// `type` and `abilities` are comma-separated, as displayed on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct EditPokemonForm {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters."
    ))]
    pub name: String,

    #[serde(rename = "type", default)]
    #[validate(custom(function = "validate_summary"))]
    pub types: String,

    #[serde(default)]
    #[validate(custom(function = "validate_summary"))]
    pub abilities: String,
}

impl EditPokemonForm {
    /// Prefill the form from a record, escaped the same way as the stored
    /// columns so [`apply_to`](Self::apply_to) reads it back unchanged.
    pub fn from_record(record: &PokemonRecord) -> Self {
        Self {
            name: record.name.clone(),
            types: join_summary(&record.types),
            abilities: join_summary(&record.abilities),
        }
    }

    /// Trim the name and run every field rule.
    pub fn check(mut self) -> Result<Self, (Self, FormErrors)> {
        self.name = self.name.trim().to_string();
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => Err((self, FormErrors::from(errors))),
        }
    }

    /// Bind the form fields onto `record`. The id is left untouched.
    pub fn apply_to(&self, record: &mut PokemonRecord) {
        record.name = self.name.clone();
        record.types = split_summary(&self.types);
        record.abilities = split_summary(&self.abilities);
    }
}

fn validate_summary(value: &str) -> Result<(), ValidationError> {
    let parts = split_summary(value);
    if parts.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("At least one entry is required.")));
    }
    if join_summary(&parts).chars().count() > MAX_COLUMN_LEN {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Must be at most 255 characters.")));
    }
    Ok(())
}

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for one form field, empty if it passed.
    pub fn for_field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let field = match field.to_string().as_str() {
                "types" => TYPE_FIELD.to_string(),
                other => other.to_string(),
            };
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            map.insert(field, messages);
        }
        Self(map)
    }
}
