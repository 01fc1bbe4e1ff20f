//! Read-only view over the remote Pokémon payload and its projections.
//!
//! The remote body is kept untouched as a [`serde_json::Value`] so detail
//! views can render every field. Accessors only read the handful of paths
//! the flows need: `name`, `types[].type.name`, `abilities[].ability.name`
//! and `sprites.front_default`.

use serde::Serialize;
use serde_json::Value;

/// The raw body returned by the remote source for one Pokémon.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(Value);

impl Payload {
    /// Wrap a decoded body. Returns `None` unless the body is a JSON object.
    pub fn new(value: Value) -> Option<Self> {
        value.is_object().then_some(Self(value))
    }

    /// The untouched JSON body.
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }

    /// The `name` field, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.0
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Every `types[i].type.name`, in payload order.
    pub fn type_names(&self) -> Vec<String> {
        self.nested_names("types", "type")
    }

    /// Every `abilities[i].ability.name`, in payload order.
    pub fn ability_names(&self) -> Vec<String> {
        self.nested_names("abilities", "ability")
    }

    /// `sprites.front_default`, which the remote source may leave null.
    pub fn front_sprite(&self) -> Option<&str> {
        self.0
            .get("sprites")
            .and_then(|sprites| sprites.get("front_default"))
            .and_then(Value::as_str)
    }

    fn nested_names(&self, list: &str, inner: &str) -> Vec<String> {
        self.0
            .get(list)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get(inner)?.get("name")?.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Why a payload could not be projected into a [`ReducedPokemon`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    #[error("payload has no name")]
    MissingName,

    #[error("payload has an empty types list")]
    NoTypes,
}

/// The reduced shape returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReducedPokemon {
    pub name: String,
    /// Name of the first entry in `types`.
    #[serde(rename = "type")]
    pub primary_type: String,
    pub abilities: Vec<String>,
    pub image: Option<String>,
}

impl ReducedPokemon {
    pub fn project(payload: &Payload) -> Result<Self, ProjectionError> {
        let name = payload.name().ok_or(ProjectionError::MissingName)?;
        let primary_type = payload
            .type_names()
            .into_iter()
            .next()
            .ok_or(ProjectionError::NoTypes)?;

        Ok(Self {
            name: name.to_string(),
            primary_type,
            abilities: payload.ability_names(),
            image: payload.front_sprite().map(str::to_string),
        })
    }
}
