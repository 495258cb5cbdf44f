use crate::error::{ItemzError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored record.
///
/// `name` and `description` are the fields every record carries. Anything else
/// an update merges in lands in `extra` and is written back flattened into the
/// same JSON object, so the on-disk shape stays `{ "id", "name", "description", ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(id: String, candidate: NewItem) -> Self {
        Self {
            id,
            name: candidate.name,
            description: candidate.description,
            extra: Map::new(),
        }
    }

    /// Shallow merge of `patch` over this item. The id is never taken from the patch.
    pub fn merged(&self, patch: &ItemPatch) -> Result<Item> {
        let mut merged = self.clone();
        for (key, value) in patch.fields() {
            match key.as_str() {
                "id" => continue,
                "name" => merged.name = text_field(key, value)?,
                "description" => merged.description = text_field(key, value)?,
                _ => {
                    merged.extra.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(merged)
    }
}

/// `name` and `description` must stay non-empty strings.
fn text_field(key: &str, value: &Value) -> Result<String> {
    match value.as_str() {
        Some("") => Err(ItemzError::Validation(format!("Please enter a {}", key))),
        Some(text) => Ok(text.to_string()),
        None => Err(ItemzError::Validation(format!(
            "field '{}' must be a string",
            key
        ))),
    }
}

/// The fields a caller supplies to create an item. Assumed already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Fields to merge over an existing item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    fields: Map<String, Value>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.field("name", Value::String(name.into()))
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.field("description", Value::String(description.into()))
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// The unit of persistence: every read loads all of it, every write replaces all of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub items: Vec<Item>,
}
