//! Listing entries and full records
//!
//! Both are schema-less: whatever fields the server sends are kept, in the
//! order it sent them, so a record written to YAML reads back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::ResourceId;

/// One entry of a listing call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSummary(Map<String, Value>);

impl ResourceSummary {
    /// Build a summary holding only an id
    pub fn with_id(id: impl Into<ResourceId>) -> Self {
        let mut fields = Map::new();
        let value = match id.into() {
            ResourceId::Number(n) => Value::from(n),
            ResourceId::Text(s) => Value::from(s),
        };
        fields.insert("id".to_string(), value);
        Self(fields)
    }

    /// Convert a JSON value; only objects are summaries
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The object's identifier, if the entry carries a usable one
    pub fn id(&self) -> Option<ResourceId> {
        self.0.get("id").and_then(ResourceId::from_value)
    }

    /// Display name, when present
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// The full set of fields of one object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRecord(Map<String, Value>);

impl ResourceRecord {
    /// Convert a fetch response into a record
    ///
    /// Null and empty objects count as "nothing fetched"; non-object
    /// payloads are not records either.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) if !map.is_empty() => Some(Self(map)),
            _ => None,
        }
    }

    /// The `name` field, only if it is a string
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
