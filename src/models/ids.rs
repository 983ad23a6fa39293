//! Identifiers of remote objects
//!
//! Foreman hands out integer ids for nearly everything, but the listing
//! payload is opaque to us, so string ids are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque identifier of one object on the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(u64),
    Text(String),
}

impl ResourceId {
    /// Extract an id from a JSON value
    ///
    /// Only non-negative integers and non-empty strings qualify; anything
    /// else (null, floats, objects) is treated as "no id".
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().map(Self::Number),
            Value::String(s) if !s.is_empty() => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        assert_eq!(ResourceId::from_value(&json!(7)), Some(ResourceId::Number(7)));
        assert_eq!(
            ResourceId::from_value(&json!("abc")),
            Some(ResourceId::Text("abc".into()))
        );
        assert_eq!(ResourceId::from_value(&json!(null)), None);
        assert_eq!(ResourceId::from_value(&json!(-1)), None);
        assert_eq!(ResourceId::from_value(&json!(1.5)), None);
        assert_eq!(ResourceId::from_value(&json!("")), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceId::from(42).to_string(), "42");
        assert_eq!(ResourceId::from("web-01").to_string(), "web-01");
    }
}
