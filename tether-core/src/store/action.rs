//! Actions.
//!
//! An action is an opaque tagged record: a `type` string plus arbitrary
//! payload fields. The bindings never interpret it; they only hand it to
//! the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tagged record describing something that happened.
///
/// Serializes as a flat JSON object with the tag under `"type"`:
///
/// ```rust
/// use tether_core::store::Action;
///
/// let action = Action::new("counter/add").with("amount", 2);
/// let json = serde_json::to_value(&action).unwrap();
/// assert_eq!(json, serde_json::json!({ "type": "counter/add", "amount": 2 }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The action tag.
    #[serde(rename = "type")]
    pub kind: String,

    /// Payload fields.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Action {
    /// Create an action with the given tag and no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Read a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}
