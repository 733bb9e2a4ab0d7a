// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;
use serde_json::{Map, Value};

/// The decoded key/value payload of a single room, as delivered by the
/// transport collaborator from the server's room-list or room-detail API.
///
/// Every accessor applies a documented default when the key is absent or the
/// value has an unexpected JSON type. Unknown keys are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct RoomPayload {
    fields: Map<String, Value>,
}

impl RoomPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        RoomPayload { fields }
    }

    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub(crate) fn string(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(value)) => value.clone(),
            _ => String::new(),
        }
    }

    pub(crate) fn opt_string(&self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
            _ => None,
        }
    }

    pub(crate) fn int(&self, key: &str) -> i64 {
        match self.fields.get(key) {
            Some(value) => value.as_i64().unwrap_or(0),
            None => 0,
        }
    }

    // Some servers deliver booleans as 0/1 integers.
    pub(crate) fn bool(&self, key: &str) -> bool {
        match self.fields.get(key) {
            Some(Value::Bool(value)) => *value,
            Some(value) => value.as_i64().unwrap_or(0) != 0,
            None => false,
        }
    }

    pub(crate) fn strings(&self, key: &str) -> Vec<String> {
        let Some(Value::Array(values)) = self.fields.get(key) else {
            return Vec::new();
        };
        values
            .iter()
            .filter_map(|value| match value {
                Value::String(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }
}

impl From<Map<String, Value>> for RoomPayload {
    fn from(fields: Map<String, Value>) -> Self {
        RoomPayload::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> RoomPayload {
        RoomPayload::new(value.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn test_missing_keys_yield_defaults() {
        let payload = payload(json!({}));
        assert_eq!(payload.string("name"), "");
        assert_eq!(payload.int("lastActivity"), 0);
        assert_eq!(payload.bool("hasPassword"), false);
        assert_eq!(payload.strings("participants"), Vec::<String>::new());
    }

    #[test]
    fn test_mistyped_values_yield_defaults() {
        let payload = payload(json!({
            "name": 42,
            "lastActivity": "soon",
            "hasPassword": "yes"
        }));
        assert_eq!(payload.string("name"), "");
        assert_eq!(payload.int("lastActivity"), 0);
        assert_eq!(payload.bool("hasPassword"), false);
    }

    #[test]
    fn test_numeric_booleans_are_accepted() {
        let payload = payload(json!({ "hasCall": 1, "isFavorite": 0 }));
        assert_eq!(payload.bool("hasCall"), true);
        assert_eq!(payload.bool("isFavorite"), false);
    }
}
