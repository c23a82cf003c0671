use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cheap per-ticker view with a handful of headline fields.
///
/// Providers are inconsistent about naming, so the same figure may appear under
/// more than one key (e.g. `market_cap` and `marketCap`). Values are kept as raw
/// JSON; validation is the caller's job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FastSummary {
    fields: Map<String, Value>,
}

impl FastSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a field by its exact key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Complete per-ticker view, more expensive to obtain.
///
/// Providers normally return a mapping, but nothing guarantees it; a
/// non-mapping payload simply has no fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullInfo {
    value: Value,
}

impl FullInfo {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Field lookup; always `None` when the payload is not a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.as_object().and_then(|fields| fields.get(key))
    }
}

impl From<Map<String, Value>> for FullInfo {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(Value::Object(fields))
    }
}
