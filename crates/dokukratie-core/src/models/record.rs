use serde_json::{Map, Value};

/// One row of a dataset's metadata store.
///
/// Records carry loosely typed crawler metadata (`content_hash`, `foreign_id`,
/// `publisher:type`, `legislative_term`, ...) and are accessed dict-style. The
/// `imported` flag is owned by the store, not by the crawler data.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    key: String,
    data: Map<String, Value>,
    imported: bool,
}

/// Whether a value counts as missing: null, an empty string, list or mapping.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl MetadataRecord {
    pub fn new(key: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            data,
            imported: false,
        }
    }

    /// Build a record from a JSON object keyed by its `content_hash`.
    /// Returns `None` for non-objects and objects without a content hash.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(data) = value else {
            return None;
        };
        let key = data
            .get("content_hash")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())?
            .to_string();
        Some(Self::new(key, data))
    }

    pub fn with_imported(mut self, imported: bool) -> Self {
        self.imported = imported;
        self
    }

    /// Unique key of the record in its store.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }

    /// Raw value of a field, skipping blank values.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field).filter(|v| !is_blank(v))
    }

    /// Non-empty string value of a field.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Field value coerced to a string. Numbers and booleans are rendered,
    /// lists and mappings are not.
    pub fn get_text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Whether a field is set to a truthy value. Blanks, `0` and `false`
    /// count as unset.
    pub fn has(&self, field: &str) -> bool {
        match self.get(field) {
            None | Some(Value::Bool(false)) => false,
            Some(Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(_) => true,
        }
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(field.into(), value.into());
    }

    pub fn content_hash(&self) -> Option<&str> {
        self.get_str("content_hash")
    }

    pub fn foreign_id(&self) -> Option<&str> {
        self.get_str("foreign_id")
    }

    pub fn is_imported(&self) -> bool {
        self.imported
    }

    pub fn mark_imported(&mut self) {
        self.imported = true;
    }
}
