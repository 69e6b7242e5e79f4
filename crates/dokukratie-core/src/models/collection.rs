use serde::{Deserialize, Serialize};

use super::payload::deserialize_opt_id;

/// Descriptive metadata sent when creating or updating a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionData {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
}

/// Collection as returned by the backend. Depending on the endpoint the
/// identifier arrives as `collection_id`, `id` or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub collection_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub foreign_id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Collection {
    pub fn collection_id(&self) -> Option<&str> {
        self.collection_id.as_deref().or(self.id.as_deref())
    }
}

/// Paged collection search result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionList {
    #[serde(default)]
    pub results: Vec<Collection>,
}
