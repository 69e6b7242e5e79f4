use serde::{Deserialize, Serialize};

/// Dataset catalog as published at the catalog URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// Catalog entry for one dataset. Read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub data: Option<DataResource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Downloadable resource attached to a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataResource {
    #[serde(default)]
    pub url: Option<String>,
}

impl Dataset {
    /// Human-readable label, falling back to the dataset name.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// The resource carrying the archive manifest. When several resources
    /// match, the last one wins.
    pub fn archive_resource(&self, mime_type: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .rev()
            .find(|r| r.mime_type.as_deref() == Some(mime_type))
    }
}
