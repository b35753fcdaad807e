use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post. The permalink doubles as the storage key; the server
/// generates one when a submitted post carries none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default)]
    pub permalink: String,
    pub title: String,
    pub source: String,
    /// Creation timestamp, stamped by the server on insert
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
}
