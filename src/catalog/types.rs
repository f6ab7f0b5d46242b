//! Catalog record types.

use serde::{Deserialize, Serialize};

/// Metadata for a single video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Unique identifier, as it appears in URLs.
    pub id: String,
    /// Display title.
    pub title: String,
}

impl VideoRecord {
    /// Create a record from anything string-like.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
