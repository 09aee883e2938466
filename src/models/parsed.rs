use serde::{Deserialize, Serialize};

/// Title and canonical tags extracted from a filename.
///
/// `tags` never holds empty strings or duplicates; order follows the first
/// occurrence of each canonical value in the filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilename {
    /// Human-readable portion before the first delimiter.
    pub title: String,
    /// Canonical tags following the title.
    pub tags: Vec<String>,
}

impl ParsedFilename {
    /// Creates a title-only result.
    pub fn untagged(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
        }
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}
