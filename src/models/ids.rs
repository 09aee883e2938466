use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an image within a loaded gallery.
///
/// Folder loads generate ids of the form `{unix_millis}-{index}`; sample
/// images use fixed ids. Ids are opaque and never reused within a load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    /// Creates an image id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates the id of the `index`-th file in a load started at `batch_millis`.
    pub fn for_batch(batch_millis: i128, index: usize) -> Self {
        Self(format!("{batch_millis}-{index}"))
    }

    /// Returns the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_serializes_as_raw_string() {
        let id = ImageId::new("demo1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""demo1""#);

        let deserialized: ImageId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn batch_ids_join_timestamp_and_index() {
        let id = ImageId::for_batch(1_700_000_000_000, 7);
        assert_eq!(id.as_str(), "1700000000000-7");
        assert_eq!(id.to_string(), "1700000000000-7");
    }
}
