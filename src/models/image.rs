use serde::{Deserialize, Serialize};

use super::ImageId;

/// An image in the gallery with its extracted title and canonical tags.
///
/// `id` and `filename` are fixed at construction. Only the tags and the
/// favorite flag change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    id: ImageId,
    filename: String,
    title: String,
    tags: Vec<String>,
    favorite: bool,
    folder: String,
    src: String,
}

impl ImageRecord {
    pub fn id(&self) -> &ImageId {
        &self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Canonical tags in display order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Folder path relative to the selection root, or `"root"`.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Opaque handle for loading the image (a path or URL).
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    /// Replaces the tag list. Callers are expected to pass canonical tags.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }
}

/// Builder for constructing `ImageRecord` instances.
///
/// # Examples
///
/// ```
/// use galtags::{ImageId, ImageRecordBuilder};
///
/// let image = ImageRecordBuilder::new(ImageId::new("demo1"), "forest_meadow.jpg")
///     .title("Forest Meadow")
///     .tags(vec!["forest".to_string(), "nature".to_string()])
///     .folder("Sample")
///     .build();
///
/// assert_eq!(image.title(), "Forest Meadow");
/// assert!(!image.is_favorite());
/// assert_eq!(image.src(), "");
/// ```
#[derive(Debug)]
pub struct ImageRecordBuilder {
    id: ImageId,
    filename: String,
    title: Option<String>,
    tags: Vec<String>,
    favorite: bool,
    folder: Option<String>,
    src: String,
}

impl ImageRecordBuilder {
    /// Starts a record with its immutable identity.
    pub fn new(id: ImageId, filename: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            title: None,
            tags: Vec::new(),
            favorite: false,
            folder: None,
            src: String::new(),
        }
    }

    /// Sets the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the canonical tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the favorite flag.
    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Sets the folder path.
    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Sets the source handle.
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = src.into();
        self
    }

    /// Builds the record. The title defaults to the filename and the folder
    /// to `"root"`.
    pub fn build(self) -> ImageRecord {
        ImageRecord {
            title: self.title.unwrap_or_else(|| self.filename.clone()),
            id: self.id,
            filename: self.filename,
            tags: self.tags,
            favorite: self.favorite,
            folder: self.folder.unwrap_or_else(|| "root".to_string()),
            src: self.src,
        }
    }
}
