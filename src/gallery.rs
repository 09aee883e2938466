use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::models::{ImageId, ImageRecord, ImageRecordBuilder, TagStats};
use crate::scanner::is_image_filename;
use crate::tagger::{TagNormalizer, aggregate_tag_stats, parse_filename};

/// Folder label used when files carry no relative path.
pub const UNNAMED_SELECTION: &str = "Selected Images";

/// Folder label of the built-in demo images.
pub const SAMPLE_GALLERY: &str = "Sample Gallery";

/// How many recently opened folders are remembered.
pub const MAX_RECENT_FOLDERS: usize = 4;

/// Errors returned by gallery mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    /// No image with this id is loaded.
    #[error("Image not found: {0}")]
    ImageNotFound(ImageId),
}

/// One file from a folder selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// Bare filename, e.g. `"Sunset,, punished.jpg"`.
    pub name: String,
    /// Path relative to the selection root's parent, `/`-separated, e.g.
    /// `"Trip/day1/Sunset,, punished.jpg"`. `None` for loose files.
    pub relative_path: Option<String>,
    /// Handle used to display the image.
    pub src: String,
}

impl SelectedFile {
    /// Creates a loose file without a relative path.
    pub fn loose(name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relative_path: None,
            src: src.into(),
        }
    }

    /// Directory part of the relative path, or `"root"`.
    fn folder(&self) -> String {
        match &self.relative_path {
            Some(path) => match path.rsplit_once('/') {
                Some((dir, _)) => dir.to_string(),
                None => String::new(),
            },
            None => "root".to_string(),
        }
    }

    /// First component of the relative path.
    fn top_folder(&self) -> Option<&str> {
        self.relative_path
            .as_deref()
            .and_then(|path| path.split('/').next())
            .filter(|name| !name.is_empty())
    }
}

/// Active tag and search filters.
///
/// Both match case-insensitively by substring; an unset or empty filter
/// matches every image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    /// Selected tag from the sidebar.
    pub tag: Option<String>,
    /// Free-text search over titles and tags.
    pub search: Option<String>,
}

impl GalleryFilter {
    /// Returns true if `image` passes both filters.
    pub fn matches(&self, image: &ImageRecord) -> bool {
        let tag_matches = match non_empty(&self.tag) {
            Some(tag) => any_tag_contains(image, &tag),
            None => true,
        };

        let search_matches = match non_empty(&self.search) {
            Some(term) => {
                image.title().to_lowercase().contains(&term) || any_tag_contains(image, &term)
            }
            None => true,
        };

        tag_matches && search_matches
    }

    pub fn is_active(&self) -> bool {
        non_empty(&self.tag).is_some() || non_empty(&self.search).is_some()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn any_tag_contains(image: &ImageRecord, needle: &str) -> bool {
    image
        .tags()
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
}

/// In-memory image gallery built from a folder selection.
///
/// Holds the loaded images, their derived tag statistics, the active
/// filters and the recently opened folders. Nothing is persisted; clearing
/// or loading another folder discards the previous state.
///
/// # Examples
///
/// ```
/// use galtags::{Gallery, SelectedFile};
///
/// let mut gallery = Gallery::new();
/// gallery.load_folder(vec![
///     SelectedFile::loose("Sunset Walk,, punished.jpg", "blob:1"),
///     SelectedFile::loose("readme.txt", "blob:2"),
/// ]);
///
/// assert_eq!(gallery.images().len(), 1);
/// assert_eq!(gallery.images()[0].title(), "Sunset Walk");
/// assert_eq!(gallery.tag_stats()[0].canonical, "punished");
/// assert_eq!(gallery.folder_name(), Some("Selected Images"));
/// ```
#[derive(Debug, Default)]
pub struct Gallery {
    normalizer: TagNormalizer,
    images: Vec<ImageRecord>,
    tag_stats: Vec<TagStats>,
    folder_name: Option<String>,
    recent_folders: Vec<String>,
    filter: GalleryFilter,
}

impl Gallery {
    /// Creates an empty gallery using the default normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty gallery that canonicalizes tags with `normalizer`.
    pub fn with_normalizer(normalizer: TagNormalizer) -> Self {
        Self {
            normalizer,
            ..Self::default()
        }
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Tag statistics over all loaded images, sorted by canonical tag.
    pub fn tag_stats(&self) -> &[TagStats] {
        &self.tag_stats
    }

    /// Name of the loaded folder, if any.
    pub fn folder_name(&self) -> Option<&str> {
        self.folder_name.as_deref()
    }

    /// Recently opened folders, most recent first.
    pub fn recent_folders(&self) -> &[String] {
        &self.recent_folders
    }

    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.images.iter().find(|image| image.id() == id)
    }

    /// Replaces the gallery contents with the image files of a selection.
    ///
    /// Non-image files are ignored. Returns the number of images loaded.
    pub fn load_folder(&mut self, files: Vec<SelectedFile>) -> usize {
        let batch = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        self.load_folder_batch(files, batch)
    }

    /// Like [`load_folder`](Self::load_folder) with an explicit id prefix.
    pub fn load_folder_batch(&mut self, files: Vec<SelectedFile>, batch_millis: i128) -> usize {
        let image_files: Vec<SelectedFile> = files
            .into_iter()
            .filter(|file| is_image_filename(&file.name))
            .collect();

        let folder_name = image_files
            .first()
            .and_then(SelectedFile::top_folder)
            .unwrap_or(UNNAMED_SELECTION)
            .to_string();

        self.images = image_files
            .iter()
            .enumerate()
            .map(|(index, file)| self.build_record(ImageId::for_batch(batch_millis, index), file))
            .collect();

        info!("Loaded {} images from {folder_name}", self.images.len());

        self.refresh_stats();
        self.filter.tag = None;
        self.set_folder_name(folder_name);
        self.images.len()
    }

    fn build_record(&self, id: ImageId, file: &SelectedFile) -> ImageRecord {
        let parsed = parse_filename(&file.name, &self.normalizer);
        debug!("{} -> {:?} {:?}", file.name, parsed.title, parsed.tags);

        ImageRecordBuilder::new(id, file.name.clone())
            .title(parsed.title)
            .tags(parsed.tags)
            .folder(file.folder())
            .src(file.src.clone())
            .build()
    }

    /// Replaces the gallery contents with three demo images.
    pub fn load_sample(&mut self) {
        self.images = sample_images();
        self.refresh_stats();
        self.filter.tag = None;
        self.set_folder_name(SAMPLE_GALLERY.to_string());
    }

    /// Drops all images, statistics and the folder name.
    ///
    /// Recent folders survive.
    pub fn clear(&mut self) {
        self.images.clear();
        self.tag_stats.clear();
        self.folder_name = None;
        self.filter = GalleryFilter::default();
    }

    /// Flips the favorite flag of an image and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::ImageNotFound` if no image has this id.
    pub fn toggle_favorite(&mut self, id: &ImageId) -> Result<bool, GalleryError> {
        let image = self.get_mut(id)?;
        Ok(image.toggle_favorite())
    }

    /// Replaces an image's tags and recomputes the statistics.
    ///
    /// Tags are normalized and deduplicated; blank entries are dropped.
    /// Returns the stored canonical tags.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::ImageNotFound` if no image has this id.
    pub fn update_tags<I, S>(&mut self, id: &ImageId, tags: I) -> Result<Vec<String>, GalleryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = self.normalizer.normalize_all(tags);
        self.get_mut(id)?.set_tags(canonical.clone());
        self.refresh_stats();
        Ok(canonical)
    }

    /// Selects a sidebar tag, or clears it if it is already selected.
    pub fn select_tag(&mut self, tag: &str) {
        if tag.is_empty() || self.filter.tag.as_deref() == Some(tag) {
            self.filter.tag = None;
        } else {
            self.filter.tag = Some(tag.to_string());
        }
    }

    /// Sets the free-text search; an empty term clears it.
    pub fn set_search(&mut self, term: &str) {
        self.filter.search = (!term.is_empty()).then(|| term.to_string());
    }

    pub fn clear_filters(&mut self) {
        self.filter = GalleryFilter::default();
    }

    /// Images passing the active filters, in load order.
    pub fn filtered_images(&self) -> Vec<&ImageRecord> {
        self.images
            .iter()
            .filter(|image| self.filter.matches(image))
            .collect()
    }

    /// Favorited images, in load order.
    pub fn favorites(&self) -> Vec<&ImageRecord> {
        self.images.iter().filter(|image| image.is_favorite()).collect()
    }

    /// Sorted, deduplicated tags across all images.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .images
            .iter()
            .flat_map(|image| image.tags().iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Tag statistics whose canonical tag contains `query`, case-insensitively.
    pub fn search_tags(&self, query: &str) -> Vec<&TagStats> {
        let query = query.to_lowercase();
        self.tag_stats
            .iter()
            .filter(|stats| stats.canonical.to_lowercase().contains(&query))
            .collect()
    }

    fn get_mut(&mut self, id: &ImageId) -> Result<&mut ImageRecord, GalleryError> {
        self.images
            .iter_mut()
            .find(|image| image.id() == id)
            .ok_or_else(|| GalleryError::ImageNotFound(id.clone()))
    }

    fn refresh_stats(&mut self) {
        self.tag_stats = aggregate_tag_stats(&self.images, &self.normalizer);
    }

    fn set_folder_name(&mut self, name: String) {
        if !self.recent_folders.contains(&name) {
            self.recent_folders.insert(0, name.clone());
            self.recent_folders.truncate(MAX_RECENT_FOLDERS);
        }
        self.folder_name = Some(name);
    }
}

fn sample_images() -> Vec<ImageRecord> {
    let samples = [
        (
            "demo1",
            "aurora_landscape.jpg",
            "https://images.unsplash.com/photo-1506744038136-46273834b3fb?w=600&q=80",
            "Northern Lights",
            ["aurora", "sky", "nature"],
        ),
        (
            "demo2",
            "forest_meadow.jpg",
            "https://images.unsplash.com/photo-1500673922987-e212871fec22?w=600&q=80",
            "Forest Meadow",
            ["forest", "meadow", "nature"],
        ),
        (
            "demo3",
            "old_paper.jpg",
            "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=600&q=80",
            "Vintage Paper",
            ["vintage", "paper", "classic"],
        ),
    ];

    samples
        .into_iter()
        .map(|(id, filename, src, title, tags)| {
            ImageRecordBuilder::new(ImageId::new(id), filename)
                .title(title)
                .tags(tags.iter().map(|t| t.to_string()).collect())
                .folder("Sample")
                .src(src)
                .build()
        })
        .collect()
}
