pub mod config;
pub mod gallery;
pub mod models;
pub mod scanner;
pub mod tagger;

pub use config::{MatchPolicy, NormalizerConfig};
pub use gallery::{Gallery, GalleryError, GalleryFilter, SelectedFile};
pub use models::{ImageId, ImageRecord, ImageRecordBuilder, ParsedFilename, TagStats};
pub use scanner::{ScanError, scan_folder};
pub use tagger::{
    TagDictionary, TagNormalizer, Tagged, create_tag_stats, extract_main_title,
    extract_tags_from_filename, normalize_tag, strip_extension,
};
