mod ids;
mod image;
mod parsed;
mod tag_stats;

pub use ids::ImageId;
pub use image::{ImageRecord, ImageRecordBuilder};
pub use parsed::ParsedFilename;
pub use tag_stats::TagStats;
