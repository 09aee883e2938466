//! Title and tag extraction from filenames.
//!
//! Filenames follow an informal convention: a human title, then a run of
//! punctuation marking the start of the tag list, then tags separated by
//! commas, wide gaps, dashes or pipes:
//!
//! ```text
//! Sunset Walk,, feminized by sister,, punished.jpg
//! ^^^^^^^^^^^   ^^^^^^^^^^^^^^^^^^^   ^^^^^^^^
//!    title             tag              tag
//! ```

use std::sync::OnceLock;

use regex::Regex;

use super::normalizer::TagNormalizer;
use crate::models::ParsedFilename;

/// Marks the end of the title: 2+ whitespace, comma runs (`,,`, `, ,`),
/// `--`, `..,` or a pipe.
const TITLE_SEPARATOR: &str = r"(\s{2,}|,,+\s*,*|,\s*,+|--+|\.\.,+|\s*\|\s*)";

/// Splits the tag list. Broader than the title separator: any comma counts.
const TAG_SEPARATOR: &str = r",,+\s*|,\s*,+|,\s+|\s*,\s*|\s{2,}|--+|\.\.,+|\s*\|\s*";

/// A trailing dot-suffix without whitespace or delimiter punctuation.
const EXTENSION: &str = r"\.[^/.\s,|]+$";

fn title_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TITLE_SEPARATOR).expect("title separator pattern is valid"))
}

fn tag_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TAG_SEPARATOR).expect("tag separator pattern is valid"))
}

fn extension() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EXTENSION).expect("extension pattern is valid"))
}

/// Removes the file extension, if any.
///
/// Only a final dot-suffix free of whitespace, commas and pipes counts as an
/// extension, so a dot inside the tag list is left alone.
///
/// # Examples
///
/// ```
/// use galtags::strip_extension;
///
/// assert_eq!(strip_extension("photo.jpg"), "photo");
/// assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
/// assert_eq!(strip_extension("a.jpg,, punished"), "a.jpg,, punished");
/// assert_eq!(strip_extension("README"), "README");
/// ```
pub fn strip_extension(filename: &str) -> &str {
    match extension().find(filename) {
        Some(m) => &filename[..m.start()],
        None => filename,
    }
}

/// Splits a filename into a title and canonical tags using `normalizer`.
///
/// Never fails: a filename without a recognized separator yields the whole
/// trimmed stem as the title and no tags.
pub fn parse_filename(filename: &str, normalizer: &TagNormalizer) -> ParsedFilename {
    let stem = strip_extension(filename);

    let Some(boundary) = title_separator().find(stem) else {
        return ParsedFilename::untagged(stem.trim());
    };

    let title = stem[..boundary.start()].trim();
    let tag_list = stem[boundary.start()..].trim();

    let raw_tags = tag_separator()
        .split(tag_list)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty() && !title_separator().is_match(fragment));

    ParsedFilename {
        title: title.to_string(),
        tags: normalizer.normalize_all(raw_tags),
    }
}

/// Splits a filename into a title and canonical tags with the default normalizer.
///
/// # Examples
///
/// ```
/// use galtags::extract_tags_from_filename;
///
/// let parsed = extract_tags_from_filename("Sunset Walk,, punished,, humilation.jpg");
/// assert_eq!(parsed.title, "Sunset Walk");
/// assert_eq!(parsed.tags, vec!["punished", "humiliation"]);
///
/// let plain = extract_tags_from_filename("photo.jpg");
/// assert_eq!(plain.title, "photo");
/// assert!(plain.tags.is_empty());
/// ```
pub fn extract_tags_from_filename(filename: &str) -> ParsedFilename {
    parse_filename(filename, TagNormalizer::shared())
}

/// Legacy title extraction: everything before the first single comma.
///
/// Falls back to the extension-less name when the first segment is blank.
/// Produces different titles than [`extract_tags_from_filename`] whenever a
/// lone comma precedes the tag separator.
///
/// # Examples
///
/// ```
/// use galtags::extract_main_title;
///
/// assert_eq!(extract_main_title("A,B,,C.jpg"), "A");
/// assert_eq!(extract_main_title("Northern Lights.png"), "Northern Lights");
/// ```
pub fn extract_main_title(filename: &str) -> String {
    let stem = strip_extension(filename);
    let first = stem.split(',').next().unwrap_or_default().trim();
    if first.is_empty() {
        stem.to_string()
    } else {
        first.to_string()
    }
}
