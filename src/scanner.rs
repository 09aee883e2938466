//! Folder selection from the local filesystem.
//!
//! Produces the same file list a browser folder picker would: every image
//! under the chosen directory, with a relative path whose first component is
//! the directory's own name.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use walkdir::WalkDir;

use crate::gallery::SelectedFile;

/// Extensions treated as images, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "avif", "tif", "tiff", "ico", "heic",
    "heif",
];

/// Errors that can occur when scanning a folder.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The selected path does not exist.
    #[error("Folder not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The selected path exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The selected directory itself could not be read.
    #[error("Failed to read folder {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Returns true if the filename carries a known image extension.
///
/// # Examples
///
/// ```
/// use galtags::scanner::is_image_filename;
///
/// assert!(is_image_filename("Sunset,, punished.JPG"));
/// assert!(!is_image_filename("notes.txt"));
/// assert!(!is_image_filename("jpg"));
/// ```
pub fn is_image_filename(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Walks `dir` recursively and returns its image files.
///
/// Entries are sorted by file name within each directory. Unreadable entries
/// below the root are logged and skipped.
///
/// # Errors
///
/// Returns an error if `dir` is missing, is not a directory, or cannot be read.
pub fn scan_folder(dir: &Path) -> Result<Vec<SelectedFile>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let root = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    let base = root.parent().unwrap_or(&root).to_path_buf();

    let mut files = Vec::new();
    for entry in WalkDir::new(&root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(ScanError::Walk {
                    path: root.clone(),
                    source,
                });
            }
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !is_image_filename(&name) {
            debug!("Skipping non-image file: {}", entry.path().display());
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&base)
            .map(relative_path_string)
            .ok();

        files.push(SelectedFile {
            name,
            relative_path: relative,
            src: entry.path().to_string_lossy().to_string(),
        });
    }

    debug!("Found {} image files under {}", files.len(), root.display());
    Ok(files)
}

/// Joins path components with `/` regardless of platform.
fn relative_path_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_image_extension_matching_is_case_insensitive() {
        assert!(is_image_filename("a.PNG"));
        assert!(is_image_filename("a,, tag.jpeg"));
        assert!(!is_image_filename("a.pdf"));
        assert!(!is_image_filename("no_extension"));
    }

    #[test]
    fn test_scan_missing_folder() {
        let err = scan_folder(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn test_scan_file_instead_of_folder() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.jpg");
        touch(&file);

        let err = scan_folder(&file).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
        assert!(err.to_string().starts_with("Not a directory"));
    }

    #[test]
    fn test_scan_collects_images_with_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let trip = dir.path().join("Trip");
        touch(&trip.join("b,, punished.jpg"));
        touch(&trip.join("a.png"));
        touch(&trip.join("notes.txt"));
        touch(&trip.join("day2").join("c.webp"));

        let files = scan_folder(&trip).unwrap();
        let relative: Vec<&str> = files
            .iter()
            .map(|f| f.relative_path.as_deref().unwrap())
            .collect();

        assert_eq!(
            relative,
            vec!["Trip/a.png", "Trip/b,, punished.jpg", "Trip/day2/c.webp"]
        );
        assert_eq!(files[1].name, "b,, punished.jpg");
        assert!(files[1].src.ends_with("b,, punished.jpg"));
    }

    #[test]
    fn test_scan_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_folder(dir.path()).unwrap().is_empty());
    }
}
