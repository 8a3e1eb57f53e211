//! Building a manifest from the photos directory.
//!
//! ## Directory Structure
//!
//! ```text
//! photos/                  # photos_dir
//! ├── manifest.json        # written by `mosaic-gal scan`
//! ├── Birds/               # category
//! │   ├── heron.jpg
//! │   └── owl.jpg
//! ├── Coins/
//! │   └── denarius.jpg
//! └── .drafts/             # hidden: skipped
//! ```
//!
//! Categories and photos are sorted by name. Files at the top level (the
//! manifest itself included) are ignored, as are files without an image
//! extension. Directories below the category level are not descended into.

use crate::manifest::Manifest;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Photos directory not found: {0}")]
    MissingDir(PathBuf),
    #[error("Non UTF-8 file name: {0}")]
    NonUtf8Name(PathBuf),
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

pub fn scan(photos_dir: &Path) -> Result<Manifest, ScanError> {
    if !photos_dir.is_dir() {
        return Err(ScanError::MissingDir(photos_dir.to_path_buf()));
    }

    let mut manifest = Manifest::new();
    let categories = WalkDir::new(photos_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));

    for entry in categories {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let category = utf8_name(entry.path())?;
        let photos = scan_category(entry.path())?;
        tracing::debug!(category = %category, photos = photos.len(), "scanned category");
        manifest.insert(category, photos);
    }

    Ok(manifest)
}

fn scan_category(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut photos = Vec::new();
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));

    for entry in entries {
        let entry = entry?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            photos.push(utf8_name(entry.path())?);
        }
    }
    Ok(photos)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn utf8_name(path: &Path) -> Result<String, ScanError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| ScanError::NonUtf8Name(path.to_path_buf()))
}
