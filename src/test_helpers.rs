//! Shared test utilities for the mosaic-gal test suite.
//!
//! Provides manifest builders, a photo-directory fixture, and small
//! extractors used across module tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let manifest = manifest_of(&[("Birds", &["a.jpg", "b.jpg"]), ("Coins", &["c.jpg"])]);
//! assert_eq!(category_names(&manifest), vec!["Birds", "Coins"]);
//!
//! let tmp = photo_tree(&[("Birds", &["a.jpg"])]);
//! let scanned = crate::scan::scan(tmp.path()).unwrap();
//! ```

use std::fs;
use tempfile::TempDir;

use crate::manifest::Manifest;

// =========================================================================
// Manifest builders
// =========================================================================

/// Build a manifest from `(category, photos)` pairs, in the given order.
pub fn manifest_of(categories: &[(&str, &[&str])]) -> Manifest {
    let mut manifest = Manifest::new();
    for (category, photos) in categories {
        manifest.insert(*category, photos.iter().map(|p| p.to_string()).collect());
    }
    manifest
}

/// `{"Birds": ["a.jpg", "b.jpg"], "Coins": ["c.jpg"]}`
pub fn sample_manifest() -> Manifest {
    manifest_of(&[("Birds", &["a.jpg", "b.jpg"]), ("Coins", &["c.jpg"])])
}

/// `categories` categories named `cat-N`, each with `per_category` photos.
pub fn large_manifest(categories: usize, per_category: usize) -> Manifest {
    let mut manifest = Manifest::new();
    for c in 0..categories {
        let photos = (0..per_category).map(|p| format!("{p:03}.jpg")).collect();
        manifest.insert(format!("cat-{c}"), photos);
    }
    manifest
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp photos directory with one subdirectory per category.
///
/// Files are empty; only their names matter to the scanner.
pub fn photo_tree(categories: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (category, photos) in categories {
        let dir = tmp.path().join(category);
        fs::create_dir_all(&dir).unwrap();
        for photo in *photos {
            fs::write(dir.join(photo), b"").unwrap();
        }
    }
    tmp
}

// =========================================================================
// Extractors
// =========================================================================

/// Category names in display order.
pub fn category_names(manifest: &Manifest) -> Vec<&str> {
    manifest.categories().map(|(name, _)| name).collect()
}
