//! The photo manifest and where it comes from.
//!
//! A manifest maps category names to ordered lists of photo filenames:
//!
//! ```json
//! {
//!   "Birds": ["heron.jpg", "owl.jpg"],
//!   "Coins": ["denarius.jpg"]
//! }
//! ```
//!
//! Key order in the file is display order, so the map is an [`IndexMap`]
//! rather than a `BTreeMap`. Photos resolve to `{photos_dir}/{category}/{id}`
//! by convention ([`image_src`]); the renderer never inspects the files.
//!
//! Retrieval goes through the [`ManifestSource`] trait. The only
//! implementation shipped here reads a JSON file from disk; tests provide
//! in-memory sources.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate photo {photo} in category {category}")]
    DuplicatePhoto { category: String, photo: String },
}

/// Category name → ordered photo ids, in display order.
///
/// Equality compares contents, not category order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    categories: IndexMap<String, Vec<String>>,
}

/// A photo tagged with its category, as seen by the column mosaic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FlatPhoto {
    pub category: String,
    pub id: String,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Append a category at the end of the display order.
    ///
    /// Re-inserting an existing category replaces its photos but keeps its
    /// original position.
    pub fn insert(&mut self, category: impl Into<String>, photos: Vec<String>) {
        self.categories.insert(category.into(), photos);
    }

    /// Reject manifests that list the same photo twice in one category.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (category, photos) in &self.categories {
            let mut seen = HashSet::with_capacity(photos.len());
            for photo in photos {
                if !seen.insert(photo.as_str()) {
                    return Err(ManifestError::DuplicatePhoto {
                        category: category.clone(),
                        photo: photo.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Categories and their photos in display order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, photos)| (name.as_str(), photos.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn photo_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// All photos, category-major: every photo of the first category, then
    /// the second, and so on.
    pub fn flatten(&self) -> Vec<FlatPhoto> {
        let mut flat = Vec::with_capacity(self.photo_count());
        for (category, photos) in &self.categories {
            for id in photos {
                flat.push(FlatPhoto {
                    category: category.clone(),
                    id: id.clone(),
                });
            }
        }
        flat
    }

    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FlatPhoto {
    pub fn src(&self, photos_dir: &str) -> String {
        image_src(photos_dir, &self.category, &self.id)
    }
}

/// Resolve a photo to its image path: `{photos_dir}/{category}/{id}`.
pub fn image_src(photos_dir: &str, category: &str, id: &str) -> String {
    let dir = photos_dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("{category}/{id}")
    } else {
        format!("{dir}/{category}/{id}")
    }
}

/// Anything that can hand the gallery a manifest.
///
/// Retrieval is the one suspending step of the gallery pipeline. Retry or
/// backoff policies belong to the implementation, not to the caller.
#[allow(async_fn_in_trait)]
pub trait ManifestSource {
    async fn fetch_manifest(&self) -> Result<Manifest, ManifestError>;
}

/// Reads `manifest.json` from disk.
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileManifestSource {
    async fn fetch_manifest(&self) -> Result<Manifest, ManifestError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ManifestError::Io {
                path: self.path.clone(),
                source,
            })?;
        Manifest::from_json(&content)
    }
}

/// A manifest that is already in memory.
impl ManifestSource for Manifest {
    async fn fetch_manifest(&self) -> Result<Manifest, ManifestError> {
        Ok(self.clone())
    }
}
