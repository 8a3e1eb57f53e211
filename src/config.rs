//! Gallery configuration module.
//!
//! Handles loading and validating `gallery.toml` from the site root. Every
//! key is optional; user files only list what they override and unknown keys
//! are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Gallery"                  # Page <title>
//! photos_dir = "photos"              # Prefix for image paths: {photos_dir}/{category}/{id}
//! manifest = "photos/manifest.json"  # Manifest location, relative to the site root
//!
//! [layout]
//! mode = "column"                    # "column" (daily mosaic) or "row" (one row per category)
//! breakpoints = [600, 900, 1200]     # Each breakpoint <= viewport width adds a column
//! min_columns = 2                    # Columns below the first breakpoint
//!
//! [shuffle]
//! hash = "sine"                      # "sine" or "splitmix"
//! ```

use crate::layout::{DEFAULT_BREAKPOINTS, DEFAULT_MIN_COLUMNS, Mode};
use crate::shuffle::ShuffleHash;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file name looked up in the site root.
pub const CONFIG_FILENAME: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page title.
    pub title: String,
    /// Directory prefix for image sources.
    pub photos_dir: String,
    /// Manifest path relative to the site root.
    pub manifest: String,
    /// Mode, breakpoints, column minimum.
    pub layout: LayoutConfig,
    /// Mosaic shuffle settings.
    pub shuffle: ShuffleConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Gallery".to_string(),
            photos_dir: "photos".to_string(),
            manifest: "photos/manifest.json".to_string(),
            layout: LayoutConfig::default(),
            shuffle: ShuffleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Presentation mode when the CLI does not override it.
    pub mode: Mode,
    /// Viewport widths (px) at which another column is added. Strictly ascending.
    pub breakpoints: Vec<u32>,
    /// Column count below the first breakpoint.
    pub min_columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            min_columns: DEFAULT_MIN_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShuffleConfig {
    pub hash: ShuffleHash,
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.min_columns < 2 {
            return Err(ConfigError::Validation(
                "layout.min_columns must be at least 2".into(),
            ));
        }
        if self.layout.breakpoints.contains(&0) {
            return Err(ConfigError::Validation(
                "layout.breakpoints values must be non-zero".into(),
            ));
        }
        if self.layout.breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Validation(
                "layout.breakpoints must be strictly ascending".into(),
            ));
        }
        Ok(())
    }

    /// Parse config text, apply defaults for missing keys, and validate.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Load `gallery.toml` from the site root, or the defaults if it is absent.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    GalleryConfig::from_toml(&content)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Mosaic Gal Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Title of the generated page.
title = "Gallery"

# Image sources resolve to {photos_dir}/{category}/{photo}.
photos_dir = "photos"

# Manifest location, relative to the site root.
# A JSON object mapping category names to ordered lists of photo filenames.
# Generate one from the photos directory with `mosaic-gal scan`.
manifest = "photos/manifest.json"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# "column": all photos shuffled once per day into a responsive mosaic.
# "row":    one horizontally scrolling row per category, manifest order.
mode = "column"

# Viewport widths in pixels. Each breakpoint at or below the viewport width
# adds a column: < 600 -> 2, < 900 -> 3, < 1200 -> 4, otherwise 5.
breakpoints = [600, 900, 1200]

# Columns below the first breakpoint (at least 2).
min_columns = 2

# ---------------------------------------------------------------------------
# Shuffle
# ---------------------------------------------------------------------------
[shuffle]
# "sine":     frac(sin(seed + i) * 10000), the classic formula.
# "splitmix": integer hash, identical on every platform.
hash = "sine"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = GalleryConfig::default();
        assert_eq!(config.title, "Gallery");
        assert_eq!(config.photos_dir, "photos");
        assert_eq!(config.manifest, "photos/manifest.json");
        assert_eq!(config.layout.mode, Mode::Column);
        assert_eq!(config.layout.breakpoints, vec![600, 900, 1200]);
        assert_eq!(config.layout.min_columns, 2);
        assert_eq!(config.shuffle.hash, ShuffleHash::Sine);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[layout]
mode = "row"
"#;
        let config = GalleryConfig::from_toml(toml).unwrap();
        // Overridden value
        assert_eq!(config.layout.mode, Mode::Row);
        // Default values preserved
        assert_eq!(config.layout.breakpoints, vec![600, 900, 1200]);
        assert_eq!(config.photos_dir, "photos");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
title = "Dictionary"
photos_dir = "img"
manifest = "img/index.json"

[layout]
mode = "column"
breakpoints = [480, 1024]
min_columns = 3

[shuffle]
hash = "splitmix"
"#;
        let config = GalleryConfig::from_toml(toml).unwrap();
        assert_eq!(config.title, "Dictionary");
        assert_eq!(config.photos_dir, "img");
        assert_eq!(config.manifest, "img/index.json");
        assert_eq!(config.layout.breakpoints, vec![480, 1024]);
        assert_eq!(config.layout.min_columns, 3);
        assert_eq!(config.shuffle.hash, ShuffleHash::Splitmix);
    }

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(GalleryConfig::from_toml("").unwrap(), GalleryConfig::default());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config = GalleryConfig::from_toml(stock_config_toml()).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "title = \"Home\"\n[layout]\nbreakpoints = [700]\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Home");
        assert_eq!(config.layout.breakpoints, vec![700]);
        assert_eq!(config.layout.min_columns, 2);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let result = GalleryConfig::from_toml("colums = 3\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let result = GalleryConfig::from_toml("[layout]\nbreakpoint = [600]\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_mode_rejected() {
        let result = GalleryConfig::from_toml("[layout]\nmode = \"grid\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_min_columns_too_small() {
        let result = GalleryConfig::from_toml("[layout]\nmin_columns = 1\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_breakpoints_must_ascend() {
        let result = GalleryConfig::from_toml("[layout]\nbreakpoints = [900, 600]\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let result = GalleryConfig::from_toml("[layout]\nbreakpoints = [600, 600]\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_zero_breakpoint() {
        let result = GalleryConfig::from_toml("[layout]\nbreakpoints = [0, 600]\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_empty_breakpoints_ok() {
        let config = GalleryConfig::from_toml("[layout]\nbreakpoints = []\n").unwrap();
        assert!(config.layout.breakpoints.is_empty());
    }
}
