//! Layout planning: rows of categories or a daily-shuffled column mosaic.
//!
//! ## Row mode
//!
//! One row per category, in manifest order, photos in manifest order. Nothing
//! is shuffled; this is the stable, reference-style view.
//!
//! ## Column mode
//!
//! ```text
//! manifest ─flatten─▶ [Birds/a, Birds/b, Coins/c, ...]
//!          ─shuffle(seed)─▶ [Coins/c, Birds/a, ...]
//!          ─round-robin─▶ column k mod n
//! ```
//!
//! The column count comes from the viewport width and half-open breakpoints
//! (`width < 600 → 2`, `< 900 → 3`, `< 1200 → 4`, otherwise 5). Round-robin
//! assignment keeps column sizes within one of each other.
//!
//! Planning is pure: the seed is an input. [`LayoutEngine::plan_for_day`]
//! derives it from a [`Clock`].

use crate::clock::{self, Clock};
use crate::config::LayoutConfig;
use crate::manifest::{FlatPhoto, Manifest};
use crate::shuffle::{self, ShuffleHash};
use serde::{Deserialize, Serialize};

/// Default column breakpoints in CSS pixels.
pub const DEFAULT_BREAKPOINTS: [u32; 3] = [600, 900, 1200];

/// Column count below the first breakpoint.
pub const DEFAULT_MIN_COLUMNS: usize = 2;

/// Container class that selects row mode.
pub const ROW_CONTAINER_CLASS: &str = "photo-gallery";

/// Container class used for the column mosaic.
pub const COLUMN_CONTAINER_CLASS: &str = "gallery";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Row,
    #[default]
    Column,
}

impl Mode {
    /// Pick the mode from a container's class list: `photo-gallery` means rows.
    pub fn from_container_class(class_list: &str) -> Self {
        if class_list
            .split_whitespace()
            .any(|class| class == ROW_CONTAINER_CLASS)
        {
            Mode::Row
        } else {
            Mode::Column
        }
    }

    pub fn container_class(self) -> &'static str {
        match self {
            Mode::Row => ROW_CONTAINER_CLASS,
            Mode::Column => COLUMN_CONTAINER_CLASS,
        }
    }
}

/// One category's row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowGroup {
    pub category: String,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnPlan {
    pub column_count: usize,
    pub columns: Vec<Vec<FlatPhoto>>,
}

impl ColumnPlan {
    pub fn sizes(&self) -> Vec<usize> {
        self.columns.iter().map(Vec::len).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum LayoutPlan {
    Rows { rows: Vec<RowGroup> },
    Columns(ColumnPlan),
}

impl LayoutPlan {
    pub fn mode(&self) -> Mode {
        match self {
            LayoutPlan::Rows { .. } => Mode::Row,
            LayoutPlan::Columns(_) => Mode::Column,
        }
    }

    pub fn photo_count(&self) -> usize {
        match self {
            LayoutPlan::Rows { rows } => rows.iter().map(|r| r.photos.len()).sum(),
            LayoutPlan::Columns(plan) => plan.columns.iter().map(Vec::len).sum(),
        }
    }
}

/// Breakpoints, minimum columns, and shuffle hash for planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEngine {
    breakpoints: Vec<u32>,
    min_columns: usize,
    hash: ShuffleHash,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            min_columns: DEFAULT_MIN_COLUMNS,
            hash: ShuffleHash::default(),
        }
    }
}

impl LayoutEngine {
    /// Build an engine from layout config.
    ///
    /// A `min_columns` below 2 is raised to 2 when planning.
    pub fn new(layout: &LayoutConfig, hash: ShuffleHash) -> Self {
        Self {
            breakpoints: layout.breakpoints.clone(),
            min_columns: layout.min_columns,
            hash,
        }
    }

    /// Columns for a viewport width.
    ///
    /// Each breakpoint at or below `width` adds a column, so thresholds are
    /// half-open: with the defaults, 599 → 2 and 600 → 3. Never below 2.
    pub fn column_count(&self, viewport_width: u32) -> usize {
        let passed = self
            .breakpoints
            .iter()
            .take_while(|&&bp| viewport_width >= bp)
            .count();
        self.min_columns.max(DEFAULT_MIN_COLUMNS) + passed
    }

    pub fn plan(
        &self,
        manifest: &Manifest,
        viewport_width: u32,
        mode: Mode,
        seed: i64,
    ) -> LayoutPlan {
        match mode {
            Mode::Row => plan_rows(manifest),
            Mode::Column => {
                LayoutPlan::Columns(self.plan_columns(manifest, viewport_width, seed))
            }
        }
    }

    /// Plan with today's seed from `clock`.
    pub fn plan_for_day(
        &self,
        manifest: &Manifest,
        viewport_width: u32,
        mode: Mode,
        clock: &impl Clock,
    ) -> LayoutPlan {
        self.plan(manifest, viewport_width, mode, clock::seed_from_clock(clock))
    }

    fn plan_columns(&self, manifest: &Manifest, viewport_width: u32, seed: i64) -> ColumnPlan {
        let column_count = self.column_count(viewport_width);
        let shuffled = shuffle::shuffle(manifest.flatten(), seed, self.hash);

        let mut columns: Vec<Vec<FlatPhoto>> = (0..column_count)
            .map(|_| Vec::with_capacity(shuffled.len() / column_count + 1))
            .collect();
        for (index, photo) in shuffled.into_iter().enumerate() {
            columns[index % column_count].push(photo);
        }

        ColumnPlan {
            column_count,
            columns,
        }
    }
}

fn plan_rows(manifest: &Manifest) -> LayoutPlan {
    let rows = manifest
        .categories()
        .map(|(category, photos)| RowGroup {
            category: category.to_string(),
            photos: photos.to_vec(),
        })
        .collect();
    LayoutPlan::Rows { rows }
}
