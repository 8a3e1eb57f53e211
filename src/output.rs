//! CLI output formatting.
//!
//! Every entity leads with a 3-digit positional index; detail lines are
//! indented four spaces per level.
//!
//! # Output Format
//!
//! ## Rows
//!
//! ```text
//! Rows (2 categories, 3 photos)
//! 001 Birds (2 photos)
//!     001 photos/Birds/a.jpg
//!     002 photos/Birds/b.jpg
//! 002 Coins (1 photos)
//!     001 photos/Coins/c.jpg
//! ```
//!
//! ## Columns
//!
//! ```text
//! Columns (4 columns, 3 photos, seed 20377)
//! 001 (1 photos)
//!     001 photos/Coins/c.jpg
//! 002 (1 photos)
//!     001 photos/Birds/a.jpg
//! ...
//! ```
//!
//! ## Scan
//!
//! ```text
//! Categories
//! 001 Birds (2 photos)
//! 002 Coins (1 photos)
//! ```
//!
//! Format functions are pure and return `Vec<String>`; `print_*` wrappers
//! write them to stdout.

use crate::layout::LayoutPlan;
use crate::manifest::{Manifest, image_src};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Index, optional title, photo count.
///
/// ```text
/// 001 Birds (2 photos)
/// 001 (2 photos)
/// ```
fn entity_header(index: usize, title: Option<&str>, count: usize) -> String {
    match title {
        Some(t) => format!("{} {} ({} photos)", format_index(index), t, count),
        None => format!("{} ({} photos)", format_index(index), count),
    }
}

fn photo_line(depth: usize, index: usize, src: &str) -> String {
    format!("{}{} {}", indent(depth), format_index(index), src)
}

/// Format a layout plan as an indexed tree.
pub fn format_plan(plan: &LayoutPlan, photos_dir: &str, seed: i64) -> Vec<String> {
    let mut lines = Vec::new();

    match plan {
        LayoutPlan::Rows { rows } => {
            lines.push(format!(
                "Rows ({} categories, {} photos)",
                rows.len(),
                plan.photo_count()
            ));
            for (i, row) in rows.iter().enumerate() {
                lines.push(entity_header(i + 1, Some(&row.category), row.photos.len()));
                for (j, id) in row.photos.iter().enumerate() {
                    lines.push(photo_line(1, j + 1, &image_src(photos_dir, &row.category, id)));
                }
            }
        }
        LayoutPlan::Columns(columns) => {
            lines.push(format!(
                "Columns ({} columns, {} photos, seed {})",
                columns.column_count,
                plan.photo_count(),
                seed
            ));
            for (i, column) in columns.columns.iter().enumerate() {
                lines.push(entity_header(i + 1, None, column.len()));
                for (j, photo) in column.iter().enumerate() {
                    lines.push(photo_line(1, j + 1, &photo.src(photos_dir)));
                }
            }
        }
    }

    lines
}

/// Print a layout plan to stdout.
pub fn print_plan(plan: &LayoutPlan, photos_dir: &str, seed: i64) {
    for line in format_plan(plan, photos_dir, seed) {
        println!("{}", line);
    }
}

/// Format a scanned or checked manifest: one line per category.
pub fn format_manifest_summary(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    for (i, (category, photos)) in manifest.categories().enumerate() {
        lines.push(entity_header(i + 1, Some(category), photos.len()));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} categories, {} photos",
        manifest.category_count(),
        manifest.photo_count()
    ));
    lines
}

/// Print a manifest summary to stdout.
pub fn print_manifest_summary(manifest: &Manifest) {
    for line in format_manifest_summary(manifest) {
        println!("{}", line);
    }
}
