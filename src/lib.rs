//! # Mosaic Gal
//!
//! A photo gallery renderer. A manifest of categories and photos becomes
//! either one scrolling row per category or a column mosaic that reshuffles
//! once a day, with a lightbox for viewing any photo enlarged.
//!
//! # Architecture: Fetch, Plan, Render, Attach
//!
//! ```text
//! 1. Fetch    ManifestSource   →  Manifest       (async; failure skips the gallery)
//! 2. Plan     LayoutEngine     →  LayoutPlan     (pure; rows, or shuffled columns)
//! 3. Render   render_plan      →  Surface nodes  (no decisions, just elements)
//! 4. Attach   Lightbox::mount  →  viewer         (after every photo is on the page)
//! ```
//!
//! Planning never touches the presentation layer, and rendering never makes
//! layout decisions. The seed and the viewport width are plain inputs, so a
//! plan can be reproduced exactly from `(manifest, width, mode, seed)`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | `Manifest` (ordered categories), `FlatPhoto`, `ManifestSource`, image path convention |
//! | [`shuffle`] | Seeded Fisher–Yates with a freshly keyed draw per index |
//! | [`clock`] | Injectable clock and the daily seed |
//! | [`layout`] | Row/column planning, breakpoints, round-robin distribution |
//! | [`render`] | The `Surface` capability and plan-to-elements mapping |
//! | [`document`] | In-memory `Surface` that serializes to HTML |
//! | [`lightbox`] | Viewer state machine and controller |
//! | [`gallery`] | Pipeline orchestration and full-page generation |
//! | [`config`] | `gallery.toml` loading and validation |
//! | [`scan`] | Builds `manifest.json` from the photos directory |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Daily Shuffle
//!
//! The mosaic order is keyed by the day number since the epoch. Visitors see
//! a fresh arrangement each day, but navigating around the site within a day
//! never reshuffles the page under them. Nothing is persisted: the order is
//! recomputed from the date.
//!
//! ## Round-Robin Columns
//!
//! Photo `k` of the shuffled list goes to column `k mod n`. Columns stay
//! within one photo of each other without measuring image heights.
//!
//! ## Surface Capability
//!
//! The renderer and lightbox only talk to a [`render::Surface`]. The bundled
//! [`document::Document`] records listeners as data, which makes every click
//! and key press in the tests a plain function call.

pub mod clock;
pub mod config;
pub mod document;
pub mod gallery;
pub mod layout;
pub mod lightbox;
pub mod manifest;
pub mod output;
pub mod render;
pub mod scan;
pub mod shuffle;

#[cfg(test)]
pub(crate) mod test_helpers;
