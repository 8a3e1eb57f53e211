//! Gallery construction and page generation.
//!
//! [`load_gallery`] runs the whole pipeline in a fixed order:
//!
//! ```text
//! fetch manifest ──▶ plan layout ──▶ render photos ──▶ mount lightbox
//!   (async)            (pure)          (Surface)        (after render)
//! ```
//!
//! A manifest that cannot be fetched or parsed aborts the gallery: the error
//! is logged and `None` comes back, leaving the rest of the page untouched.
//! An empty manifest is not an error.
//!
//! [`render_page`] wraps a rendered [`Document`] in a complete HTML page with
//! the inline stylesheet and the viewer script, so the generated file works
//! from any static file server.

use crate::config::GalleryConfig;
use crate::document::Document;
use crate::layout::{LayoutEngine, LayoutPlan, Mode};
use crate::lightbox::Lightbox;
use crate::manifest::ManifestSource;
use crate::render::{self, Attr, RenderedPhoto, Surface, Tag};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/lightbox.js");

/// Element id of the gallery container in generated pages.
pub const CONTAINER_ID: &str = "photo-gallery";

/// Inputs to one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRequest {
    pub mode: Mode,
    pub viewport_width: u32,
    pub seed: i64,
}

/// A rendered gallery with its viewer attached.
#[derive(Debug)]
pub struct Gallery<N> {
    pub plan: LayoutPlan,
    pub photos: Vec<RenderedPhoto<N>>,
    pub lightbox: Lightbox<N>,
}

/// Fetch, plan, render into `container`, then mount the lightbox.
///
/// Returns `None` when the manifest is unavailable; the failure is logged.
pub async fn load_gallery<M, S>(
    source: &M,
    surface: &mut S,
    container: S::Node,
    engine: &LayoutEngine,
    request: LayoutRequest,
    photos_dir: &str,
) -> Option<Gallery<S::Node>>
where
    M: ManifestSource,
    S: Surface,
{
    tracing::debug!(?request, "loading gallery");
    let manifest = match source.fetch_manifest().await {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::error!("Failed to load photo gallery: {e}");
            return None;
        }
    };
    tracing::debug!(
        categories = manifest.category_count(),
        photos = manifest.photo_count(),
        "manifest loaded"
    );

    let plan = engine.plan(
        &manifest,
        request.viewport_width,
        request.mode,
        request.seed,
    );
    let photos = render::render_plan(surface, container, &plan, photos_dir);
    let lightbox = Lightbox::mount(surface, &photos);

    tracing::info!(photos = photos.len(), mode = ?request.mode, "gallery ready");
    Some(Gallery {
        plan,
        photos,
        lightbox,
    })
}

/// Create the gallery container for `mode` and append it to the body.
pub fn create_container(doc: &mut Document, mode: Mode) -> crate::document::NodeId {
    let container = doc.create_element(Tag::Div, mode.container_class());
    doc.set_attribute(container, Attr::Id, CONTAINER_ID);
    let body = doc.body();
    doc.append_child(body, container);
    container
}

/// Build a complete page for `config` from any manifest source.
///
/// The page is produced even when the gallery could not be loaded.
pub async fn build_page<M: ManifestSource>(
    source: &M,
    config: &GalleryConfig,
    request: LayoutRequest,
) -> (Markup, Option<LayoutPlan>) {
    let engine = LayoutEngine::new(&config.layout, config.shuffle.hash);
    let mut doc = Document::new();
    let container = create_container(&mut doc, request.mode);

    let gallery = load_gallery(
        source,
        &mut doc,
        container,
        &engine,
        request,
        &config.photos_dir,
    )
    .await;

    let page = render_page(&config.title, &doc);
    (page, gallery.map(|g| g.plan))
}

/// Renders the full HTML document around a rendered gallery.
pub fn render_page(title: &str, doc: &Document) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                main {
                    (doc.to_markup())
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}
