//! Turning a [`LayoutPlan`] into visible elements.
//!
//! The renderer makes no decisions: it walks the plan and asks a [`Surface`]
//! to create and append elements. Anything that can build a tree of
//! elements and remember activation listeners can be a surface; the crate
//! ships [`Document`](crate::document::Document), an in-memory tree that
//! serializes to HTML.
//!
//! ## Element structure
//!
//! ```text
//! Row mode                              Column mode
//! container                             container
//! └── div.gallery-row (per category)    └── div.gallery-columns
//!     ├── h2.gallery-row-title              └── div.gallery-column (× n)
//!     └── div.gallery-row-scroll                └── img (lazy)
//!         └── img (lazy)
//! ```
//!
//! Every image is `{photos_dir}/{category}/{id}` with alt `"{category} photo"`.

use crate::layout::LayoutPlan;
use crate::lightbox::Trigger;
use crate::manifest::image_src;

/// Element kinds the gallery and lightbox need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Heading,
    Image,
    Button,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Heading => "h2",
            Tag::Image => "img",
            Tag::Button => "button",
        }
    }
}

/// Attributes a surface must support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    Id,
    Src,
    Alt,
    AriaLabel,
}

/// Presentation capability the renderer and lightbox draw on.
pub trait Surface {
    type Node: Copy + Eq + std::fmt::Debug;

    /// The node overlays such as the lightbox are appended to.
    fn body(&self) -> Self::Node;

    /// A detached element with one class (empty for none).
    fn create_element(&mut self, tag: Tag, class: &str) -> Self::Node;

    /// A detached, lazily-loaded image element.
    fn create_image_element(&mut self, src: &str, alt: &str) -> Self::Node;

    fn set_text(&mut self, node: Self::Node, text: &str);

    fn set_attribute(&mut self, node: Self::Node, attr: Attr, value: &str);

    /// Add or remove a class.
    fn set_class(&mut self, node: Self::Node, class: &str, enabled: bool);

    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Fire `trigger` when `node` itself is activated (clicked or tapped).
    fn add_activation_listener(&mut self, node: Self::Node, trigger: Trigger);

    /// Fire `trigger` when `key` is pressed anywhere on the page.
    fn add_key_listener(&mut self, key: &str, trigger: Trigger);
}

/// An image the renderer put on the surface, with its resolved source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPhoto<N> {
    pub node: N,
    pub src: String,
}

/// Materialize `plan` under `container`.
///
/// Appends only; the container's existing children are left alone. Returns
/// the rendered images in document order.
pub fn render_plan<S: Surface>(
    surface: &mut S,
    container: S::Node,
    plan: &LayoutPlan,
    photos_dir: &str,
) -> Vec<RenderedPhoto<S::Node>> {
    let mut rendered = Vec::with_capacity(plan.photo_count());

    match plan {
        LayoutPlan::Rows { rows } => {
            for row in rows {
                let row_node = surface.create_element(Tag::Div, "gallery-row");

                let title = surface.create_element(Tag::Heading, "gallery-row-title");
                surface.set_text(title, &row.category);
                surface.append_child(row_node, title);

                let scroll = surface.create_element(Tag::Div, "gallery-row-scroll");
                for id in &row.photos {
                    let src = image_src(photos_dir, &row.category, id);
                    let node = render_image(surface, &src, &row.category);
                    surface.append_child(scroll, node);
                    rendered.push(RenderedPhoto { node, src });
                }

                surface.append_child(row_node, scroll);
                surface.append_child(container, row_node);
            }
        }
        LayoutPlan::Columns(plan) => {
            let column_container = surface.create_element(Tag::Div, "gallery-columns");
            for column in &plan.columns {
                let column_node = surface.create_element(Tag::Div, "gallery-column");
                for photo in column {
                    let src = photo.src(photos_dir);
                    let node = render_image(surface, &src, &photo.category);
                    surface.append_child(column_node, node);
                    rendered.push(RenderedPhoto { node, src });
                }
                surface.append_child(column_container, column_node);
            }
            surface.append_child(container, column_container);
        }
    }

    tracing::debug!(photos = rendered.len(), mode = ?plan.mode(), "rendered gallery");
    rendered
}

fn render_image<S: Surface>(surface: &mut S, src: &str, category: &str) -> S::Node {
    surface.create_image_element(src, &format!("{category} photo"))
}
