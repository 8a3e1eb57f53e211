//! An in-memory element tree implementing [`Surface`].
//!
//! Elements live in an arena and are addressed by [`NodeId`]. Listeners are
//! recorded, not run: [`Document::click`] and [`Document::key_down`] return
//! the [`Trigger`] registered for the event so the caller can feed it to the
//! lightbox. A click only reports listeners on the exact node clicked, which
//! is how the backdrop tells itself apart from the enlarged image inside it.
//!
//! A [`NodeId`] is an index into one document's arena; passing it to another
//! document panics or addresses the wrong element.
//!
//! [`Document::to_markup`] serializes everything under the body with maud.
//! Activation listeners become `data-lightbox` attributes that the page's
//! viewer script wires back up in the browser.

use crate::lightbox::Trigger;
use crate::render::{Attr, Surface, Tag};
use maud::{Markup, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub aria_label: Option<String>,
    pub lazy: bool,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub listeners: Vec<Trigger>,
}

impl Element {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            text: None,
            src: None,
            alt: None,
            aria_label: None,
            lazy: false,
            children: Vec::new(),
            parent: None,
            listeners: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
    key_listeners: Vec<(String, Trigger)>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document with only a body.
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new(Tag::Div)],
            body: NodeId(0),
            key_listeners: Vec::new(),
        }
    }

    /// # Panics
    ///
    /// If `node` was created by a different document.
    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    /// All nodes carrying `class`, in creation order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|&id| self.nodes[id.0].has_class(class))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|&node| self.nodes[node.0].id.as_deref() == Some(id))
    }

    /// The trigger registered on `node` itself, if any. Does not bubble.
    ///
    /// # Panics
    ///
    /// If `node` was created by a different document.
    pub fn click(&self, node: NodeId) -> Option<Trigger> {
        self.nodes[node.0].listeners.first().cloned()
    }

    /// The trigger registered for `key`, if any.
    pub fn key_down(&self, key: &str) -> Option<Trigger> {
        self.key_listeners
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, trigger)| trigger.clone())
    }

    /// Serialize the body's children as HTML.
    pub fn to_markup(&self) -> Markup {
        html! {
            @for child in &self.nodes[self.body.0].children {
                (self.render_node(*child))
            }
        }
    }

    fn render_node(&self, node: NodeId) -> Markup {
        let el = &self.nodes[node.0];
        let class = (!el.classes.is_empty()).then(|| el.classes.join(" "));
        let role = el.listeners.first().map(Trigger::data_role);
        let content = html! {
            @if let Some(text) = &el.text {
                (text)
            }
            @for child in &el.children {
                (self.render_node(*child))
            }
        };

        match el.tag {
            Tag::Div => html! {
                div id=[el.id.as_deref()] class=[class] data-lightbox=[role] { (content) }
            },
            Tag::Heading => html! {
                h2 id=[el.id.as_deref()] class=[class] { (content) }
            },
            Tag::Button => html! {
                button type="button" id=[el.id.as_deref()] class=[class]
                    aria-label=[el.aria_label.as_deref()] data-lightbox=[role] { (content) }
            },
            Tag::Image => html! {
                img id=[el.id.as_deref()] class=[class] src=[el.src.as_deref()]
                    alt=[el.alt.as_deref()] loading=[el.lazy.then_some("lazy")]
                    data-lightbox=[role];
            },
        }
    }

    fn push(&mut self, element: Element) -> NodeId {
        self.nodes.push(element);
        NodeId(self.nodes.len() - 1)
    }
}

impl Surface for Document {
    type Node = NodeId;

    fn body(&self) -> NodeId {
        self.body
    }

    fn create_element(&mut self, tag: Tag, class: &str) -> NodeId {
        let mut element = Element::new(tag);
        if !class.is_empty() {
            element.classes.push(class.to_string());
        }
        self.push(element)
    }

    fn create_image_element(&mut self, src: &str, alt: &str) -> NodeId {
        let mut element = Element::new(Tag::Image);
        element.src = Some(src.to_string());
        element.alt = Some(alt.to_string());
        element.lazy = true;
        self.push(element)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text = Some(text.to_string());
    }

    fn set_attribute(&mut self, node: NodeId, attr: Attr, value: &str) {
        let element = &mut self.nodes[node.0];
        let slot = match attr {
            Attr::Id => &mut element.id,
            Attr::Src => &mut element.src,
            Attr::Alt => &mut element.alt,
            Attr::AriaLabel => &mut element.aria_label,
        };
        *slot = Some(value.to_string());
    }

    fn set_class(&mut self, node: NodeId, class: &str, enabled: bool) {
        let classes = &mut self.nodes[node.0].classes;
        let present = classes.iter().position(|c| c == class);
        match (present, enabled) {
            (None, true) => classes.push(class.to_string()),
            (Some(index), false) => {
                classes.remove(index);
            }
            _ => {}
        }
    }

    /// Appending a node that already has a parent moves it.
    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn add_activation_listener(&mut self, node: NodeId, trigger: Trigger) {
        self.nodes[node.0].listeners.push(trigger);
    }

    fn add_key_listener(&mut self, key: &str, trigger: Trigger) {
        self.key_listeners.push((key.to_string(), trigger));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_is_empty() {
        let doc = Document::new();
        assert!(doc.element(doc.body()).children.is_empty());
        assert_eq!(doc.to_markup().into_string(), "");
    }

    #[test]
    fn serializes_nested_elements() {
        let mut doc = Document::new();
        let outer = doc.create_element(Tag::Div, "outer");
        let title = doc.create_element(Tag::Heading, "");
        doc.set_text(title, "Hello");
        doc.append_child(outer, title);
        let body = doc.body();
        doc.append_child(body, outer);

        assert_eq!(
            doc.to_markup().into_string(),
            r#"<div class="outer"><h2>Hello</h2></div>"#
        );
    }

    #[test]
    fn serializes_lazy_image() {
        let mut doc = Document::new();
        let img = doc.create_image_element("photos/Birds/a.jpg", "Birds photo");
        let body = doc.body();
        doc.append_child(body, img);

        assert_eq!(
            doc.to_markup().into_string(),
            r#"<img src="photos/Birds/a.jpg" alt="Birds photo" loading="lazy">"#
        );
    }

    #[test]
    fn set_class_adds_once_and_removes() {
        let mut doc = Document::new();
        let node = doc.create_element(Tag::Div, "lightbox");
        doc.set_class(node, "active", true);
        doc.set_class(node, "active", true);
        assert_eq!(doc.element(node).classes, vec!["lightbox", "active"]);

        doc.set_class(node, "active", false);
        doc.set_class(node, "active", false);
        assert_eq!(doc.element(node).classes, vec!["lightbox"]);
    }

    #[test]
    fn append_child_moves_node() {
        let mut doc = Document::new();
        let a = doc.create_element(Tag::Div, "a");
        let b = doc.create_element(Tag::Div, "b");
        let child = doc.create_element(Tag::Div, "child");
        doc.append_child(a, child);
        doc.append_child(b, child);

        assert!(doc.element(a).children.is_empty());
        assert_eq!(doc.element(b).children, vec![child]);
        assert_eq!(doc.element(child).parent, Some(b));
    }

    #[test]
    fn click_reports_only_own_listener() {
        let mut doc = Document::new();
        let backdrop = doc.create_element(Tag::Div, "lightbox");
        let inner = doc.create_element(Tag::Image, "");
        doc.append_child(backdrop, inner);
        doc.add_activation_listener(backdrop, Trigger::Backdrop);

        assert_eq!(doc.click(backdrop), Some(Trigger::Backdrop));
        assert_eq!(doc.click(inner), None);
    }

    #[test]
    fn key_down_matches_registered_key() {
        let mut doc = Document::new();
        doc.add_key_listener("Escape", Trigger::Escape);
        assert_eq!(doc.key_down("Escape"), Some(Trigger::Escape));
        assert_eq!(doc.key_down("Enter"), None);
    }

    #[test]
    fn listeners_serialize_as_data_attributes() {
        let mut doc = Document::new();
        let button = doc.create_element(Tag::Button, "lightbox-close");
        doc.set_attribute(button, Attr::AriaLabel, "Close lightbox");
        doc.set_text(button, "close");
        doc.add_activation_listener(button, Trigger::CloseControl);
        let body = doc.body();
        doc.append_child(body, button);

        assert_eq!(
            doc.to_markup().into_string(),
            r#"<button type="button" class="lightbox-close" aria-label="Close lightbox" data-lightbox="close">close</button>"#
        );
    }

    #[test]
    fn find_helpers() {
        let mut doc = Document::new();
        let a = doc.create_element(Tag::Div, "gallery-column");
        let b = doc.create_element(Tag::Div, "gallery-column");
        doc.set_attribute(b, Attr::Id, "photo-gallery");
        assert_eq!(doc.find_by_class("gallery-column"), vec![a, b]);
        assert_eq!(doc.find_by_id("photo-gallery"), Some(b));
        assert_eq!(doc.find_by_id("missing"), None);
    }
}
