//! The enlarge-on-click viewer.
//!
//! One lightbox per page, mounted after the gallery has rendered:
//!
//! ```text
//!              photo activated (src)
//!   ┌────────┐ ─────────────────────▶ ┌──────────────┐
//!   │ Closed │                        │ Open { src } │ ──┐ photo activated:
//!   └────────┘ ◀───────────────────── └──────────────┘ ◀─┘ replace src
//!     ▲    │    close control, backdrop, Escape
//!     └────┘
//!   close while closed: no-op
//! ```
//!
//! [`LightboxState`] is the pure transition function; [`Lightbox`] owns the
//! state plus the viewer's elements and mirrors every transition onto the
//! [`Surface`] (the `active` class and the enlarged image's `src`).

use crate::render::{Attr, RenderedPhoto, Surface, Tag};

/// Key that dismisses the viewer.
pub const ESCAPE_KEY: &str = "Escape";

/// Class that makes the viewer visible.
pub const ACTIVE_CLASS: &str = "active";

/// Something that can change the viewer's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A gallery photo was activated.
    Open { src: String },
    /// The dedicated close button.
    CloseControl,
    /// The area around the enlarged image.
    Backdrop,
    Escape,
}

impl Trigger {
    /// Name used for the `data-lightbox` attribute in generated HTML.
    pub fn data_role(&self) -> &'static str {
        match self {
            Trigger::Open { .. } => "open",
            Trigger::CloseControl => "close",
            Trigger::Backdrop => "backdrop",
            Trigger::Escape => "escape",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String },
}

impl LightboxState {
    pub fn next(self, trigger: Trigger) -> LightboxState {
        match trigger {
            Trigger::Open { src } => LightboxState::Open { src },
            Trigger::CloseControl | Trigger::Backdrop | Trigger::Escape => LightboxState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    pub fn current_src(&self) -> Option<&str> {
        match self {
            LightboxState::Open { src } => Some(src),
            LightboxState::Closed => None,
        }
    }
}

/// The mounted viewer: its state and the elements it drives.
#[derive(Debug)]
pub struct Lightbox<N> {
    state: LightboxState,
    backdrop: N,
    image: N,
    close_button: N,
}

impl<N: Copy + Eq + std::fmt::Debug> Lightbox<N> {
    /// Build the viewer on `surface` and attach it to `photos`.
    ///
    /// Appends `div.lightbox` (close button + enlarged image) to the surface
    /// body, wires the close control, backdrop, and Escape key, and gives
    /// every photo an open trigger carrying its source. Photos rendered later
    /// are not attached.
    pub fn mount<S>(surface: &mut S, photos: &[RenderedPhoto<N>]) -> Self
    where
        S: Surface<Node = N>,
    {
        let backdrop = surface.create_element(Tag::Div, "lightbox");

        let close_button = surface.create_element(Tag::Button, "lightbox-close");
        surface.set_text(close_button, "close");
        surface.set_attribute(close_button, Attr::AriaLabel, "Close lightbox");

        let image = surface.create_element(Tag::Image, "");
        surface.set_attribute(image, Attr::Alt, "Enlarged photo");

        surface.append_child(backdrop, close_button);
        surface.append_child(backdrop, image);
        let body = surface.body();
        surface.append_child(body, backdrop);

        surface.add_activation_listener(close_button, Trigger::CloseControl);
        surface.add_activation_listener(backdrop, Trigger::Backdrop);
        surface.add_key_listener(ESCAPE_KEY, Trigger::Escape);

        for photo in photos {
            surface.add_activation_listener(
                photo.node,
                Trigger::Open {
                    src: photo.src.clone(),
                },
            );
        }

        tracing::debug!(photos = photos.len(), "lightbox attached");

        Self {
            state: LightboxState::Closed,
            backdrop,
            image,
            close_button,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn backdrop(&self) -> N {
        self.backdrop
    }

    pub fn image(&self) -> N {
        self.image
    }

    pub fn close_button(&self) -> N {
        self.close_button
    }

    /// Apply `trigger` and update the surface. Returns whether the state changed.
    pub fn apply<S>(&mut self, surface: &mut S, trigger: Trigger) -> bool
    where
        S: Surface<Node = N>,
    {
        let next = self.state.clone().next(trigger);
        if next == self.state {
            return false;
        }

        match &next {
            LightboxState::Open { src } => {
                surface.set_attribute(self.image, Attr::Src, src);
                surface.set_class(self.backdrop, ACTIVE_CLASS, true);
            }
            LightboxState::Closed => {
                surface.set_class(self.backdrop, ACTIVE_CLASS, false);
            }
        }
        self.state = next;
        true
    }
}
