// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay state.
//!
//! The overlay is owned by exactly one controller. It only mirrors what the
//! controller tells it to show; navigation logic lives in the controller.

use super::item::{Caption, GalleryItem, ImageSource};
use super::markers::lightbox;
use crate::document::{Element, OverlayId};

/// Buttons of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Close,
    Prev,
    Next,
}

/// What a click on the lightbox landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop itself.
    Root,
    /// The image/caption box.
    Content,
    Control(Control),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Accessible labels of the lightbox buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabels {
    pub close: String,
    pub prev: String,
    pub next: String,
}

impl Default for ControlLabels {
    fn default() -> Self {
        Self {
            close: "Close lightbox".to_string(),
            prev: "Previous image".to_string(),
            next: "Next image".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxOverlay {
    id: OverlayId,
    active: bool,
    image: ImageSource,
    caption: Caption,
    nav: Visibility,
}

impl LightboxOverlay {
    /// A fresh, inactive overlay showing nothing.
    pub fn new(id: OverlayId) -> Self {
        Self {
            id,
            active: false,
            image: ImageSource::default(),
            caption: Caption::default(),
            nav: Visibility::Visible,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    pub fn caption(&self) -> &Caption {
        &self.caption
    }

    /// Copies the item's image and caption, clearing any stale caption.
    pub fn show(&mut self, item: &GalleryItem) {
        self.image = item.image.clone();
        self.caption = item.caption.clone().unwrap_or_default();
    }

    pub fn set_nav_visibility(&mut self, visibility: Visibility) {
        self.nav = visibility;
    }

    pub fn visibility(&self, control: Control) -> Visibility {
        match control {
            Control::Close => Visibility::Visible,
            Control::Prev | Control::Next => self.nav,
        }
    }

    /// Renders the overlay as page markup.
    pub fn to_element(&self, labels: &ControlLabels) -> Element {
        let mut class = lightbox::ROOT.to_string();
        if self.active {
            class.push(' ');
            class.push_str(lightbox::ACTIVE);
        }

        let button = |marker: &str, label: &str, glyph: &str, control: Control| {
            let mut element = Element::new("button")
                .with_attr("class", marker)
                .with_attr("aria-label", label);
            if self.visibility(control) == Visibility::Hidden {
                element.set_attr("style", "display: none");
            }
            element.with_child(glyph)
        };

        let mut caption = Element::new("div").with_attr("class", lightbox::CAPTION);
        for node in &self.caption.nodes {
            caption.push_child(node.clone());
        }

        let content = Element::new("div")
            .with_attr("class", lightbox::CONTENT)
            .with_child(
                Element::new("img")
                    .with_attr("src", self.image.src.as_str())
                    .with_attr("alt", self.image.alt.as_str()),
            )
            .with_child(caption);

        Element::new("div")
            .with_attr("class", class)
            .with_child(button(lightbox::CLOSE, &labels.close, "\u{d7}", Control::Close))
            .with_child(button(lightbox::PREV, &labels.prev, "\u{2039}", Control::Prev))
            .with_child(button(lightbox::NEXT, &labels.next, "\u{203a}", Control::Next))
            .with_child(content)
    }
}
