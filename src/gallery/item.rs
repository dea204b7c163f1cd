// SPDX-License-Identifier: MPL-2.0
//! Gallery item snapshots.

use super::markers::Markers;
use crate::document::{Element, Node};
use std::path::{Path, PathBuf};

/// Image reference as written in the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSource {
    pub src: String,
    pub alt: String,
}

/// Where an image source points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// File on the local filesystem.
    Local(PathBuf),
    /// Network or inline source; not loaded by the viewer.
    Remote(String),
    /// Empty `src`.
    Missing,
}

impl ImageSource {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// Resolves `src` against the directory of the page.
    pub fn resolve(&self, base_dir: Option<&Path>) -> Location {
        let src = self.src.trim();
        if src.is_empty() {
            return Location::Missing;
        }
        if let Some(path) = src.strip_prefix("file://") {
            return Location::Local(PathBuf::from(path));
        }
        if src.contains("://") || src.starts_with("data:") || src.starts_with("//") {
            return Location::Remote(src.to_string());
        }

        // Query strings and fragments never name part of a file.
        let path = src.split(['?', '#']).next().unwrap_or(src);
        let path = Path::new(path);
        if path.is_absolute() {
            return Location::Local(path.to_path_buf());
        }
        match base_dir {
            Some(base) => Location::Local(base.join(path)),
            None => Location::Local(path.to_path_buf()),
        }
    }
}

/// Caption content: the caption's child nodes as found in the page, and
/// their plain text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Caption {
    pub nodes: Vec<Node>,
    pub text: String,
}

impl Caption {
    pub fn from_element(element: &Element) -> Self {
        Self {
            nodes: element.children().to_vec(),
            text: element.text_content(),
        }
    }

    /// Caption with a single text node.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            nodes: vec![Node::Text(text.clone())],
            text,
        }
    }

    /// The caption's content serialized back to markup.
    pub fn markup(&self) -> String {
        let mut holder = Element::new("div");
        for node in &self.nodes {
            holder.push_child(node.clone());
        }
        holder.inner_markup()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.text.is_empty()
    }
}

/// One image entry of a gallery, captured once when the gallery is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub image: ImageSource,
    pub caption: Option<Caption>,
    /// Set once a click handler is attached; drives the pointer cursor.
    pub interactive: bool,
}

impl GalleryItem {
    pub fn new(image: ImageSource, caption: Option<Caption>) -> Self {
        Self {
            image,
            caption,
            interactive: false,
        }
    }

    /// Snapshots an item element. Returns `None` when the item has no image.
    pub fn from_element(element: &Element, markers: &Markers) -> Option<Self> {
        let img = element.find_by_tag("img")?;
        let image = ImageSource::new(img.attr("src").unwrap_or(""), img.attr("alt").unwrap_or(""));
        let caption = element
            .find_by_class(&markers.caption)
            .map(Caption::from_element);
        Some(Self::new(image, caption))
    }
}

/// Item elements of `container`, skipping any that belong to a nested gallery.
pub fn item_elements<'a>(container: &'a Element, markers: &Markers) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_items(container, markers, &mut found);
    found
}

fn collect_items<'a>(element: &'a Element, markers: &Markers, found: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        if child.has_class(&markers.container) {
            continue;
        }
        if child.has_class(&markers.item) {
            found.push(child);
        } else {
            collect_items(child, markers, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::markup::parse;

    #[test]
    fn snapshot_copies_image_and_caption() {
        let root = parse(
            r#"<div class="gallery-item"><img src="a.jpg" alt="First"><div class="gallery-caption">Hello <b>there</b></div></div>"#,
        )
        .unwrap();
        let element = root.find_by_class("gallery-item").unwrap();
        let item = GalleryItem::from_element(element, &Markers::default()).unwrap();

        assert_eq!(item.image, ImageSource::new("a.jpg", "First"));
        let caption = item.caption.unwrap();
        assert_eq!(caption.markup(), "Hello <b>there</b>");
        assert_eq!(caption.text, "Hello there");
        assert!(!item.interactive);
    }

    #[test]
    fn item_without_caption_has_none() {
        let root = parse(r#"<div class="gallery-item"><img src="a.jpg"></div>"#).unwrap();
        let element = root.find_by_class("gallery-item").unwrap();
        let item = GalleryItem::from_element(element, &Markers::default()).unwrap();
        assert!(item.caption.is_none());
        assert_eq!(item.image.alt, "");
    }

    #[test]
    fn item_without_image_is_rejected() {
        let root = parse(r#"<div class="gallery-item"><p>no image</p></div>"#).unwrap();
        let element = root.find_by_class("gallery-item").unwrap();
        assert!(GalleryItem::from_element(element, &Markers::default()).is_none());
    }

    #[test]
    fn nested_gallery_items_are_not_collected() {
        let root = parse(
            r#"<div class="image-gallery">
                <div class="gallery-item"><img src="1.jpg"></div>
                <section><div class="gallery-item"><img src="2.jpg"></div></section>
                <div class="image-gallery"><div class="gallery-item"><img src="inner.jpg"></div></div>
            </div>"#,
        )
        .unwrap();
        let container = root.find_by_class("image-gallery").unwrap();
        let items = item_elements(container, &Markers::default());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn relative_sources_resolve_against_base() {
        let source = ImageSource::new("images/a.jpg?v=2", "");
        assert_eq!(
            source.resolve(Some(Path::new("/site"))),
            Location::Local(PathBuf::from("/site/images/a.jpg"))
        );
    }

    #[test]
    fn remote_and_empty_sources_are_classified() {
        assert_eq!(
            ImageSource::new("https://example.org/a.jpg", "").resolve(None),
            Location::Remote("https://example.org/a.jpg".to_string())
        );
        assert_eq!(ImageSource::new("  ", "").resolve(None), Location::Missing);
    }
}
