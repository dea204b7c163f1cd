// SPDX-License-Identifier: MPL-2.0
//! Host document model.
//!
//! A [`Document`] is the page a gallery lives in: the parsed element tree,
//! the layer overlays are mounted into, and the page-wide scroll lock. The
//! tree itself is read-only once loaded; galleries snapshot what they need.

pub mod markup;
pub mod scroll;

pub use markup::{Element, Node};
pub use scroll::ScrollLock;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Identifier of an overlay mounted into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(usize);

impl OverlayId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Overlays appended to the end of the page body, in mount order.
#[derive(Debug, Default)]
pub struct OverlayLayer {
    mounted: Vec<OverlayId>,
}

impl OverlayLayer {
    /// Appends a new overlay and returns its identifier.
    pub fn append(&mut self) -> OverlayId {
        let id = OverlayId(self.mounted.len());
        self.mounted.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.mounted.contains(&id)
    }
}

/// A loaded page.
#[derive(Debug)]
pub struct Document {
    root: Element,
    base_dir: Option<PathBuf>,
    overlays: OverlayLayer,
    scroll: ScrollLock,
}

impl Document {
    /// Wraps an already parsed tree.
    pub fn new(root: Element, base_dir: Option<PathBuf>) -> Self {
        Self {
            root,
            base_dir,
            overlays: OverlayLayer::default(),
            scroll: ScrollLock::new(),
        }
    }

    /// Parses markup that has no location on disk.
    pub fn parse(source: &str) -> Result<Self> {
        Ok(Self::new(markup::parse(source)?, None))
    }

    /// Reads and parses a page file. Relative image sources resolve against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let root = markup::parse(&source)?;
        Ok(Self::new(root, path.parent().map(Path::to_path_buf)))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The `<body>` element, or the whole tree for fragments without one.
    pub fn body(&self) -> &Element {
        self.root.find_by_tag("body").unwrap_or(&self.root)
    }

    /// Text of the `<title>` element, if any.
    pub fn title(&self) -> Option<String> {
        self.root
            .find_by_tag("title")
            .map(Element::text_content)
            .filter(|title| !title.is_empty())
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// All body elements carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<&Element> {
        self.body().find_all(|e| e.has_class(class))
    }

    pub fn overlays(&self) -> &OverlayLayer {
        &self.overlays
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll
    }

    /// Whether the page behind any overlay may scroll.
    pub fn is_scrollable(&self) -> bool {
        !self.scroll.is_locked()
    }

    /// Splits the document into the read-only tree and the mutable parts
    /// controllers attach to.
    pub fn parts_mut(&mut self) -> (&Element, &mut OverlayLayer, &ScrollLock) {
        (&self.root, &mut self.overlays, &self.scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn body_falls_back_to_root_for_fragments() {
        let doc = Document::parse(r#"<div class="g"></div>"#).unwrap();
        assert_eq!(doc.body().tag(), "#document");
        assert_eq!(doc.query_class("g").len(), 1);
    }

    #[test]
    fn query_class_ignores_head() {
        let doc = Document::parse(
            r#"<html><head><meta class="g"><title> My  page </title></head><body><p class="g"></p></body></html>"#,
        )
        .unwrap();
        assert_eq!(doc.query_class("g").len(), 1);
        assert_eq!(doc.title().as_deref(), Some("My page"));
    }

    #[test]
    fn load_records_base_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("index.html");
        fs::write(&path, "<body></body>").expect("failed to write page");

        let doc = Document::load(&path).expect("load failed");
        assert_eq!(doc.base_dir(), Some(temp_dir.path()));
        assert!(doc.is_scrollable());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = Document::load(&temp_dir.path().join("missing.html"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn overlay_layer_hands_out_distinct_ids() {
        let mut layer = OverlayLayer::default();
        let a = layer.append();
        let b = layer.append();
        assert_ne!(a, b);
        assert_eq!(layer.len(), 2);
        assert!(layer.contains(a));
        assert_eq!(b.index(), 1);
    }
}
