// SPDX-License-Identifier: MPL-2.0
//! Image galleries with a lightbox overlay.
//!
//! A page declares galleries through class markers (see [`Markers`]). Once the
//! page has loaded, [`GalleryPage::init`] finds every gallery container and
//! builds one [`GalleryController`] per container. Each controller owns its
//! lightbox and cursor; the only state shared between them is the page scroll
//! lock held by the [`Document`].
//!
//! # Examples
//!
//! ```
//! use iced_gallery::document::Document;
//! use iced_gallery::gallery::{GalleryEvent, GalleryPage, Key, Markers};
//!
//! let document = Document::parse(
//!     r#"<div class="image-gallery">
//!          <div class="gallery-item"><img src="a.jpg" alt="A"></div>
//!          <div class="gallery-item"><img src="b.jpg" alt="B"></div>
//!        </div>"#,
//! )
//! .unwrap();
//! let mut page = GalleryPage::init(document, &Markers::default());
//!
//! page.dispatch(0, GalleryEvent::ItemClicked(1));
//! assert!(!page.document().is_scrollable());
//! page.broadcast_key(Key::Escape);
//! assert!(page.document().is_scrollable());
//! ```

pub mod controller;
pub mod item;
pub mod markers;
pub mod overlay;

pub use controller::{GalleryController, GalleryEvent, Key};
pub use item::{Caption, GalleryItem, ImageSource, Location};
pub use markers::Markers;
pub use overlay::{ClickTarget, Control, ControlLabels, LightboxOverlay, Visibility};

use crate::document::Document;
use crate::error::GalleryError;

/// A page together with the controllers of all its galleries.
#[derive(Debug)]
pub struct GalleryPage {
    document: Document,
    galleries: Vec<GalleryController>,
}

impl GalleryPage {
    /// Discovers every gallery container of `document`, in document order,
    /// and attaches a controller to each.
    pub fn init(mut document: Document, markers: &Markers) -> Self {
        let (root, layer, scroll) = document.parts_mut();
        let body = root.find_by_tag("body").unwrap_or(root);

        let galleries: Vec<GalleryController> = body
            .find_all(|e| e.has_class(&markers.container))
            .into_iter()
            .map(|container| GalleryController::new(container, markers, layer, scroll))
            .collect();

        tracing::info!(galleries = galleries.len(), "page galleries initialized");
        Self {
            document,
            galleries,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn galleries(&self) -> &[GalleryController] {
        &self.galleries
    }

    pub fn gallery(&self, index: usize) -> Option<&GalleryController> {
        self.galleries.get(index)
    }

    pub fn gallery_mut(&mut self, index: usize) -> Option<&mut GalleryController> {
        self.galleries.get_mut(index)
    }

    /// Delivers a pointer event to one gallery. Returns whether it changed.
    pub fn dispatch(&mut self, gallery: usize, event: GalleryEvent) -> bool {
        match self.galleries.get_mut(gallery) {
            Some(controller) => controller.handle(event),
            None => {
                tracing::warn!(gallery, "event for unknown gallery");
                false
            }
        }
    }

    /// Like [`Self::dispatch`], but reports a click on an item that does not
    /// exist instead of only logging it.
    pub fn try_dispatch(
        &mut self,
        gallery: usize,
        event: GalleryEvent,
    ) -> Result<bool, GalleryError> {
        match self.galleries.get_mut(gallery) {
            Some(controller) => controller.try_handle(event),
            None => {
                tracing::warn!(gallery, "event for unknown gallery");
                Ok(false)
            }
        }
    }

    /// Delivers a key press to every gallery, as each has its own
    /// page-wide key listener. Returns whether any gallery changed.
    pub fn broadcast_key(&mut self, key: Key) -> bool {
        let mut changed = false;
        for controller in &mut self.galleries {
            changed |= controller.handle(GalleryEvent::KeyPressed(key));
        }
        changed
    }

    /// Index of the first gallery whose lightbox is open.
    pub fn active_gallery(&self) -> Option<usize> {
        self.galleries.iter().position(GalleryController::is_open)
    }

    /// Total item count over all galleries.
    pub fn item_count(&self) -> usize {
        self.galleries.iter().map(GalleryController::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Field trip</title></head>
  <body>
    <div class="image-gallery">
      <div class="gallery-item"><img src="a.jpg" alt="A"><div class="gallery-caption">Alpha</div></div>
      <div class="gallery-item"><img src="b.jpg" alt="B"></div>
      <div class="gallery-item"><img src="c.jpg" alt="C"></div>
    </div>
    <p>Between galleries</p>
    <div class="image-gallery">
      <div class="gallery-item"><img src="solo.jpg" alt="Solo"></div>
    </div>
    <div class="image-gallery"></div>
  </body>
</html>"#;

    fn page() -> GalleryPage {
        GalleryPage::init(Document::parse(PAGE).unwrap(), &Markers::default())
    }

    #[test]
    fn init_builds_one_controller_and_overlay_per_container() {
        let page = page();
        assert_eq!(page.galleries().len(), 3);
        assert_eq!(page.document().overlays().len(), 3);
        assert_eq!(page.gallery(0).unwrap().len(), 3);
        assert_eq!(page.gallery(1).unwrap().len(), 1);
        assert!(page.gallery(2).unwrap().is_empty());
        assert_eq!(page.item_count(), 4);
        assert_eq!(page.active_gallery(), None);
    }

    #[test]
    fn custom_markers_are_honored() {
        let document = Document::parse(
            r#"<ul class="photos"><li class="photo"><img src="x.png"><span class="note">n</span></li></ul>"#,
        )
        .unwrap();
        let markers = Markers {
            container: "photos".into(),
            item: "photo".into(),
            caption: "note".into(),
        };
        let page = GalleryPage::init(document, &markers);
        let gallery = page.gallery(0).unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.items()[0].caption.as_ref().unwrap().text, "n");
    }

    #[test]
    fn galleries_keep_independent_cursors() {
        let mut page = page();
        page.dispatch(0, GalleryEvent::ItemClicked(2));
        assert_eq!(page.active_gallery(), Some(0));
        assert_eq!(page.gallery(0).unwrap().current_index(), 2);
        assert_eq!(page.gallery(1).unwrap().current_index(), 0);
        assert!(!page.gallery(1).unwrap().is_open());
    }

    #[test]
    fn keys_only_affect_the_open_gallery() {
        let mut page = page();
        page.dispatch(0, GalleryEvent::ItemClicked(0));

        assert!(page.broadcast_key(Key::ArrowRight));
        assert_eq!(page.gallery(0).unwrap().current_index(), 1);
        assert_eq!(page.gallery(1).unwrap().current_index(), 0);

        assert!(page.broadcast_key(Key::Escape));
        assert!(page.document().is_scrollable());
        assert!(!page.broadcast_key(Key::Escape));
    }

    #[test]
    fn scroll_lock_counts_simultaneously_open_galleries() {
        let mut page = page();
        page.dispatch(0, GalleryEvent::ItemClicked(0));
        page.dispatch(1, GalleryEvent::ItemClicked(0));
        assert_eq!(page.document().scroll_lock().holders(), 2);

        page.dispatch(1, GalleryEvent::ControlClicked(Control::Close));
        assert!(!page.document().is_scrollable());
        page.dispatch(0, GalleryEvent::OverlayClicked(ClickTarget::Root));
        assert!(page.document().is_scrollable());
    }

    #[test]
    fn events_for_unknown_gallery_are_dropped() {
        let mut page = page();
        assert!(!page.dispatch(9, GalleryEvent::ItemClicked(0)));
        assert_eq!(page.try_dispatch(9, GalleryEvent::ItemClicked(0)), Ok(false));
    }

    #[test]
    fn try_dispatch_reports_unknown_item() {
        let mut page = page();
        let result = page.try_dispatch(1, GalleryEvent::ItemClicked(4));
        assert_eq!(
            result,
            Err(GalleryError::IndexOutOfRange { index: 4, len: 1 })
        );
        assert_eq!(page.active_gallery(), None);
    }
}
