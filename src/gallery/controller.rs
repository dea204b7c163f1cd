// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: the cursor over a gallery's items and the lightbox
//! that shows the item under it.
//!
//! # State machine
//!
//! ```text
//! Closed --open(i)--> Open --close--> Closed
//!                      |  ^
//!                      +--+ next / prev
//! ```
//!
//! The controller lives as long as its page. Its overlay is mounted once at
//! construction and never recreated.

use super::item::{item_elements, GalleryItem};
use super::markers::Markers;
use super::overlay::{ClickTarget, Control, LightboxOverlay, Visibility};
use crate::document::{Element, OverlayLayer, ScrollLock};
use crate::error::GalleryError;

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Input delivered to a controller by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A thumbnail was clicked.
    ItemClicked(usize),
    /// A lightbox button was clicked.
    ControlClicked(Control),
    /// The lightbox received a click that no button handled.
    OverlayClicked(ClickTarget),
    /// Page-wide key press.
    KeyPressed(Key),
}

#[derive(Debug)]
pub struct GalleryController {
    items: Vec<GalleryItem>,
    /// Positions (within the container) of item elements without an image.
    skipped: Vec<usize>,
    current_index: usize,
    overlay: LightboxOverlay,
    scroll: ScrollLock,
    holds_scroll: bool,
}

impl GalleryController {
    /// Builds a controller for `container`, mounting its lightbox into `layer`.
    pub fn new(
        container: &Element,
        markers: &Markers,
        layer: &mut OverlayLayer,
        scroll: &ScrollLock,
    ) -> Self {
        let mut items = Vec::new();
        let mut skipped = Vec::new();
        for (position, element) in item_elements(container, markers).into_iter().enumerate() {
            match GalleryItem::from_element(element, markers) {
                Some(item) => items.push(item),
                None => {
                    tracing::warn!(
                        gallery = layer.len(),
                        container = container.attr("id").unwrap_or_default(),
                        position,
                        "gallery item has no image, skipping"
                    );
                    skipped.push(position);
                }
            }
        }

        let mut controller = Self::from_items(items, layer, scroll);
        controller.skipped = skipped;
        controller
    }

    /// Builds a controller over an explicit item list.
    pub fn from_items(
        mut items: Vec<GalleryItem>,
        layer: &mut OverlayLayer,
        scroll: &ScrollLock,
    ) -> Self {
        for item in &mut items {
            item.interactive = true;
        }
        let mut overlay = LightboxOverlay::new(layer.append());
        overlay.set_nav_visibility(nav_visibility(items.len()));
        tracing::debug!(items = items.len(), overlay = overlay.id().index(), "gallery attached");

        Self {
            items,
            skipped: Vec::new(),
            current_index: 0,
            overlay,
            scroll: scroll.clone(),
            holds_scroll: false,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.current_index)
    }

    pub fn overlay(&self) -> &LightboxOverlay {
        &self.overlay
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_active()
    }

    /// Shows item `index` in the lightbox and locks page scrolling.
    ///
    /// An index outside the item list is rejected and leaves all state as is.
    pub fn open(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.items.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        self.current_index = index;
        self.refresh();
        self.overlay.set_active(true);
        if !self.holds_scroll {
            self.scroll.acquire();
            self.holds_scroll = true;
        }
        tracing::debug!(index, "lightbox opened");
        Ok(())
    }

    /// Hides the lightbox and gives page scrolling back. Closing a closed
    /// lightbox changes nothing.
    pub fn close(&mut self) {
        self.overlay.set_active(false);
        if self.holds_scroll {
            self.scroll.release();
            self.holds_scroll = false;
            tracing::debug!("lightbox closed");
        }
    }

    pub fn next(&mut self) {
        let count = self.items.len();
        if count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % count;
        self.refresh();
    }

    pub fn prev(&mut self) {
        let count = self.items.len();
        if count == 0 {
            return;
        }
        self.current_index = (self.current_index + count - 1) % count;
        self.refresh();
    }

    /// Copies the current item into the lightbox and updates button visibility.
    pub fn refresh(&mut self) {
        if let Some(item) = self.items.get(self.current_index) {
            self.overlay.show(item);
        }
        self.overlay.set_nav_visibility(nav_visibility(self.items.len()));
    }

    /// Routes a host event. Returns whether anything changed.
    pub fn handle(&mut self, event: GalleryEvent) -> bool {
        self.try_handle(event).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring click on unknown gallery item");
            false
        })
    }

    /// Like [`Self::handle`], but reports a rejected item click.
    pub fn try_handle(&mut self, event: GalleryEvent) -> Result<bool, GalleryError> {
        let changed = match event {
            GalleryEvent::ItemClicked(index) => {
                self.open(index)?;
                true
            }
            GalleryEvent::ControlClicked(control) => self.apply(control),
            GalleryEvent::OverlayClicked(ClickTarget::Control(control)) => self.apply(control),
            GalleryEvent::OverlayClicked(ClickTarget::Root) => self.apply(Control::Close),
            GalleryEvent::OverlayClicked(ClickTarget::Content) => false,
            GalleryEvent::KeyPressed(key) => self.handle_key(key),
        };
        Ok(changed)
    }

    fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::Close => {
                let was_open = self.is_open();
                self.close();
                was_open
            }
            Control::Prev => {
                self.prev();
                !self.is_empty()
            }
            Control::Next => {
                self.next();
                !self.is_empty()
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::Escape => self.apply(Control::Close),
            Key::ArrowLeft => self.apply(Control::Prev),
            Key::ArrowRight => self.apply(Control::Next),
            Key::Other => false,
        }
    }
}

/// Prev/next are only offered when there is somewhere else to go.
fn nav_visibility(count: usize) -> Visibility {
    if count <= 1 {
        Visibility::Hidden
    } else {
        Visibility::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::item::{Caption, ImageSource};
    use crate::gallery::markers::lightbox;
    use crate::gallery::overlay::ControlLabels;

    fn item(src: &str) -> GalleryItem {
        GalleryItem::new(ImageSource::new(src, format!("alt {src}")), None)
    }

    fn controller(sources: &[&str]) -> (GalleryController, ScrollLock) {
        let scroll = ScrollLock::new();
        let mut layer = OverlayLayer::default();
        let items = sources.iter().map(|s| item(s)).collect();
        (GalleryController::from_items(items, &mut layer, &scroll), scroll)
    }

    #[test]
    fn starts_closed_at_first_item() {
        let (gallery, scroll) = controller(&["a.jpg", "b.jpg"]);
        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 0);
        assert!(!scroll.is_locked());
        assert!(gallery.items().iter().all(|i| i.interactive));
    }

    #[test]
    fn walkthrough_wraps_in_both_directions() {
        let (mut gallery, _) = controller(&["a.jpg", "b.jpg", "c.jpg"]);

        gallery.open(0).unwrap();
        assert_eq!(gallery.overlay().image().src, "a.jpg");
        gallery.next();
        assert_eq!(gallery.overlay().image().src, "b.jpg");
        gallery.next();
        assert_eq!(gallery.overlay().image().src, "c.jpg");
        assert_eq!(gallery.current_index(), 2);
        gallery.next();
        assert_eq!(gallery.overlay().image().src, "a.jpg");
        assert_eq!(gallery.current_index(), 0);
        gallery.prev();
        assert_eq!(gallery.overlay().image().src, "c.jpg");
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn n_steps_forward_return_to_start() {
        for n in 2..8 {
            let sources: Vec<String> = (0..n).map(|i| format!("{i}.jpg")).collect();
            let refs: Vec<&str> = sources.iter().map(String::as_str).collect();
            let (mut gallery, _) = controller(&refs);
            for start in 0..n {
                gallery.open(start).unwrap();
                for _ in 0..n {
                    gallery.next();
                }
                assert_eq!(gallery.current_index(), start);
            }
        }
    }

    #[test]
    fn prev_and_next_are_inverse() {
        let (mut gallery, _) = controller(&["a", "b", "c", "d"]);
        for start in 0..4 {
            gallery.open(start).unwrap();
            gallery.next();
            gallery.prev();
            assert_eq!(gallery.current_index(), start);
            gallery.prev();
            gallery.next();
            assert_eq!(gallery.current_index(), start);
        }
    }

    #[test]
    fn nav_hidden_for_single_item() {
        let (mut gallery, _) = controller(&["only.jpg"]);
        gallery.open(0).unwrap();
        assert_eq!(gallery.overlay().visibility(Control::Prev), Visibility::Hidden);
        assert_eq!(gallery.overlay().visibility(Control::Next), Visibility::Hidden);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.overlay().visibility(Control::Next), Visibility::Hidden);
    }

    #[test]
    fn nav_matches_item_count_before_first_open() {
        let (single, _) = controller(&["only.jpg"]);
        assert_eq!(single.overlay().visibility(Control::Prev), Visibility::Hidden);
        assert_eq!(single.overlay().visibility(Control::Next), Visibility::Hidden);
        let markup = single.overlay().to_element(&ControlLabels::default());
        let prev = markup.find_by_class(lightbox::PREV).unwrap();
        assert_eq!(prev.attr("style"), Some("display: none"));

        let (empty, _) = controller(&[]);
        assert_eq!(empty.overlay().visibility(Control::Next), Visibility::Hidden);

        let (pair, _) = controller(&["a.jpg", "b.jpg"]);
        assert_eq!(pair.overlay().visibility(Control::Next), Visibility::Visible);
    }

    #[test]
    fn rich_caption_reaches_overlay_markup() {
        let root = crate::document::markup::parse(
            r#"<div class="image-gallery"><div class="gallery-item"><img src="a.jpg"><p class="gallery-caption">Taken in <em>Lyon</em></p></div></div>"#,
        )
        .unwrap();
        let container = root.find_by_class("image-gallery").unwrap();
        let scroll = ScrollLock::new();
        let mut layer = OverlayLayer::default();
        let mut gallery =
            GalleryController::new(container, &Markers::default(), &mut layer, &scroll);

        gallery.open(0).unwrap();
        let markup = gallery.overlay().to_element(&ControlLabels::default());
        let caption = markup.find_by_class(lightbox::CAPTION).unwrap();
        assert_eq!(caption.inner_markup(), "Taken in <em>Lyon</em>");
        assert_eq!(caption.text_content(), "Taken in Lyon");
    }

    #[test]
    fn nav_visible_for_several_items() {
        let (mut gallery, _) = controller(&["a.jpg", "b.jpg"]);
        gallery.open(1).unwrap();
        assert_eq!(gallery.overlay().visibility(Control::Prev), Visibility::Visible);
    }

    #[test]
    fn empty_gallery_navigation_is_a_no_op() {
        let (mut gallery, scroll) = controller(&[]);
        gallery.next();
        gallery.prev();
        gallery.refresh();
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.overlay().visibility(Control::Next), Visibility::Hidden);
        assert_eq!(
            gallery.open(0),
            Err(GalleryError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(!scroll.is_locked());
    }

    #[test]
    fn out_of_range_open_changes_nothing() {
        let (mut gallery, scroll) = controller(&["a.jpg", "b.jpg"]);
        gallery.open(1).unwrap();
        gallery.close();

        let err = gallery.open(5).unwrap_err();
        assert_eq!(err, GalleryError::IndexOutOfRange { index: 5, len: 2 });
        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 1);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn open_then_close_restores_scrolling() {
        let (mut gallery, scroll) = controller(&["a", "b", "c"]);
        for index in 0..3 {
            gallery.open(index).unwrap();
            assert!(scroll.is_locked());
            gallery.close();
            assert!(!scroll.is_locked());
        }
    }

    #[test]
    fn close_is_idempotent() {
        let (mut gallery, scroll) = controller(&["a", "b"]);
        gallery.close();
        assert!(!scroll.is_locked());
        gallery.open(0).unwrap();
        gallery.close();
        gallery.close();
        assert!(!gallery.is_open());
        assert_eq!(scroll.holders(), 0);
    }

    #[test]
    fn reopening_holds_the_lock_once() {
        let (mut gallery, scroll) = controller(&["a", "b"]);
        gallery.open(0).unwrap();
        gallery.open(1).unwrap();
        assert_eq!(scroll.holders(), 1);
        gallery.close();
        assert!(!scroll.is_locked());
    }

    #[test]
    fn refresh_copies_exactly_the_current_item() {
        let scroll = ScrollLock::new();
        let mut layer = OverlayLayer::default();
        let items = vec![
            GalleryItem::new(
                ImageSource::new("a.jpg", "A"),
                Some(Caption::plain("First")),
            ),
            GalleryItem::new(ImageSource::new("b.jpg", "B"), None),
        ];
        let mut gallery = GalleryController::from_items(items, &mut layer, &scroll);

        gallery.open(0).unwrap();
        assert_eq!(gallery.overlay().image(), &ImageSource::new("a.jpg", "A"));
        assert_eq!(gallery.overlay().caption().text, "First");

        gallery.open(1).unwrap();
        assert_eq!(gallery.overlay().image(), &ImageSource::new("b.jpg", "B"));
        assert!(gallery.overlay().caption().is_empty());
    }

    #[test]
    fn background_click_closes_but_content_click_does_not() {
        let (mut gallery, _) = controller(&["a", "b"]);
        gallery.open(0).unwrap();

        assert!(!gallery.handle(GalleryEvent::OverlayClicked(ClickTarget::Content)));
        assert!(gallery.is_open());

        assert!(gallery.handle(GalleryEvent::OverlayClicked(ClickTarget::Root)));
        assert!(!gallery.is_open());
    }

    #[test]
    fn control_clicks_drive_navigation() {
        let (mut gallery, _) = controller(&["a", "b", "c"]);
        assert!(gallery.handle(GalleryEvent::ItemClicked(1)));
        gallery.handle(GalleryEvent::ControlClicked(Control::Next));
        assert_eq!(gallery.current_index(), 2);
        gallery.handle(GalleryEvent::OverlayClicked(ClickTarget::Control(Control::Prev)));
        assert_eq!(gallery.current_index(), 1);
        gallery.handle(GalleryEvent::ControlClicked(Control::Close));
        assert!(!gallery.is_open());
    }

    #[test]
    fn click_on_unknown_item_is_ignored() {
        let (mut gallery, _) = controller(&["a"]);
        assert!(!gallery.handle(GalleryEvent::ItemClicked(3)));
        assert!(!gallery.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let (mut gallery, scroll) = controller(&["a", "b", "c"]);
        for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight, Key::Other] {
            assert!(!gallery.handle(GalleryEvent::KeyPressed(key)));
        }
        assert_eq!(gallery.current_index(), 0);
        assert!(!gallery.is_open());
        assert!(!scroll.is_locked());
    }

    #[test]
    fn keys_navigate_and_close_while_open() {
        let (mut gallery, _) = controller(&["a", "b", "c"]);
        gallery.open(0).unwrap();

        gallery.handle(GalleryEvent::KeyPressed(Key::ArrowLeft));
        assert_eq!(gallery.current_index(), 2);
        gallery.handle(GalleryEvent::KeyPressed(Key::ArrowRight));
        assert_eq!(gallery.current_index(), 0);
        assert!(!gallery.handle(GalleryEvent::KeyPressed(Key::Other)));
        gallery.handle(GalleryEvent::KeyPressed(Key::Escape));
        assert!(!gallery.is_open());
    }

    #[test]
    fn construction_skips_items_without_images() {
        let root = crate::document::markup::parse(
            r#"<div class="image-gallery">
                <div class="gallery-item"><img src="a.jpg"></div>
                <div class="gallery-item"><span>broken</span></div>
                <div class="gallery-item"><img src="c.jpg"></div>
            </div>"#,
        )
        .unwrap();
        let container = root.find_by_class("image-gallery").unwrap();
        let scroll = ScrollLock::new();
        let mut layer = OverlayLayer::default();

        let gallery = GalleryController::new(container, &Markers::default(), &mut layer, &scroll);
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.skipped(), &[1]);
        assert_eq!(layer.len(), 1);
        assert!(layer.contains(gallery.overlay().id()));
    }
}
