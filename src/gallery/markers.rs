// SPDX-License-Identifier: MPL-2.0
//! Class markers binding page markup to gallery behavior.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTAINER: &str = "image-gallery";
pub const DEFAULT_ITEM: &str = "gallery-item";
pub const DEFAULT_CAPTION: &str = "gallery-caption";

/// Markers of the generated lightbox.
pub mod lightbox {
    pub const ROOT: &str = "lightbox";
    pub const CLOSE: &str = "lightbox-close";
    pub const PREV: &str = "lightbox-prev";
    pub const NEXT: &str = "lightbox-next";
    pub const CONTENT: &str = "lightbox-content";
    pub const CAPTION: &str = "lightbox-caption";
    pub const ACTIVE: &str = "active";
}

/// Markers recognized in page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Marks an element holding gallery items.
    pub container: String,
    /// Marks one gallery item.
    pub item: String,
    /// Marks the optional caption inside an item.
    pub caption: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            item: DEFAULT_ITEM.to_string(),
            caption: DEFAULT_CAPTION.to_string(),
        }
    }
}
