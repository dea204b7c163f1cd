// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Thumbnail Grid Defaults
// ==========================================================================

/// Default thumbnail edge length in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 160.0;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 48.0;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 512.0;

/// Default number of thumbnails per grid row.
pub const DEFAULT_COLUMNS: u16 = 4;

/// Minimum thumbnails per row.
pub const MIN_COLUMNS: u16 = 1;

/// Maximum thumbnails per row.
pub const MAX_COLUMNS: u16 = 12;
