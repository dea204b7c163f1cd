// SPDX-License-Identifier: MPL-2.0
//! Localization of every user-facing string.
//!
//! Translations live in embedded Fluent (`.ftl`) files, one per locale. The
//! active locale is picked from the command line, then the settings file, then
//! the operating system, and finally falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
