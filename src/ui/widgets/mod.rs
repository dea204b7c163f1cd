// SPDX-License-Identifier: MPL-2.0
pub mod wheel_blocking_scrollable;

pub use wheel_blocking_scrollable::{scroll_lockable, WheelBlockingScrollable};
