// SPDX-License-Identifier: MPL-2.0
//! Page-level scroll lock.
//!
//! Every open lightbox suppresses scrolling of the page behind it. The lock is
//! shared by all galleries of a page and counts holders, so the page becomes
//! scrollable again only once the last open lightbox has closed.

use std::cell::Cell;
use std::rc::Rc;

/// Shared, reference-counted scroll suppression flag.
///
/// Cloning yields another handle onto the same counter.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one more holder.
    pub fn acquire(&self) {
        self.holders.set(self.holders.get() + 1);
    }

    /// Drops one holder. Releasing an unheld lock is a no-op.
    pub fn release(&self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }

    pub fn holders(&self) -> usize {
        self.holders.get()
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lock_is_unlocked() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn clones_share_the_counter() {
        let lock = ScrollLock::new();
        let other = lock.clone();
        other.acquire();
        assert!(lock.is_locked());
        lock.release();
        assert!(!other.is_locked());
    }

    #[test]
    fn stays_locked_until_last_holder_releases() {
        let lock = ScrollLock::new();
        lock.acquire();
        lock.acquire();
        lock.release();
        assert!(lock.is_locked());
        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn release_without_holders_saturates() {
        let lock = ScrollLock::new();
        lock.release();
        lock.release();
        assert_eq!(lock.holders(), 0);
    }
}
