//! Identifier issuance for entity stores.
//!
//! Each store owns one [`IdGenerator`]. Issuance is a single atomic
//! update and does not take the store lock.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel returned by [`IdGenerator::next`] once the id space is used up.
/// Stores never hand it out.
pub const EXHAUSTED: u64 = u64::MAX;

/// Strictly increasing identifier source.
///
/// # Example
///
/// ```
/// use helpdesk_core::IdGenerator;
///
/// let ids = IdGenerator::new();
/// assert_eq!(ids.next(), 1);
/// assert_eq!(ids.next(), 2);
///
/// let seeded = IdGenerator::starting_at(7);
/// assert_eq!(seeded.next(), 7);
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    base: u64,
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first id is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `base`.
    #[must_use]
    pub const fn starting_at(base: u64) -> Self {
        Self {
            base,
            next: AtomicU64::new(base),
        }
    }

    /// Issues the next identifier.
    ///
    /// Once `u64::MAX` is reached the counter stops there and every further
    /// call returns [`EXHAUSTED`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> u64 {
        match self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
        {
            Ok(id) | Err(id) => id,
        }
    }

    /// Returns the identifier the next call to [`next`](Self::next) would issue.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Ensures `id` is never issued by moving the counter past it.
    ///
    /// Used when a caller saves an entity with an explicit identifier.
    pub fn advance_past(&self, id: u64) {
        self.next.fetch_max(id.saturating_add(1), Ordering::SeqCst);
    }

    /// Restores the counter to its base.
    pub fn reset(&self) {
        self.next.store(self.base, Ordering::SeqCst);
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
