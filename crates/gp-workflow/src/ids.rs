//! Monotonic id generation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared monotonic counter. Clones hand out ids from the same sequence, so
/// every project of a portfolio draws task ids from one source.
#[derive(Debug, Clone)]
pub struct IdSequence(Arc<AtomicU64>);

impl IdSequence {
    /// A sequence whose first id is `start`.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self(Arc::new(AtomicU64::new(start)))
    }

    /// Take the next id.
    pub fn next_id(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    /// Make sure future ids are strictly greater than `seen`.
    pub fn advance_past(&self, seen: u64) {
        self.0.fetch_max(seen.saturating_add(1), Ordering::Relaxed);
    }

    /// The id the next call to [`Self::next_id`] will return.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
