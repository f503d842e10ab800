//! Stale-response suppression for in-flight AI requests.
//!
//! Each request takes a [`Ticket`]. A response is accepted only if its
//! ticket is still the latest one issued; anything older is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every earlier one.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Loading/error/result state for one kind of request on one project.
#[derive(Debug, Default)]
pub struct AnalysisSlot<T> {
    sequencer: RequestSequencer,
    loading: bool,
    error: Option<String>,
    result: Option<T>,
}

impl<T> AnalysisSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sequencer: RequestSequencer::new(),
            loading: false,
            error: None,
            result: None,
        }
    }

    /// Start a request: clears the previous outcome and returns its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.result = None;
        self.sequencer.issue()
    }

    /// Record a response. Returns `false` and changes nothing if a newer
    /// request has started since `ticket` was issued.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<T, AiError>) -> bool {
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(ticket = ticket.value(), "discarding stale AI response");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(error) => self.error = Some(error.to_string()),
        }
        true
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Drop the stored outcome, e.g. when the input documents are cleared.
    pub fn clear(&mut self) {
        self.error = None;
        self.result = None;
    }
}
