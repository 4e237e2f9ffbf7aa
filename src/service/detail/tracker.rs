//! Latest-request tracking for the detail loader.
//!
//! Detail loads for different identifiers can complete out of order. Each load takes a token
//! when it starts and only publishes its result if no newer token has been issued since.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Issues request tokens; clones share the same sequence.
#[derive(Clone, Debug, Default)]
pub struct DetailRequestTracker {
    latest: Arc<AtomicU64>,
}

impl DetailRequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier token.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let tracker = DetailRequestTracker::new();

        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.clone().begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
