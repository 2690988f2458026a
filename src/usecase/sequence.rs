use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter for one logical operation. In-flight
/// requests cannot be aborted, so "latest wins" is enforced after the fact:
/// a ticket taken before the request identifies whether a newer request
/// started while it was running, and stale results are dropped instead of
/// overwriting fresher state.
pub struct RequestSequence {
    latest: AtomicU64,
}

/// Proof of when a request was issued relative to its siblings.
pub struct RequestTicket {
    seq: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        RequestSequence {
            latest: AtomicU64::new(0),
        }
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket {
            seq: self.latest.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// True while no newer ticket has been issued.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }
}

impl Default for RequestSequence {
    fn default() -> Self {
        RequestSequence::new()
    }
}
