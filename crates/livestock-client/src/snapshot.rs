//! Last-write-wins snapshot slots.
//!
//! Every fetch takes a ticket before it starts. A response only replaces
//! the slot if no fetch started after it has committed already, so a slow
//! stale response can never overwrite a newer one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Issued by [`SnapshotSlot::begin`]; ordered by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug)]
struct SlotState<T> {
    issued: u64,
    committed: u64,
    records: Arc<Vec<T>>,
}

/// Holds the current snapshot of one collection.
#[derive(Debug)]
pub struct SnapshotSlot<T> {
    state: Mutex<SlotState<T>>,
}

impl<T> Default for SnapshotSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SnapshotSlot<T> {
    /// Empty slot; nothing committed yet.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SlotState {
                issued: 0,
                committed: 0,
                records: Arc::new(Vec::new()),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState<T>> {
        // The state is always left consistent, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a fetch.
    pub fn begin(&self) -> FetchTicket {
        let mut state = self.lock();
        state.issued += 1;
        FetchTicket(state.issued)
    }

    /// Replace the snapshot unless a newer fetch already committed.
    ///
    /// Returns whether the records were stored.
    pub fn commit(&self, ticket: FetchTicket, records: Vec<T>) -> bool {
        let mut state = self.lock();
        if ticket.0 <= state.committed {
            debug!(
                ticket = ticket.0,
                committed = state.committed,
                "discarding stale snapshot"
            );
            return false;
        }
        state.committed = ticket.0;
        state.records = Arc::new(records);
        true
    }

    /// The latest committed snapshot.
    pub fn current(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.lock().records)
    }

    /// Whether any fetch has committed.
    pub fn is_loaded(&self) -> bool {
        self.lock().committed > 0
    }
}
