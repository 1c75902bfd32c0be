//! Bounded history of recent probe events.

use parking_lot::Mutex;
use ringbuf::{traits::*, HeapRb};

use crate::event::ProbeEvent;

/// Fixed-capacity ring of the most recent events. Once full, each push
/// overwrites the oldest entry.
pub struct History {
    ring: Mutex<HeapRb<ProbeEvent>>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: Mutex::new(HeapRb::new(capacity)),
            capacity,
        }
    }

    pub(crate) fn push(&self, event: ProbeEvent) {
        self.ring.lock().push_overwrite(event);
    }

    /// Oldest first.
    pub fn snapshot(&self) -> Vec<ProbeEvent> {
        self.ring.lock().iter().cloned().collect()
    }

    /// The `count` most recent events, oldest first.
    pub fn latest(&self, count: usize) -> Vec<ProbeEvent> {
        let ring = self.ring.lock();
        let skip = ring.occupied_len().saturating_sub(count);
        ring.iter().skip(skip).cloned().collect()
    }

    pub fn clear(&self) {
        self.ring.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.ring.lock().occupied_len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
