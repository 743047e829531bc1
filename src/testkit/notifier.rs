//! Notifier that records events for assertions.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::port::{Event, Notifier};

/// Cloneable recorder; clones share one event log.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event received so far, in order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.events.lock().push(event);
    }
}
