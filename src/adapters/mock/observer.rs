//! Observer that records notifications.

use std::sync::{Arc, Mutex};

use crate::traits::BrowserObserver;

/// One recorded observer callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverEvent {
    ListLoaded,
    MoreLoaded,
    ListUpdated,
    LoadFailed(String),
}

/// [`BrowserObserver`] that keeps every notification in arrival order.
///
/// Clones share the same log, so a test can hand one clone to the browser and
/// inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObserverEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObserverEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<ObserverEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    /// Messages of every `LoadFailed` event.
    pub fn failures(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                ObserverEvent::LoadFailed(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn push(&self, event: ObserverEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl BrowserObserver for RecordingObserver {
    fn on_list_loaded(&self) {
        self.push(ObserverEvent::ListLoaded);
    }

    fn on_more_loaded(&self) {
        self.push(ObserverEvent::MoreLoaded);
    }

    fn on_list_updated(&self) {
        self.push(ObserverEvent::ListUpdated);
    }

    fn on_load_failed(&self, message: &str) {
        self.push(ObserverEvent::LoadFailed(message.to_string()));
    }
}
