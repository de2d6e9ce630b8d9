//! Shared fixtures for use case tests.

use crate::adapters::persistence::InMemoryUserRepo;
use crate::domain::{DomainEvent, EventKind};
use crate::ports::EventHandler;
use crate::usecases::EventDispatcher;
use std::sync::{Arc, Mutex};

/// Records every event it receives; optionally appends a tag to a shared log.
#[derive(Default)]
pub struct RecordingHandler {
    events: Mutex<Vec<DomainEvent>>,
    tag: Option<(&'static str, Arc<Mutex<Vec<&'static str>>>)>,
}

impl RecordingHandler {
    pub fn tagged(tag: &'static str, log: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            tag: Some((tag, log)),
        }
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events().iter().map(DomainEvent::kind).collect()
    }
}

impl EventHandler for RecordingHandler {
    fn handle(&self, event: &DomainEvent) {
        self.events.lock().unwrap().push(event.clone());
        if let Some((tag, log)) = &self.tag {
            log.lock().unwrap().push(tag);
        }
    }
}

/// Repository + dispatcher with one recorder subscribed to every event kind.
pub fn fixture() -> (Arc<InMemoryUserRepo>, Arc<EventDispatcher>, Arc<RecordingHandler>) {
    let repo = Arc::new(InMemoryUserRepo::new());
    let recorder = Arc::new(RecordingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    for kind in [
        EventKind::UserCreated,
        EventKind::UserEmailChanged,
        EventKind::UserDeleted,
    ] {
        dispatcher.subscribe(kind, recorder.clone());
    }
    (repo, Arc::new(dispatcher), recorder)
}
