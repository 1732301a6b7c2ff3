//! Shared fixtures for game handler tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::adapters::storage::InMemoryGameSessionStore;
use crate::domain::foundation::{CommandMetadata, EventEnvelope, UserId};
use crate::ports::{EventPublisher, GameSessionStore, PublishError};

pub struct MockEventPublisher {
    published_events: Mutex<Vec<EventEnvelope>>,
    fail_publish: bool,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
            fail_publish: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
            fail_publish: true,
        }
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError> {
        if self.fail_publish {
            return Err(PublishError::Unavailable(
                "Simulated publish failure".to_string(),
            ));
        }
        self.published_events.lock().unwrap().push(event);
        Ok(())
    }
}

pub fn user(name: &str) -> UserId {
    UserId::new(name).unwrap()
}

pub fn metadata(name: &str) -> CommandMetadata {
    CommandMetadata::test_fixture(name)
}

pub fn store() -> Arc<InMemoryGameSessionStore> {
    Arc::new(InMemoryGameSessionStore::new())
}

/// A store holding "Chess" hosted by `host`.
pub fn store_with_chess() -> Arc<InMemoryGameSessionStore> {
    let store = store();
    store.open(&user("host"), "Chess").unwrap();
    store
}
