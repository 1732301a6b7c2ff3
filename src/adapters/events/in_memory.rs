//! In-memory event bus.
//!
//! Keeps a bounded history of published envelopes for inspection and fans
//! each one out to live subscribers over a `tokio::sync::broadcast` channel.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

use crate::domain::foundation::EventEnvelope;
use crate::ports::{EventPublisher, PublishError};

/// Default number of envelopes kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

const CHANNEL_CAPACITY: usize = 128;

/// In-process `EventPublisher`.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new(1000));
/// let mut rx = bus.subscribe();
///
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("game.opened.v1"));
/// ```
pub struct InMemoryEventBus {
    history: Mutex<VecDeque<EventEnvelope>>,
    history_limit: usize,
    sender: broadcast::Sender<EventEnvelope>,
}

impl InMemoryEventBus {
    /// Creates a bus retaining at most `history_limit` envelopes.
    pub fn new(history_limit: usize) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            history: Mutex::new(VecDeque::new()),
            history_limit,
            sender,
        }
    }

    /// Receive every envelope published from now on.
    ///
    /// Slow receivers miss the oldest envelopes once the channel is full.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Returns the retained envelopes, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.history().iter().cloned().collect()
    }

    /// Returns retained envelopes of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.history()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Returns count of retained envelopes.
    pub fn event_count(&self) -> usize {
        self.history().len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.history().iter().any(|e| e.event_type == event_type)
    }

    fn history(&self) -> MutexGuard<'_, VecDeque<EventEnvelope>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError> {
        if self.history_limit > 0 {
            let mut history = self.history();
            while history.len() >= self.history_limit {
                history.pop_front();
            }
            history.push_back(event.clone());
        }

        // No subscribers is fine.
        let _ = self.sender.send(event);
        Ok(())
    }
}
