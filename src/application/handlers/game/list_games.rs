//! ListGamesHandler - Query handler for the open game listing.

use std::sync::Arc;

use crate::domain::game::GameSummary;
use crate::ports::GameSessionStore;

/// Query for all open games.
#[derive(Debug, Clone, Default)]
pub struct ListGamesQuery;

/// Handler for listing open games, oldest first.
pub struct ListGamesHandler {
    store: Arc<dyn GameSessionStore>,
}

impl ListGamesHandler {
    pub fn new(store: Arc<dyn GameSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListGamesQuery) -> Vec<GameSummary> {
        self.store.list_all()
    }
}
