//! In-Memory Game Session Store
//!
//! The process-wide registry of open games. Constructed once at startup and
//! shared as `Arc<dyn GameSessionStore>`; tests build a fresh one each.
//!
//! # Locking
//!
//! A single `Mutex` guards the whole registry. Every operation is pure
//! in-memory work, so hold times are short and the lock is never held
//! across an `.await`.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::UserId;
use crate::domain::game::{
    fold_name, ClosedGame, DescribedGame, GameError, GameSession, GameSummary, JoinedGame,
    LeftGame,
};
use crate::ports::GameSessionStore;

/// Registry state guarded by the store's lock.
#[derive(Debug, Default)]
struct Registry {
    /// Folded name → game.
    games: HashMap<String, GameSession>,

    /// Player → folded name of the game they host or play in.
    players: HashMap<UserId, String>,
}

impl Registry {
    fn current_game(&self, user: &UserId) -> Option<&GameSession> {
        self.players.get(user).and_then(|key| self.games.get(key))
    }

    fn ensure_free(&self, user: &UserId) -> Result<(), GameError> {
        match self.current_game(user) {
            Some(game) => Err(GameError::already_playing(
                game.name(),
                game.is_owner(user),
            )),
            None => Ok(()),
        }
    }

    fn existing(&self, name: &str) -> Result<&GameSession, GameError> {
        self.games
            .get(&fold_name(name))
            .ok_or_else(|| GameError::not_found(name.trim()))
    }

    fn existing_mut(&mut self, name: &str) -> Result<&mut GameSession, GameError> {
        self.games
            .get_mut(&fold_name(name))
            .ok_or_else(|| GameError::not_found(name.trim()))
    }

    /// Games ordered oldest first, ties broken by name.
    fn ordered(&self) -> Vec<&GameSession> {
        let mut games: Vec<&GameSession> = self.games.values().collect();
        games.sort_by(|a, b| {
            a.opened_at()
                .cmp(b.opened_at())
                .then_with(|| a.key().cmp(&b.key()))
        });
        games
    }

    /// Membership invariants. A failure here is a bug in this module.
    fn assert_consistent(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut seen: HashSet<&UserId> = HashSet::new();
        for (key, game) in &self.games {
            debug_assert_eq!(key, &game.key(), "game stored under a stale key");
            debug_assert!(!game.members().is_empty(), "game {} has no members", key);
            debug_assert!(
                game.is_member(game.owner()),
                "host of {} is not a member",
                key
            );
            for member in game.members() {
                debug_assert!(seen.insert(member), "{} is in more than one game", member);
                debug_assert_eq!(
                    self.players.get(member),
                    Some(key),
                    "player index out of sync for {}",
                    member
                );
            }
        }
        debug_assert_eq!(
            seen.len(),
            self.players.len(),
            "player index lists users in no game"
        );
    }
}

/// In-memory registry of open games.
#[derive(Debug, Default)]
pub struct InMemoryGameSessionStore {
    registry: Mutex<Registry>,
}

impl InMemoryGameSessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open games.
    pub fn game_count(&self) -> usize {
        self.lock().games.len()
    }

    /// Every mutation restores the invariants before it can panic, so a
    /// poisoned registry is still consistent.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GameSessionStore for InMemoryGameSessionStore {
    fn open(&self, owner: &UserId, name: &str) -> Result<GameSession, GameError> {
        let mut registry = self.lock();
        registry.ensure_free(owner)?;

        let game = GameSession::open(owner.clone(), name)?;
        let key = game.key();
        if let Some(existing) = registry.games.get(&key) {
            return Err(GameError::name_in_use(existing.name()));
        }

        registry.players.insert(owner.clone(), key.clone());
        registry.games.insert(key, game.clone());
        registry.assert_consistent();
        Ok(game)
    }

    fn join(&self, user: &UserId, name: &str) -> Result<JoinedGame, GameError> {
        let mut registry = self.lock();
        let key = registry.existing(name)?.key();
        registry.ensure_free(user)?;

        let game = registry.existing_mut(name)?;
        game.add_player(user.clone())?;
        let joined = JoinedGame {
            name: game.name().to_string(),
            owner: game.owner().clone(),
            description: game.description().unwrap_or_default().to_string(),
        };

        registry.players.insert(user.clone(), key);
        registry.assert_consistent();
        Ok(joined)
    }

    fn leave(&self, user: &UserId, name: &str) -> Result<LeftGame, GameError> {
        let mut registry = self.lock();
        let game = registry.existing_mut(name)?;
        game.remove_player(user)?;
        let left = LeftGame {
            name: game.name().to_string(),
            owner: game.owner().clone(),
            remaining: game.player_count(),
        };

        registry.players.remove(user);
        registry.assert_consistent();
        Ok(left)
    }

    fn set_description(
        &self,
        owner: &UserId,
        name: &str,
        text: &str,
    ) -> Result<DescribedGame, GameError> {
        let mut registry = self.lock();
        let game = registry.existing_mut(name)?;
        let previous = game.update_description(owner, text)?;
        Ok(DescribedGame {
            game: game.clone(),
            previous,
        })
    }

    fn close(&self, owner: &UserId, name: &str) -> Result<ClosedGame, GameError> {
        let mut registry = self.lock();
        let game = registry.existing(name)?;
        game.authorize(owner)?;
        let key = game.key();

        let closed = match registry.games.remove(&key) {
            Some(game) => game.into_closed(),
            None => return Err(GameError::not_found(name.trim())),
        };
        for member in &closed.members {
            registry.players.remove(member);
        }
        registry.assert_consistent();
        Ok(closed)
    }

    fn list_all(&self) -> Vec<GameSummary> {
        let registry = self.lock();
        registry
            .ordered()
            .into_iter()
            .map(GameSession::summary)
            .collect()
    }

    fn find_by_prefix(&self, prefix: &str) -> Vec<GameSession> {
        let prefix = fold_name(prefix);
        let registry = self.lock();
        registry
            .ordered()
            .into_iter()
            .filter(|game| game.key().starts_with(&prefix))
            .cloned()
            .collect()
    }

    fn find(&self, name: &str) -> Option<GameSession> {
        self.lock().games.get(&fold_name(name)).cloned()
    }

    fn find_by_member(&self, user: &UserId) -> Option<GameSession> {
        self.lock().current_game(user).cloned()
    }
}
