//! End-to-end scenarios through the chat command handler.

use std::sync::Arc;

use game_lobby::adapters::{InMemoryEventBus, InMemoryGameSessionStore};
use game_lobby::application::{Audience, GameAction, InputLimits, Reply, SessionCommandHandler};
use game_lobby::domain::foundation::{CommandMetadata, UserId};
use game_lobby::ports::GameSessionStore;

struct Lobby {
    store: Arc<InMemoryGameSessionStore>,
    bus: Arc<InMemoryEventBus>,
    handler: SessionCommandHandler,
}

impl Lobby {
    fn new() -> Self {
        let store = Arc::new(InMemoryGameSessionStore::new());
        let bus = Arc::new(InMemoryEventBus::default());
        let handler =
            SessionCommandHandler::new(store.clone(), bus.clone(), InputLimits::default(), "!");
        Self {
            store,
            bus,
            handler,
        }
    }

    async fn say(&self, who: &str, action: GameAction) -> Vec<Reply> {
        let metadata = CommandMetadata::new(user(who)).with_source("test");
        self.handler.handle(action, metadata).await
    }

    async fn open(&self, who: &str, name: &str) -> Vec<Reply> {
        self.say(who, GameAction::Open { name: name.into() }).await
    }

    async fn join(&self, who: &str, name: &str) -> Vec<Reply> {
        self.say(who, GameAction::Join { name: name.into() }).await
    }
}

fn user(name: &str) -> UserId {
    UserId::new(name).unwrap()
}

fn is_error(replies: &[Reply]) -> bool {
    replies.len() == 1 && replies[0].audience == Audience::Requester
}

#[tokio::test]
async fn names_are_unique_ignoring_case() {
    let lobby = Lobby::new();
    lobby.open("alice", "Chess").await;

    let replies = lobby.open("bob", "chess").await;

    assert!(is_error(&replies));
    assert!(replies[0].text.contains("already open"));
    assert_eq!(lobby.store.game_count(), 1);
}

#[tokio::test]
async fn host_cannot_open_a_second_game() {
    let lobby = Lobby::new();
    lobby.open("alice", "Chess").await;

    let replies = lobby.open("alice", "Poker").await;

    assert!(is_error(&replies));
    assert!(lobby.store.find("Poker").is_none());
}

#[tokio::test]
async fn joining_a_missing_game_is_not_found() {
    let lobby = Lobby::new();

    let replies = lobby.join("bob", "Poker").await;

    assert_eq!(replies, vec![Reply::requester("Game Poker not found")]);
}

#[tokio::test]
async fn descriptions_are_read_live() {
    let lobby = Lobby::new();
    lobby.open("alice", "Chess").await;
    lobby.join("early", "Chess").await;
    lobby
        .say(
            "alice",
            GameAction::Describe {
                text: "Bring snacks".into(),
            },
        )
        .await;

    let late = lobby.join("late", "Chess").await;

    assert_eq!(
        late[1].text,
        "You joined Chess, here's information by alice: Bring snacks"
    );
    let current = lobby.store.find_by_member(&user("early")).unwrap();
    assert_eq!(current.description(), Some("Bring snacks"));
}

#[tokio::test]
async fn closing_frees_every_former_member() {
    let lobby = Lobby::new();
    lobby.open("alice", "Chess").await;
    lobby.join("bob", "Chess").await;
    lobby.join("carol", "Chess").await;

    let replies = lobby.say("alice", GameAction::Close { name: None }).await;

    assert_eq!(
        replies[1].audience,
        Audience::Players(vec![user("bob"), user("carol")])
    );
    let listing = lobby.say("dan", GameAction::List).await;
    assert!(!listing[0].text.contains("Chess"));

    assert_eq!(lobby.open("bob", "Poker").await[0].audience, Audience::Channel);
    assert_eq!(lobby.join("carol", "Poker").await[0].audience, Audience::Channel);
    assert_eq!(lobby.open("alice", "Chess").await[0].audience, Audience::Channel);
}

#[tokio::test]
async fn members_cannot_act_as_host() {
    let lobby = Lobby::new();
    lobby.open("alice", "Chess").await;
    lobby.join("bob", "Chess").await;

    let describe = lobby
        .say("bob", GameAction::Describe { text: "mine".into() })
        .await;
    let close = lobby
        .say(
            "bob",
            GameAction::Close {
                name: Some("Chess".into()),
            },
        )
        .await;

    assert!(is_error(&describe));
    assert!(is_error(&close));
    assert!(lobby.store.find("Chess").is_some());
    assert!(!lobby.bus.has_event("game.closed.v1"));
}

#[tokio::test]
async fn events_carry_the_acting_user() {
    let lobby = Lobby::new();
    lobby.open("alice", "Chess").await;
    lobby.join("bob", "Chess").await;

    let joined = lobby.bus.events_of_type("game.player_joined.v1");
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].metadata.user_id.as_deref(), Some("bob"));
    assert!(joined[0].metadata.correlation_id.is_some());
    assert_eq!(joined[0].metadata.source.as_deref(), Some("test"));
}
