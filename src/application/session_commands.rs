//! SessionCommandHandler - Chat-facing entry point for `game` commands.
//!
//! Turns one parsed chat command into store operations via the per-action
//! handlers, and renders the outcome as chat replies. Every failure becomes
//! a private reply to the requester; nothing here is fatal.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, UserId, ValidationError};
use crate::domain::game::{GameError, GameSummary};
use crate::ports::{EventPublisher, GameSessionStore};

use super::handlers::{
    CloseGameCommand, CloseGameHandler, DescribeGameCommand, DescribeGameHandler, JoinGameCommand,
    JoinGameHandler, LeaveGameCommand, LeaveGameHandler, ListGamesHandler, ListGamesQuery,
    OpenGameCommand, OpenGameHandler,
};

/// A parsed `game` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Show every open game.
    List,
    /// Open a game hosted by the caller.
    Open { name: String },
    /// Join by exact name, or by a prefix matching exactly one game.
    Join { name: String },
    /// Leave the named game, or the caller's current one.
    Leave { name: Option<String> },
    /// Describe the caller's current game.
    Describe { text: String },
    /// Close the named game, or the caller's current one.
    Close { name: Option<String> },
}

/// Maximum lengths accepted for user-provided text, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_name_length: usize,
    pub max_description_length: usize,
}

impl InputLimits {
    pub fn new(max_name_length: usize, max_description_length: usize) -> Self {
        Self {
            max_name_length,
            max_description_length,
        }
    }

    fn check(field: &str, value: &str, max: usize) -> Result<String, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let length = trimmed.chars().count();
        if length > max {
            return Err(ValidationError::too_long(field, max, length));
        }
        Ok(trimmed.to_string())
    }

    fn name(&self, value: &str) -> Result<String, ValidationError> {
        Self::check("name", value, self.max_name_length)
    }

    fn description(&self, value: &str) -> Result<String, ValidationError> {
        Self::check("description", value, self.max_description_length)
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self::new(100, 1000)
    }
}

/// Who a reply is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// The channel the command was typed in.
    Channel,
    /// A private message to the user who issued the command.
    Requester,
    /// Private messages to each listed user.
    Players(Vec<UserId>),
}

/// One message to deliver after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub audience: Audience,
    pub text: String,
}

impl Reply {
    pub fn channel(text: impl Into<String>) -> Self {
        Self {
            audience: Audience::Channel,
            text: text.into(),
        }
    }

    pub fn requester(text: impl Into<String>) -> Self {
        Self {
            audience: Audience::Requester,
            text: text.into(),
        }
    }

    pub fn players(users: Vec<UserId>, text: impl Into<String>) -> Self {
        Self {
            audience: Audience::Players(users),
            text: text.into(),
        }
    }
}

/// Dispatches `game` commands against a shared store.
pub struct SessionCommandHandler {
    store: Arc<dyn GameSessionStore>,
    open: OpenGameHandler,
    join: JoinGameHandler,
    leave: LeaveGameHandler,
    describe: DescribeGameHandler,
    close: CloseGameHandler,
    list: ListGamesHandler,
    limits: InputLimits,
    command_prefix: String,
}

impl SessionCommandHandler {
    pub fn new(
        store: Arc<dyn GameSessionStore>,
        event_publisher: Arc<dyn EventPublisher>,
        limits: InputLimits,
        command_prefix: impl Into<String>,
    ) -> Self {
        Self {
            open: OpenGameHandler::new(store.clone(), event_publisher.clone()),
            join: JoinGameHandler::new(store.clone(), event_publisher.clone()),
            leave: LeaveGameHandler::new(store.clone(), event_publisher.clone()),
            describe: DescribeGameHandler::new(store.clone(), event_publisher.clone()),
            close: CloseGameHandler::new(store.clone(), event_publisher),
            list: ListGamesHandler::new(store.clone()),
            store,
            limits,
            command_prefix: command_prefix.into(),
        }
    }

    /// Run `action` on behalf of `metadata.user_id` and return the replies
    /// to deliver, in order.
    pub async fn handle(&self, action: GameAction, metadata: CommandMetadata) -> Vec<Reply> {
        let user = metadata.user_id.clone();
        let outcome = match action {
            GameAction::List => Ok(self.list_games().await),
            GameAction::Open { name } => self.open_game(name, metadata).await,
            GameAction::Join { name } => self.join_game(name, metadata).await,
            GameAction::Leave { name } => self.leave_game(name, metadata).await,
            GameAction::Describe { text } => self.describe_game(text, metadata).await,
            GameAction::Close { name } => self.close_game(name, metadata).await,
        };

        outcome.unwrap_or_else(|err| {
            tracing::debug!(user = %user, code = %err.code(), error = %err, "Game command rejected");
            vec![Reply::requester(self.error_message(&err))]
        })
    }

    async fn list_games(&self) -> Vec<Reply> {
        let games = self.list.handle(ListGamesQuery).await;
        vec![Reply::channel(self.render_listing(&games))]
    }

    async fn open_game(
        &self,
        name: String,
        metadata: CommandMetadata,
    ) -> Result<Vec<Reply>, GameError> {
        let name = self.limits.name(&name)?;
        let cmd = OpenGameCommand {
            user_id: metadata.user_id.clone(),
            name,
        };
        let result = self.open.handle(cmd, metadata).await?;

        let p = &self.command_prefix;
        let game = result.game.name();
        Ok(vec![
            Reply::channel(format!(
                "{} just opened a game of {game}, type `{p}game join {game}` to join!",
                result.event.owner
            )),
            Reply::requester(format!(
                "Your game is now open!\n\n\
                 Why not tell people how to join you, where are you playing etc.?\n\
                 `{p}game description <ANYTHING>`\n\n\
                 Done with your playing session? Remember to clean up after yourself!\n\
                 `{p}game close`"
            )),
        ])
    }

    async fn join_game(
        &self,
        name: String,
        metadata: CommandMetadata,
    ) -> Result<Vec<Reply>, GameError> {
        let query = self.limits.name(&name)?;
        let name = self.resolve_join_target(query)?;
        let cmd = JoinGameCommand {
            user_id: metadata.user_id.clone(),
            name,
        };
        let result = self.join.handle(cmd, metadata).await?;

        let joined = &result.joined;
        let mut replies = vec![Reply::channel(format!(
            "{} joined {}",
            result.event.player, joined.name
        ))];
        if !joined.description.is_empty() {
            replies.push(Reply::requester(format!(
                "You joined {}, here's information by {}: {}",
                joined.name, joined.owner, joined.description
            )));
        }
        Ok(replies)
    }

    async fn leave_game(
        &self,
        name: Option<String>,
        metadata: CommandMetadata,
    ) -> Result<Vec<Reply>, GameError> {
        let name = self.resolve_own_game(&metadata.user_id, name)?;
        let cmd = LeaveGameCommand {
            user_id: metadata.user_id.clone(),
            name,
        };
        let result = self.leave.handle(cmd, metadata).await?;

        Ok(vec![Reply::channel(format!(
            "{} left {}",
            result.event.player, result.left.name
        ))])
    }

    async fn describe_game(
        &self,
        text: String,
        metadata: CommandMetadata,
    ) -> Result<Vec<Reply>, GameError> {
        let description = self.limits.description(&text)?;
        let name = self.resolve_own_game(&metadata.user_id, None)?;
        let cmd = DescribeGameCommand {
            user_id: metadata.user_id.clone(),
            name,
            description,
        };
        self.describe.handle(cmd, metadata).await?;

        Ok(vec![Reply::requester(
            "Description for your community game accepted",
        )])
    }

    async fn close_game(
        &self,
        name: Option<String>,
        metadata: CommandMetadata,
    ) -> Result<Vec<Reply>, GameError> {
        let name = self.resolve_own_game(&metadata.user_id, name)?;
        let cmd = CloseGameCommand {
            user_id: metadata.user_id.clone(),
            name,
        };
        let result = self.close.handle(cmd, metadata).await?;

        let game = &result.closed.name;
        let mut replies = vec![Reply::channel(format!("Session for {game} has been closed!"))];
        if !result.event.players.is_empty() {
            replies.push(Reply::players(
                result.event.players.clone(),
                format!(
                    "{game} was closed by its host, you are free to `{}game open` or join another one",
                    self.command_prefix
                ),
            ));
        }
        Ok(replies)
    }

    /// An explicit name wins; otherwise the game the user is in.
    fn resolve_own_game(&self, user: &UserId, name: Option<String>) -> Result<String, GameError> {
        match name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
            Some(name) => Ok(name),
            None => self
                .store
                .find_by_member(user)
                .map(|game| game.name().to_string())
                .ok_or(GameError::NotPlaying),
        }
    }

    /// Exact match first, then a prefix that names exactly one game.
    ///
    /// When nothing matches the query is passed through so the store
    /// reports `NotFound` for it.
    fn resolve_join_target(&self, query: String) -> Result<String, GameError> {
        if let Some(game) = self.store.find(&query) {
            return Ok(game.name().to_string());
        }

        let mut matches = self.store.find_by_prefix(&query);
        match matches.len() {
            0 => Ok(query),
            1 => Ok(matches.remove(0).name().to_string()),
            _ => Err(GameError::AmbiguousName {
                query,
                candidates: matches.iter().map(|g| g.name().to_string()).collect(),
            }),
        }
    }

    fn render_listing(&self, games: &[GameSummary]) -> String {
        let p = &self.command_prefix;
        if games.is_empty() {
            return format!("Nobody is playing anything, why not `{p}game open` a new one?");
        }

        let mut reply = String::from("People are playing:\n");
        for game in games {
            reply.push_str(&format!(
                "\n**{}** ({} player(s), managed by {})",
                game.name, game.player_count, game.owner
            ));
        }
        reply.push_str(&format!("\n\nJoin them by typing {p}game join **Game**"));
        reply
    }

    fn error_message(&self, err: &GameError) -> String {
        let p = &self.command_prefix;
        match err {
            GameError::AlreadyPlaying {
                hosting: true,
                game,
            } => format!("You are already hosting {game}, close it to start another!"),
            GameError::AlreadyPlaying {
                hosting: false,
                game,
            } => format!("You are already playing {game}, leave it first by `{p}game leave`"),
            GameError::NameInUse { name } => {
                format!("A game called {name} is already open, join it by `{p}game join {name}`")
            }
            GameError::NotFound { name } => format!("Game {name} not found"),
            GameError::NotAMember { name } => format!(
                "You can't leave {name}: only players who joined it can leave, and hosts end their game by `{p}game close`"
            ),
            GameError::NotOwner { name } => {
                format!("Only the host of {name} can do that")
            }
            GameError::InvalidInput { field, .. } => {
                let max = match field.as_str() {
                    "description" => self.limits.max_description_length,
                    _ => self.limits.max_name_length,
                };
                format!("The {field} must be between 1 and {max} characters")
            }
            GameError::NotPlaying => {
                format!("You aren't in a game! See what's open by `{p}game`")
            }
            GameError::AmbiguousName { query, candidates } => format!(
                "'{query}' could be any of {}, type more of the name",
                candidates.join(", ")
            ),
        }
    }
}
