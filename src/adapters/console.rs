//! Console chat adapter.
//!
//! Stands in for a chat transport: each stdin line is one chat message of
//! the form `<user> <prefix>game [action] [payload]`, and replies are
//! written as `[#channel] text` or `[@user] text`.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use uuid::Uuid;

use crate::application::{Audience, GameAction, Reply, SessionCommandHandler};
use crate::domain::foundation::{CommandMetadata, UserId};

/// Source tag attached to commands read from the console.
pub const CONSOLE_SOURCE: &str = "console";

/// A chat line that addressed the `game` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleCommand {
    pub user: UserId,
    pub action: GameAction,
}

/// Parse one chat line. Returns `None` for anything that is not a `game`
/// command with a known action.
pub fn parse_line(prefix: &str, line: &str) -> Option<ConsoleCommand> {
    let (user, message) = line.trim().split_once(char::is_whitespace)?;
    let user = UserId::new(user).ok()?;

    let rest = message.trim_start().strip_prefix(prefix)?;
    let rest = rest.strip_prefix("game")?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.trim();
    let (verb, payload) = match rest.split_once(char::is_whitespace) {
        Some((verb, payload)) => (verb, payload.trim()),
        None => (rest, ""),
    };
    let optional = || Some(payload.to_string()).filter(|p| !p.is_empty());

    let action = match verb.to_lowercase().as_str() {
        "" => GameAction::List,
        "open" => GameAction::Open {
            name: payload.to_string(),
        },
        "join" => GameAction::Join {
            name: payload.to_string(),
        },
        "leave" => GameAction::Leave { name: optional() },
        "description" => GameAction::Describe {
            text: payload.to_string(),
        },
        "close" => GameAction::Close { name: optional() },
        _ => return None,
    };

    Some(ConsoleCommand { user, action })
}

/// Render a reply as console lines, one per recipient.
pub fn format_reply(reply: &Reply, requester: &UserId) -> Vec<String> {
    match &reply.audience {
        Audience::Channel => vec![format!("[#channel] {}", reply.text)],
        Audience::Requester => vec![format!("[@{}] {}", requester, reply.text)],
        Audience::Players(players) => players
            .iter()
            .map(|player| format!("[@{}] {}", player, reply.text))
            .collect(),
    }
}

/// Read chat lines until EOF or `quit`, dispatching every game command.
pub async fn run<R, W>(
    handler: &SessionCommandHandler,
    prefix: &str,
    reader: R,
    writer: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") {
            tracing::info!("Quit requested");
            break;
        }

        let Some(command) = parse_line(prefix, trimmed) else {
            tracing::debug!(line = trimmed, "Ignoring non-game line");
            continue;
        };

        let correlation_id = Uuid::new_v4().to_string();
        tracing::debug!(
            user = %command.user,
            correlation_id = %correlation_id,
            action = ?command.action,
            "Dispatching game command"
        );
        let metadata = CommandMetadata::new(command.user.clone())
            .with_correlation_id(correlation_id)
            .with_source(CONSOLE_SOURCE);

        for reply in handler.handle(command.action, metadata).await {
            for out in format_reply(&reply, &command.user) {
                writer.write_all(out.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
        }
        writer.flush().await?;
    }
    Ok(())
}
