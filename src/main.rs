use std::error::Error;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use game_lobby::adapters::{console, InMemoryEventBus, InMemoryGameSessionStore};
use game_lobby::application::{InputLimits, SessionCommandHandler};
use game_lobby::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = Arc::new(InMemoryGameSessionStore::new());
    let bus = Arc::new(InMemoryEventBus::new(config.registry.event_history_limit));
    spawn_event_logger(&bus);

    let limits = InputLimits::new(
        config.registry.max_name_length,
        config.registry.max_description_length,
    );
    let prefix = config.bot.command_prefix.clone();
    let handler = SessionCommandHandler::new(store, bus.clone(), limits, prefix.clone());

    tracing::info!(
        prefix = %prefix,
        environment = ?config.bot.environment,
        "Game lobby ready, reading commands from stdin"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    console::run(&handler, &prefix, stdin, &mut stdout).await?;

    tracing::info!(events = bus.event_count(), "Game lobby shutting down");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.bot.log_level));

    let (json, plain) = if config.is_production() {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .init();
}

/// Log every published event at debug level.
fn spawn_event_logger(bus: &InMemoryEventBus) {
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => tracing::debug!(
                    event_type = %event.event_type,
                    aggregate_id = %event.aggregate_id,
                    correlation_id = ?event.metadata.correlation_id,
                    source = ?event.metadata.source,
                    "Event published"
                ),
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event logger lagged behind")
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}
