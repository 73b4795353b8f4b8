//! StoryBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::{ShutdownToken, UpdateHandler};
use tracing::{info, warn, error};

use StoryBuddy::{
    config::Settings,
    utils::logging,
    services::ServiceFactory,
    handlers::{handle_command, handle_message, Command},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the token may come from the real environment
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate().context("Invalid configuration")?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging).context("Failed to initialize logging")?;

    info!("Starting {}...", StoryBuddy::info());
    for warning in settings.warnings() {
        warn!("{}", warning);
    }

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(&settings).context("Failed to initialize services")?;
    let services_arc = Arc::new(services.clone());

    info!("Setting up bot handlers...");

    let handler = create_handler();

    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    spawn_sigterm_handler(dispatcher.shutdown_token());

    info!("StoryBuddy bot is ready! Starting bot with polling mode...");

    dispatcher.dispatch().await;

    let health = services.health_check();
    info!(active_sessions = health.active_sessions, "StoryBuddy bot has been shut down.");

    Ok(())
}

/// Stop the dispatcher gracefully on SIGTERM (SIGINT is covered by the ctrl-c handler)
fn spawn_sigterm_handler(token: ShutdownToken) {
    #[cfg(unix)]
    tokio::spawn(async move {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                return;
            }
        };

        sigterm.recv().await;
        info!("SIGTERM received, shutting down");
        match token.shutdown() {
            Ok(shutdown) => shutdown.await,
            Err(e) => warn!(error = %e, "Dispatcher was not running"),
        }
    });

    #[cfg(not(unix))]
    drop(token);
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message()
        .branch(
            // Handle commands
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_commands)
        )
        .branch(
            // Handle dialogue input
            dptree::endpoint(handle_messages)
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handle_command(bot, msg, cmd, services).await {
        error!(error = %e, recoverable = e.is_recoverable(), "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handle_message(bot, msg, services).await {
        error!(error = %e, recoverable = e.is_recoverable(), "Error handling message");
        return Err(e.into());
    }

    Ok(())
}
