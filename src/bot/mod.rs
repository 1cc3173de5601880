//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the core lookups into poise: slash commands, selection
//! menu callbacks, autocomplete, and the shared data every command can reach.

/// Slash command implementations (skill, event, tag, general)
pub mod commands;
/// Embed and select-menu builders
pub mod embeds;
/// Discord interaction handlers (autocomplete, menus)
pub mod handlers;

use crate::{
    config::Settings,
    core::{DatasetStore, TagStore},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
#[derive(Debug)]
pub struct BotData {
    /// Reference data, refreshed in the background
    pub store: Arc<DatasetStore>,
    /// Guild tags
    pub tags: Arc<TagStore>,
    /// Loaded settings
    pub settings: Arc<Settings>,
}

impl BotData {
    /// Bundles the shared state handed to every command.
    #[must_use]
    pub const fn new(
        store: Arc<DatasetStore>,
        tags: Arc<TagStore>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            store,
            tags,
            settings,
        }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say("エラーが発生しました").await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        handlers::menu::handle_component(ctx, component, data).await?;
    }
    Ok(())
}

/// Starts the Discord client and blocks until it stops.
///
/// # Errors
/// Returns an error if the client cannot be built or the gateway connection fails.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::skill(),
                commands::event(),
                commands::tag(),
                commands::create_tag(),
                commands::tag_list(),
                commands::ping(),
                commands::help(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
