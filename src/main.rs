// This is the entry point of the demo bot.
//
// This file's job is to:
// 1. Load configuration
// 2. Discover and register the modules under the configured root
// 3. Set up the Discord framework with the client as shared data

#[path = "../bot/bot_modules.rs"]
mod bot;

use autoload_bot::discord::{self, Data};
use autoload_bot::infra::config as bot_config;
use autoload_bot::infra::module_fs::FsModuleSource;
use autoload_bot::BotClient;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let token = bot_config::discord_token()?;
    let options = bot_config::load()?;

    // ========================================================================
    // MODULE DISCOVERY
    // ========================================================================
    // Scan <root>/commands and <root>/events, build every exported module and
    // install the default help command and listeners. A missing directory is
    // fatal before we ever touch the gateway.

    let source = FsModuleSource::new(options.root.clone());
    let catalog = bot::catalog();
    let client: Data = Arc::new(BotClient::new(options, &catalog, &source).await?);

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_MESSAGE_REACTIONS
        | serenity::GatewayIntents::GUILD_VOICE_STATES
        | serenity::GatewayIntents::DIRECT_MESSAGES;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            // Everything is routed through the module registry instead of
            // poise's own command handling.
            event_handler: |ctx, event, framework, data| {
                Box::pin(discord::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                tracing::info!("Connected as {}", ready.user.name);
                Ok(client)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}
