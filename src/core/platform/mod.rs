// Platform port.
//
// The framework only needs a handful of things from Discord: who the bot is,
// sending a message, answering an interaction, and overwriting the slash
// command list. Everything else stays inside serenity.

pub mod platform_models;

pub use platform_models::{
    Author, BotUser, ChannelKind, CommandArgument, CommandInvocation, CommandScope, Embed,
    EmbedColour, EmbedField, Interaction, Message, PlatformEvent, Reply,
};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Discord API error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// The bot's own user, once the gateway has identified.
    fn current_user(&self) -> Option<BotUser>;

    /// Post a message in a channel. `reply.ephemeral` is ignored here.
    async fn send_message(&self, channel_id: u64, reply: Reply) -> Result<(), PlatformError>;

    /// Respond to a slash command interaction.
    async fn reply_interaction(
        &self,
        interaction: &CommandInvocation,
        reply: Reply,
    ) -> Result<(), PlatformError>;

    /// Replace every application command in `scope` with `commands`.
    /// Returns how many commands Discord reports back.
    async fn overwrite_commands(
        &self,
        scope: CommandScope,
        commands: &[crate::core::modules::SlashCommandInfo],
    ) -> Result<usize, PlatformError>;
}
