// Slash command dispatch.

use crate::core::client::Context;
use crate::core::modules::{Error, EventName, Listener};
use crate::core::platform::{
    CommandInvocation, Embed, EmbedColour, Interaction, PlatformEvent, Reply,
};
use async_trait::async_trait;
use chrono::Utc;

pub struct InteractionCreateListener;

fn error_embed(title: &str, description: String) -> Embed {
    Embed::new(EmbedColour::Red)
        .title(title)
        .description(description)
        .timestamp(Utc::now())
}

/// Run the slash command an interaction names.
///
/// Unknown names and failing commands are answered with an ephemeral error
/// embed; command errors stop here.
pub async fn dispatch_interaction(
    ctx: &Context<'_>,
    interaction: &CommandInvocation,
) -> Result<(), Error> {
    let Some(command) = ctx.registry().slash_command(&interaction.command_name) else {
        let embed = error_embed(
            "Unknown Command",
            format!(
                "There were no command matching {} found.",
                interaction.command_name
            ),
        );
        ctx.platform()
            .reply_interaction(interaction, Reply::embed(embed).ephemeral())
            .await?;
        return Ok(());
    };

    if let Err(e) = command.execute(ctx, interaction).await {
        tracing::error!(
            "Slash command '{}' failed: {}",
            interaction.command_name,
            e
        );
        let embed = error_embed(
            "Command Error",
            "Something went wrong while trying to execute this command".to_string(),
        );
        ctx.platform()
            .reply_interaction(interaction, Reply::embed(embed).ephemeral())
            .await?;
    }

    Ok(())
}

#[async_trait]
impl Listener for InteractionCreateListener {
    fn event(&self) -> EventName {
        EventName::InteractionCreate
    }

    async fn execute(&self, ctx: &Context<'_>, event: &PlatformEvent) -> Result<(), Error> {
        match event {
            PlatformEvent::InteractionCreate(Interaction::ChatInput(invocation)) => {
                dispatch_interaction(ctx, invocation).await
            }
            _ => Ok(()),
        }
    }
}
