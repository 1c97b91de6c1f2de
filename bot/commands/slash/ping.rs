use async_trait::async_trait;
use autoload_bot::core::platform::{CommandInvocation, Reply};
use autoload_bot::{Context, Error, SlashCommand, SlashCommandInfo};
use serde_json::json;

pub struct SlashPing;

#[async_trait]
impl SlashCommand for SlashPing {
    fn info(&self) -> SlashCommandInfo {
        SlashCommandInfo::new("ping", "Replies with pong").option(json!({
            "type": 5,
            "name": "private",
            "description": "Only you can see the answer",
            "required": false
        }))
    }

    async fn execute(&self, ctx: &Context<'_>, interaction: &CommandInvocation) -> Result<(), Error> {
        let private = interaction
            .argument("private")
            .and_then(|value| value.as_bool())
            .unwrap_or(false);

        let mut reply = Reply::text("Pong!");
        if private {
            reply = reply.ephemeral();
        }
        ctx.platform().reply_interaction(interaction, reply).await?;
        Ok(())
    }
}
