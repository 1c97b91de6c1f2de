use crate::core::modules::SlashCommandInfo;
use crate::core::platform::{
    BotUser, ChatPlatform, CommandInvocation, CommandScope, Embed, EmbedColour, PlatformError,
    Reply,
};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

/// `ChatPlatform` backed by a live serenity context.
pub struct SerenityPlatform<'a> {
    ctx: &'a serenity::Context,
}

impl<'a> SerenityPlatform<'a> {
    pub fn new(ctx: &'a serenity::Context) -> Self {
        Self { ctx }
    }
}

fn api_error(err: serenity::Error) -> PlatformError {
    PlatformError::Api(err.to_string())
}

fn colour(colour: EmbedColour) -> serenity::Colour {
    match colour {
        EmbedColour::Red => serenity::Colour::RED,
        EmbedColour::Random => serenity::Colour::new(rand::random::<u32>() & 0xFF_FFFF),
        EmbedColour::Rgb(rgb) => serenity::Colour::new(rgb),
    }
}

pub fn to_create_embed(embed: &Embed) -> serenity::CreateEmbed {
    let mut out = serenity::CreateEmbed::new().colour(colour(embed.colour));

    if let Some(title) = &embed.title {
        out = out.title(title);
    }
    if let Some(description) = &embed.description {
        out = out.description(description);
    }
    for field in &embed.fields {
        out = out.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &embed.footer {
        out = out.footer(serenity::CreateEmbedFooter::new(footer));
    }
    if let Some(url) = &embed.thumbnail {
        out = out.thumbnail(url);
    }
    if let Some(timestamp) = embed
        .timestamp
        .and_then(|ts| serenity::Timestamp::from_unix_timestamp(ts.timestamp()).ok())
    {
        out = out.timestamp(timestamp);
    }

    out
}

fn embeds(reply: &Reply) -> Vec<serenity::CreateEmbed> {
    reply.embeds.iter().map(to_create_embed).collect()
}

#[async_trait]
impl ChatPlatform for SerenityPlatform<'_> {
    fn current_user(&self) -> Option<BotUser> {
        let user = self.ctx.cache.current_user();
        // The cache holds a placeholder user until the gateway sends Ready.
        if user.name.is_empty() {
            return None;
        }

        Some(BotUser {
            id: user.id.get(),
            name: user.name.clone(),
            avatar_url: Some(user.face()),
        })
    }

    async fn send_message(&self, channel_id: u64, reply: Reply) -> Result<(), PlatformError> {
        let mut message = serenity::CreateMessage::new().embeds(embeds(&reply));
        if let Some(content) = reply.content {
            message = message.content(content);
        }

        serenity::ChannelId::new(channel_id)
            .send_message(&self.ctx.http, message)
            .await
            .map_err(api_error)?;
        Ok(())
    }

    async fn reply_interaction(
        &self,
        interaction: &CommandInvocation,
        reply: Reply,
    ) -> Result<(), PlatformError> {
        let mut message = serenity::CreateInteractionResponseMessage::new()
            .ephemeral(reply.ephemeral)
            .embeds(embeds(&reply));
        if let Some(content) = reply.content {
            message = message.content(content);
        }

        self.ctx
            .http
            .create_interaction_response(
                serenity::InteractionId::new(interaction.id),
                &interaction.token,
                &serenity::CreateInteractionResponse::Message(message),
                Vec::new(),
            )
            .await
            .map_err(api_error)
    }

    async fn overwrite_commands(
        &self,
        scope: CommandScope,
        commands: &[SlashCommandInfo],
    ) -> Result<usize, PlatformError> {
        let body = serde_json::to_value(commands)?;
        let created = match scope {
            CommandScope::Global => self.ctx.http.create_global_commands(&body).await,
            CommandScope::Guild(guild_id) => {
                self.ctx
                    .http
                    .create_guild_commands(serenity::GuildId::new(guild_id), &body)
                    .await
            }
        }
        .map_err(api_error)?;

        Ok(created.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_colours_map_directly() {
        assert_eq!(colour(EmbedColour::Red), serenity::Colour::RED);
        assert_eq!(colour(EmbedColour::Rgb(0x00AA55)).0, 0x00AA55);
    }

    #[test]
    fn random_colour_stays_in_rgb_range() {
        for _ in 0..32 {
            assert!(colour(EmbedColour::Random).0 <= 0xFF_FFFF);
        }
    }

    #[test]
    fn slash_infos_serialise_as_the_rest_body() {
        let infos = vec![SlashCommandInfo::new("ping", "Replies with pong")];
        let body = serde_json::to_value(infos.as_slice()).unwrap();
        assert_eq!(body[0]["name"], "ping");
        assert_eq!(body[0]["description"], "Replies with pong");
    }

    #[test]
    fn json_failures_become_serialization_errors() {
        let err: PlatformError = serde_json::from_str::<u8>("not a number")
            .unwrap_err()
            .into();
        assert!(matches!(err, PlatformError::Serialization(_)));
    }
}
