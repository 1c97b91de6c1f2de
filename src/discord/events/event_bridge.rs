// Converts serenity gateway events into platform events and hands them to
// the client.

use super::platform::SerenityPlatform;
use super::{Data, Error};
use crate::core::platform::{
    Author, BotUser, ChannelKind, CommandArgument, CommandInvocation, Interaction, Message,
    PlatformEvent,
};
use poise::serenity_prelude as serenity;
use serde_json::{json, Map, Value};

fn author(user: &serenity::User) -> Author {
    Author {
        id: user.id.get(),
        name: user.name.clone(),
        tag: user.tag(),
        bot: user.bot,
    }
}

pub fn channel_kind(kind: serenity::ChannelType) -> ChannelKind {
    match kind {
        serenity::ChannelType::Text | serenity::ChannelType::News => ChannelKind::Text,
        serenity::ChannelType::Voice => ChannelKind::Voice,
        serenity::ChannelType::Stage => ChannelKind::Stage,
        serenity::ChannelType::NewsThread
        | serenity::ChannelType::PublicThread
        | serenity::ChannelType::PrivateThread => ChannelKind::Thread,
        serenity::ChannelType::Private => ChannelKind::Direct,
        _ => ChannelKind::Other,
    }
}

fn message_channel_kind(ctx: &serenity::Context, message: &serenity::Message) -> ChannelKind {
    let Some(guild_id) = message.guild_id else {
        return ChannelKind::Direct;
    };

    ctx.cache
        .guild(guild_id)
        .and_then(|guild| {
            guild
                .channels
                .get(&message.channel_id)
                .map(|channel| channel.kind)
                .or_else(|| {
                    guild
                        .threads
                        .iter()
                        .find(|thread| thread.id == message.channel_id)
                        .map(|thread| thread.kind)
                })
        })
        .map(channel_kind)
        .unwrap_or(ChannelKind::Other)
}

fn option_value(value: &serenity::CommandDataOptionValue) -> Value {
    use serenity::CommandDataOptionValue as V;

    match value {
        V::String(s) => json!(s),
        V::Integer(i) => json!(i),
        V::Number(n) => json!(n),
        V::Boolean(b) => json!(b),
        V::User(id) => json!(id.get().to_string()),
        V::Channel(id) => json!(id.get().to_string()),
        V::Role(id) => json!(id.get().to_string()),
        V::Mentionable(id) => json!(id.get().to_string()),
        V::Attachment(id) => json!(id.get().to_string()),
        V::SubCommand(options) | V::SubCommandGroup(options) => {
            let nested: Map<String, Value> = options
                .iter()
                .map(|option| (option.name.clone(), option_value(&option.value)))
                .collect();
            Value::Object(nested)
        }
        _ => Value::Null,
    }
}

fn invocation(command: &serenity::CommandInteraction) -> CommandInvocation {
    CommandInvocation {
        id: command.id.get(),
        token: command.token.clone(),
        command_name: command.data.name.clone(),
        arguments: command
            .data
            .options
            .iter()
            .map(|option| CommandArgument {
                name: option.name.clone(),
                value: option_value(&option.value),
            })
            .collect(),
        user: author(&command.user),
        channel_id: command.channel_id.get(),
        guild_id: command.guild_id.map(|id| id.get()),
    }
}

fn interaction(interaction: &serenity::Interaction) -> Interaction {
    match interaction {
        serenity::Interaction::Command(command) => match command.data.kind {
            serenity::CommandType::ChatInput => Interaction::ChatInput(invocation(command)),
            _ => Interaction::ContextMenu {
                command_name: command.data.name.clone(),
            },
        },
        serenity::Interaction::Component(component) => Interaction::Component {
            custom_id: component.data.custom_id.clone(),
        },
        serenity::Interaction::Autocomplete(autocomplete) => Interaction::Autocomplete {
            command_name: autocomplete.data.name.clone(),
        },
        serenity::Interaction::Modal(modal) => Interaction::Modal {
            custom_id: modal.data.custom_id.clone(),
        },
        _ => Interaction::Other,
    }
}

/// Translate a gateway event. Events no listener can subscribe to map to `None`.
pub fn to_platform_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
) -> Option<PlatformEvent> {
    let converted = match event {
        serenity::FullEvent::Ready { data_about_bot } => PlatformEvent::Ready(BotUser {
            id: data_about_bot.user.id.get(),
            name: data_about_bot.user.name.clone(),
            avatar_url: Some(data_about_bot.user.face()),
        }),
        serenity::FullEvent::Message { new_message } => PlatformEvent::MessageCreate(Message {
            id: new_message.id.get(),
            channel_id: new_message.channel_id.get(),
            guild_id: new_message.guild_id.map(|id| id.get()),
            channel_kind: message_channel_kind(ctx, new_message),
            author: author(&new_message.author),
            content: new_message.content.clone(),
        }),
        serenity::FullEvent::MessageUpdate { event, .. } => PlatformEvent::MessageUpdate {
            message_id: event.id.get(),
            channel_id: event.channel_id.get(),
            content: event.content.clone(),
        },
        serenity::FullEvent::MessageDelete {
            channel_id,
            deleted_message_id,
            guild_id,
        } => PlatformEvent::MessageDelete {
            message_id: deleted_message_id.get(),
            channel_id: channel_id.get(),
            guild_id: guild_id.map(|id| id.get()),
        },
        serenity::FullEvent::InteractionCreate { interaction: i } => {
            PlatformEvent::InteractionCreate(interaction(i))
        }
        serenity::FullEvent::GuildCreate { guild, .. } => PlatformEvent::GuildCreate {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
        },
        serenity::FullEvent::GuildMemberAddition { new_member } => PlatformEvent::GuildMemberAdd {
            guild_id: new_member.guild_id.get(),
            user: author(&new_member.user),
        },
        serenity::FullEvent::GuildMemberRemoval { guild_id, user, .. } => {
            PlatformEvent::GuildMemberRemove {
                guild_id: guild_id.get(),
                user: author(user),
            }
        }
        serenity::FullEvent::ReactionAdd { add_reaction } => PlatformEvent::ReactionAdd {
            message_id: add_reaction.message_id.get(),
            channel_id: add_reaction.channel_id.get(),
            user_id: add_reaction.user_id.map(|id| id.get()),
            emoji: add_reaction.emoji.to_string(),
        },
        serenity::FullEvent::VoiceStateUpdate { new, .. } => PlatformEvent::VoiceStateUpdate {
            guild_id: new.guild_id.map(|id| id.get()),
            user_id: new.user_id.get(),
            channel_id: new.channel_id.map(|id| id.get()),
        },
        _ => return None,
    };

    Some(converted)
}

/// poise event handler: every subscribed gateway event goes through the
/// registry's listener for it.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let Some(event) = to_platform_event(ctx, event) {
        let platform = SerenityPlatform::new(ctx);
        data.emit(&platform, &event).await;
    }
    Ok(())
}
