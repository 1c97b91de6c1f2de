// Platform-neutral views of the Discord objects the framework handles.
//
// The Discord layer converts serenity types into these; core code and tests
// never touch serenity directly.

use crate::core::modules::EventName;
use chrono::{DateTime, Utc};

/// The bot's own account.
#[derive(Debug, Clone, PartialEq)]
pub struct BotUser {
    pub id: u64,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Author of a message or interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: u64,
    pub name: String,
    /// `name#discriminator`, or just the name for migrated accounts.
    pub tag: String,
    pub bot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
    Stage,
    Thread,
    Direct,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub channel_kind: ChannelKind,
    pub author: Author,
    pub content: String,
}

/// One option a user filled in on a slash command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandArgument {
    pub name: String,
    pub value: serde_json::Value,
}

/// A chat-input (slash) command interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    pub id: u64,
    pub token: String,
    pub command_name: String,
    pub arguments: Vec<CommandArgument>,
    pub user: Author,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
}

impl CommandInvocation {
    pub fn argument(&self, name: &str) -> Option<&serde_json::Value> {
        self.arguments
            .iter()
            .find(|argument| argument.name == name)
            .map(|argument| &argument.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    ChatInput(CommandInvocation),
    ContextMenu { command_name: String },
    Component { custom_id: String },
    Autocomplete { command_name: String },
    Modal { custom_id: String },
    Other,
}

/// A gateway event, already converted from serenity.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    Ready(BotUser),
    MessageCreate(Message),
    MessageUpdate {
        message_id: u64,
        channel_id: u64,
        content: Option<String>,
    },
    MessageDelete {
        message_id: u64,
        channel_id: u64,
        guild_id: Option<u64>,
    },
    InteractionCreate(Interaction),
    GuildCreate {
        guild_id: u64,
        name: String,
    },
    GuildMemberAdd {
        guild_id: u64,
        user: Author,
    },
    GuildMemberRemove {
        guild_id: u64,
        user: Author,
    },
    ReactionAdd {
        message_id: u64,
        channel_id: u64,
        user_id: Option<u64>,
        emoji: String,
    },
    VoiceStateUpdate {
        guild_id: Option<u64>,
        user_id: u64,
        channel_id: Option<u64>,
    },
}

impl PlatformEvent {
    pub fn name(&self) -> EventName {
        match self {
            PlatformEvent::Ready(_) => EventName::Ready,
            PlatformEvent::MessageCreate(_) => EventName::MessageCreate,
            PlatformEvent::MessageUpdate { .. } => EventName::MessageUpdate,
            PlatformEvent::MessageDelete { .. } => EventName::MessageDelete,
            PlatformEvent::InteractionCreate(_) => EventName::InteractionCreate,
            PlatformEvent::GuildCreate { .. } => EventName::GuildCreate,
            PlatformEvent::GuildMemberAdd { .. } => EventName::GuildMemberAdd,
            PlatformEvent::GuildMemberRemove { .. } => EventName::GuildMemberRemove,
            PlatformEvent::ReactionAdd { .. } => EventName::ReactionAdd,
            PlatformEvent::VoiceStateUpdate { .. } => EventName::VoiceStateUpdate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedColour {
    Red,
    /// Picked at send time.
    Random,
    Rgb(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A rich embed, built by core code and rendered by the Discord layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub colour: EmbedColour,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub thumbnail: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Embed {
    pub fn new(colour: EmbedColour) -> Self {
        Self {
            title: None,
            description: None,
            colour,
            fields: Vec::new(),
            footer: None,
            thumbnail: None,
            timestamp: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Outgoing message body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn embed(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
            ..Self::default()
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}

/// Where slash commands get registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    Global,
    Guild(u64),
}
