// Descriptor types for discovered modules.
//
// These are pure data: no Discord types, no behaviour beyond formatting
// helpers the help renderer needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two subtrees scanned under the configured root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Commands,
    Events,
}

impl ModuleKind {
    /// Directory name of this kind under the root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ModuleKind::Commands => "commands",
            ModuleKind::Events => "events",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One argument shown in a command's usage line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandUsage {
    pub argument: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CommandUsage {
    pub fn required(argument: impl Into<String>) -> Self {
        Self {
            argument: argument.into(),
            required: true,
            description: None,
        }
    }

    pub fn optional(argument: impl Into<String>) -> Self {
        Self {
            argument: argument.into(),
            required: false,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `<arg>` for required arguments, `[arg]` for optional ones.
    pub fn display(&self) -> String {
        if self.required {
            format!("<{}>", self.argument)
        } else {
            format!("[{}]", self.argument)
        }
    }
}

/// Metadata block of a classic (prefix) command.
///
/// Usage entries are only rendered by the help command; they are never
/// checked against the arguments a user actually typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub usage: Vec<CommandUsage>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl CommandInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: Vec::new(),
            aliases: Vec::new(),
            permissions: Vec::new(),
            category: None,
        }
    }

    pub fn usage(mut self, usage: CommandUsage) -> Self {
        self.usage.push(usage);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Usage arguments joined for a usage line, e.g. `<user> [reason]`.
    pub fn usage_line(&self) -> String {
        self.usage
            .iter()
            .map(CommandUsage::display)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Application-command definition sent to Discord's bulk registration route.
///
/// `options` follows Discord's application command option schema and is
/// passed through untouched. `custom` is free-form data for the command's own
/// use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashCommandInfo {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub custom: serde_json::Value,
}

impl SlashCommandInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            custom: serde_json::Value::Null,
        }
    }

    pub fn option(mut self, option: serde_json::Value) -> Self {
        self.options.push(option);
        self
    }

    pub fn custom(mut self, custom: serde_json::Value) -> Self {
        self.custom = custom;
        self
    }
}

/// Gateway events a listener can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventName {
    Ready,
    MessageCreate,
    MessageUpdate,
    MessageDelete,
    InteractionCreate,
    GuildCreate,
    GuildMemberAdd,
    GuildMemberRemove,
    #[serde(rename = "messageReactionAdd")]
    ReactionAdd,
    VoiceStateUpdate,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::Ready => "ready",
            EventName::MessageCreate => "messageCreate",
            EventName::MessageUpdate => "messageUpdate",
            EventName::MessageDelete => "messageDelete",
            EventName::InteractionCreate => "interactionCreate",
            EventName::GuildCreate => "guildCreate",
            EventName::GuildMemberAdd => "guildMemberAdd",
            EventName::GuildMemberRemove => "guildMemberRemove",
            EventName::ReactionAdd => "messageReactionAdd",
            EventName::VoiceStateUpdate => "voiceStateUpdate",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_display_brackets_by_requirement() {
        assert_eq!(CommandUsage::required("user").display(), "<user>");
        assert_eq!(CommandUsage::optional("reason").display(), "[reason]");

        let info = CommandInfo::new("ban", "Ban someone")
            .usage(CommandUsage::required("user"))
            .usage(CommandUsage::optional("reason"));
        assert_eq!(info.usage_line(), "<user> [reason]");
    }

    #[test]
    fn event_names_serialise_like_they_display() {
        let json = serde_json::to_string(&EventName::ReactionAdd).unwrap();
        assert_eq!(json, "\"messageReactionAdd\"");
        let json = serde_json::to_string(&EventName::MessageCreate).unwrap();
        assert_eq!(json, "\"messageCreate\"");
    }

    #[test]
    fn slash_info_omits_empty_custom_data() {
        let info = SlashCommandInfo::new("ping", "Pong!");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({"name": "ping", "description": "Pong!"}));

        let info = info.custom(serde_json::json!({"cooldown": 5}));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["custom"]["cooldown"], 5);
    }
}
