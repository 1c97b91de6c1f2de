// Client configuration.
//
// Deserialises from the camelCase JSON shape hosts write by hand:
// { "root": "bot", "prefix": ">", "defaults": { "helpCommand": {...}, "events": {...} } }

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PREFIX: &str = ">";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    /// Directory containing `commands/` and `events/`.
    pub root: PathBuf,
    #[serde(default = "default_prefix", deserialize_with = "prefix_or_default")]
    pub prefix: String,
    #[serde(default)]
    pub defaults: Option<Defaults>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// A blank prefix would match every message, so it means "use the default".
fn normalise_prefix(prefix: impl Into<String>) -> String {
    let prefix = prefix.into();
    if prefix.trim().is_empty() {
        default_prefix()
    } else {
        prefix
    }
}

fn prefix_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalise_prefix(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

impl ClientOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prefix: default_prefix(),
            defaults: None,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = normalise_prefix(prefix);
        self
    }

    /// The prefix dispatch actually matches against, never blank.
    pub fn effective_prefix(&self) -> &str {
        if self.prefix.trim().is_empty() {
            DEFAULT_PREFIX
        } else {
            &self.prefix
        }
    }

    pub fn defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Which built-in fallbacks the client may install.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default)]
    pub help_command: Option<HelpCommandDefaults>,
    #[serde(default)]
    pub events: Option<EventDefaults>,
}

impl Defaults {
    /// Every fallback on, slash commands registered globally.
    pub fn all_enabled() -> Self {
        Self {
            help_command: Some(HelpCommandDefaults {
                enabled: true,
                description: None,
            }),
            events: Some(EventDefaults {
                ready: Some(ReadyDefaults {
                    enabled: true,
                    slash_commands: SlashRegistration {
                        register: true,
                        guild_id: None,
                    },
                }),
                message_create: Some(Toggle { enabled: true }),
                interaction_create: Some(Toggle { enabled: true }),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpCommandDefaults {
    pub enabled: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefaults {
    #[serde(default)]
    pub ready: Option<ReadyDefaults>,
    #[serde(default)]
    pub message_create: Option<Toggle>,
    #[serde(default)]
    pub interaction_create: Option<Toggle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyDefaults {
    pub enabled: bool,
    pub slash_commands: SlashRegistration,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlashRegistration {
    pub register: bool,
    /// Register in this guild only. Global registration when unset.
    #[serde(default, deserialize_with = "snowflake")]
    pub guild_id: Option<u64>,
}

/// Discord ids show up both as strings and as plain numbers in config files.
fn snowflake<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(id)) => Ok(Some(id)),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid guild id '{}'", text))),
    }
}
