// Loads `ClientOptions` for the binary: a JSON file when one exists,
// otherwise a few environment variables with every default switched on.

use crate::core::config::{ClientOptions, ConfigError, Defaults};
use std::path::Path;

pub const CONFIG_PATH_VAR: &str = "BOT_CONFIG";
pub const ROOT_VAR: &str = "BOT_ROOT";
pub const PREFIX_VAR: &str = "BOT_PREFIX";
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";

pub const DEFAULT_CONFIG_PATH: &str = "bot.json";
pub const DEFAULT_ROOT: &str = "bot";

/// Read options from a JSON file.
pub fn load_file(path: impl AsRef<Path>) -> Result<ClientOptions, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    ClientOptions::from_json(&raw)
}

/// Options built from `lookup` alone, used when no config file exists.
pub fn from_lookup<F>(lookup: F) -> ClientOptions
where
    F: Fn(&str) -> Option<String>,
{
    let root = lookup(ROOT_VAR).unwrap_or_else(|| DEFAULT_ROOT.to_string());
    let prefix = lookup(PREFIX_VAR).unwrap_or_default();

    ClientOptions::new(root)
        .prefix(prefix)
        .defaults(Defaults::all_enabled())
}

/// Resolve options the way the binary does.
///
/// `BOT_CONFIG` names the file (default `bot.json`). A missing file falls
/// back to the environment; a file that exists but fails to parse is an
/// error.
pub fn load_with<F>(lookup: F) -> Result<ClientOptions, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let path = lookup(CONFIG_PATH_VAR).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    if Path::new(&path).exists() {
        tracing::info!("Loading bot options from {}", path);
        return load_file(&path);
    }

    tracing::info!("No config file at {}, using environment defaults", path);
    Ok(from_lookup(lookup))
}

pub fn load() -> Result<ClientOptions, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

pub fn discord_token() -> Result<String, ConfigError> {
    std::env::var(TOKEN_VAR).map_err(|_| ConfigError::MissingVar(TOKEN_VAR))
}
