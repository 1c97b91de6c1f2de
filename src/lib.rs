// Module auto-discovery and dispatch for Discord bots.
//
// **Architecture Overview:**
// - `core/` = Registry, loader, defaults and dispatch logic (platform-agnostic)
// - `infra/` = Implementations of core ports (filesystem scanning, config files)
// - `discord/` = Serenity/poise adapters (platform port, gateway event bridge)
//
// A host application lists its modules in a `ModuleCatalog`, points the client
// at a root directory containing `commands/` and `events/`, and lets
// `BotClient::new` discover and register everything before the gateway starts.

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
pub mod core;
#[path = "discord/discord_layer.rs"]
pub mod discord;
#[path = "infra/infra_layer.rs"]
pub mod infra;

pub use crate::core::client::{BotClient, Context};
pub use crate::core::config::{ClientOptions, Defaults};
pub use crate::core::modules::{
    ClassicCommand, CommandInfo, CommandUsage, Error, EventName, Listener, Module,
    ModuleCatalog, ModuleKind, SlashCommand, SlashCommandInfo,
};
pub use crate::core::platform::{ChatPlatform, PlatformEvent};
