// Module discovery and registration.
//
// - `module_models` = descriptors shared by every role
// - `roles` = the three capability traits and the `Module` tag
// - `registry` = in-memory lookup collections
// - `loader` = discovery passes over `<root>/commands` and `<root>/events`
// - `defaults` = built-in fallbacks installed after each pass

pub mod defaults;
pub mod loader;
pub mod module_models;
pub mod registry;
pub mod roles;

pub use defaults::DefaultsInstaller;
pub use loader::{LoaderError, ModuleCatalog, ModuleFile, ModuleLoader, ModuleSource};
pub use module_models::{CommandInfo, CommandUsage, EventName, ModuleKind, SlashCommandInfo};
pub use registry::{ModuleRegistry, RegisteredCommand};
pub use roles::{ClassicCommand, Error, Listener, Module, SlashCommand};
