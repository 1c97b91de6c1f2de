// Built-in modules installed by the defaults installer.

pub mod help;
pub mod interaction_create;
pub mod message_create;
pub mod ready;
pub mod register_commands;

pub use help::HelpCommand;
pub use interaction_create::InteractionCreateListener;
pub use message_create::MessageCreateListener;
pub use ready::ReadyListener;
pub use register_commands::register_slash_commands;
