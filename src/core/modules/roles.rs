// The three roles a discovered module can play.
//
// Each module declares exactly one role by the `Module` variant its factory
// returns, so the loader dispatches on the tag instead of inspecting types.

use super::module_models::{CommandInfo, EventName, SlashCommandInfo};
use crate::core::client::Context;
use crate::core::platform::{CommandInvocation, Message, PlatformEvent};
use async_trait::async_trait;

/// Error type returned by module handlers.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// A prefix-triggered command parsed out of plain message text.
#[async_trait]
pub trait ClassicCommand: Send + Sync {
    /// Declared metadata. Read once at registration time.
    fn info(&self) -> CommandInfo;

    /// Run the command.
    ///
    /// `Ok(true)` means the command handled the message. Anything else
    /// (`Ok(false)` or an error) makes the dispatcher show help for it.
    async fn execute(
        &self,
        ctx: &Context<'_>,
        message: &Message,
        args: &[String],
    ) -> Result<bool, Error>;
}

/// A Discord application (slash) command.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    fn info(&self) -> SlashCommandInfo;

    async fn execute(&self, ctx: &Context<'_>, interaction: &CommandInvocation)
        -> Result<(), Error>;
}

/// A handler bound to exactly one gateway event.
#[async_trait]
pub trait Listener: Send + Sync {
    fn event(&self) -> EventName;

    async fn execute(&self, ctx: &Context<'_>, event: &PlatformEvent) -> Result<(), Error>;
}

/// A module instance tagged with its role.
pub enum Module {
    Classic(Box<dyn ClassicCommand>),
    Slash(Box<dyn SlashCommand>),
    Listener(Box<dyn Listener>),
}

impl Module {
    pub fn classic(command: impl ClassicCommand + 'static) -> Self {
        Module::Classic(Box::new(command))
    }

    pub fn slash(command: impl SlashCommand + 'static) -> Self {
        Module::Slash(Box::new(command))
    }

    pub fn listener(listener: impl Listener + 'static) -> Self {
        Module::Listener(Box::new(listener))
    }

    /// Short role label used in log lines.
    pub fn role(&self) -> &'static str {
        match self {
            Module::Classic(_) => "classic command",
            Module::Slash(_) => "slash command",
            Module::Listener(_) => "listener",
        }
    }
}
