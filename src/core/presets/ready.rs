// Startup listener: announce readiness and optionally push slash commands.

use super::register_commands::register_slash_commands;
use crate::core::client::Context;
use crate::core::config::SlashRegistration;
use crate::core::modules::{Error, EventName, Listener};
use crate::core::platform::PlatformEvent;
use async_trait::async_trait;

pub struct ReadyListener {
    slash_commands: SlashRegistration,
}

impl ReadyListener {
    pub fn new(slash_commands: SlashRegistration) -> Self {
        Self { slash_commands }
    }
}

#[async_trait]
impl Listener for ReadyListener {
    fn event(&self) -> EventName {
        EventName::Ready
    }

    async fn execute(&self, ctx: &Context<'_>, event: &PlatformEvent) -> Result<(), Error> {
        if let PlatformEvent::Ready(user) = event {
            tracing::info!("{} is now ready!", user.name);
        }

        if self.slash_commands.register {
            register_slash_commands(ctx, self.slash_commands.guild_id).await;
        }
        Ok(())
    }
}
