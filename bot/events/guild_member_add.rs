use async_trait::async_trait;
use autoload_bot::{Context, Error, EventName, Listener, PlatformEvent};

pub struct GuildMemberAdd;

#[async_trait]
impl Listener for GuildMemberAdd {
    fn event(&self) -> EventName {
        EventName::GuildMemberAdd
    }

    async fn execute(&self, _ctx: &Context<'_>, event: &PlatformEvent) -> Result<(), Error> {
        if let PlatformEvent::GuildMemberAdd { guild_id, user } = event {
            tracing::info!(guild_id, user_id = user.id, "{} joined", user.tag);
        }
        Ok(())
    }
}
