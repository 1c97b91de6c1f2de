use async_trait::async_trait;
use autoload_bot::core::platform::{Message, Reply};
use autoload_bot::{ClassicCommand, CommandInfo, Context, Error};

pub struct Ping;

#[async_trait]
impl ClassicCommand for Ping {
    fn info(&self) -> CommandInfo {
        CommandInfo::new("ping", "Check that {prefix}ping gets an answer.").alias("p")
    }

    async fn execute(&self, ctx: &Context<'_>, message: &Message, _args: &[String]) -> Result<bool, Error> {
        ctx.platform()
            .send_message(message.channel_id, Reply::text("Pong!"))
            .await?;
        Ok(true)
    }
}
