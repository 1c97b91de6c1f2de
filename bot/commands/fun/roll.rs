use async_trait::async_trait;
use autoload_bot::core::platform::{Message, Reply};
use autoload_bot::{ClassicCommand, CommandInfo, CommandUsage, Context, Error};
use rand::Rng;

const DEFAULT_SIDES: u32 = 6;

pub struct Roll;

fn sides(args: &[String]) -> Option<u32> {
    match args.first() {
        None => Some(DEFAULT_SIDES),
        Some(raw) => raw.parse().ok().filter(|&n| n >= 2),
    }
}

#[async_trait]
impl ClassicCommand for Roll {
    fn info(&self) -> CommandInfo {
        CommandInfo::new("roll", "Roll a die. `{prefix}roll 20` rolls a d20.")
            .alias("dice")
            .usage(CommandUsage::optional("sides").with_description("At least 2, defaults to 6."))
    }

    async fn execute(&self, ctx: &Context<'_>, message: &Message, args: &[String]) -> Result<bool, Error> {
        // Anything unparsable falls through to this command's help page
        let Some(sides) = sides(args) else {
            return Ok(false);
        };

        let rolled = rand::thread_rng().gen_range(1..=sides);
        ctx.platform()
            .send_message(
                message.channel_id,
                Reply::text(format!("🎲 {} rolled **{}** (d{})", message.author.name, rolled, sides)),
            )
            .await?;
        Ok(true)
    }
}
