// Built-in help command.
//
// Reads only from the registry. No arguments renders the full listing; one
// argument renders a single command (by name or alias) and falls back to the
// listing when nothing matches.

use crate::core::client::Context;
use crate::core::modules::{ClassicCommand, CommandInfo, CommandUsage, Error, ModuleRegistry};
use crate::core::platform::{ChannelKind, Embed, EmbedColour, Message, Reply};
use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

pub const HELP_COMMAND_NAME: &str = "help";

const DEFAULT_DESCRIPTION: &str =
    "View a list of commands and get a detailed description of each of them.";
const UNCATEGORISED: &str = "Uncategorised";

static PREFIX_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{prefix\}").expect("placeholder pattern is valid"));

pub struct HelpCommand {
    info: CommandInfo,
}

impl HelpCommand {
    pub fn new(description: Option<String>) -> Self {
        let info = CommandInfo::new(
            HELP_COMMAND_NAME,
            description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        )
        .category("Misc")
        .usage(CommandUsage::optional("command").with_description("Get detailed view of the command."));

        Self { info }
    }

    /// Build the help embed without any per-request decoration.
    pub fn render(&self, registry: &ModuleRegistry, prefix: &str, args: &[String]) -> Embed {
        let found = args
            .first()
            .and_then(|query| registry.resolve_classic_command(query));

        match found {
            Some(command) => render_command(&command.info, prefix),
            None => self.render_listing(registry, prefix),
        }
    }

    fn render_listing(&self, registry: &ModuleRegistry, prefix: &str) -> Embed {
        let description = [
            format!("**Prefix:** `{}`", prefix),
            "<> : Required | [] : Optional".to_string(),
            format!(
                "Use `{}{} {}` to view command help with more detail.",
                prefix,
                self.info.name,
                self.info.usage_line()
            ),
        ]
        .join("\n");

        let mut embed = Embed::new(EmbedColour::Random)
            .title("COMMAND LIST")
            .description(description);

        // Categories in the order their first command was registered.
        let mut categories: Vec<(Option<&str>, Vec<&str>)> = Vec::new();
        for command in registry.classic_commands() {
            let category = command.info.category.as_deref();
            match categories.iter_mut().find(|(name, _)| *name == category) {
                Some((_, names)) => names.push(command.info.name.as_str()),
                None => categories.push((category, vec![command.info.name.as_str()])),
            }
        }

        let (uncategorised, named): (Vec<_>, Vec<_>) =
            categories.into_iter().partition(|(name, _)| name.is_none());

        for (category, names) in named.into_iter().chain(uncategorised) {
            let value = names
                .iter()
                .map(|name| format!("`{}`", name))
                .collect::<Vec<_>>()
                .join(", ");
            embed = embed.field(category.unwrap_or(UNCATEGORISED), value, false);
        }

        embed
    }
}

fn render_command(info: &CommandInfo, prefix: &str) -> Embed {
    let full_command = format!("{}{} {}", prefix, info.name, info.usage_line());
    let aliases = code_list(&info.aliases);
    let permissions = code_list(&info.permissions);

    let description = [
        PREFIX_PLACEHOLDER
            .replace_all(&info.description, NoExpand(prefix))
            .into_owned(),
        format!("Full command: `{}`", full_command.trim_end()),
        format!("Aliases: {}", aliases),
        format!("Permissions required: {}", permissions),
    ]
    .join("\n");

    let mut embed = Embed::new(EmbedColour::Random)
        .title(format!("{} COMMAND", info.name.to_uppercase()))
        .description(description);

    for usage in &info.usage {
        if let Some(text) = &usage.description {
            embed = embed.field(usage.display(), text, true);
        }
    }

    embed
}

fn code_list(items: &[String]) -> String {
    if items.is_empty() {
        "`None`".to_string()
    } else {
        format!("`{}`", items.join(" | "))
    }
}

#[async_trait]
impl ClassicCommand for HelpCommand {
    fn info(&self) -> CommandInfo {
        self.info.clone()
    }

    async fn execute(
        &self,
        ctx: &Context<'_>,
        message: &Message,
        args: &[String],
    ) -> Result<bool, Error> {
        if message.channel_kind == ChannelKind::Stage {
            return Ok(true);
        }

        let mut embed = self
            .render(ctx.registry(), ctx.prefix(), args)
            .footer(format!("Requested by {}", message.author.tag))
            .timestamp(Utc::now());

        if let Some(avatar) = ctx.platform().current_user().and_then(|user| user.avatar_url) {
            embed = embed.thumbnail(avatar);
        }

        ctx.platform()
            .send_message(message.channel_id, Reply::embed(embed))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::BotClient;
    use crate::core::config::ClientOptions;
    use crate::core::modules::{Module, ModuleRegistry};
    use crate::core::test_support::{message, RecordingPlatform};
    use std::path::Path;

    struct Described(CommandInfo);

    #[async_trait]
    impl ClassicCommand for Described {
        fn info(&self) -> CommandInfo {
            self.0.clone()
        }

        async fn execute(&self, _: &Context<'_>, _: &Message, _: &[String]) -> Result<bool, Error> {
            Ok(true)
        }
    }

    fn registry() -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        let mut add = |info: CommandInfo, path: &str| {
            registry.register_module(Module::classic(Described(info)), Some(Path::new(path)));
        };
        add(CommandInfo::new("ping", "Pong"), "bot/commands/ping.rs");
        add(
            CommandInfo::new("roll", "Roll with {prefix}roll or {PREFIX}dice")
                .usage(CommandUsage::optional("sides").with_description("Number of sides"))
                .usage(CommandUsage::optional("count"))
                .alias("dice")
                .alias("d"),
            "bot/commands/fun/roll.rs",
        );
        add(
            CommandInfo::new("ban", "Ban a member")
                .usage(CommandUsage::required("user"))
                .permission("BAN_MEMBERS"),
            "bot/commands/moderation/ban.rs",
        );
        add(CommandInfo::new("joke", "Tell a joke"), "bot/commands/fun/joke.rs");
        registry.register_classic_command(Box::new(HelpCommand::new(None)), None);
        registry
    }

    fn field_names(embed: &Embed) -> Vec<&str> {
        embed.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn listing_keeps_first_seen_order_and_puts_uncategorised_last() {
        let registry = registry();
        let help = HelpCommand::new(None);
        let embed = help.render(&registry, ">", &[]);

        assert_eq!(embed.title.as_deref(), Some("COMMAND LIST"));
        assert_eq!(field_names(&embed), vec!["Fun", "Moderation", "Misc", "Uncategorised"]);
        assert_eq!(embed.fields[0].value, "`roll`, `joke`");
        assert_eq!(embed.fields[3].value, "`ping`");

        let description = embed.description.unwrap();
        assert!(description.contains("**Prefix:** `>`"));
        assert!(description.contains("Use `>help [command]` to view command help"));
    }

    #[test]
    fn single_command_view_shows_usage_aliases_and_permissions() {
        let registry = registry();
        let help = HelpCommand::new(None);

        let embed = help.render(&registry, "!", &["dice".to_string()]);
        assert_eq!(embed.title.as_deref(), Some("ROLL COMMAND"));
        let description = embed.description.clone().unwrap();
        assert!(description.starts_with("Roll with !roll or !dice"));
        assert!(description.contains("Full command: `!roll [sides] [count]`"));
        assert!(description.contains("Aliases: `dice | d`"));
        assert!(description.contains("Permissions required: `None`"));
        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].name, "[sides]");
        assert!(embed.fields[0].inline);

        let embed = help.render(&registry, "!", &["ban".to_string()]);
        let description = embed.description.unwrap();
        assert!(description.contains("Full command: `!ban <user>`"));
        assert!(description.contains("Aliases: `None`"));
        assert!(description.contains("Permissions required: `BAN_MEMBERS`"));
    }

    #[test]
    fn full_command_has_no_trailing_space_without_usage() {
        let registry = registry();
        let embed = HelpCommand::new(None).render(&registry, ">", &["ping".to_string()]);
        assert!(embed
            .description
            .unwrap()
            .contains("Full command: `>ping`"));
    }

    #[test]
    fn unknown_command_falls_back_to_listing() {
        let registry = registry();
        let embed = HelpCommand::new(None).render(&registry, ">", &["foo".to_string()]);
        assert_eq!(embed.title.as_deref(), Some("COMMAND LIST"));
    }

    #[tokio::test]
    async fn execute_decorates_and_sends_the_embed() {
        let client = BotClient::from_registry(ClientOptions::new("bot"), registry());
        let platform = RecordingPlatform::new();
        let ctx = client.context(&platform);

        let help = client.registry().classic_command("help").unwrap();
        let handled = help
            .command
            .execute(&ctx, &message(">help"), &[])
            .await
            .unwrap();
        assert!(handled);

        let sent = platform.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, 100);
        let embed = &sent[0].1.embeds[0];
        assert_eq!(embed.footer.as_deref(), Some("Requested by tester#0001"));
        assert_eq!(embed.thumbnail.as_deref(), Some("https://cdn.example/avatar.png"));
        assert!(embed.timestamp.is_some());
    }

    #[tokio::test]
    async fn stage_channels_are_ignored() {
        let client = BotClient::from_registry(ClientOptions::new("bot"), registry());
        let platform = RecordingPlatform::new();
        let ctx = client.context(&platform);

        let mut stage = message(">help");
        stage.channel_kind = ChannelKind::Stage;
        let help = client.registry().classic_command("help").unwrap();
        assert!(help.command.execute(&ctx, &stage, &[]).await.unwrap());
        assert!(platform.sent().await.is_empty());
    }
}
