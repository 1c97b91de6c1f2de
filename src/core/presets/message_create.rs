// Prefix dispatch for classic commands.

use super::help::HELP_COMMAND_NAME;
use crate::core::client::Context;
use crate::core::modules::{Error, EventName, Listener};
use crate::core::platform::{Message, PlatformEvent};
use async_trait::async_trait;

pub struct MessageCreateListener;

/// Split prefixed text into a command name and its arguments.
///
/// Returns `None` when the text lacks the prefix or the name is empty.
pub fn parse_invocation(prefix: &str, content: &str) -> Option<(String, Vec<String>)> {
    if !content.starts_with(prefix) {
        return None;
    }

    let mut tokens = content.split_whitespace();
    let name = tokens.next()?.strip_prefix(prefix)?;
    if name.is_empty() {
        return None;
    }

    Some((name.to_string(), tokens.map(str::to_string).collect()))
}

/// Run the command named in `message`, falling back to help.
///
/// Unknown names get the full help listing. A command that does not report
/// success gets its own help page, looked up by the name the user typed.
pub async fn dispatch_message(ctx: &Context<'_>, message: &Message) -> Result<(), Error> {
    let Some((name, args)) = parse_invocation(ctx.prefix(), &message.content) else {
        return Ok(());
    };

    let registry = ctx.registry();
    let help_args = match registry.resolve_classic_command(&name) {
        Some(command) => match command.command.execute(ctx, message, &args).await {
            Ok(true) => return Ok(()),
            Ok(false) => vec![name],
            Err(e) => {
                tracing::warn!("Command '{}' failed: {}", command.info.name, e);
                vec![name]
            }
        },
        None => Vec::new(),
    };

    if let Some(help) = registry.classic_command(HELP_COMMAND_NAME) {
        help.command.execute(ctx, message, &help_args).await?;
    }
    Ok(())
}

#[async_trait]
impl Listener for MessageCreateListener {
    fn event(&self) -> EventName {
        EventName::MessageCreate
    }

    async fn execute(&self, ctx: &Context<'_>, event: &PlatformEvent) -> Result<(), Error> {
        match event {
            PlatformEvent::MessageCreate(message) => dispatch_message(ctx, message).await,
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::BotClient;
    use crate::core::config::ClientOptions;
    use crate::core::modules::{ClassicCommand, CommandInfo, Module, ModuleRegistry};
    use crate::core::test_support::{message, RecordingPlatform};
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(String, Vec<String>)>>>;

    #[derive(Clone, Copy)]
    enum Outcome {
        Handled,
        Unhandled,
        Fails,
    }

    /// Records each call and answers with a fixed outcome.
    struct Scripted {
        info: CommandInfo,
        outcome: Outcome,
        calls: Calls,
    }

    #[async_trait]
    impl ClassicCommand for Scripted {
        fn info(&self) -> CommandInfo {
            self.info.clone()
        }

        async fn execute(&self, _: &Context<'_>, _: &Message, args: &[String]) -> Result<bool, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((self.info.name.clone(), args.to_vec()));
            match self.outcome {
                Outcome::Handled => Ok(true),
                Outcome::Unhandled => Ok(false),
                Outcome::Fails => Err("exploded".into()),
            }
        }
    }

    fn client(commands: Vec<(CommandInfo, Outcome)>, calls: &Calls) -> BotClient {
        let mut registry = ModuleRegistry::new();
        for (info, outcome) in commands {
            registry.register_module(
                Module::classic(Scripted {
                    info,
                    outcome,
                    calls: Arc::clone(calls),
                }),
                None,
            );
        }
        BotClient::from_registry(ClientOptions::new("bot"), registry)
    }

    fn help() -> (CommandInfo, Outcome) {
        (CommandInfo::new("help", "help"), Outcome::Handled)
    }

    async fn send(client: &BotClient, content: &str) {
        let platform = RecordingPlatform::new();
        let ctx = client.context(&platform);
        dispatch_message(&ctx, &message(content)).await.unwrap();
    }

    #[test]
    fn parses_name_and_arguments() {
        assert_eq!(
            parse_invocation(">", ">roll  20   3"),
            Some(("roll".to_string(), vec!["20".to_string(), "3".to_string()]))
        );
        assert_eq!(parse_invocation("!!", "!!ping"), Some(("ping".to_string(), vec![])));
        assert_eq!(parse_invocation(">", "roll 20"), None);
        assert_eq!(parse_invocation(">", "> roll"), None);
        assert_eq!(parse_invocation(">", ">"), None);
    }

    #[tokio::test]
    async fn successful_command_never_triggers_help() {
        let calls = Calls::default();
        let client = client(vec![(CommandInfo::new("ping", "p"), Outcome::Handled), help()], &calls);

        send(&client, ">ping a b").await;

        let calls = calls.lock().unwrap().clone();
        assert_eq!(calls, vec![("ping".to_string(), vec!["a".to_string(), "b".to_string()])]);
    }

    #[tokio::test]
    async fn unsuccessful_command_gets_help_with_the_typed_name() {
        let calls = Calls::default();
        let client = client(
            vec![
                (CommandInfo::new("roll", "r").alias("dice"), Outcome::Unhandled),
                (CommandInfo::new("boom", "b"), Outcome::Fails),
                help(),
            ],
            &calls,
        );

        send(&client, ">dice x").await;
        send(&client, ">boom").await;

        let calls = calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                ("roll".to_string(), vec!["x".to_string()]),
                ("help".to_string(), vec!["dice".to_string()]),
                ("boom".to_string(), vec![]),
                ("help".to_string(), vec!["boom".to_string()]),
            ]
        );
    }

    #[tokio::test]
    async fn unknown_command_gets_the_full_listing() {
        let calls = Calls::default();
        let client = client(vec![help()], &calls);

        send(&client, ">nope 1 2").await;
        send(&client, "no prefix here").await;

        let calls = calls.lock().unwrap().clone();
        assert_eq!(calls, vec![("help".to_string(), vec![])]);
    }

    #[tokio::test]
    async fn missing_help_is_silent() {
        let calls = Calls::default();
        let client = client(vec![(CommandInfo::new("ping", "p"), Outcome::Unhandled)], &calls);

        send(&client, ">ping").await;
        send(&client, ">other").await;

        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_configured_prefix_leaves_plain_chat_alone() {
        let options = ClientOptions::from_json(r#"{"root": "bot", "prefix": ""}"#).unwrap();
        let mut registry = ModuleRegistry::new();
        registry.register_module(
            Module::classic(crate::core::presets::HelpCommand::new(None)),
            None,
        );
        let client = BotClient::from_registry(options, registry);
        let platform = RecordingPlatform::new();
        let ctx = client.context(&platform);

        dispatch_message(&ctx, &message("hello everyone, how is it going"))
            .await
            .unwrap();
        assert!(platform.sent().await.is_empty());

        dispatch_message(&ctx, &message(">help")).await.unwrap();
        assert_eq!(platform.sent().await.len(), 1);
    }

    #[tokio::test]
    async fn help_with_unknown_argument_renders_the_listing() {
        let mut registry = ModuleRegistry::new();
        registry.register_module(
            Module::classic(crate::core::presets::HelpCommand::new(None)),
            None,
        );
        let client = BotClient::from_registry(ClientOptions::new("bot"), registry);
        let platform = RecordingPlatform::new();
        let ctx = client.context(&platform);

        MessageCreateListener
            .execute(&ctx, &PlatformEvent::MessageCreate(message(">help foo")))
            .await
            .unwrap();

        let sent = platform.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1.embeds[0].title.as_deref(), Some("COMMAND LIST"));
    }
}
