// Shared doubles for core tests: a platform that records everything sent
// through it, a module source backed by a fixed file list, and stub modules.

use crate::core::client::Context;
use crate::core::modules::loader::module_key;
use crate::core::modules::{
    ClassicCommand, CommandInfo, Error, EventName, Listener, LoaderError, Module, ModuleFile,
    ModuleKind, ModuleSource, SlashCommand, SlashCommandInfo,
};
use crate::core::platform::{
    Author, BotUser, ChannelKind, ChatPlatform, CommandInvocation, CommandScope, Message,
    PlatformError, PlatformEvent, Reply,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub fn author() -> Author {
    Author {
        id: 42,
        name: "tester".to_string(),
        tag: "tester#0001".to_string(),
        bot: false,
    }
}

pub fn message(content: &str) -> Message {
    Message {
        id: 1,
        channel_id: 100,
        guild_id: Some(10),
        channel_kind: ChannelKind::Text,
        author: author(),
        content: content.to_string(),
    }
}

pub fn invocation(command_name: &str) -> CommandInvocation {
    CommandInvocation {
        id: 7,
        token: "token".to_string(),
        command_name: command_name.to_string(),
        arguments: Vec::new(),
        user: author(),
        channel_id: 100,
        guild_id: Some(10),
    }
}

#[derive(Default)]
pub struct RecordingPlatform {
    user: Option<BotUser>,
    fail_registration: bool,
    sent: Mutex<Vec<(u64, Reply)>>,
    interaction_replies: Mutex<Vec<(String, Reply)>>,
    registrations: Mutex<Vec<(CommandScope, Vec<SlashCommandInfo>)>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self {
            user: Some(BotUser {
                id: 999,
                name: "autoload".to_string(),
                avatar_url: Some("https://cdn.example/avatar.png".to_string()),
            }),
            ..Self::default()
        }
    }

    /// A platform that has not identified yet.
    pub fn without_user() -> Self {
        Self::default()
    }

    pub fn failing_registration(mut self) -> Self {
        self.fail_registration = true;
        self
    }

    pub async fn sent(&self) -> Vec<(u64, Reply)> {
        self.sent.lock().await.clone()
    }

    pub async fn interaction_replies(&self) -> Vec<(String, Reply)> {
        self.interaction_replies.lock().await.clone()
    }

    pub async fn registrations(&self) -> Vec<(CommandScope, Vec<SlashCommandInfo>)> {
        self.registrations.lock().await.clone()
    }
}

#[async_trait]
impl ChatPlatform for RecordingPlatform {
    fn current_user(&self) -> Option<BotUser> {
        self.user.clone()
    }

    async fn send_message(&self, channel_id: u64, reply: Reply) -> Result<(), PlatformError> {
        self.sent.lock().await.push((channel_id, reply));
        Ok(())
    }

    async fn reply_interaction(
        &self,
        interaction: &CommandInvocation,
        reply: Reply,
    ) -> Result<(), PlatformError> {
        self.interaction_replies
            .lock()
            .await
            .push((interaction.command_name.clone(), reply));
        Ok(())
    }

    async fn overwrite_commands(
        &self,
        scope: CommandScope,
        commands: &[SlashCommandInfo],
    ) -> Result<usize, PlatformError> {
        if self.fail_registration {
            return Err(PlatformError::Api("401: Unauthorized".to_string()));
        }
        self.registrations
            .lock()
            .await
            .push((scope, commands.to_vec()));
        Ok(commands.len())
    }
}

/// Module source backed by a fixed list of paths such as
/// `bot/commands/fun/roll.rs`.
#[derive(Default)]
pub struct StaticSource {
    files: HashMap<ModuleKind, Vec<PathBuf>>,
    missing: HashSet<ModuleKind>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, kind: ModuleKind, path: &str) -> Self {
        self.files.entry(kind).or_default().push(PathBuf::from(path));
        self
    }

    pub fn missing(mut self, kind: ModuleKind) -> Self {
        self.missing.insert(kind);
        self
    }
}

#[async_trait]
impl ModuleSource for StaticSource {
    async fn discover(&self, kind: ModuleKind) -> Result<Vec<ModuleFile>, LoaderError> {
        if self.missing.contains(&kind) {
            return Err(LoaderError::InvalidPath(Path::new("bot").join(kind.dir_name())));
        }

        let files = self.files.get(&kind).cloned().unwrap_or_default();
        Ok(files
            .into_iter()
            .map(|path| {
                let relative: PathBuf = path
                    .components()
                    .skip_while(|c| c.as_os_str() != kind.dir_name())
                    .skip(1)
                    .collect();
                ModuleFile {
                    key: module_key(&relative),
                    path,
                }
            })
            .collect())
    }
}

/// Modules that do nothing but exist.
pub struct Stub;

struct StubCommand(String);

#[async_trait]
impl ClassicCommand for StubCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo::new(self.0.clone(), format!("stub {}", self.0))
    }

    async fn execute(&self, _: &Context<'_>, _: &Message, _: &[String]) -> Result<bool, Error> {
        Ok(true)
    }
}

struct StubSlash(String);

#[async_trait]
impl SlashCommand for StubSlash {
    fn info(&self) -> SlashCommandInfo {
        SlashCommandInfo::new(self.0.clone(), format!("stub {}", self.0))
    }

    async fn execute(&self, _: &Context<'_>, _: &CommandInvocation) -> Result<(), Error> {
        Ok(())
    }
}

struct StubListener(EventName);

#[async_trait]
impl Listener for StubListener {
    fn event(&self) -> EventName {
        self.0
    }

    async fn execute(&self, _: &Context<'_>, _: &PlatformEvent) -> Result<(), Error> {
        Ok(())
    }
}

impl Stub {
    pub fn classic(name: &str) -> Module {
        Module::classic(StubCommand(name.to_string()))
    }

    pub fn slash(name: &str) -> Module {
        Module::slash(StubSlash(name.to_string()))
    }

    pub fn listener(event: EventName) -> Module {
        Module::listener(StubListener(event))
    }
}
