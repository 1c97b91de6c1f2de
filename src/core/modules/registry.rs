// In-memory lookup collections for every registered module.
//
// Commands are last-write-wins (re-registering a name is an intentional
// override). Listeners are first-write-wins: a second listener for the same
// event is dropped so a gateway event never fires two handlers.

use super::module_models::{CommandInfo, EventName, ModuleKind, SlashCommandInfo};
use super::roles::{ClassicCommand, Listener, Module, SlashCommand};
use std::collections::HashMap;
use std::path::Path;

/// A classic command together with the metadata it was registered under.
///
/// `info` is the command's declared info with the inferred category applied.
pub struct RegisteredCommand {
    pub info: CommandInfo,
    pub command: Box<dyn ClassicCommand>,
}

#[derive(Default)]
pub struct ModuleRegistry {
    /// Classic commands in first-registration order.
    classic_commands: Vec<RegisteredCommand>,
    classic_index: HashMap<String, usize>,
    aliases: HashMap<String, String>,
    slash_commands: HashMap<String, Box<dyn SlashCommand>>,
    slash_order: Vec<String>,
    listeners: HashMap<EventName, Box<dyn Listener>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register any module according to its role tag.
    ///
    /// `source_path` is only used by classic commands, to infer a category.
    pub fn register_module(&mut self, module: Module, source_path: Option<&Path>) {
        match module {
            Module::Classic(command) => self.register_classic_command(command, source_path),
            Module::Slash(command) => self.register_slash_command(command),
            Module::Listener(listener) => {
                self.register_event(listener);
            }
        }
    }

    pub fn register_classic_command(
        &mut self,
        command: Box<dyn ClassicCommand>,
        source_path: Option<&Path>,
    ) {
        let mut info = command.info();
        if info.category.is_none() {
            info.category = source_path.and_then(infer_category);
        }

        for alias in &info.aliases {
            self.aliases.insert(alias.clone(), info.name.clone());
        }

        tracing::debug!(
            command = %info.name,
            category = info.category.as_deref().unwrap_or("-"),
            "Registered classic command"
        );

        let name = info.name.clone();
        let entry = RegisteredCommand { info, command };
        match self.classic_index.get(&name) {
            Some(&index) => self.classic_commands[index] = entry,
            None => {
                self.classic_index
                    .insert(name, self.classic_commands.len());
                self.classic_commands.push(entry);
            }
        }
    }

    pub fn register_slash_command(&mut self, command: Box<dyn SlashCommand>) {
        let name = command.info().name;
        tracing::debug!(command = %name, "Registered slash command");
        if self.slash_commands.insert(name.clone(), command).is_none() {
            self.slash_order.push(name);
        }
    }

    /// Bind a listener to its event. Returns `false` when the event already
    /// has a listener; the new one is dropped.
    pub fn register_event(&mut self, listener: Box<dyn Listener>) -> bool {
        let event = listener.event();
        if self.has_registered_event(event) {
            tracing::warn!("The event '{}' has already been registered.", event);
            return false;
        }

        tracing::debug!(%event, "Registered listener");
        self.listeners.insert(event, listener);
        true
    }

    pub fn has_registered_event(&self, event: EventName) -> bool {
        self.listeners.contains_key(&event)
    }

    pub fn listener(&self, event: EventName) -> Option<&dyn Listener> {
        self.listeners.get(&event).map(|l| l.as_ref())
    }

    pub fn registered_events(&self) -> impl Iterator<Item = EventName> + '_ {
        self.listeners.keys().copied()
    }

    /// Look a classic command up by its canonical name only.
    pub fn classic_command(&self, name: &str) -> Option<&RegisteredCommand> {
        self.classic_index
            .get(name)
            .map(|&index| &self.classic_commands[index])
    }

    /// Look a classic command up by name, then through one alias hop.
    pub fn resolve_classic_command(&self, name_or_alias: &str) -> Option<&RegisteredCommand> {
        self.classic_command(name_or_alias).or_else(|| {
            self.alias_target(name_or_alias)
                .and_then(|name| self.classic_command(name))
        })
    }

    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn classic_commands(&self) -> impl Iterator<Item = &RegisteredCommand> {
        self.classic_commands.iter()
    }

    pub fn classic_command_count(&self) -> usize {
        self.classic_commands.len()
    }

    pub fn slash_command(&self, name: &str) -> Option<&dyn SlashCommand> {
        self.slash_commands.get(name).map(|c| c.as_ref())
    }

    pub fn slash_command_count(&self) -> usize {
        self.slash_commands.len()
    }

    /// Slash command definitions in registration order, ready for bulk
    /// registration.
    pub fn slash_command_infos(&self) -> Vec<SlashCommandInfo> {
        self.slash_order
            .iter()
            .filter_map(|name| self.slash_commands.get(name))
            .map(|command| command.info())
            .collect()
    }
}

/// Category for a command file: its parent directory, capitalised, unless the
/// file sits directly in the commands directory.
pub fn infer_category(source_path: &Path) -> Option<String> {
    let folder = source_path
        .parent()
        .and_then(Path::file_name)?
        .to_string_lossy()
        .to_lowercase();

    if folder == ModuleKind::Commands.dir_name() {
        return None;
    }

    let mut chars = folder.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
