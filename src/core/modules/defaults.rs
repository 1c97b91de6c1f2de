// Built-in fallbacks.
//
// Eligibility is decided by looking at the registry each time, never by
// remembered flags, so running the installer again is harmless.

use super::module_models::{EventName, ModuleKind};
use super::registry::ModuleRegistry;
use crate::core::config::Defaults;
use crate::core::presets::{HelpCommand, InteractionCreateListener, MessageCreateListener, ReadyListener};

pub struct DefaultsInstaller {
    defaults: Defaults,
}

impl DefaultsInstaller {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    /// Install the fallbacks belonging to the pass that just finished.
    ///
    /// The help command follows the commands pass; the listeners follow the
    /// events pass, so a user-written listener for the same event is always
    /// registered first and wins.
    pub fn install(&self, kind: ModuleKind, registry: &mut ModuleRegistry) {
        match kind {
            ModuleKind::Commands => self.install_commands(registry),
            ModuleKind::Events => self.install_events(registry),
        }
    }

    /// Install everything at once, help command first.
    pub fn install_all(&self, registry: &mut ModuleRegistry) {
        self.install_commands(registry);
        self.install_events(registry);
    }

    fn install_commands(&self, registry: &mut ModuleRegistry) {
        let Some(help) = self.defaults.help_command.as_ref().filter(|help| help.enabled) else {
            return;
        };

        if registry.classic_command_count() == 0 || registry.classic_command("help").is_some() {
            return;
        }

        tracing::debug!("Installing the built-in help command");
        registry.register_classic_command(
            Box::new(HelpCommand::new(help.description.clone())),
            None,
        );
    }

    fn install_events(&self, registry: &mut ModuleRegistry) {
        let Some(events) = self.defaults.events.as_ref() else {
            return;
        };

        if let Some(ready) = events.ready.as_ref().filter(|ready| ready.enabled) {
            if !registry.has_registered_event(EventName::Ready) {
                registry.register_event(Box::new(ReadyListener::new(
                    ready.slash_commands.clone(),
                )));
            }
        }

        if events.message_create.is_some_and(|toggle| toggle.enabled)
            && !registry.has_registered_event(EventName::MessageCreate)
        {
            registry.register_event(Box::new(MessageCreateListener));
        }

        if events.interaction_create.is_some_and(|toggle| toggle.enabled)
            && !registry.has_registered_event(EventName::InteractionCreate)
        {
            registry.register_event(Box::new(InteractionCreateListener));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{
        EventDefaults, HelpCommandDefaults, ReadyDefaults, SlashRegistration, Toggle,
    };
    use crate::core::test_support::Stub;

    fn help_enabled() -> Defaults {
        Defaults {
            help_command: Some(HelpCommandDefaults {
                enabled: true,
                description: Some("Built-in help".to_string()),
            }),
            events: None,
        }
    }

    fn register(registry: &mut ModuleRegistry, module: crate::core::modules::Module) {
        registry.register_module(module, None);
    }

    #[test]
    fn help_needs_at_least_one_command() {
        let installer = DefaultsInstaller::new(help_enabled());
        let mut registry = ModuleRegistry::new();

        installer.install(ModuleKind::Commands, &mut registry);
        assert!(registry.classic_command("help").is_none());

        register(&mut registry, Stub::classic("ping"));
        installer.install(ModuleKind::Commands, &mut registry);

        let help = registry.classic_command("help").unwrap();
        assert_eq!(help.info.description, "Built-in help");
        assert_eq!(help.info.category.as_deref(), Some("Misc"));
    }

    #[test]
    fn disabled_help_is_never_installed() {
        let installer = DefaultsInstaller::new(Defaults {
            help_command: Some(HelpCommandDefaults {
                enabled: false,
                description: None,
            }),
            events: None,
        });
        let mut registry = ModuleRegistry::new();
        register(&mut registry, Stub::classic("ping"));

        installer.install_all(&mut registry);
        assert!(registry.classic_command("help").is_none());
    }

    #[test]
    fn user_help_survives_repeated_installs() {
        let installer = DefaultsInstaller::new(help_enabled());
        let mut registry = ModuleRegistry::new();
        register(&mut registry, Stub::classic("help"));

        installer.install(ModuleKind::Commands, &mut registry);
        installer.install(ModuleKind::Commands, &mut registry);

        assert_eq!(registry.classic_command_count(), 1);
        let help = registry.classic_command("help").unwrap();
        assert_eq!(help.info.description, "stub help");
    }

    #[test]
    fn listeners_are_installed_only_when_enabled_and_free() {
        let installer = DefaultsInstaller::new(Defaults {
            help_command: None,
            events: Some(EventDefaults {
                ready: Some(ReadyDefaults {
                    enabled: true,
                    slash_commands: SlashRegistration {
                        register: false,
                        guild_id: None,
                    },
                }),
                message_create: Some(Toggle { enabled: true }),
                interaction_create: Some(Toggle { enabled: false }),
            }),
        });

        let mut registry = ModuleRegistry::new();
        register(&mut registry, Stub::listener(EventName::MessageCreate));

        installer.install(ModuleKind::Commands, &mut registry);
        assert_eq!(registry.registered_events().count(), 1);

        installer.install(ModuleKind::Events, &mut registry);
        assert!(registry.has_registered_event(EventName::Ready));
        assert!(registry.has_registered_event(EventName::MessageCreate));
        assert!(!registry.has_registered_event(EventName::InteractionCreate));
        assert_eq!(registry.registered_events().count(), 2);
    }

    #[test]
    fn no_defaults_means_nothing_is_installed() {
        let installer = DefaultsInstaller::new(Defaults::default());
        let mut registry = ModuleRegistry::new();
        register(&mut registry, Stub::classic("ping"));

        installer.install_all(&mut registry);
        assert_eq!(registry.classic_command_count(), 1);
        assert_eq!(registry.registered_events().count(), 0);
    }

    #[test]
    fn all_enabled_fills_every_gap() {
        let installer = DefaultsInstaller::new(Defaults::all_enabled());
        let mut registry = ModuleRegistry::new();
        register(&mut registry, Stub::classic("ping"));

        installer.install_all(&mut registry);
        assert!(registry.classic_command("help").is_some());
        for event in [EventName::Ready, EventName::MessageCreate, EventName::InteractionCreate] {
            assert!(registry.has_registered_event(event));
        }
    }
}
