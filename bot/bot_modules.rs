// Every module under bot/commands and bot/events, keyed by its path.

use autoload_bot::{Module, ModuleCatalog};

#[path = "commands/ping.rs"]
mod ping;

#[path = "commands/fun/roll.rs"]
mod roll;

#[path = "commands/slash/ping.rs"]
mod slash_ping;

#[path = "events/guild_member_add.rs"]
mod guild_member_add;

pub fn catalog() -> ModuleCatalog {
    ModuleCatalog::new()
        .command("ping", || Module::classic(ping::Ping))
        .command("fun/roll", || Module::classic(roll::Roll))
        .command("slash/ping", || Module::slash(slash_ping::SlashPing))
        .event("guild_member_add", || {
            Module::listener(guild_member_add::GuildMemberAdd)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoload_bot::core::modules::{ModuleLoader, ModuleRegistry, ModuleSource};
    use autoload_bot::infra::module_fs::FsModuleSource;
    use autoload_bot::{EventName, ModuleKind};

    #[tokio::test]
    async fn every_file_under_bot_has_a_catalog_entry() {
        let source = FsModuleSource::new("bot");
        let catalog = catalog();
        let loader = ModuleLoader::new(&catalog, &source);
        let mut registry = ModuleRegistry::new();

        for kind in [ModuleKind::Commands, ModuleKind::Events] {
            let found = source.discover(kind).await.unwrap();
            assert!(!found.is_empty(), "no files under bot/{}", kind);
            let loaded = loader.load(kind, &mut registry).await.unwrap();
            assert_eq!(loaded, found.len(), "unexported file under bot/{}", kind);
        }

        assert_eq!(
            registry.classic_command("roll").unwrap().info.category.as_deref(),
            Some("Fun")
        );
        assert_eq!(registry.classic_command("ping").unwrap().info.category, None);
        assert_eq!(registry.alias_target("dice"), Some("roll"));
        assert!(registry.slash_command("ping").is_some());
        assert!(registry.has_registered_event(EventName::GuildMemberAdd));
    }
}
