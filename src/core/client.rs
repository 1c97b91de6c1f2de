// The client ties configuration, the module registry and event dispatch
// together. It is built once at startup and then shared read-only (poise
// stores it as the framework's user data).

use crate::core::config::ClientOptions;
use crate::core::modules::{
    DefaultsInstaller, LoaderError, ModuleCatalog, ModuleKind, ModuleLoader, ModuleRegistry,
    ModuleSource,
};
use crate::core::platform::{ChatPlatform, PlatformEvent};

pub struct BotClient {
    options: ClientOptions,
    registry: ModuleRegistry,
}

impl BotClient {
    /// Discover every module under the configured root and install defaults.
    ///
    /// The commands pass (and its defaults) always completes before the events
    /// pass starts. A missing `commands/` or `events/` directory aborts
    /// construction.
    pub async fn new(
        options: ClientOptions,
        catalog: &ModuleCatalog,
        source: &dyn ModuleSource,
    ) -> Result<Self, LoaderError> {
        let mut registry = ModuleRegistry::new();
        let loader = ModuleLoader::new(catalog, source);
        let installer = DefaultsInstaller::new(options.defaults.clone().unwrap_or_default());

        for kind in [ModuleKind::Commands, ModuleKind::Events] {
            loader.load(kind, &mut registry).await?;
            installer.install(kind, &mut registry);
        }

        tracing::info!(
            classic_commands = registry.classic_command_count(),
            slash_commands = registry.slash_command_count(),
            listeners = registry.registered_events().count(),
            "Modules loaded from {}",
            options.root.display()
        );

        Ok(Self { options, registry })
    }

    /// Wrap a registry that was filled by hand.
    pub fn from_registry(options: ClientOptions, registry: ModuleRegistry) -> Self {
        Self { options, registry }
    }

    pub fn prefix(&self) -> &str {
        self.options.effective_prefix()
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn context<'a>(&'a self, platform: &'a dyn ChatPlatform) -> Context<'a> {
        Context {
            client: self,
            platform,
        }
    }

    /// Hand a gateway event to the listener registered for it, if any.
    ///
    /// Listener errors are logged here and never reach the gateway.
    pub async fn emit(&self, platform: &dyn ChatPlatform, event: &PlatformEvent) {
        let name = event.name();
        let Some(listener) = self.registry.listener(name) else {
            return;
        };

        let ctx = self.context(platform);
        if let Err(e) = listener.execute(&ctx, event).await {
            tracing::error!("Listener for '{}' failed: {}", name, e);
        }
    }
}

/// What every module handler receives: the owning client plus the platform
/// the current event came from.
pub struct Context<'a> {
    client: &'a BotClient,
    platform: &'a dyn ChatPlatform,
}

impl<'a> Context<'a> {
    pub fn client(&self) -> &'a BotClient {
        self.client
    }

    pub fn registry(&self) -> &'a ModuleRegistry {
        &self.client.registry
    }

    pub fn prefix(&self) -> &'a str {
        self.client.prefix()
    }

    pub fn platform(&self) -> &'a dyn ChatPlatform {
        self.platform
    }
}
