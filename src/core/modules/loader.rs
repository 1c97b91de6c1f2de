// Discovery passes.
//
// Rust has no runtime `import` of arbitrary files, so a module's "export" is
// an entry in the host's `ModuleCatalog`, keyed by the file's path relative to
// its kind directory. The loader still walks the real directory tree: a file
// on disk with no catalog entry gets a warning, a catalog entry with no file
// on disk is never loaded.

use super::module_models::ModuleKind;
use super::registry::ModuleRegistry;
use super::roles::Module;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Path provided not found: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Failed to scan module directory: {0}")]
    Scan(String),
}

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    pub path: PathBuf,
    /// Path relative to the kind directory, extension stripped, `/`-separated.
    pub key: String,
}

impl ModuleFile {
    pub fn new(path: impl Into<PathBuf>, relative: &Path) -> Self {
        Self {
            path: path.into(),
            key: module_key(relative),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.key.clone())
    }
}

/// `fun/roll.rs` -> `fun/roll`
pub fn module_key(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Enumerates module files for a discovery pass.
#[async_trait]
pub trait ModuleSource: Send + Sync {
    /// Every accepted file under `<root>/<kind>/**`.
    ///
    /// Fails with `LoaderError::InvalidPath` when the kind directory is
    /// missing or unreadable.
    async fn discover(&self, kind: ModuleKind) -> Result<Vec<ModuleFile>, LoaderError>;
}

pub type ModuleFactory = Box<dyn Fn() -> Module + Send + Sync>;

enum Export {
    Module(ModuleFactory),
    /// A file that exists on purpose but exports no module (shared helpers).
    Support,
}

/// The host's table of module exports.
#[derive(Default)]
pub struct ModuleCatalog {
    exports: HashMap<(ModuleKind, String), Export>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export a module found under `commands/`.
    pub fn command<F>(self, key: &str, factory: F) -> Self
    where
        F: Fn() -> Module + Send + Sync + 'static,
    {
        self.export(ModuleKind::Commands, key, factory)
    }

    /// Export a module found under `events/`.
    pub fn event<F>(self, key: &str, factory: F) -> Self
    where
        F: Fn() -> Module + Send + Sync + 'static,
    {
        self.export(ModuleKind::Events, key, factory)
    }

    pub fn export<F>(mut self, kind: ModuleKind, key: &str, factory: F) -> Self
    where
        F: Fn() -> Module + Send + Sync + 'static,
    {
        self.exports
            .insert((kind, key.to_string()), Export::Module(Box::new(factory)));
        self
    }

    /// Mark a file as known but not a module, so discovery skips it quietly.
    pub fn support(mut self, kind: ModuleKind, key: &str) -> Self {
        self.exports.insert((kind, key.to_string()), Export::Support);
        self
    }

    fn lookup(&self, kind: ModuleKind, key: &str) -> Option<&Export> {
        self.exports.get(&(kind, key.to_string()))
    }
}

pub struct ModuleLoader<'a> {
    catalog: &'a ModuleCatalog,
    source: &'a dyn ModuleSource,
}

impl<'a> ModuleLoader<'a> {
    pub fn new(catalog: &'a ModuleCatalog, source: &'a dyn ModuleSource) -> Self {
        Self { catalog, source }
    }

    /// Run one discovery pass and register everything it finds.
    ///
    /// Returns the number of modules registered (duplicate listeners that the
    /// registry rejects still count as loaded).
    pub async fn load(
        &self,
        kind: ModuleKind,
        registry: &mut ModuleRegistry,
    ) -> Result<usize, LoaderError> {
        let files = self.source.discover(kind).await?;
        let mut loaded = 0;

        for file in &files {
            let factory = match self.catalog.lookup(kind, &file.key) {
                Some(Export::Module(factory)) => factory,
                Some(Export::Support) => continue,
                None => {
                    tracing::warn!(
                        "Please export your '{}' module in the module catalog.",
                        file.file_name()
                    );
                    continue;
                }
            };

            let module = factory();
            tracing::debug!(
                file = %file.path.display(),
                role = module.role(),
                "Loaded module"
            );
            registry.register_module(module, Some(&file.path));
            loaded += 1;
        }

        tracing::info!("Loaded {} of {} file(s) from {}/", loaded, files.len(), kind);
        Ok(loaded)
    }
}
