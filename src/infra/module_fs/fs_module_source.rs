use crate::core::modules::{LoaderError, ModuleFile, ModuleKind, ModuleSource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions a module file may carry.
pub const MODULE_EXTENSIONS: &[&str] = &["rs"];

/// Scans `<root>/commands` and `<root>/events` on the local filesystem.
pub struct FsModuleSource {
    root: PathBuf,
}

impl FsModuleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn is_module_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MODULE_EXTENSIONS.contains(&ext))
}

fn scan(dir: &Path) -> Result<Vec<ModuleFile>, LoaderError> {
    if !dir.is_dir() {
        return Err(LoaderError::InvalidPath(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // The top-level directory itself failing is fatal, anything deeper is skipped
            Err(e) if e.depth() == 0 => return Err(LoaderError::InvalidPath(dir.to_path_buf())),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_module_file(entry.path()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| LoaderError::Scan(e.to_string()))?;
        files.push(ModuleFile::new(entry.path(), relative));
    }

    Ok(files)
}

#[async_trait]
impl ModuleSource for FsModuleSource {
    async fn discover(&self, kind: ModuleKind) -> Result<Vec<ModuleFile>, LoaderError> {
        let dir = self.root.join(kind.dir_name());
        tracing::debug!("Scanning {} for {}", dir.display(), kind);

        tokio::task::spawn_blocking(move || scan(&dir))
            .await
            .map_err(|e| LoaderError::Scan(e.to_string()))?
    }
}
