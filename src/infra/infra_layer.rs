// The infra module contains implementations of core traits.
// Each implementation goes in its own submodule.

#[path = "module_fs/fs_module_source.rs"]
pub mod module_fs;

#[path = "config/config_loader.rs"]
pub mod config;
