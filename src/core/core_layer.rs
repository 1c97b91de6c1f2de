// The core module contains all framework logic.
// Nothing in here talks to serenity directly; the Discord layer plugs in
// through the `ChatPlatform` port.

#[path = "client.rs"]
pub mod client;

#[path = "config/config_models.rs"]
pub mod config;

#[path = "modules/mod.rs"]
pub mod modules;

#[path = "platform/mod.rs"]
pub mod platform;

#[path = "presets/mod.rs"]
pub mod presets;

#[cfg(test)]
#[path = "test_support.rs"]
pub mod test_support;
