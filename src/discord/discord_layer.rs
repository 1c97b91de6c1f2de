// Discord layer - serenity adapters for the core ports.

#[path = "platform/serenity_platform.rs"]
pub mod platform;

#[path = "events/event_bridge.rs"]
pub mod events;

use crate::core::client::BotClient;
use std::sync::Arc;

// Shared framework data: the frozen client, handed to every event.
pub type Data = Arc<BotClient>;
pub type Error = crate::core::modules::Error;

pub use events::event_handler;
pub use platform::SerenityPlatform;
