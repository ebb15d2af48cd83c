use async_trait::async_trait;
use crate::domain::entities::ChatEvent;
use crate::application::errors::BotError;

/// Bot trait - abstraction for chat transports
#[async_trait]
pub trait Bot: Send + Sync {
    /// Connect and join the configured channel
    async fn start(&mut self) -> Result<(), BotError>;

    /// Wait for the next event. `None` means the transport closed.
    async fn next_event(&mut self) -> Result<Option<ChatEvent>, BotError>;

    /// Send a message to a channel
    async fn send_message(&self, channel: &str, text: &str) -> Result<(), BotError>;

    /// Send a private message to a user
    async fn send_whisper(&self, user: &str, text: &str) -> Result<(), BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub name: String,
    pub username: String,
    pub channel: String,
}
