use chrono::{DateTime, Utc};

/// Where a chat message was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Channel,
    Whisper,
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::Channel => "channel",
            MessageKind::Whisper => "whisper",
        }
    }
}

/// Incoming chat message
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub kind: MessageKind,
    /// Sender login
    pub user: String,
    /// Channel login, without the leading `#`
    pub channel: String,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        kind: MessageKind,
        user: impl Into<String>,
        channel: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            user: user.into(),
            channel: channel.into(),
            text: text.into(),
            received_at: Utc::now(),
        }
    }

    pub fn channel(user: impl Into<String>, channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Channel, user, channel, text)
    }

    pub fn whisper(user: impl Into<String>, channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Whisper, user, channel, text)
    }
}

/// Events a transport hands to the router
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// The bot finished joining a channel
    Joined { channel: String },
    Message(ChatMessage),
}
