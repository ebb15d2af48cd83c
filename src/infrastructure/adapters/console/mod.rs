//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};

use crate::application::errors::BotError;
use crate::domain::entities::{ChatEvent, ChatMessage};
use crate::domain::traits::{Bot, BotInfo};

/// Console bot adapter for local development.
///
/// Every input line is a channel message from `user`; lines starting with
/// `/w ` are whispers to the bot instead.
pub struct ConsoleAdapter<R = Stdin> {
    info: BotInfo,
    user: String,
    input: Lines<BufReader<R>>,
    joined: bool,
}

impl ConsoleAdapter<Stdin> {
    pub fn new(user: impl Into<String>, channel: impl Into<String>) -> Self {
        Self::with_input(user, channel, tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin + Send + Sync> ConsoleAdapter<R> {
    pub fn with_input(user: impl Into<String>, channel: impl Into<String>, input: R) -> Self {
        Self {
            info: BotInfo {
                name: "urban-bot".to_string(),
                username: "console".to_string(),
                channel: channel.into(),
            },
            user: user.into(),
            input: BufReader::new(input).lines(),
            joined: false,
        }
    }

    fn parse_input(&self, line: &str) -> Option<ChatEvent> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let message = match line.strip_prefix("/w ") {
            Some(text) => ChatMessage::whisper(&self.user, &self.info.channel, text.trim()),
            None => ChatMessage::channel(&self.user, &self.info.channel, line),
        };
        Some(ChatEvent::Message(message))
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send + Sync> Bot for ConsoleAdapter<R> {
    async fn start(&mut self) -> Result<(), BotError> {
        tracing::info!(
            "Starting console bot (dev mode) as {} in #{}",
            self.user,
            self.info.channel
        );
        Ok(())
    }

    async fn next_event(&mut self) -> Result<Option<ChatEvent>, BotError> {
        if !self.joined {
            self.joined = true;
            return Ok(Some(ChatEvent::Joined {
                channel: self.info.channel.clone(),
            }));
        }

        while let Some(line) = self.input.next_line().await? {
            if let Some(event) = self.parse_input(&line) {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }

    async fn send_message(&self, _channel: &str, text: &str) -> Result<(), BotError> {
        println!("[BOT] {}", text);
        Ok(())
    }

    async fn send_whisper(&self, user: &str, text: &str) -> Result<(), BotError> {
        println!("[WHISPER -> {}] {}", user, text);
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
