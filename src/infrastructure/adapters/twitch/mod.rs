//! Twitch adapter
//!
//! Speaks plain IRC to the Twitch chat server: authenticates with an OAuth
//! token, joins one channel, answers PING, and turns channel messages,
//! whispers and the end-of-NAMES numeric into [`ChatEvent`]s.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use crate::application::errors::{BotError, ConfigError};
use crate::domain::entities::{ChatEvent, ChatMessage};
use crate::domain::traits::{Bot, BotInfo};
use crate::infrastructure::config::TwitchConfig;

/// Twitch limit for logins and channel names
const MAX_NAME_LEN: usize = 25;

/// `@tags :prefix COMMAND params`
static IRC_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:@(\S+) )?(?::(\S+) )?(\S+)(?: (.*))?$").expect("valid IRC line pattern")
});

/// A parsed IRC line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrcLine {
    pub prefix: Option<String>,
    pub command: String,
    /// Middle params followed by the trailing one, if any
    pub params: Vec<String>,
}

impl IrcLine {
    /// Nick part of a `nick!user@host` prefix
    pub fn nick(&self) -> Option<&str> {
        self.prefix.as_deref()?.split('!').next()
    }
}

pub fn parse_line(line: &str) -> Option<IrcLine> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    let caps = IRC_LINE.captures(line)?;

    let prefix = caps.get(2).map(|m| m.as_str().to_string());
    let command = caps.get(3)?.as_str().to_string();

    let mut params = Vec::new();
    if let Some(rest) = caps.get(4) {
        let rest = rest.as_str();
        let (middle, trailing) = match rest.strip_prefix(':') {
            Some(trailing) => ("", Some(trailing)),
            None => match rest.split_once(" :") {
                Some((middle, trailing)) => (middle, Some(trailing)),
                None => (rest, None),
            },
        };
        params.extend(middle.split_whitespace().map(str::to_string));
        if let Some(trailing) = trailing {
            params.push(trailing.to_string());
        }
    }

    Some(IrcLine { prefix, command, params })
}

/// Payload of a `PING` line
pub fn parse_ping(line: &str) -> Option<&str> {
    line.strip_prefix("PING :")
        .or_else(|| line.strip_prefix("PING"))
        .map(|s| s.trim())
}

/// Map an IRC line to a bot event for `channel`
pub fn event_from_line(line: &IrcLine, channel: &str) -> Option<ChatEvent> {
    match line.command.as_str() {
        // End of NAMES list, sent once the JOIN went through
        "366" => {
            let joined = line.params.get(1)?.trim_start_matches('#');
            Some(ChatEvent::Joined {
                channel: joined.to_string(),
            })
        }
        "PRIVMSG" => {
            let target = line.params.first()?.strip_prefix('#')?;
            if target != channel {
                return None;
            }
            let text = line.params.get(1)?;
            Some(ChatEvent::Message(ChatMessage::channel(line.nick()?, target, text.as_str())))
        }
        "WHISPER" => {
            let text = line.params.get(1)?;
            Some(ChatEvent::Message(ChatMessage::whisper(line.nick()?, channel, text.as_str())))
        }
        _ => None,
    }
}

/// Line breaks would end the IRC command early
fn single_line(text: &str) -> String {
    text.replace(&['\r', '\n'][..], " ")
}

pub fn validate_oauth_token(token: &str) -> Result<(), ConfigError> {
    let Some(suffix) = token.strip_prefix("oauth:") else {
        return Err(ConfigError::InvalidValue(
            "Twitch OAuth token must start with 'oauth:'".to_string(),
        ));
    };
    if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::InvalidValue(
            "Twitch OAuth token must be alphanumeric after 'oauth:'".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_twitch_name(name: &str, field: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::MissingField(format!("twitch.{}", field)));
    }
    if name.len() > MAX_NAME_LEN
        || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ConfigError::InvalidValue(format!(
            "twitch.{} must be 1-{} characters of letters, digits and underscores: {:?}",
            field, MAX_NAME_LEN, name
        )));
    }
    Ok(())
}

/// Twitch chat adapter
pub struct TwitchAdapter {
    config: TwitchConfig,
    token: String,
    reader: Option<Lines<BufReader<OwnedReadHalf>>>,
    writer: Option<Mutex<OwnedWriteHalf>>,
    info: BotInfo,
}

impl TwitchAdapter {
    pub fn new(config: TwitchConfig) -> Result<Self, BotError> {
        let token = config
            .authentication
            .clone()
            .ok_or_else(|| ConfigError::MissingField("twitch.authentication".to_string()))?;
        validate_oauth_token(&token)?;
        validate_twitch_name(&config.channel, "channel")?;
        validate_twitch_name(&config.nickname, "nickname")?;

        let info = BotInfo {
            name: "urban-bot".to_string(),
            username: config.nickname.clone(),
            channel: config.channel.clone(),
        };

        Ok(Self {
            config,
            token,
            reader: None,
            writer: None,
            info,
        })
    }

    async fn send_raw(&self, line: &str) -> Result<(), BotError> {
        let writer = self
            .writer
            .as_ref()
            .ok_or_else(|| BotError::Disconnected("Twitch connection not started".to_string()))?;

        let mut writer = writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\r\n").await?;
        writer.flush().await?;
        Ok(())
    }

    async fn send_privmsg(&self, text: &str) -> Result<(), BotError> {
        let text = single_line(text);
        if text.trim().is_empty() {
            tracing::debug!("Skipping empty message to #{}", self.config.channel);
            return Ok(());
        }
        tracing::debug!("> PRIVMSG #{} :{}", self.config.channel, text);
        self.send_raw(&format!("PRIVMSG #{} :{}", self.config.channel, text)).await
    }
}

#[async_trait]
impl Bot for TwitchAdapter {
    async fn start(&mut self) -> Result<(), BotError> {
        tracing::info!(
            "Connecting to {}:{} as {}",
            self.config.host,
            self.config.port,
            self.config.nickname
        );

        let stream = TcpStream::connect((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| BotError::Network(format!("Failed to connect to Twitch: {}", e)))?;
        let (read, write) = stream.into_split();
        self.reader = Some(BufReader::new(read).lines());
        self.writer = Some(Mutex::new(write));

        // Token is never logged
        self.send_raw(&format!("PASS {}", self.token)).await?;
        self.send_raw(&format!("NICK {}", self.config.nickname)).await?;
        // Needed for WHISPER delivery
        self.send_raw("CAP REQ :twitch.tv/commands").await?;
        self.send_raw(&format!("JOIN #{}", self.config.channel)).await?;
        Ok(())
    }

    async fn next_event(&mut self) -> Result<Option<ChatEvent>, BotError> {
        loop {
            let reader = self
                .reader
                .as_mut()
                .ok_or_else(|| BotError::Disconnected("Twitch connection not started".to_string()))?;

            let Some(line) = reader.next_line().await? else {
                tracing::warn!("Twitch closed the connection");
                return Ok(None);
            };
            tracing::debug!("< {}", line);

            if let Some(payload) = parse_ping(&line) {
                self.send_raw(&format!("PONG :{}", payload)).await?;
                continue;
            }

            if let Some(event) = parse_line(&line)
                .as_ref()
                .and_then(|parsed| event_from_line(parsed, &self.config.channel))
            {
                return Ok(Some(event));
            }
        }
    }

    async fn send_message(&self, channel: &str, text: &str) -> Result<(), BotError> {
        if channel != self.config.channel {
            return Err(BotError::Internal(format!("Not joined to #{}", channel)));
        }
        self.send_privmsg(text).await
    }

    async fn send_whisper(&self, user: &str, text: &str) -> Result<(), BotError> {
        self.send_privmsg(&format!("/w {} {}", user, text)).await
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
