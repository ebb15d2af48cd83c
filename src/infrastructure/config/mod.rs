//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use crate::application::errors::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://api.urbandictionary.com/v0/define";

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub twitch: TwitchConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub reply: ReplyConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TwitchConfig {
    pub host: String,
    pub port: u16,
    /// Channel login, without `#`
    pub channel: String,
    pub nickname: String,
    /// `oauth:` token. Without one the bot runs on the console.
    pub authentication: Option<String>,
}

impl std::fmt::Debug for TwitchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitchConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("channel", &self.channel)
            .field("nickname", &self.nickname)
            .field("authentication", &self.authentication.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReplyConfig {
    pub max_chars: usize,
    pub cooldown_seconds: f64,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            max_chars: 150,
            cooldown_seconds: 20.0,
        }
    }
}

impl ReplyConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs_f64(self.cooldown_seconds)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StorageConfig {
    pub database: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("urban-bot.db"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            twitch: TwitchConfig {
                host: "irc.chat.twitch.tv".to_string(),
                port: 6667,
                channel: "channel".to_string(),
                nickname: "urban_bot".to_string(),
                authentication: None,
            },
            lookup: LookupConfig::default(),
            reply: ReplyConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(token) = std::env::var("TWITCH_AUTH") {
            config.twitch.authentication = Some(token);
        }

        if let Ok(channel) = std::env::var("TWITCH_CHANNEL") {
            config.twitch.channel = channel;
        }

        if let Ok(nick) = std::env::var("TWITCH_NICK") {
            config.twitch.nickname = nick;
        }

        config.normalize();
        config
    }

    /// Twitch logins are lowercase and carried without `#`
    fn normalize(&mut self) {
        self.twitch.channel = self.twitch.channel.trim_start_matches('#').to_lowercase();
        self.twitch.nickname = self.twitch.nickname.to_lowercase();
        let blank_token = self
            .twitch
            .authentication
            .as_deref()
            .map_or(false, |token| token.trim().is_empty());
        if blank_token {
            self.twitch.authentication = None;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.twitch.channel.is_empty() {
            return Err(ConfigError::MissingField("twitch.channel".to_string()));
        }
        if self.twitch.nickname.is_empty() {
            return Err(ConfigError::MissingField("twitch.nickname".to_string()));
        }
        if self.reply.max_chars == 0 {
            return Err(ConfigError::InvalidValue("reply.max-chars must be positive".to_string()));
        }
        if Duration::try_from_secs_f64(self.reply.cooldown_seconds).is_err() {
            return Err(ConfigError::InvalidValue(format!(
                "reply.cooldown-seconds must be a non-negative number of seconds within range, got {}",
                self.reply.cooldown_seconds
            )));
        }
        if self.lookup.endpoint.is_empty() {
            return Err(ConfigError::MissingField("lookup.endpoint".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let yaml = r##"
twitch:
  host: irc.chat.twitch.tv
  port: 6667
  channel: "#SomeStreamer"
  nickname: Urban_Bot
  authentication: oauth:abc123
lookup:
  endpoint: http://localhost:8080/define
  timeout-seconds: 3
reply:
  max-chars: 200
  cooldown-seconds: 7.5
storage:
  database: /tmp/ignore.db
"##;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.twitch.channel, "somestreamer");
        assert_eq!(config.twitch.nickname, "urban_bot");
        assert_eq!(config.twitch.authentication.as_deref(), Some("oauth:abc123"));
        assert_eq!(config.lookup.timeout(), Duration::from_secs(3));
        assert_eq!(config.reply.max_chars, 200);
        assert_eq!(config.reply.cooldown(), Duration::from_millis(7500));
        assert_eq!(config.storage.database, PathBuf::from("/tmp/ignore.db"));
    }

    #[test]
    fn test_optional_sections_default() {
        let yaml = r#"
twitch:
  host: irc.chat.twitch.tv
  port: 6667
  channel: streamer
  nickname: bot
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert!(config.twitch.authentication.is_none());
        assert_eq!(config.lookup.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.reply.max_chars, 150);
        assert_eq!(config.reply.cooldown(), Duration::from_secs(20));
    }

    #[test]
    fn test_rejects_zero_budget() {
        let yaml = r#"
twitch:
  host: irc.chat.twitch.tv
  port: 6667
  channel: streamer
  nickname: bot
reply:
  max-chars: 0
  cooldown-seconds: 20
"#;
        assert!(matches!(Config::from_yaml(yaml), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_rejects_unrepresentable_cooldown() {
        for value in ["1e300", "-1", ".nan"] {
            let yaml = format!(
                "twitch:\n  host: irc.chat.twitch.tv\n  port: 6667\n  channel: streamer\n  nickname: bot\nreply:\n  max-chars: 150\n  cooldown-seconds: {}\n",
                value
            );
            assert!(
                matches!(Config::from_yaml(&yaml), Err(ConfigError::InvalidValue(_))),
                "accepted cooldown-seconds: {}",
                value
            );
        }
    }

    #[test]
    fn test_default_roundtrips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.twitch.host, "irc.chat.twitch.tv");
        assert_eq!(config.reply.max_chars, 150);
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut config = Config::default();
        config.twitch.authentication = Some("oauth:secret".to_string());
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
