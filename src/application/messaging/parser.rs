//! Message parser - Turns chat messages into bot commands

use crate::domain::entities::{ChatMessage, Command, CommandType, MessageKind};

pub const DISABLE_WHISPERS: &str = "!nopm";
pub const ENABLE_WHISPERS: &str = "!yespm";

/// What a chat message asks the bot to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    /// A lookup with a non-empty term
    Lookup(Command),
    /// A lookup trigger with nothing after it
    MissingTerm(CommandType),
    DisableWhispers,
    EnableWhispers,
    Ignored,
}

/// Parses incoming messages into commands
#[derive(Debug, Default, Clone)]
pub struct MessageParser;

impl MessageParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, message: &ChatMessage) -> ParsedMessage {
        match message.kind {
            MessageKind::Channel => self.parse_channel(message),
            MessageKind::Whisper => self.parse_whisper(&message.text),
        }
    }

    fn parse_channel(&self, message: &ChatMessage) -> ParsedMessage {
        let Some(kind) = CommandType::from_message(&message.text) else {
            return ParsedMessage::Ignored;
        };

        // First token is the trigger, the rest is the term
        let term = message
            .text
            .split_whitespace()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ");

        if term.is_empty() {
            return ParsedMessage::MissingTerm(kind);
        }

        ParsedMessage::Lookup(Command::new(kind, term, &message.user, &message.channel))
    }

    /// Whisper commands must match exactly
    fn parse_whisper(&self, text: &str) -> ParsedMessage {
        match text {
            DISABLE_WHISPERS => ParsedMessage::DisableWhispers,
            ENABLE_WHISPERS => ParsedMessage::EnableWhispers,
            _ => ParsedMessage::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_channel(text: &str) -> ParsedMessage {
        MessageParser::new().parse(&ChatMessage::channel("viewer", "streamer", text))
    }

    #[test]
    fn test_parse_definition() {
        assert_eq!(
            parse_channel("!urban  big   mood "),
            ParsedMessage::Lookup(Command::new(CommandType::Definition, "big mood", "viewer", "streamer"))
        );
    }

    #[test]
    fn test_parse_example() {
        assert_eq!(
            parse_channel("!example bot"),
            ParsedMessage::Lookup(Command::new(CommandType::Example, "bot", "viewer", "streamer"))
        );
    }

    #[test]
    fn test_missing_term() {
        assert_eq!(parse_channel("!urban"), ParsedMessage::MissingTerm(CommandType::Definition));
        assert_eq!(parse_channel("!example   "), ParsedMessage::MissingTerm(CommandType::Example));
    }

    #[test]
    fn test_ignores_plain_chat() {
        assert_eq!(parse_channel("hello there"), ParsedMessage::Ignored);
        assert_eq!(parse_channel("what is !urban"), ParsedMessage::Ignored);
        assert_eq!(parse_channel(DISABLE_WHISPERS), ParsedMessage::Ignored);
    }

    #[test]
    fn test_whisper_commands() {
        let parser = MessageParser::new();
        let whisper = |text: &str| parser.parse(&ChatMessage::whisper("viewer", "streamer", text));

        assert_eq!(whisper("!nopm"), ParsedMessage::DisableWhispers);
        assert_eq!(whisper("!yespm"), ParsedMessage::EnableWhispers);
        assert_eq!(whisper("!nopm please"), ParsedMessage::Ignored);
        assert_eq!(whisper("!urban bot"), ParsedMessage::Ignored);
    }
}
