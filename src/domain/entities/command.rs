use std::fmt;

/// Kind of lookup a chat command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Definition,
    Example,
}

impl CommandType {
    pub const ALL: [CommandType; 2] = [CommandType::Definition, CommandType::Example];

    /// Chat token that triggers this command
    pub fn trigger(&self) -> &'static str {
        match self {
            CommandType::Definition => "!urban",
            CommandType::Example => "!example",
        }
    }

    /// Field of a lookup entry this command reads
    pub fn field(&self) -> &'static str {
        match self {
            CommandType::Definition => "definition",
            CommandType::Example => "example",
        }
    }

    /// Resolve a trigger token at the start of a message
    pub fn from_message(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| text.starts_with(kind.trigger()))
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field())
    }
}

/// A lookup request parsed from a channel message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandType,
    pub term: String,
    pub requester_id: String,
    pub channel_id: String,
}

impl Command {
    pub fn new(
        kind: CommandType,
        term: impl Into<String>,
        requester_id: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            term: term.into(),
            requester_id: requester_id.into(),
            channel_id: channel_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_lookup() {
        assert_eq!(CommandType::from_message("!urban bot"), Some(CommandType::Definition));
        assert_eq!(CommandType::from_message("!example bot"), Some(CommandType::Example));
        assert_eq!(CommandType::from_message("!urban"), Some(CommandType::Definition));
        assert_eq!(CommandType::from_message("hello !urban"), None);
        assert_eq!(CommandType::from_message(""), None);
    }
}
