//! Chat reply texts and rendering of lookup results

use std::time::Duration;

use crate::application::text::{sanitize, truncate};
use crate::domain::entities::{CommandType, LookupFailure, LookupResult};

pub const SERVICE_UNAVAILABLE_REPLY: &str =
    "Unknown error encountered, likely related to a rate limit.";
pub const NO_DEFINITION_REPLY: &str = "No definition exists for that term.";
pub const WHISPERS_DISABLED_REPLY: &str =
    "You will no longer be sent whispers. Type !yespm to reenable. ";
pub const WHISPERS_ENABLED_REPLY: &str =
    "You will again be sent whispers. Type !nopm to disable again. ";

/// Reply for a command sent without any term
pub fn usage_hint(kind: CommandType) -> String {
    format!("Please add term(s) like: {} bot", kind.trigger())
}

/// Whisper sent to a requester who hit the cooldown
pub fn cooldown_notice(remaining: Duration, cooldown: Duration) -> String {
    format!(
        "Cooldown hit: {:.2} out of {:.0}s remaining. !nopm to stop these cooldown pm's.",
        remaining.as_secs_f64(),
        cooldown.as_secs_f64()
    )
}

/// Uppercase the first character, lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Turn a lookup result into the chat message for `kind`
pub fn render(result: &LookupResult, kind: CommandType, max_chars: usize) -> String {
    match result {
        LookupResult::Success { text, word } => {
            let body = truncate(&sanitize(text), max_chars);
            match kind {
                CommandType::Definition => format!("{}: {}", capitalize(word), body),
                CommandType::Example => body,
            }
        }
        LookupResult::Failure(LookupFailure::ServiceUnavailable) => {
            SERVICE_UNAVAILABLE_REPLY.to_string()
        }
        LookupResult::Failure(LookupFailure::NoDefinition) => NO_DEFINITION_REPLY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_hint() {
        assert_eq!(usage_hint(CommandType::Definition), "Please add term(s) like: !urban bot");
        assert_eq!(usage_hint(CommandType::Example), "Please add term(s) like: !example bot");
    }

    #[test]
    fn test_cooldown_notice_precision() {
        let notice = cooldown_notice(Duration::from_millis(12_346), Duration::from_secs(20));
        assert_eq!(
            notice,
            "Cooldown hit: 12.35 out of 20s remaining. !nopm to stop these cooldown pm's."
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bot"), "Bot");
        assert_eq!(capitalize("yEET"), "Yeet");
        assert_eq!(capitalize("big Mood"), "Big mood");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_render_definition() {
        let result = LookupResult::success("A [program]\r\nthat chats", "bot");
        assert_eq!(
            render(&result, CommandType::Definition, 150),
            "Bot: A program  that chats."
        );
    }

    #[test]
    fn test_render_example_has_no_headword() {
        let result = LookupResult::success("The [bot] replied.", "bot");
        assert_eq!(render(&result, CommandType::Example, 150), "The bot replied.");
    }

    #[test]
    fn test_render_failures() {
        assert_eq!(
            render(&LookupResult::Failure(LookupFailure::NoDefinition), CommandType::Definition, 150),
            NO_DEFINITION_REPLY
        );
        assert_eq!(
            render(&LookupResult::Failure(LookupFailure::ServiceUnavailable), CommandType::Example, 150),
            SERVICE_UNAVAILABLE_REPLY
        );
    }
}
