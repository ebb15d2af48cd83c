//! urban-bot - Twitch chat bot answering `!urban` and `!example` with
//! Urban Dictionary lookups.

pub mod application;
pub mod domain;
pub mod infrastructure;
