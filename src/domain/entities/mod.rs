//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod lookup;
pub mod message;

pub use command::{Command, CommandType};
pub use lookup::{LookupFailure, LookupResult};
pub use message::{ChatEvent, ChatMessage, MessageKind};
