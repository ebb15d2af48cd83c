//! Message handling - Parsing and routing of chat events

pub mod parser;
pub mod router;

pub use parser::{MessageParser, ParsedMessage};
pub use router::CommandRouter;
