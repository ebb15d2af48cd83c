//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod lookup;
pub mod store;

pub use bot::{Bot, BotInfo};
pub use lookup::TermLookup;
pub use store::WhisperIgnoreList;
