//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Database: SQLite do-not-whisper list
//! - Storage: In-memory do-not-whisper list
//! - Lookup: Urban Dictionary HTTP client
//! - Adapters: Chat transports (Twitch, console)

pub mod adapters;
pub mod config;
pub mod database;
pub mod lookup;
pub mod storage;
