//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Text: Sanitizing and truncating lookup text
//! - Services: Cooldown gate and reply rendering
//! - Messaging: Message parsing and command routing
//! - Errors: Domain-specific errors

pub mod errors;
pub mod messaging;
pub mod services;
pub mod text;
