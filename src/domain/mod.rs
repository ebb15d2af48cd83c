//! Domain layer - Core business objects and the seams to infrastructure
//! 
//! This layer contains:
//! - Entities: Commands, chat messages, lookup results
//! - Traits: Abstractions for infrastructure (Bot, TermLookup, WhisperIgnoreList)

pub mod entities;
pub mod traits;
