//! Text normalization for chat replies

pub mod sanitize;
pub mod truncate;

pub use sanitize::sanitize;
pub use truncate::{truncate, TRUNCATION_MARKER};
