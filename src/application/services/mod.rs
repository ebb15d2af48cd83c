//! Application services - Cooldown and reply rendering

pub mod cooldown;
pub mod reply;

pub use cooldown::{Admission, CooldownGate};
