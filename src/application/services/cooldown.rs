//! Cooldown gate shared by everyone in a channel except its owner

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Admission decision for a lookup request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Rejected { remaining: Duration },
}

/// Tracks the last successful fetch per channel.
///
/// Only [`CooldownGate::record_success`] moves the window, so failed
/// lookups never cost anyone their turn.
#[derive(Debug)]
pub struct CooldownGate {
    cooldown: Duration,
    last_success: HashMap<String, Instant>,
}

impl CooldownGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_success: HashMap::new(),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn admit(&self, requester_id: &str, channel_id: &str) -> Admission {
        self.admit_at(requester_id, channel_id, Instant::now())
    }

    pub fn admit_at(&self, requester_id: &str, channel_id: &str, now: Instant) -> Admission {
        // Channel owner bypasses the timer
        if requester_id == channel_id {
            return Admission::Admitted;
        }

        let Some(last) = self.last_success.get(channel_id) else {
            return Admission::Admitted;
        };

        match (*last + self.cooldown).checked_duration_since(now) {
            Some(remaining) if !remaining.is_zero() => Admission::Rejected { remaining },
            _ => Admission::Admitted,
        }
    }

    pub fn record_success(&mut self, channel_id: &str) {
        self.record_success_at(channel_id, Instant::now());
    }

    /// Never moves the timestamp backwards.
    pub fn record_success_at(&mut self, channel_id: &str, now: Instant) {
        let last = self.last_success.entry(channel_id.to_string()).or_insert(now);
        if now > *last {
            *last = now;
        }
    }

    pub fn last_success(&self, channel_id: &str) -> Option<Instant> {
        self.last_success.get(channel_id).copied()
    }
}
