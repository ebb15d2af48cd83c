//! Command router - Runs chat messages through the lookup pipeline

use std::time::Duration;

use crate::application::errors::BotError;
use crate::application::services::reply;
use crate::application::services::{Admission, CooldownGate};
use crate::domain::entities::{ChatEvent, ChatMessage, Command};
use crate::domain::traits::{Bot, TermLookup, WhisperIgnoreList};
use super::parser::{MessageParser, ParsedMessage};

/// Routes chat events to the lookup pipeline.
///
/// Events are handled one at a time through `&mut self`, so an admission
/// check and the cooldown update that follows it can never interleave
/// with another request.
pub struct CommandRouter<L, S> {
    parser: MessageParser,
    gate: CooldownGate,
    lookup: L,
    ignore_list: S,
    max_chars: usize,
}

impl<L: TermLookup, S: WhisperIgnoreList> CommandRouter<L, S> {
    pub fn new(lookup: L, ignore_list: S, max_chars: usize, cooldown: Duration) -> Self {
        Self {
            parser: MessageParser::new(),
            gate: CooldownGate::new(cooldown),
            lookup,
            ignore_list,
            max_chars,
        }
    }

    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }

    /// Handle one transport event. Errors are logged, never returned, so
    /// the event loop keeps running.
    pub async fn handle(&mut self, bot: &dyn Bot, event: ChatEvent) {
        match event {
            ChatEvent::Joined { channel } => {
                tracing::info!("Successfully joined channel: #{}", channel);
            }
            ChatEvent::Message(message) => {
                if let Err(e) = self.dispatch(bot, &message).await {
                    tracing::error!(
                        "[{}] Failed to handle {} message {} from {}: {}",
                        message.channel,
                        message.kind.as_str(),
                        message.id,
                        message.user,
                        e
                    );
                }
            }
        }
    }

    /// Parse a message and act on it
    pub async fn dispatch(&mut self, bot: &dyn Bot, message: &ChatMessage) -> Result<(), BotError> {
        match self.parser.parse(message) {
            ParsedMessage::Lookup(command) => self.run_lookup(bot, command).await,
            ParsedMessage::MissingTerm(kind) => {
                bot.send_message(&message.channel, &reply::usage_hint(kind)).await
            }
            ParsedMessage::DisableWhispers => {
                tracing::debug!("Adding {} to Do Not Whisper", message.user);
                self.ignore_list.add(&message.user).await?;
                bot.send_whisper(&message.user, reply::WHISPERS_DISABLED_REPLY).await
            }
            ParsedMessage::EnableWhispers => {
                tracing::debug!("Removing {} from Do Not Whisper", message.user);
                self.ignore_list.remove(&message.user).await?;
                bot.send_whisper(&message.user, reply::WHISPERS_ENABLED_REPLY).await
            }
            ParsedMessage::Ignored => Ok(()),
        }
    }

    async fn run_lookup(&mut self, bot: &dyn Bot, command: Command) -> Result<(), BotError> {
        match self.gate.admit(&command.requester_id, &command.channel_id) {
            Admission::Admitted => {
                let result = self.lookup.fetch(&command.term, command.kind).await;
                let response = reply::render(&result, command.kind, self.max_chars);

                bot.send_message(&command.channel_id, &response).await?;
                tracing::info!("{}'s {} -> {}", command.term, command.kind, response);

                if result.is_success() {
                    self.gate.record_success(&command.channel_id);
                }
                Ok(())
            }
            Admission::Rejected { remaining } => {
                tracing::info!(
                    "Cooldown hit with {:.2}s remaining",
                    remaining.as_secs_f64()
                );
                if !self.ignore_list.is_ignored(&command.requester_id).await? {
                    let notice = reply::cooldown_notice(remaining, self.gate.cooldown());
                    bot.send_whisper(&command.requester_id, &notice).await?;
                }
                Ok(())
            }
        }
    }
}
