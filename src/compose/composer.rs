//! Composer - Draft plus Send State Machine
//!
//! Holds everything a compose form needs and nothing that suspends. A send
//! is split into synchronous steps so any host (GPUI entity, headless
//! session, tests) can place the awaits itself:
//!
//! 1. [`Composer::begin_send`] validates and enters Sending.
//! 2. The host awaits a [`Dispatcher`](crate::compose::dispatcher::Dispatcher).
//! 3. [`Composer::complete_send`] applies the answer and hands back a
//!    [`SentTicket`] when the banner should later be cleared.
//! 4. After the banner delay the host calls [`Composer::expire_sent`].
//!
//! The success banner belongs to the Sent episode that raised it. A new
//! submit while it shows moves the state to Sending but leaves the banner
//! up until its own timeout.

use crate::compose::state::SendState;
use crate::domain::config::MailConfig;
use crate::domain::draft::{Draft, DraftField, OutgoingEmail};
use crate::error::{Error, Result};

/// Identifies one Sent episode and its banner
///
/// Expiring with a stale ticket is ignored, so a banner timer from an earlier
/// send cannot end the banner of a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentTicket(u64);

/// Email composer
#[derive(Debug, Clone)]
pub struct Composer {
    draft: Draft,
    state: SendState,
    /// Body restored after every accepted send
    signature_block: String,
    /// Banner currently shown, if any
    banner: Option<SentTicket>,
    sent_generation: u64,
}

impl Composer {
    /// Seed a draft from the configuration
    pub fn new(config: &MailConfig) -> Self {
        let signature_block = config.signature_block();
        let draft = Draft {
            to: config.default_to.clone().unwrap_or_default(),
            subject: config.default_subject.clone().unwrap_or_default(),
            body: signature_block.clone(),
        };

        Self {
            draft,
            state: SendState::Idle,
            signature_block,
            banner: None,
            sent_generation: 0,
        }
    }

    // ==================== Getters ====================

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    /// Whether the send button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.state.is_sending() && self.draft.missing_fields().is_empty()
    }

    /// Text for the send button
    pub fn send_label(&self) -> &'static str {
        if self.state.is_sending() {
            "Sending..."
        } else {
            "Send"
        }
    }

    /// Whether the success banner is shown
    pub fn banner_visible(&self) -> bool {
        self.banner.is_some()
    }

    // ==================== Transitions ====================

    /// Replace one field of the draft
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Validate the draft and enter Sending
    ///
    /// Returns the payload to deliver, or `Ok(None)` when a send is already
    /// in flight. Empty required fields give [`Error::Validation`] and leave
    /// the composer untouched.
    pub fn begin_send(&mut self) -> Result<Option<OutgoingEmail>> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            tracing::debug!("Submit refused, missing {:?}", missing);
            return Err(Error::Validation { missing });
        }

        if self.state.is_sending() {
            tracing::debug!("Submit ignored, a send is already in flight");
            return Ok(None);
        }

        self.transition(self.state.on_submit());
        Ok(Some(self.draft.to_email()))
    }

    /// Apply the collaborator's answer
    ///
    /// On acceptance the subject is cleared and the body reset to the
    /// signature block; the recipient is kept. A rejection keeps the draft
    /// for a retry. Returns a ticket when Sent was entered.
    pub fn complete_send(&mut self, accepted: bool) -> Option<SentTicket> {
        if !self.state.is_sending() {
            tracing::debug!("Delivery result ignored in state {}", self.state.label());
            return None;
        }

        if !accepted {
            // An earlier banner may still be up
            let next = match self.state.on_delivery(false) {
                SendState::Idle if self.banner.is_some() => SendState::Sent,
                next => next,
            };
            self.transition(next);
            return None;
        }

        self.transition(self.state.on_delivery(true));
        self.draft.subject.clear();
        self.draft.body = self.signature_block.clone();
        self.sent_generation += 1;
        let ticket = SentTicket(self.sent_generation);
        self.banner = Some(ticket);
        Some(ticket)
    }

    /// Clear the success banner raised with `ticket`
    ///
    /// Applies whatever happened since, including a later submit still in
    /// flight. A ticket whose banner was replaced by a newer one is ignored.
    pub fn expire_sent(&mut self, ticket: SentTicket) -> SendState {
        if self.banner == Some(ticket) {
            self.banner = None;
            self.transition(self.state.on_banner_timeout());
        }
        self.state
    }

    fn transition(&mut self, next: SendState) {
        if next != self.state {
            tracing::debug!("Send state {} -> {}", self.state.label(), next.label());
            self.state = next;
        }
    }
}
