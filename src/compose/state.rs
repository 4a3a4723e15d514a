//! SendState - Compose/Send State Machine
//!
//! ```text
//!          submit(valid)          accepted
//!   Idle ───────────────▶ Sending ─────────▶ Sent
//!    ▲                       │                │
//!    │      not accepted     │                │
//!    ├───────────────────────┘                │
//!    │           banner timeout               │
//!    └────────────────────────────────────────┘
//! ```
//!
//! Transitions are pure: each returns the next state and leaves the
//! receiver untouched. An event that does not apply to the current state
//! yields the current state.

/// Send progress of a composer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendState {
    /// Waiting for user input
    #[default]
    Idle,
    /// A delivery is in flight
    Sending,
    /// Last delivery was accepted; success banner is shown
    Sent,
}

impl SendState {
    /// A validated submit
    ///
    /// Sent may be re-submitted while its banner shows; the banner itself is
    /// timed by the composer and outlives this transition.
    #[must_use]
    pub fn on_submit(self) -> Self {
        match self {
            SendState::Idle | SendState::Sent => SendState::Sending,
            SendState::Sending => SendState::Sending,
        }
    }

    /// The collaborator answered
    #[must_use]
    pub fn on_delivery(self, accepted: bool) -> Self {
        match self {
            SendState::Sending if accepted => SendState::Sent,
            SendState::Sending => SendState::Idle,
            other => other,
        }
    }

    /// The success banner expired
    #[must_use]
    pub fn on_banner_timeout(self) -> Self {
        match self {
            SendState::Sent => SendState::Idle,
            other => other,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SendState::Sending)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SendState::Sent)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SendState::Idle => "idle",
            SendState::Sending => "sending",
            SendState::Sent => "sent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_cycles_back_to_idle() {
        let state = SendState::default();
        assert_eq!(state, SendState::Idle);

        let state = state.on_submit();
        assert_eq!(state, SendState::Sending);
        let state = state.on_delivery(true);
        assert_eq!(state, SendState::Sent);
        let state = state.on_banner_timeout();
        assert_eq!(state, SendState::Idle);
    }

    #[test]
    fn rejection_returns_to_idle() {
        assert_eq!(SendState::Sending.on_delivery(false), SendState::Idle);
    }

    #[test]
    fn stray_events_are_ignored() {
        assert_eq!(SendState::Idle.on_delivery(true), SendState::Idle);
        assert_eq!(SendState::Sent.on_delivery(false), SendState::Sent);
        assert_eq!(SendState::Idle.on_banner_timeout(), SendState::Idle);
        assert_eq!(SendState::Sending.on_banner_timeout(), SendState::Sending);
    }

    #[test]
    fn submit_from_sent_starts_a_new_send() {
        assert_eq!(SendState::Sent.on_submit(), SendState::Sending);
        assert_eq!(SendState::Sending.on_submit(), SendState::Sending);
    }
}
