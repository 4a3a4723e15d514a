//! ComposeState - Composer Entity State

use gpui::SharedString;

use crate::compose::composer::Composer;
use crate::domain::config::MailConfig;
use crate::domain::draft::OutgoingEmail;
use crate::error::Result;

/// Text of the blocking notice for a refused submit
pub const VALIDATION_NOTICE: &str = "Please fill in all required fields";

/// State for the compose form
#[derive(Debug, Clone)]
pub struct ComposeState {
    /// Draft and send state machine
    pub composer: Composer,
    /// Blocking notice shown over the form (validation failures)
    pub notice: Option<SharedString>,
}

impl ComposeState {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            composer: Composer::new(config),
            notice: None,
        }
    }

    /// Show a blocking notice
    pub fn show_notice(&mut self, message: impl Into<SharedString>) {
        self.notice = Some(message.into());
    }

    /// Dismiss the notice, if any
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Whether a notice is blocking the form
    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    /// Start a send from the form
    ///
    /// Same contract as [`Composer::begin_send`]; a validation failure also
    /// raises the blocking notice.
    pub fn begin_send(&mut self) -> Result<Option<OutgoingEmail>> {
        let begun = self.composer.begin_send();
        if let Err(err) = &begun
            && err.is_validation()
        {
            self.show_notice(VALIDATION_NOTICE);
        }
        begun
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::state::SendState;
    use crate::domain::draft::DraftField;

    #[test]
    fn notice_lifecycle() {
        let mut state = ComposeState::new(&MailConfig::default());
        assert!(!state.has_notice());

        state.show_notice(VALIDATION_NOTICE);
        assert_eq!(
            state.notice.as_ref().map(|n| n.to_string()),
            Some("Please fill in all required fields".to_string())
        );

        state.dismiss_notice();
        assert!(!state.has_notice());
    }

    #[test]
    fn refused_submit_raises_notice() {
        let mut state = ComposeState::new(&MailConfig::default());
        state.composer.update_field(DraftField::Subject, "Hi");

        let err = state.begin_send().expect_err("validation");

        assert!(err.is_validation());
        assert_eq!(
            state.notice.as_ref().map(|n| n.to_string()),
            Some(VALIDATION_NOTICE.to_string())
        );
        assert_eq!(state.composer.state(), SendState::Idle);
    }

    #[test]
    fn valid_submit_raises_no_notice() {
        let mut state = ComposeState::new(&MailConfig::default());
        state.composer.update_field(DraftField::To, "b@x.com");
        state.composer.update_field(DraftField::Subject, "Hi");

        let email = state.begin_send().expect("valid").expect("payload");

        assert_eq!(email.to, "b@x.com");
        assert!(!state.has_notice());
        assert_eq!(state.composer.state(), SendState::Sending);

        // Ignored while in flight, still no notice
        assert_eq!(state.begin_send().expect("valid"), None);
        assert!(!state.has_notice());
    }
}
