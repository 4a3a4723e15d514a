//! ComposeSession - Headless Composer Host
//!
//! Runs a complete submit without a window: validate, deliver, apply the
//! result, and schedule the banner revert as a tokio task. Must be used
//! from within a tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::compose::composer::Composer;
use crate::compose::dispatcher::Dispatcher;
use crate::compose::state::SendState;
use crate::compose::timer::Timer;
use crate::domain::config::MailConfig;
use crate::domain::draft::{Draft, DraftField};
use crate::error::Result;

/// How a submit settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the composer is in Sent and will revert to Idle
    Sent,
    /// Rejected or failed; the composer is back in Idle with the draft kept
    Rejected,
    /// A send was already in flight
    Ignored,
}

/// A composer with its dispatcher
///
/// Clones share the same composer. The lock is never held across an await.
#[derive(Clone)]
pub struct ComposeSession {
    composer: Arc<Mutex<Composer>>,
    dispatcher: Dispatcher,
}

impl ComposeSession {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            composer: Arc::new(Mutex::new(Composer::new(config))),
            dispatcher: Dispatcher::new(config),
        }
    }

    pub fn with_timer(config: &MailConfig, timer: Arc<dyn Timer>) -> Self {
        Self {
            composer: Arc::new(Mutex::new(Composer::new(config))),
            dispatcher: Dispatcher::with_timer(config, timer),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Composer> {
        self.composer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn draft(&self) -> Draft {
        self.lock().draft().clone()
    }

    pub fn state(&self) -> SendState {
        self.lock().state()
    }

    /// Read the composer
    pub fn inspect<R>(&self, f: impl FnOnce(&Composer) -> R) -> R {
        f(&self.lock())
    }

    pub fn update_field(&self, field: DraftField, value: impl Into<String>) {
        self.lock().update_field(field, value);
    }

    /// Submit the current draft
    ///
    /// Only a validation failure is returned as an error; collaborator
    /// failures settle as [`SubmitOutcome::Rejected`].
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let begun = self.lock().begin_send()?;
        let Some(email) = begun else {
            return Ok(SubmitOutcome::Ignored);
        };

        let accepted = self.dispatcher.deliver(email).await;

        let ticket = self.lock().complete_send(accepted);
        let Some(ticket) = ticket else {
            return Ok(SubmitOutcome::Rejected);
        };

        let composer = self.composer.clone();
        let banner = self.dispatcher.banner_timeout();
        tokio::spawn(async move {
            banner.await;
            composer
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .expire_sent(ticket);
        });

        Ok(SubmitOutcome::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::time::{sleep, Instant};

    use crate::compose::sender::sender_fn;
    use crate::compose::timer::TokioTimer;
    use crate::domain::draft::OutgoingEmail;
    use crate::error::Error;

    fn jane() -> MailConfig {
        MailConfig {
            default_to: Some("a@x.com".to_string()),
            signature: Some("— Jane".to_string()),
            ..Default::default()
        }
    }

    fn answering(accepted: bool) -> MailConfig {
        jane().with_sender(sender_fn(move |_email: OutgoingEmail| async move { Ok(accepted) }))
    }

    #[tokio::test(start_paused = true)]
    async fn empty_recipient_shows_notice_and_changes_nothing() {
        let session = ComposeSession::new(&answering(true));
        session.update_field(DraftField::To, "");
        session.update_field(DraftField::Subject, "Hi");
        let before = session.draft();

        let err = session.submit().await.expect_err("validation");

        assert!(err.is_validation());
        assert_eq!(session.state(), SendState::Idle);
        assert_eq!(session.draft(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_send_resets_then_banner_clears_after_three_seconds() {
        let session = ComposeSession::new(&answering(true));
        session.update_field(DraftField::To, "b@x.com");
        session.update_field(DraftField::Subject, "Hi");

        assert_eq!(session.submit().await.expect("submit"), SubmitOutcome::Sent);
        assert_eq!(
            session.draft(),
            Draft {
                to: "b@x.com".to_string(),
                subject: String::new(),
                body: "\n\n— Jane".to_string(),
            }
        );
        assert_eq!(session.state(), SendState::Sent);

        sleep(Duration::from_millis(2999)).await;
        assert_eq!(session.state(), SendState::Sent);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(session.state(), SendState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_send_keeps_draft() {
        let session = ComposeSession::new(&answering(false));
        session.update_field(DraftField::Subject, "Hi");
        session.update_field(DraftField::Body, "Draft text");
        let before = session.draft();

        assert_eq!(session.submit().await.expect("submit"), SubmitOutcome::Rejected);
        assert_eq!(session.state(), SendState::Idle);
        assert_eq!(session.draft(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn failing_handler_counts_as_rejection() {
        let config = jane().with_sender(sender_fn(|_email: OutgoingEmail| async {
            Err(Error::SendFailed {
                message: "timeout talking to relay".to_string(),
            })
        }));
        let session = ComposeSession::new(&config);
        session.update_field(DraftField::Subject, "Hi");

        assert_eq!(session.submit().await.expect("submit"), SubmitOutcome::Rejected);
        assert_eq!(session.state(), SendState::Idle);
        assert_eq!(session.draft().subject, "Hi");
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_send_takes_fifteen_hundred_ms() {
        let session = ComposeSession::with_timer(&jane(), Arc::new(TokioTimer));
        session.update_field(DraftField::Subject, "Hi");
        let start = Instant::now();

        assert_eq!(session.submit().await.expect("submit"), SubmitOutcome::Sent);
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
        assert_eq!(session.draft().subject, "");
        assert_eq!(session.draft().to, "a@x.com");
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_submit_is_ignored_while_sending() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let config = jane().with_sender(sender_fn(move |_email: OutgoingEmail| {
            counter.fetch_add(1, Ordering::SeqCst);
            async {
                sleep(Duration::from_millis(500)).await;
                Ok(true)
            }
        }));
        let session = ComposeSession::new(&config);
        session.update_field(DraftField::Subject, "Hi");

        let first = tokio::spawn({
            let session = session.clone();
            async move { session.submit().await }
        });
        sleep(Duration::from_millis(100)).await;
        assert_eq!(session.state(), SendState::Sending);
        let draft = session.draft();

        assert_eq!(session.submit().await.expect("submit"), SubmitOutcome::Ignored);
        assert_eq!(session.state(), SendState::Sending);
        assert_eq!(session.draft(), draft);

        let outcome = first.await.expect("join").expect("submit");
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn resubmit_keeps_first_banner_until_three_seconds_after_it_showed() {
        let config = jane().with_sender(sender_fn(|_email: OutgoingEmail| async {
            sleep(Duration::from_millis(2500)).await;
            Ok(true)
        }));
        let session = ComposeSession::new(&config);
        session.update_field(DraftField::Subject, "First");
        assert_eq!(session.submit().await.expect("submit"), SubmitOutcome::Sent);
        let banner_shown = Instant::now();

        // 1s into the first banner, send again
        sleep(Duration::from_millis(1000)).await;
        session.update_field(DraftField::Subject, "Second");
        let second = tokio::spawn({
            let session = session.clone();
            async move { session.submit().await }
        });
        sleep(Duration::from_millis(10)).await;
        assert_eq!(session.state(), SendState::Sending);
        assert!(session.inspect(|composer| composer.banner_visible()));

        // Still in flight when the first banner times out
        sleep(Duration::from_millis(1989)).await;
        assert_eq!(banner_shown.elapsed(), Duration::from_millis(2999));
        assert!(session.inspect(|composer| composer.banner_visible()));

        sleep(Duration::from_millis(2)).await;
        assert_eq!(session.state(), SendState::Sending);
        assert!(!session.inspect(|composer| composer.banner_visible()));

        assert_eq!(second.await.expect("join").expect("submit"), SubmitOutcome::Sent);
        assert!(session.inspect(|composer| composer.banner_visible()));

        sleep(Duration::from_millis(2999)).await;
        assert_eq!(session.state(), SendState::Sent);
        sleep(Duration::from_millis(2)).await;
        assert_eq!(session.state(), SendState::Idle);
    }
}
