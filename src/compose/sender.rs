//! MailSender - Send Collaborator Capability
//!
//! The composer never delivers mail itself. A host injects a [`MailSender`]
//! that answers `Ok(true)` when the email was accepted for delivery and
//! `Ok(false)` when it was rejected. An `Err` is a failure; the composer
//! contains it and treats it as a rejection.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::compose::timer::Timer;
use crate::domain::draft::OutgoingEmail;
use crate::error::Result;

/// Asynchronous delivery collaborator
pub trait MailSender: Send + Sync {
    /// Hand an email over for delivery
    ///
    /// The future must eventually resolve; the composer applies no timeout.
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'_, Result<bool>>;
}

/// Stand-in used when no collaborator is configured
///
/// Waits a fixed delay and accepts every email.
pub struct SimulatedSender {
    timer: Arc<dyn Timer>,
    delay: Duration,
}

impl SimulatedSender {
    pub fn new(timer: Arc<dyn Timer>, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

impl MailSender for SimulatedSender {
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move {
            tracing::debug!(
                "Simulating send to {} ({} ms)",
                email.to,
                self.delay.as_millis()
            );
            self.timer.sleep(self.delay).await;
            Ok(true)
        })
    }
}

/// Adapter turning an async closure into a [`MailSender`]
pub struct FnSender<F> {
    handler: F,
}

impl<F, Fut> FnSender<F>
where
    F: Fn(OutgoingEmail) -> Fut + Send + Sync,
    Fut: Future<Output = Result<bool>> + Send + 'static,
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F, Fut> MailSender for FnSender<F>
where
    F: Fn(OutgoingEmail) -> Fut + Send + Sync,
    Fut: Future<Output = Result<bool>> + Send + 'static,
{
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'_, Result<bool>> {
        Box::pin((self.handler)(email))
    }
}

/// Wrap an async closure as a shareable sender
pub fn sender_fn<F, Fut>(handler: F) -> Arc<dyn MailSender>
where
    F: Fn(OutgoingEmail) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<bool>> + Send + 'static,
{
    Arc::new(FnSender::new(handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::timer::TokioTimer;
    use crate::error::Error;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            to: "b@x.com".to_string(),
            subject: "Hi".to_string(),
            body: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_sender_waits_then_accepts() {
        let sender = SimulatedSender::new(Arc::new(TokioTimer), Duration::from_millis(1500));
        let start = tokio::time::Instant::now();

        let accepted = sender.send(email()).await.expect("simulated send");

        assert!(accepted);
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn fn_sender_forwards_payload_and_result() {
        let sender = sender_fn(|email: OutgoingEmail| async move { Ok(email.subject == "Hi") });
        assert!(sender.send(email()).await.expect("closure send"));

        let failing = sender_fn(|_email: OutgoingEmail| async move {
            Err(Error::SendFailed {
                message: "relay refused".to_string(),
            })
        });
        assert!(failing.send(email()).await.is_err());
    }
}
