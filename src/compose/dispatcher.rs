//! Dispatcher - The Awaited Half of a Send
//!
//! Owns the collaborator and the clock. Everything it returns is a
//! `'static + Send` future so a host can run it on the tokio bridge while
//! the composer stays on its own thread.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::compose::sender::{MailSender, SimulatedSender};
use crate::compose::timer::{Timer, TokioTimer};
use crate::domain::config::MailConfig;
use crate::domain::draft::OutgoingEmail;

/// Delivers drafts and times the success banner
#[derive(Clone)]
pub struct Dispatcher {
    sender: Arc<dyn MailSender>,
    timer: Arc<dyn Timer>,
    banner: Duration,
}

impl Dispatcher {
    /// Dispatcher on the tokio clock
    pub fn new(config: &MailConfig) -> Self {
        Self::with_timer(config, Arc::new(TokioTimer))
    }

    /// Dispatcher on an injected clock
    ///
    /// Without a configured collaborator, sends go to a [`SimulatedSender`]
    /// sharing the same clock.
    pub fn with_timer(config: &MailConfig, timer: Arc<dyn Timer>) -> Self {
        let sender = match &config.on_send {
            Some(sender) => sender.clone(),
            None => {
                tracing::info!("No send handler configured, sends will be simulated");
                Arc::new(SimulatedSender::new(
                    timer.clone(),
                    config.timings.simulated_send(),
                ))
            }
        };

        Self {
            sender,
            timer,
            banner: config.timings.sent_banner(),
        }
    }

    /// Hand `email` to the collaborator and report whether it was accepted
    ///
    /// A failing collaborator counts as a rejection; its error is logged and
    /// never propagated.
    pub fn deliver(&self, email: OutgoingEmail) -> BoxFuture<'static, bool> {
        let sender = self.sender.clone();
        Box::pin(async move {
            let to = email.to.clone();
            match sender.send(email).await {
                Ok(true) => {
                    tracing::info!("Email accepted for delivery");
                    tracing::debug!("Accepted email was addressed to {}", to);
                    true
                }
                Ok(false) => {
                    tracing::warn!("Email to {} was rejected by the send handler", to);
                    false
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Send handler failed for {}, treating as rejected", to);
                    false
                }
            }
        })
    }

    /// Resolves once the success banner should be cleared
    pub fn banner_timeout(&self) -> BoxFuture<'static, ()> {
        self.timer.sleep(self.banner)
    }
}
