//! Compose Controller
//!
//! Handles field edits, submit orchestration, and the validation notice.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::compose::dispatcher::Dispatcher;
use crate::domain::draft::DraftField;
use crate::services::runtime::run_in_tokio;

/// Compose page controller
#[derive(Clone)]
pub struct ComposeController {
    entities: AppEntities,
    dispatcher: Dispatcher,
}

impl ComposeController {
    /// Create a new controller
    pub fn new(entities: AppEntities, dispatcher: Dispatcher) -> Self {
        Self {
            entities,
            dispatcher,
        }
    }

    /// Store a field edit
    pub fn update_field(&self, field: DraftField, value: &str, cx: &mut App) {
        self.entities.compose.update(cx, |state, cx| {
            if state.composer.draft().get(field) != value {
                state.composer.update_field(field, value);
                cx.notify();
            }
        });
    }

    /// Submit the draft
    ///
    /// Validation failures raise the blocking notice. A valid draft is handed
    /// to the dispatcher on the tokio runtime; the result and the banner
    /// timeout are applied back on the UI thread.
    pub fn submit(&self, cx: &mut App) {
        let begun = self.entities.compose.update(cx, |state, cx| {
            let begun = state.begin_send();
            cx.notify();
            begun
        });

        let email = match begun {
            Ok(Some(email)) => email,
            Ok(None) => return,
            Err(err) => {
                tracing::debug!("Submit refused: {}", err);
                return;
            }
        };

        tracing::debug!("Sending email to {}", email.to);

        let compose = self.entities.compose.clone();
        let delivery = self.dispatcher.deliver(email);
        let dispatcher = self.dispatcher.clone();
        cx.spawn(async move |cx| {
            let accepted = run_in_tokio(delivery).await;

            let ticket = compose
                .update(cx, |state, cx| {
                    let ticket = state.composer.complete_send(accepted);
                    cx.notify();
                    ticket
                })
                .ok()
                .flatten();

            let Some(ticket) = ticket else {
                return;
            };

            run_in_tokio(dispatcher.banner_timeout()).await;
            let _ = compose.update(cx, |state, cx| {
                state.composer.expire_sent(ticket);
                cx.notify();
            });
        })
        .detach();
    }

    /// Close the validation notice
    pub fn dismiss_notice(&self, cx: &mut App) {
        self.entities.compose.update(cx, |state, cx| {
            if state.has_notice() {
                state.dismiss_notice();
                cx.notify();
            }
        });
    }
}
