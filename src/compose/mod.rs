//! Compose - UI-Independent Core
//!
//! The compose/send state machine, its collaborator and clock seams, and a
//! headless host. Nothing here depends on GPUI.

pub mod composer;
pub mod dispatcher;
pub mod sender;
pub mod session;
pub mod state;
pub mod timer;

pub use composer::{Composer, SentTicket};
pub use dispatcher::Dispatcher;
pub use sender::{FnSender, MailSender, SimulatedSender, sender_fn};
pub use session::{ComposeSession, SubmitOutcome};
pub use state::SendState;
pub use timer::{Timer, TokioTimer};
