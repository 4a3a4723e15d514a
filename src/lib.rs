//! Mail Composer Library
//!
//! An email composition widget: recipient, subject, and body fields with a
//! send action that delegates to a caller-supplied [`MailSender`] or, when
//! none is configured, simulates sending with a fixed delay.
//!
//! The [`compose`] module holds the UI-independent core (draft, state
//! machine, send collaborator, headless session). The remaining modules
//! render it as a GPUI window.
//!
//! [`MailSender`]: compose::sender::MailSender

pub mod app;
pub mod components;
pub mod compose;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod theme;
