//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::MailConfig;
use crate::state::compose_state::ComposeState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Draft, send state, and validation notice
    pub compose: Entity<ComposeState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the configuration
    pub fn init(config: &MailConfig, cx: &mut App) -> Self {
        Self {
            compose: cx.new(|_| ComposeState::new(config)),
        }
    }
}
