//! Workspace - Main Shell

use gpui::{prelude::*, Context, Entity, IntoElement, Render, Window};

use crate::app::entities::AppEntities;
use crate::components::layout::shell::Shell;
use crate::compose::dispatcher::Dispatcher;
use crate::features::compose::page::ComposePage;

/// Main workspace containing the application layout
pub struct Workspace {
    compose_page: Entity<ComposePage>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        dispatcher: Dispatcher,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let compose_page = cx.new(|cx| ComposePage::new(entities, dispatcher, window, cx));
        Self { compose_page }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        Shell::new().child(self.compose_page.clone())
    }
}
