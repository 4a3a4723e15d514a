//! Modal Component
//!
//! A blocking notice dialog with a single acknowledge button.

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::components::primitives::button::Button;
use crate::theme::colors::MailColors;
use crate::theme::typography::Typography;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    message: SharedString,
    on_close: Option<Box<dyn Fn(&mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>, message: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_close: None,
        }
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut ok_button = Button::primary("modal-ok", "OK");
        if let Some(handler) = self.on_close {
            ok_button = ok_button.on_click(move |_event, _window, cx| handler(cx));
        }

        // Backdrop swallows clicks so the form behind stays blocked
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .bg(MailColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
            .child(
                div()
                    .bg(MailColors::background())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(320.0))
                    .max_w(px(480.0))
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(MailColors::border())
                            .text_size(px(Typography::TEXT_BASE))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(MailColors::text_primary())
                            .child(self.title),
                    )
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(MailColors::text_secondary())
                            .child(self.message),
                    )
                    .child(
                        div().px_6().pb_4().flex().justify_end().child(ok_button),
                    ),
            )
    }
}
