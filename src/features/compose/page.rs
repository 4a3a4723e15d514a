//! Compose Page
//!
//! Recipient, subject, and body fields with a send toolbar, the success
//! banner, and the blocking validation notice.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::compose::dispatcher::Dispatcher;
use crate::constants::FIELD_LABEL_WIDTH;
use crate::domain::draft::DraftField;
use crate::features::compose::controller::ComposeController;
use crate::helpers::{humanize_keystroke, ComposeAction, SEND_KEYSTROKE};
use crate::theme::colors::MailColors;
use crate::theme::typography::Typography;

/// One labelled row above the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderRow {
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    /// Draft field the row edits; `None` renders an inert input
    field: Option<DraftField>,
}

const HEADER_ROWS: [HeaderRow; 3] = [
    HeaderRow {
        id: "compose-to",
        label: "To:",
        placeholder: "recipient@example.com",
        field: Some(DraftField::To),
    },
    HeaderRow {
        id: "compose-cc",
        label: "Cc:",
        placeholder: "Add Cc recipients...",
        field: None,
    },
    HeaderRow {
        id: "compose-subject",
        label: "Subject:",
        placeholder: "Enter subject...",
        field: Some(DraftField::Subject),
    },
];

/// Compose page component
pub struct ComposePage {
    entities: AppEntities,
    controller: ComposeController,
    focus_handle: FocusHandle,
    header_inputs: Vec<(HeaderRow, Entity<TextInput>)>,
    body_input: Entity<TextInput>,
}

impl ComposePage {
    pub fn new(
        entities: AppEntities,
        dispatcher: Dispatcher,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let controller = ComposeController::new(entities.clone(), dispatcher);
        let draft = entities.compose.read(cx).composer.draft().clone();

        let header_inputs: Vec<(HeaderRow, Entity<TextInput>)> = HEADER_ROWS
            .iter()
            .map(|row| {
                let value = row.field.map(|field| draft.get(field)).unwrap_or_default();
                let input = text_input(row.id, value, row.placeholder, false, cx);
                if let Some(field) = row.field {
                    Self::bind_field(&input, field, &controller, cx);
                }
                (*row, input)
            })
            .collect();
        let body_input = text_input("compose-body", draft.body.clone(), "Write your message...", true, cx);
        Self::bind_field(&body_input, DraftField::Body, &controller, cx);

        // Keep inputs in step with resets made by the composer
        cx.observe(&entities.compose, |this, _, cx| this.sync_inputs(cx))
            .detach();

        if let Some((_, first)) = header_inputs.first() {
            window.focus(&first.read(cx).focus_handle(cx));
        }

        Self {
            entities,
            controller,
            focus_handle: cx.focus_handle(),
            header_inputs,
            body_input,
        }
    }

    fn bind_field(
        input: &Entity<TextInput>,
        field: DraftField,
        controller: &ComposeController,
        cx: &mut Context<Self>,
    ) {
        let controller = controller.clone();
        input.update(cx, |input, _cx| {
            input.on_change(move |value, cx| controller.update_field(field, value, cx));
        });
    }

    fn sync_inputs(&mut self, cx: &mut Context<Self>) {
        let draft = self.entities.compose.read(cx).composer.draft().clone();

        let bound = self
            .header_inputs
            .iter()
            .filter_map(|(row, input)| row.field.map(|field| (input, field)))
            .chain([(&self.body_input, DraftField::Body)]);

        for (input, field) in bound {
            let value = draft.get(field);
            input.update(cx, |input, cx| {
                if input.value() != value {
                    input.set_value(value);
                    cx.notify();
                }
            });
        }

        cx.notify();
    }

    fn handle_action(&mut self, action: &ComposeAction, _window: &mut Window, cx: &mut Context<Self>) {
        match action {
            ComposeAction::Send => self.controller.submit(cx),
            ComposeAction::Dismiss => self.controller.dismiss_notice(cx),
        }
    }

    fn render_field_row(&self, label: &'static str, input: &Entity<TextInput>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .px_4()
            .py_3()
            .border_b_1()
            .border_color(MailColors::border())
            .child(
                div()
                    .w(px(FIELD_LABEL_WIDTH))
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(MailColors::text_secondary())
                    .child(label),
            )
            .child(input.clone())
    }

    fn render_toolbar(&self, send_label: &'static str, can_submit: bool, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .py_2()
            .bg(MailColors::toolbar_bg())
            .border_b_1()
            .border_color(MailColors::border())
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Button::ghost("attach-btn", "Attach"))
                    .child(Button::ghost("format-btn", "Format")),
            )
            .child(
                Button::primary("send-btn", send_label)
                    .disabled(!can_submit)
                    .hint(humanize_keystroke(SEND_KEYSTROKE))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.controller.submit(cx);
                    })),
            )
    }

    fn render_banner(&self) -> impl IntoElement {
        div()
            .w_full()
            .px_4()
            .py_2()
            .bg(MailColors::success_bg())
            .border_b_1()
            .border_color(MailColors::success_border())
            .text_color(MailColors::success_text())
            .text_size(px(Typography::TEXT_SM))
            .child("✓ Email sent successfully!")
    }

    fn render_footer(&self) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .py_2()
            .bg(MailColors::footer_bg())
            .border_t_1()
            .border_color(MailColors::border())
            .text_size(px(Typography::TEXT_XS))
            .text_color(MailColors::text_muted())
            .child("Draft saved")
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(Button::ghost("templates-btn", "Templates").size(ButtonSize::Small))
                    .child(Button::ghost("signature-btn", "Signature").size(ButtonSize::Small)),
            )
    }
}

impl Focusable for ComposePage {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ComposePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.compose.read(cx);
        let send_label = state.composer.send_label();
        let can_submit = state.composer.can_submit();
        let banner_visible = state.composer.banner_visible();
        let notice: Option<SharedString> = state.notice.clone();

        let controller = self.controller.clone();

        div()
            .key_context("ComposePage")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_action))
            .size_full()
            .flex()
            .flex_col()
            .child(self.render_toolbar(send_label, can_submit, cx))
            .when(banner_visible, |el| el.child(self.render_banner()))
            .children(
                self.header_inputs
                    .iter()
                    .map(|(row, input)| self.render_field_row(row.label, input)),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .overflow_hidden()
                    .child(self.body_input.clone()),
            )
            .child(self.render_footer())
            .when_some(notice, |el, message| {
                el.child(
                    Modal::new("Cannot send", message)
                        .on_close(move |cx| controller.dismiss_notice(cx)),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cc_row_sits_between_recipient_and_subject_unbound() {
        let labels: Vec<&str> = HEADER_ROWS.iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["To:", "Cc:", "Subject:"]);

        let cc = HEADER_ROWS[1];
        assert_eq!(cc.placeholder, "Add Cc recipients...");
        assert_eq!(cc.field, None);
    }

    #[test]
    fn required_fields_each_have_one_row() {
        for field in [DraftField::To, DraftField::Subject] {
            let rows = HEADER_ROWS
                .iter()
                .filter(|row| row.field == Some(field))
                .count();
            assert_eq!(rows, 1, "{}", field.label());
        }
        assert!(HEADER_ROWS.iter().all(|row| row.field != Some(DraftField::Body)));
    }
}
