//! TextInput Component

use gpui::{
    div, prelude::*, px, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::theme::colors::MailColors;
use crate::theme::typography::Typography;

/// A text input component
///
/// Appends typed characters and handles backspace. Multiline inputs turn
/// enter into a newline; keys with the platform or control modifier are
/// left to the action dispatcher.
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    multiline: bool,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            multiline: false,
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    /// Set the value without firing the change handler
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Accept newlines
    pub fn set_multiline(&mut self, multiline: bool) {
        self.multiline = multiline;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn edited(&mut self, cx: &mut Context<Self>) {
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.platform || keystroke.modifiers.control {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => {
                if self.value.pop().is_some() {
                    self.edited(cx);
                }
            }
            "enter" => {
                if self.multiline {
                    self.value.push('\n');
                    self.edited(cx);
                }
            }
            _ => {
                if let Some(text) = keystroke.key_char.as_deref()
                    && !text.chars().any(char::is_control)
                {
                    self.value.push_str(text);
                    self.edited(cx);
                }
            }
        }
    }

    fn handle_mouse_down(&mut self, _event: &MouseDownEvent, window: &mut Window, _cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            MailColors::input_placeholder()
        } else {
            MailColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .flex_1()
            .bg(MailColors::input_bg())
            .border_b_1()
            .border_color(if is_focused {
                MailColors::border_focus()
            } else {
                gpui::rgba(0x00000000)
            })
            .text_color(text_color)
            .text_size(px(Typography::TEXT_SM))
            .when(self.multiline, |el| {
                el.size_full()
                    .p_4()
                    .line_height(gpui::relative(Typography::LEADING_RELAXED))
                    .overflow_y_scroll()
            })
            .when(!self.multiline, |el| el.min_w(px(200.0)).py_1())
            .child(display_text)
    }
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    multiline: bool,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input.set_multiline(multiline);
        input
    })
}
