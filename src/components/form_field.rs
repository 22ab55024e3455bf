//! Reusable form field component for label + input patterns.

use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::input::{Input, InputState};

use crate::theme::spacing;

/// A reusable form field component that renders a label above an input,
/// with an optional inline validation message below it.
pub struct FormField {
    label: SharedString,
    input: Entity<InputState>,
    required: bool,
    description: Option<SharedString>,
    error: Option<SharedString>,
}

impl FormField {
    pub fn new(label: impl Into<SharedString>, input: &Entity<InputState>) -> Self {
        Self {
            label: label.into(),
            input: input.clone(),
            required: false,
            description: None,
            error: None,
        }
    }

    /// Mark this field as required (shows asterisk).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Add a description/help text below the label.
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Show a validation message under the input.
    pub fn error(mut self, error: Option<SharedString>) -> Self {
        self.error = error;
        self
    }

    /// Render the form field into an element.
    pub fn render(self, cx: &App) -> impl IntoElement {
        let mut label_text = self.label.to_string();
        if self.required {
            label_text.push_str(" *");
        }

        let mut field = div()
            .flex()
            .flex_col()
            .gap(spacing::xs())
            .child(div().text_sm().text_color(cx.theme().foreground).child(label_text));

        if let Some(description) = self.description {
            field = field.child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(description.to_string()),
            );
        }

        field = field.child(Input::new(&self.input));

        if let Some(error) = self.error {
            field = field.child(
                div().text_xs().text_color(cx.theme().danger).child(error.to_string()),
            );
        }

        field
    }
}
