use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::theme::{borders, sizing, spacing};

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Secondary,
    Primary,
    Danger,
    Ghost,
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    variant: ButtonVariant,
    on_click: Option<ClickHandler>,
    disabled: bool,
    compact: bool,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            variant: ButtonVariant::Secondary,
            on_click: None,
            disabled: false,
            compact: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.variant = ButtonVariant::Primary;
        self
    }

    pub fn ghost(mut self) -> Self {
        self.variant = ButtonVariant::Ghost;
        self
    }

    pub fn danger(mut self) -> Self {
        self.variant = ButtonVariant::Danger;
        self
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (bg, hover_bg, text_color, border_color) = match self.variant {
            ButtonVariant::Primary => (
                cx.theme().primary,
                cx.theme().primary.opacity(0.85),
                cx.theme().primary_foreground,
                cx.theme().primary,
            ),
            ButtonVariant::Danger => (
                cx.theme().danger,
                cx.theme().danger.opacity(0.85),
                cx.theme().danger_foreground,
                cx.theme().danger,
            ),
            ButtonVariant::Secondary => (
                cx.theme().secondary,
                cx.theme().list_hover,
                cx.theme().foreground,
                cx.theme().border,
            ),
            ButtonVariant::Ghost => (
                crate::theme::colors::transparent(),
                cx.theme().list_hover,
                cx.theme().foreground,
                crate::theme::colors::transparent(),
            ),
        };

        let height = if self.compact { px(22.0) } else { sizing::button_height() };
        let padding_x = if self.compact { spacing::sm() } else { spacing::md() };
        let padding_y = if self.compact { px(2.0) } else { px(4.0) };

        let mut el = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .h(height)
            .px(padding_x)
            .py(padding_y)
            .rounded(borders::radius_sm())
            .border_1()
            .border_color(border_color)
            .bg(bg)
            .text_color(text_color);

        el = if self.compact { el.text_xs() } else { el.text_sm() };

        if self.disabled {
            el = el.opacity(0.5).cursor_not_allowed();
        } else {
            el = el.cursor_pointer().hover(move |s| s.bg(hover_bg));
            if let Some(handler) = self.on_click {
                el = el.on_click(handler);
            }
        }

        if let Some(label) = self.label {
            el = el.child(label);
        }

        el
    }
}
