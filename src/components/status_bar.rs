//! Thin bottom status bar: connection state on the left, latest
//! notification on the right.

use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::state::{Notification, NotificationLevel};
use crate::theme::{sizing, spacing};

#[derive(IntoElement)]
pub struct StatusBar {
    is_connected: bool,
    connection_name: Option<String>,
    message: Option<Notification>,
}

impl StatusBar {
    pub fn new(
        is_connected: bool,
        connection_name: Option<String>,
        message: Option<Notification>,
    ) -> Self {
        Self { is_connected, connection_name, message }
    }
}

impl RenderOnce for StatusBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (status_color, status_text) = if self.is_connected {
            (cx.theme().success, self.connection_name.unwrap_or_else(|| "Connected".to_string()))
        } else {
            (cx.theme().muted_foreground, "Not connected".to_string())
        };

        let message = self.message.map(|notification| {
            let color = match notification.level {
                NotificationLevel::Info => cx.theme().muted_foreground,
                NotificationLevel::Success => cx.theme().success,
                NotificationLevel::Error => cx.theme().danger,
            };
            div().text_xs().text_color(color).child(notification.message)
        });

        let mut bar = div()
            .flex()
            .items_center()
            .justify_between()
            .h(sizing::status_bar_height())
            .px(spacing::sm())
            .border_t_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().tab_bar)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(spacing::sm())
                    .child(
                        div()
                            .w(sizing::status_dot())
                            .h(sizing::status_dot())
                            .rounded_full()
                            .bg(status_color),
                    )
                    .child(div().text_xs().text_color(cx.theme().foreground).child(status_text)),
            );

        if let Some(message) = message {
            bar = bar.child(message);
        }

        bar
    }
}
