//! Dialog helper utilities to reduce boilerplate in dialog creation.

use gpui::*;
use gpui_component::WindowExt as _;

use crate::components::Button;

/// Creates a standard Cancel button that closes the dialog.
pub fn cancel_button(id: impl Into<ElementId>) -> AnyElement {
    Button::new(id)
        .label("Cancel")
        .on_click(|_, window, cx| {
            window.close_dialog(cx);
        })
        .into_any_element()
}
