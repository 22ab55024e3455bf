//! Save-query modal: create or edit a named query against the active
//! connection/database/collection.

use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::WindowExt as _;
use gpui_component::dialog::Dialog;
use gpui_component::input::{InputEvent, InputState};
use uuid::Uuid;

use crate::components::{Button, FormField, cancel_button};
use crate::helpers::{validate_query_description, validate_query_name};
use crate::models::{SavedQuery, SavedQueryDraft};
use crate::state::AppState;
use crate::theme::spacing;

/// Create-vs-edit behavior of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveQueryMode {
    Create,
    Edit,
}

impl SaveQueryMode {
    pub fn for_existing(existing: Option<&SavedQuery>) -> Self {
        if existing.is_some() { SaveQueryMode::Edit } else { SaveQueryMode::Create }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SaveQueryMode::Create => "Save Query",
            SaveQueryMode::Edit => "Edit Saved Query",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            SaveQueryMode::Create => "Save",
            SaveQueryMode::Edit => "Update",
        }
    }
}

/// Target the query is saved against.
#[derive(Clone)]
pub struct QueryContext {
    pub connection_id: Uuid,
    pub database: String,
    pub collection: String,
    pub filter: String,
}

impl QueryContext {
    pub fn breadcrumb(&self) -> String {
        format!("{} > {}", self.database, self.collection)
    }
}

pub struct SaveQueryModal {
    state: Entity<AppState>,
    context: QueryContext,
    existing: Option<SavedQuery>,
    name_state: Entity<InputState>,
    description_state: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl SaveQueryModal {
    /// Open the modal through the dialog layer; a closed modal is fully
    /// unmounted, not hidden.
    pub fn open(
        state: Entity<AppState>,
        context: QueryContext,
        existing: Option<SavedQuery>,
        window: &mut Window,
        cx: &mut App,
    ) {
        let mode = SaveQueryMode::for_existing(existing.as_ref());
        let modal = cx.new(|cx| SaveQueryModal::new(state, context, existing, window, cx));
        window.open_dialog(cx, move |dialog: Dialog, _window: &mut Window, _cx: &mut App| {
            dialog.title(mode.title()).min_w(px(460.0)).child(modal.clone())
        });
    }

    fn new(
        state: Entity<AppState>,
        context: QueryContext,
        existing: Option<SavedQuery>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let name_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Untitled query")
                .default_value(existing.as_ref().map(|query| query.name.clone()).unwrap_or_default())
        });
        let description_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("What this query is for (optional)")
                .default_value(
                    existing.as_ref().map(|query| query.description.clone()).unwrap_or_default(),
                )
        });

        let mut subscriptions = Vec::new();
        for input in [&name_state, &description_state] {
            subscriptions.push(cx.subscribe_in(
                input,
                window,
                |_view, _state, event, _window, cx| {
                    if matches!(event, InputEvent::Change) {
                        cx.notify();
                    }
                },
            ));
        }

        Self { state, context, existing, name_state, description_state, _subscriptions: subscriptions }
    }

    fn mode(&self) -> SaveQueryMode {
        SaveQueryMode::for_existing(self.existing.as_ref())
    }
}

impl Render for SaveQueryModal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let name = self.name_state.read(cx).value().to_string();
        let description = self.description_state.read(cx).value().to_string();

        // The Save control is disabled for an empty name; the inline error
        // only calls out over-limit input.
        let name_error = if name.trim().is_empty() {
            None
        } else {
            validate_query_name(&name).err()
        };
        let description_error = validate_query_description(&description).err();
        let can_save =
            validate_query_name(&name).is_ok() && description_error.is_none();

        let mode = self.mode();
        let filter_preview = if self.context.filter.trim().is_empty() {
            "{}".to_string()
        } else {
            self.context.filter.clone()
        };

        div()
            .flex()
            .flex_col()
            .gap(spacing::md())
            .p(spacing::md())
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(spacing::xs())
                    .child(
                        div()
                            .text_xs()
                            .text_color(cx.theme().muted_foreground)
                            .child(self.context.breadcrumb()),
                    )
                    .child(
                        div()
                            .px(spacing::sm())
                            .py(spacing::xs())
                            .rounded(px(6.0))
                            .border_1()
                            .border_color(cx.theme().border)
                            .bg(cx.theme().background)
                            .text_xs()
                            .font_family(crate::theme::fonts::mono())
                            .child(filter_preview),
                    ),
            )
            .child(
                FormField::new("Name", &self.name_state)
                    .required(true)
                    .error(name_error.map(SharedString::from))
                    .render(cx),
            )
            .child(
                FormField::new("Description", &self.description_state)
                    .description("Optional")
                    .error(description_error.map(SharedString::from))
                    .render(cx),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_end()
                    .gap(spacing::sm())
                    .child(cancel_button("save-query-cancel"))
                    .child(
                        Button::new("save-query-action")
                            .primary()
                            .label(mode.action_label())
                            .disabled(!can_save)
                            .on_click({
                                let state = self.state.clone();
                                let name_state = self.name_state.clone();
                                let description_state = self.description_state.clone();
                                let context = self.context.clone();
                                let existing_id = self.existing.as_ref().map(|query| query.id);
                                move |_, window, cx| {
                                    let name = name_state.read(cx).value().to_string();
                                    let description =
                                        description_state.read(cx).value().to_string();

                                    if validate_query_name(&name).is_err()
                                        || validate_query_description(&description).is_err()
                                    {
                                        return;
                                    }

                                    let draft = SavedQueryDraft {
                                        connection_id: context.connection_id,
                                        database: context.database.clone(),
                                        collection: context.collection.clone(),
                                        name,
                                        description,
                                        filter: context.filter.clone(),
                                    };

                                    let saved = state.update(cx, |state, cx| {
                                        state.save_query(draft, existing_id, cx)
                                    });

                                    // Failures surface through the
                                    // notification feed; keep the dialog open
                                    // so the user can retry.
                                    if saved.is_ok() {
                                        window.close_dialog(cx);
                                    }
                                }
                            }),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use core::prelude::v1::test;

    use uuid::Uuid;

    use super::*;

    fn existing_query() -> SavedQuery {
        SavedQuery::from_draft(SavedQueryDraft {
            connection_id: Uuid::new_v4(),
            database: "testdb".to_string(),
            collection: "users".to_string(),
            name: "active users".to_string(),
            description: "users with status active".to_string(),
            filter: "{ status: 'active' }".to_string(),
        })
    }

    #[test]
    fn test_mode_follows_existing_query() {
        assert_eq!(SaveQueryMode::for_existing(None), SaveQueryMode::Create);
        let query = existing_query();
        assert_eq!(SaveQueryMode::for_existing(Some(&query)), SaveQueryMode::Edit);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(SaveQueryMode::Create.title(), "Save Query");
        assert_eq!(SaveQueryMode::Create.action_label(), "Save");
        assert_eq!(SaveQueryMode::Edit.title(), "Edit Saved Query");
        assert_eq!(SaveQueryMode::Edit.action_label(), "Update");
    }

    #[test]
    fn test_breadcrumb_format() {
        let context = QueryContext {
            connection_id: Uuid::new_v4(),
            database: "testdb".to_string(),
            collection: "users".to_string(),
            filter: String::new(),
        };
        assert_eq!(context.breadcrumb(), "testdb > users");
    }
}
