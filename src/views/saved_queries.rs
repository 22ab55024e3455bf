//! Sidebar list of saved queries for the active connection.

use std::rc::Rc;

use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::components::{Button, open_confirm_dialog};
use crate::models::SavedQuery;
use crate::state::AppState;
use crate::theme::{sizing, spacing};
use crate::views::save_query_modal::{QueryContext, SaveQueryModal};

type LoadHandler = Rc<dyn Fn(&SavedQuery, &mut Window, &mut App)>;

pub struct SavedQueriesList {
    state: Entity<AppState>,
    on_load: LoadHandler,
}

impl SavedQueriesList {
    pub fn new(
        state: Entity<AppState>,
        on_load: impl Fn(&SavedQuery, &mut Window, &mut App) + 'static,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&state, |_, _, cx| cx.notify()).detach();
        Self { state, on_load: Rc::new(on_load) }
    }

    fn render_row(&self, index: usize, query: SavedQuery, cx: &mut Context<Self>) -> AnyElement {
        let scope = format!("{}.{}", query.database, query.collection);

        let mut details = div()
            .flex()
            .flex_col()
            .gap(px(2.0))
            .child(div().text_sm().font_weight(FontWeight::MEDIUM).child(query.name.clone()))
            .child(div().text_xs().text_color(cx.theme().muted_foreground).child(scope));

        if !query.description.is_empty() {
            details = details.child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .text_ellipsis()
                    .child(query.description.clone()),
            );
        }

        let actions = div()
            .flex()
            .items_center()
            .gap(spacing::xs())
            .child(Button::new(("saved-query-load", index)).compact().ghost().label("Load").on_click({
                let on_load = self.on_load.clone();
                let query = query.clone();
                move |_, window, cx| {
                    on_load(&query, window, cx);
                }
            }))
            .child(Button::new(("saved-query-edit", index)).compact().ghost().label("Edit").on_click({
                let state = self.state.clone();
                let query = query.clone();
                move |_, window, cx| {
                    let context = QueryContext {
                        connection_id: query.connection_id,
                        database: query.database.clone(),
                        collection: query.collection.clone(),
                        filter: query.filter.clone(),
                    };
                    SaveQueryModal::open(state.clone(), context, Some(query.clone()), window, cx);
                }
            }))
            .child(
                Button::new(("saved-query-delete", index)).compact().ghost().label("Delete").on_click({
                    let state = self.state.clone();
                    let id = query.id;
                    let name = query.name.clone();
                    move |_, window, cx| {
                        let message = format!("Delete saved query \"{name}\"?");
                        open_confirm_dialog(window, cx, "Delete saved query", message, "Delete", true, {
                            let state = state.clone();
                            move |_window, cx| {
                                state.update(cx, |state, cx| {
                                    state.delete_query(id, cx);
                                });
                            }
                        });
                    }
                }),
            );

        div()
            .flex()
            .flex_col()
            .gap(spacing::xs())
            .px(spacing::sm())
            .py(spacing::xs())
            .rounded(px(6.0))
            .bg(cx.theme().tab_bar.opacity(0.2))
            .child(details)
            .child(actions)
            .into_any_element()
    }
}

impl Render for SavedQueriesList {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (is_connected, queries) = {
            let state = self.state.read(cx);
            let queries: Vec<SavedQuery> =
                state.queries_for_active_connection().into_iter().cloned().collect();
            (state.is_connected(), queries)
        };

        let mut list = div()
            .flex()
            .flex_col()
            .w(sizing::sidebar_width())
            .flex_shrink_0()
            .gap(spacing::sm())
            .p(spacing::sm())
            .border_r_1()
            .border_color(cx.theme().border)
            .child(div().text_sm().font_weight(FontWeight::SEMIBOLD).child("Saved Queries"));

        if !is_connected {
            list = list.child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child("Connect to see saved queries."),
            );
        } else if queries.is_empty() {
            list = list.child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child("No saved queries yet."),
            );
        } else {
            for (index, query) in queries.into_iter().enumerate() {
                list = list.child(self.render_row(index, query, cx));
            }
        }

        list
    }
}
