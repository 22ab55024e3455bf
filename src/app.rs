//! Root window: connection/query toolbar, saved-queries sidebar, explain
//! panel, status bar, toast overlay, and the dialog layer.

use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::Root;
use gpui_component::input::{Input, InputEvent, InputState};

use crate::components::{Button, StatusBar};
use crate::state::{AppCommands, AppState, NotificationLevel};
use crate::theme::spacing;
use crate::views::{ExplainPanel, QueryContext, SaveQueryModal, SavedQueriesList};

pub struct AppRoot {
    state: Entity<AppState>,
    explain_panel: Entity<ExplainPanel>,
    saved_queries: Entity<SavedQueriesList>,
    uri_state: Entity<InputState>,
    database_state: Entity<InputState>,
    collection_state: Entity<InputState>,
    filter_state: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl AppRoot {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let state = cx.new(|_| AppState::new());

        let uri_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("mongodb://localhost:27017")
                .default_value("mongodb://localhost:27017")
        });
        let database_state = cx.new(|cx| InputState::new(window, cx).placeholder("database"));
        let collection_state = cx.new(|cx| InputState::new(window, cx).placeholder("collection"));
        let filter_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("{ status: 'active' }"));

        let explain_panel = cx.new(|cx| ExplainPanel::new(state.clone(), cx));
        let saved_queries = cx.new(|cx| {
            SavedQueriesList::new(
                state.clone(),
                {
                    let database_state = database_state.clone();
                    let collection_state = collection_state.clone();
                    let filter_state = filter_state.clone();
                    move |query, window, cx| {
                        database_state.update(cx, |input, cx| {
                            input.set_value(query.database.clone(), window, cx);
                        });
                        collection_state.update(cx, |input, cx| {
                            input.set_value(query.collection.clone(), window, cx);
                        });
                        filter_state.update(cx, |input, cx| {
                            input.set_value(query.filter.clone(), window, cx);
                        });
                    }
                },
                cx,
            )
        });

        cx.observe(&state, |_, _, cx| cx.notify()).detach();

        let mut subscriptions = Vec::new();
        for input in [&uri_state, &database_state, &collection_state, &filter_state] {
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

        Self {
            state,
            explain_panel,
            saved_queries,
            uri_state,
            database_state,
            collection_state,
            filter_state,
            _subscriptions: subscriptions,
        }
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> AnyElement {
        let (is_connected, connecting, testing, explaining) = {
            let state = self.state.read(cx);
            (state.is_connected(), state.connecting, state.testing, state.explain.loading)
        };

        let uri = self.uri_state.read(cx).value().to_string();
        let database = self.database_state.read(cx).value().trim().to_string();
        let collection = self.collection_state.read(cx).value().trim().to_string();
        let has_target = !database.is_empty() && !collection.is_empty();

        let connect_label = if connecting {
            "Connecting..."
        } else if is_connected {
            "Disconnect"
        } else {
            "Connect"
        };

        let connection_row = div()
            .flex()
            .items_center()
            .gap(spacing::sm())
            .child(div().flex_1().child(Input::new(&self.uri_state)))
            .child(
                Button::new("toolbar-test")
                    .label(if testing { "Testing..." } else { "Test" })
                    .disabled(testing || connecting || uri.trim().is_empty())
                    .on_click({
                        let state = self.state.clone();
                        let uri_state = self.uri_state.clone();
                        move |_, _, cx| {
                            let uri = uri_state.read(cx).value().trim().to_string();
                            AppCommands::test_connection(state.clone(), uri, cx);
                        }
                    }),
            )
            .child(
                Button::new("toolbar-connect")
                    .label(connect_label)
                    .disabled(connecting || uri.trim().is_empty())
                    .on_click({
                        let state = self.state.clone();
                        let uri_state = self.uri_state.clone();
                        move |_, _, cx| {
                            if state.read(cx).is_connected() {
                                state.update(cx, |state, cx| state.disconnect(cx));
                            } else {
                                let uri = uri_state.read(cx).value().trim().to_string();
                                AppCommands::connect(state.clone(), uri, cx);
                            }
                        }
                    }),
            );

        let query_row = div()
            .flex()
            .items_center()
            .gap(spacing::sm())
            .child(div().w(px(170.0)).child(Input::new(&self.database_state)))
            .child(div().w(px(170.0)).child(Input::new(&self.collection_state)))
            .child(div().flex_1().child(Input::new(&self.filter_state)))
            .child(
                Button::new("toolbar-explain")
                    .primary()
                    .label("Explain")
                    .disabled(!is_connected || !has_target || explaining)
                    .on_click({
                        let state = self.state.clone();
                        let database_state = self.database_state.clone();
                        let collection_state = self.collection_state.clone();
                        let filter_state = self.filter_state.clone();
                        move |_, _, cx| {
                            let database =
                                database_state.read(cx).value().trim().to_string();
                            let collection =
                                collection_state.read(cx).value().trim().to_string();
                            let filter = filter_state.read(cx).value().to_string();
                            AppCommands::run_explain(
                                state.clone(),
                                database,
                                collection,
                                filter,
                                cx,
                            );
                        }
                    }),
            )
            .child(
                Button::new("toolbar-save-query")
                    .label("Save Query")
                    .disabled(!is_connected || !has_target)
                    .on_click({
                        let state = self.state.clone();
                        let database_state = self.database_state.clone();
                        let collection_state = self.collection_state.clone();
                        let filter_state = self.filter_state.clone();
                        move |_, window, cx| {
                            let Some(connection_id) = state.read(cx).active_connection_id()
                            else {
                                return;
                            };
                            let context = QueryContext {
                                connection_id,
                                database: database_state.read(cx).value().trim().to_string(),
                                collection: collection_state.read(cx).value().trim().to_string(),
                                filter: filter_state.read(cx).value().to_string(),
                            };
                            SaveQueryModal::open(state.clone(), context, None, window, cx);
                        }
                    }),
            );

        div()
            .flex()
            .flex_col()
            .gap(spacing::sm())
            .px(spacing::md())
            .py(spacing::sm())
            .border_b_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().tab_bar.opacity(0.45))
            .child(connection_row)
            .child(query_row)
            .into_any_element()
    }

    fn render_toasts(&self, cx: &mut Context<Self>) -> AnyElement {
        let toasts: Vec<_> = {
            let state = self.state.read(cx);
            state.notifications.toasts().cloned().collect()
        };

        if toasts.is_empty() {
            return div().into_any_element();
        }

        let mut stack = div()
            .absolute()
            .top(px(52.0))
            .right(px(12.0))
            .w(px(320.0))
            .flex()
            .flex_col()
            .gap(spacing::xs());

        for (index, toast) in toasts.into_iter().enumerate() {
            let accent = match toast.level {
                NotificationLevel::Success => cx.theme().success,
                NotificationLevel::Error => cx.theme().danger,
                NotificationLevel::Info => cx.theme().muted_foreground,
            };
            stack = stack.child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap(spacing::sm())
                    .px(spacing::sm())
                    .py(spacing::xs())
                    .rounded(px(6.0))
                    .border_1()
                    .border_color(accent.opacity(0.4))
                    .bg(cx.theme().background)
                    .child(div().text_xs().text_color(accent).child(toast.message.clone()))
                    .child(
                        Button::new(("toast-dismiss", index)).compact().ghost().label("Dismiss").on_click({
                            let state = self.state.clone();
                            let id = toast.id;
                            move |_, _, cx| {
                                state.update(cx, |state, cx| {
                                    state.notifications.dismiss(id);
                                    cx.notify();
                                });
                            }
                        }),
                    ),
            );
        }

        stack.into_any_element()
    }
}

impl Render for AppRoot {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (is_connected, connection_name, latest) = {
            let state = self.state.read(cx);
            (
                state.is_connected(),
                state.active_connection().map(|connection| connection.name.clone()),
                state.notifications.latest().cloned(),
            )
        };

        let dialog_layer = Root::render_dialog_layer(window, cx);

        div()
            .flex()
            .flex_col()
            .size_full()
            .relative()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .font_family(crate::theme::fonts::ui())
            .line_height(crate::theme::fonts::ui_line_height())
            .child(self.render_toolbar(cx))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_1()
                    .min_h(px(0.0))
                    .child(self.saved_queries.clone())
                    .child(self.explain_panel.clone()),
            )
            .child(StatusBar::new(is_connected, connection_name, latest))
            .children(dialog_layer)
            .child(self.render_toasts(cx))
    }
}
