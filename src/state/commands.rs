//! Command handlers bridging UI intents and driver calls.
//!
//! Driver work runs on the connection manager's tokio runtime via
//! `cx.background_spawn`; results are applied back to `AppState` on the main
//! thread.

use gpui::{App, AppContext, Entity};
use mongodb::bson::Document;

use crate::bson::parse_filter_from_relaxed_json;
use crate::connection::ops::explain::ExplainFindRequest;
use crate::state::explain::ExplainReport;
use crate::state::AppState;

const EXPLAIN_VERBOSITY: &str = "executionStats";
const TEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

pub struct AppCommands;

impl AppCommands {
    /// Ping the given URI without making it the active connection.
    pub fn test_connection(state: Entity<AppState>, uri: String, cx: &mut App) {
        let manager = state.read(cx).connection_manager();

        state.update(cx, |state, cx| {
            state.testing = true;
            state.notifications.info("Testing connection...");
            cx.notify();
        });

        let task = cx.background_spawn(async move { manager.test_connection(&uri, TEST_TIMEOUT) });

        cx.spawn({
            let state = state.clone();
            async move |cx: &mut gpui::AsyncApp| {
                let result: Result<(), crate::error::Error> = task.await;

                let _ = cx.update(|cx| {
                    state.update(cx, |state, cx| {
                        state.testing = false;
                        match result {
                            Ok(()) => state.notifications.success("Connection OK"),
                            Err(error) => state
                                .notifications
                                .error(format!("Connection failed: {error}")),
                        };
                        cx.notify();
                    });
                });
            }
        })
        .detach();
    }

    /// Connect to the given URI and make it the active connection.
    pub fn connect(state: Entity<AppState>, uri: String, cx: &mut App) {
        let manager = state.read(cx).connection_manager();

        state.update(cx, |state, cx| {
            state.set_connecting(cx);
        });

        let task = cx.background_spawn({
            let uri = uri.clone();
            async move { manager.connect(&uri) }
        });

        cx.spawn({
            let state = state.clone();
            async move |cx: &mut gpui::AsyncApp| {
                let result: Result<mongodb::Client, crate::error::Error> = task.await;

                let _ = cx.update(|cx| {
                    state.update(cx, |state, cx| match result {
                        Ok(client) => state.complete_connection(&uri, client, cx),
                        Err(error) => state.fail_connection(error.to_string(), cx),
                    });
                });
            }
        })
        .detach();
    }

    /// Explain a `find` against the active connection and publish the parsed
    /// report to the panel state.
    pub fn run_explain(
        state: Entity<AppState>,
        database: String,
        collection: String,
        filter_input: String,
        cx: &mut App,
    ) {
        let Some(client) = state.read(cx).client() else {
            return;
        };

        let filter = match parse_filter_from_relaxed_json(&filter_input) {
            Ok(filter) => filter,
            Err(error) => {
                state.update(cx, |state, cx| {
                    state.fail_explain(format!("Invalid filter: {error}"), cx);
                });
                return;
            }
        };

        let namespace = format!("{database}.{collection}");
        state.update(cx, |state, cx| {
            state.begin_explain(namespace, cx);
        });

        let manager = state.read(cx).connection_manager();
        let task = cx.background_spawn(async move {
            manager.explain_find(
                &client,
                ExplainFindRequest {
                    database,
                    collection,
                    filter,
                    verbosity: EXPLAIN_VERBOSITY.to_string(),
                },
            )
        });

        cx.spawn({
            let state = state.clone();
            async move |cx: &mut gpui::AsyncApp| {
                let result: Result<Document, crate::error::Error> = task.await;

                let _ = cx.update(|cx| {
                    state.update(cx, |state, cx| match result {
                        Ok(explain_doc) => {
                            state.complete_explain(ExplainReport::from_document(&explain_doc), cx);
                        }
                        Err(error) => state.fail_explain(error.to_string(), cx),
                    });
                });
            }
        })
        .detach();
    }
}
