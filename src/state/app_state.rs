//! Central application state entity.

use std::sync::Arc;

use gpui::{Context, EventEmitter};
use mongodb::Client;
use uuid::Uuid;

use crate::connection::ConnectionManager;
use crate::models::connection::name_from_uri;
use crate::models::{SavedConnection, SavedQuery, SavedQueryDraft};
use crate::state::config::ConfigManager;
use crate::state::events::AppEvent;
use crate::state::explain::{ExplainPanelState, ExplainReport};
use crate::state::notifications::Notifications;

pub struct AppState {
    manager: Arc<ConnectionManager>,
    config: Option<ConfigManager>,
    client: Option<Client>,
    connections: Vec<SavedConnection>,
    active_connection_id: Option<Uuid>,
    pub connecting: bool,
    pub testing: bool,
    pub explain: ExplainPanelState,
    pub saved_queries: Vec<SavedQuery>,
    pub notifications: Notifications,
}

impl EventEmitter<AppEvent> for AppState {}

impl AppState {
    pub fn new() -> Self {
        let config = match ConfigManager::new() {
            Ok(config) => Some(config),
            Err(error) => {
                log::warn!("Config directory unavailable: {error:#}");
                None
            }
        };

        let connections = config
            .as_ref()
            .and_then(|config| {
                config
                    .load_connections()
                    .map_err(|error| log::warn!("Failed to load connections: {error:#}"))
                    .ok()
            })
            .unwrap_or_default();

        let saved_queries = config
            .as_ref()
            .and_then(|config| {
                config
                    .load_queries()
                    .map_err(|error| log::warn!("Failed to load saved queries: {error:#}"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            manager: Arc::new(ConnectionManager::new()),
            config,
            client: None,
            connections,
            active_connection_id: None,
            connecting: false,
            testing: false,
            explain: ExplainPanelState::default(),
            saved_queries,
            notifications: Notifications::default(),
        }
    }

    pub fn connection_manager(&self) -> Arc<ConnectionManager> {
        self.manager.clone()
    }

    pub fn client(&self) -> Option<Client> {
        self.client.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    pub fn active_connection(&self) -> Option<&SavedConnection> {
        let id = self.active_connection_id?;
        self.connections.iter().find(|connection| connection.id == id)
    }

    pub fn active_connection_id(&self) -> Option<Uuid> {
        self.active_connection_id
    }

    /// Saved queries for the active connection, most recently updated first.
    pub fn queries_for_active_connection(&self) -> Vec<&SavedQuery> {
        let Some(id) = self.active_connection_id else {
            return Vec::new();
        };
        let mut queries: Vec<&SavedQuery> =
            self.saved_queries.iter().filter(|query| query.connection_id == id).collect();
        queries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        queries
    }

    fn apply_event(&mut self, event: AppEvent, cx: &mut Context<Self>) {
        self.notifications.notify_from_event(&event);
        cx.emit(event);
        cx.notify();
    }

    // ------------------------------------------------------------------
    // Connection lifecycle
    // ------------------------------------------------------------------

    pub fn set_connecting(&mut self, cx: &mut Context<Self>) {
        self.connecting = true;
        self.apply_event(AppEvent::Connecting, cx);
    }

    /// Record a successful connection, reusing a saved connection with the
    /// same URI or minting a new one.
    pub fn complete_connection(&mut self, uri: &str, client: Client, cx: &mut Context<Self>) {
        self.connecting = false;
        self.client = Some(client);

        let uri = uri.trim();
        let id = match self.connections.iter_mut().find(|connection| connection.uri == uri) {
            Some(existing) => {
                existing.mark_connected();
                existing.id
            }
            None => {
                let mut connection = SavedConnection::new(name_from_uri(uri), uri.to_string());
                connection.mark_connected();
                let id = connection.id;
                self.connections.push(connection);
                id
            }
        };
        self.active_connection_id = Some(id);

        if let Some(config) = &self.config
            && let Err(error) = config.save_connections(&self.connections)
        {
            log::warn!("Failed to persist connections: {error:#}");
        }

        self.apply_event(AppEvent::Connected(id), cx);
    }

    pub fn fail_connection(&mut self, error: String, cx: &mut Context<Self>) {
        self.connecting = false;
        self.client = None;
        self.apply_event(AppEvent::ConnectionFailed(error), cx);
    }

    pub fn disconnect(&mut self, cx: &mut Context<Self>) {
        self.client = None;
        self.active_connection_id = None;
        self.apply_event(AppEvent::Disconnected, cx);
    }

    // ------------------------------------------------------------------
    // Explain lifecycle
    // ------------------------------------------------------------------

    pub fn begin_explain(&mut self, namespace: String, cx: &mut Context<Self>) {
        self.explain.loading = true;
        self.explain.error = None;
        self.apply_event(AppEvent::ExplainStarted { namespace }, cx);
    }

    pub fn complete_explain(&mut self, report: ExplainReport, cx: &mut Context<Self>) {
        self.explain.loading = false;
        self.explain.error = None;
        let namespace = report.planner.namespace.clone();
        self.explain.report = Some(report);
        self.apply_event(AppEvent::ExplainCompleted { namespace }, cx);
    }

    pub fn fail_explain(&mut self, error: String, cx: &mut Context<Self>) {
        self.explain.loading = false;
        self.explain.error = Some(error.clone());
        self.apply_event(AppEvent::ExplainFailed { error }, cx);
    }

    // ------------------------------------------------------------------
    // Saved queries
    // ------------------------------------------------------------------

    /// Create or update a saved query and persist the collection. The list
    /// is only mutated once the write has succeeded.
    pub fn save_query(
        &mut self,
        draft: SavedQueryDraft,
        existing_id: Option<Uuid>,
        cx: &mut Context<Self>,
    ) -> Result<SavedQuery, String> {
        let mut updated = self.saved_queries.clone();

        let existing_index =
            existing_id.and_then(|id| updated.iter().position(|query| query.id == id));
        let (saved, event) = match existing_index {
            Some(index) => {
                updated[index].apply_draft(draft);
                let saved = updated[index].clone();
                let event = AppEvent::QueryUpdated { name: saved.name.clone() };
                (saved, event)
            }
            None => {
                let saved = SavedQuery::from_draft(draft);
                updated.push(saved.clone());
                let event = AppEvent::QuerySaved { name: saved.name.clone() };
                (saved, event)
            }
        };

        if let Err(error) = self.persist_queries(&updated) {
            self.apply_event(AppEvent::QuerySaveFailed { error: error.clone() }, cx);
            return Err(error);
        }

        self.saved_queries = updated;
        self.apply_event(event, cx);
        Ok(saved)
    }

    pub fn delete_query(&mut self, id: Uuid, cx: &mut Context<Self>) {
        let Some(index) = self.saved_queries.iter().position(|query| query.id == id) else {
            return;
        };
        let mut updated = self.saved_queries.clone();
        let removed = updated.remove(index);

        if let Err(error) = self.persist_queries(&updated) {
            self.apply_event(AppEvent::QuerySaveFailed { error }, cx);
            return;
        }

        self.saved_queries = updated;
        self.apply_event(AppEvent::QueryDeleted { name: removed.name }, cx);
    }

    fn persist_queries(&self, queries: &[SavedQuery]) -> Result<(), String> {
        let Some(config) = &self.config else {
            return Err("config directory is unavailable".to_string());
        };
        config.save_queries(queries).map_err(|error| error.to_string())
    }
}
