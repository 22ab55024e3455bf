//! Application events for reactive UI updates

use uuid::Uuid;

/// Events emitted by AppState for UI reactivity
#[derive(Debug, Clone)]
pub enum AppEvent {
    // Connection lifecycle
    Connecting,
    Connected(Uuid),
    ConnectionFailed(String),
    Disconnected,

    // Explain lifecycle
    ExplainStarted { namespace: String },
    ExplainCompleted { namespace: String },
    ExplainFailed { error: String },

    // Saved queries
    QuerySaved { name: String },
    QueryUpdated { name: String },
    QuerySaveFailed { error: String },
    QueryDeleted { name: String },
}
