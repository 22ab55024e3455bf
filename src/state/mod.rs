// Application state management

pub mod app_state;
pub mod commands;
pub mod config;
pub mod events;
pub mod explain;
pub mod notifications;

pub use app_state::AppState;
pub use commands::AppCommands;
pub use config::ConfigManager;
pub use events::AppEvent;
pub use explain::{
    ExplainPanelMode, ExplainPanelState, ExplainReport, HintTone, PlanHint, PlanVerdict,
    raw_toggle_label,
};
pub use notifications::{Notification, NotificationLevel, Notifications};
