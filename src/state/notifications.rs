//! Notification feed for UI feedback.
//!
//! Owned by `AppState` and provided once through the root state entity, so
//! any view in the subtree can read it; the status bar shows the latest
//! entry and the root overlay renders dismissible toasts.

use crate::state::events::AppEvent;

const MAX_BACKLOG: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Default)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, level, message: message.into() });
        if self.items.len() > MAX_BACKLOG {
            let overflow = self.items.len() - MAX_BACKLOG;
            self.items.drain(0..overflow);
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    /// Entries worth surfacing as toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(|item| item.level != NotificationLevel::Info)
    }

    /// Derive a notification from an application event.
    pub fn notify_from_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Connecting => {
                self.info("Connecting...");
            }
            AppEvent::Connected(_) => {
                self.success("Connected");
            }
            AppEvent::ConnectionFailed(error) => {
                self.error(format!("Connection failed: {error}"));
            }
            AppEvent::Disconnected => {
                self.info("Disconnected");
            }
            AppEvent::ExplainStarted { namespace } => {
                self.info(format!("Explaining {namespace}..."));
            }
            AppEvent::ExplainCompleted { namespace } => {
                self.info(format!("Explain completed for {namespace}"));
            }
            AppEvent::ExplainFailed { error } => {
                self.error(format!("Explain failed: {error}"));
            }
            AppEvent::QuerySaved { name } => {
                self.success(format!("Saved query \"{name}\""));
            }
            AppEvent::QueryUpdated { name } => {
                self.success(format!("Updated query \"{name}\""));
            }
            AppEvent::QuerySaveFailed { error } => {
                self.error(format!("Save failed: {error}"));
            }
            AppEvent::QueryDeleted { name } => {
                self.info(format!("Deleted query \"{name}\""));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_latest_dismiss() {
        let mut notifications = Notifications::default();
        let first = notifications.info("one");
        let second = notifications.error("two");

        assert_eq!(notifications.latest().unwrap().message, "two");
        notifications.dismiss(second);
        assert_eq!(notifications.latest().unwrap().id, first);
        notifications.dismiss(first);
        assert!(notifications.latest().is_none());
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut notifications = Notifications::default();
        for index in 0..20 {
            notifications.info(format!("message {index}"));
        }
        assert_eq!(notifications.latest().unwrap().message, "message 19");
        assert!(notifications.toasts().count() <= MAX_BACKLOG);
    }

    #[test]
    fn test_toasts_skip_info_entries() {
        let mut notifications = Notifications::default();
        notifications.info("quiet");
        notifications.success("loud");
        notifications.error("louder");

        let levels: Vec<_> = notifications.toasts().map(|toast| toast.level).collect();
        assert_eq!(levels, vec![NotificationLevel::Success, NotificationLevel::Error]);
    }

    #[test]
    fn test_event_mapping() {
        let mut notifications = Notifications::default();

        notifications.notify_from_event(&AppEvent::QuerySaved { name: "active users".into() });
        let latest = notifications.latest().unwrap();
        assert_eq!(latest.level, NotificationLevel::Success);
        assert!(latest.message.contains("active users"));

        notifications
            .notify_from_event(&AppEvent::ExplainFailed { error: "no reachable servers".into() });
        let latest = notifications.latest().unwrap();
        assert_eq!(latest.level, NotificationLevel::Error);
        assert!(latest.message.contains("no reachable servers"));
    }
}
