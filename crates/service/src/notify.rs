//! Operation notifications.
//!
//! Every catalog mutation emits a [`Notification`] through a [`Notifier`].
//! Rendering (toasts, banners) is left to whoever consumes them.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
}

#[derive(Clone, Debug, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            kind,
            at: Utc::now(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationKind::Success)
    }
}

/// Sink for notifications emitted by catalog operations.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Writes each notification to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, n: &Notification) {
        info!(title = %n.title, kind = ?n.kind, id = %n.id, "{}", n.message);
    }
}

/// Bounded buffer of the most recent notifications, oldest first.
#[derive(Debug)]
pub struct NotificationLog {
    capacity: usize,
    entries: Mutex<VecDeque<Notification>>,
}

impl NotificationLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { capacity, entries: Mutex::new(VecDeque::with_capacity(capacity)) }
    }

    pub fn recent(&self) -> Vec<Notification> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: &Notification) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(notification.clone());
    }
}

/// Fan-out to several notifiers in registration order.
#[derive(Default, Clone)]
pub struct Notifiers {
    sinks: Vec<Arc<dyn Notifier>>,
}

impl Notifiers {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, sink: Arc<dyn Notifier>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl Notifier for Notifiers {
    fn notify(&self, notification: &Notification) {
        for sink in &self.sinks {
            sink.notify(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_most_recent_within_capacity() {
        let log = NotificationLog::new(2);
        log.notify(&Notification::success("A", "first"));
        log.notify(&Notification::success("B", "second"));
        log.notify(&Notification::success("C", "third"));
        let titles: Vec<String> = log.recent().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let log = NotificationLog::new(0);
        log.notify(&Notification::success("A", "a"));
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn fan_out_reaches_every_sink() {
        let a = Arc::new(NotificationLog::new(4));
        let b = Arc::new(NotificationLog::new(4));
        let fan = Notifiers::new()
            .with(a.clone())
            .with(b.clone())
            .with(Arc::new(TracingNotifier));
        fan.notify(&Notification::success("Deleted", "gone"));
        assert_eq!(a.len(), 1);
        assert_eq!(b.recent()[0].title, "Deleted");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_value(Notification::success("T", "m")).unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["title"], "T");
    }
}
