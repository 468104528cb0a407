//! User-visible notification seam.
//!
//! The export pipeline reports progress and terminal failures through this
//! trait instead of printing or panicking. The default implementation routes
//! everything to `tracing`; an embedding UI can supply its own sink (toasts,
//! status bar) without touching the pipeline.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyLevel {
    Info,
    Success,
    Error,
}

/// A single notification: a level, a short title, and supporting detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotifyLevel,
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn info(title: &str, detail: &str) -> Self {
        Self {
            level: NotifyLevel::Info,
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn success(title: &str, detail: &str) -> Self {
        Self {
            level: NotifyLevel::Success,
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn error(title: &str, detail: &str) -> Self {
        Self {
            level: NotifyLevel::Error,
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Default sink: forwards notifications to `tracing`.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, n: &Notification) {
        match n.level {
            NotifyLevel::Info => tracing::info!(title = %n.title, "{}", n.detail),
            NotifyLevel::Success => tracing::info!(title = %n.title, "{}", n.detail),
            NotifyLevel::Error => tracing::error!(title = %n.title, "{}", n.detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Collects notifications for assertions in pipeline tests.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub seen: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, n: &Notification) {
            self.seen.lock().unwrap().push(n.clone());
        }
    }

    #[test]
    fn test_levels_round_trip_serde() {
        let n = Notification::error("Export failed", "Please try again later.");
        let json = serde_json::to_string(&n).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(back.level, NotifyLevel::Error);
        assert_eq!(back.title, "Export failed");
    }

    #[test]
    fn test_recording_notifier_collects_in_order() {
        let sink = RecordingNotifier::default();
        sink.notify(&Notification::info("Preparing your resume...", ""));
        sink.notify(&Notification::success("Resume downloaded!", ""));
        let seen = sink.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].level, NotifyLevel::Info);
        assert_eq!(seen[1].level, NotifyLevel::Success);
    }
}
