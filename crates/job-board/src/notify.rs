//! Transient toast notifications raised by flows and employer actions.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
}

/// Title/description pair shown to the user once and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// Outbound toast channel (UI bridge, log sink, test recorder).
pub trait NotificationSink: Send + Sync {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification channel unavailable: {0}")]
    Unavailable(String),
}

/// Publish without surfacing failures; a dropped toast never fails the action that raised it.
pub fn dispatch<N>(sink: &N, notification: Notification)
where
    N: NotificationSink + ?Sized,
{
    let title = notification.title.clone();
    if let Err(err) = sink.publish(notification) {
        warn!(%err, %title, "notification dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct ClosedSink;

    impl NotificationSink for ClosedSink {
        fn publish(&self, _notification: Notification) -> Result<(), NotificationError> {
            Err(NotificationError::Unavailable("closed".to_string()))
        }
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Notification>>);

    impl NotificationSink for Recorder {
        fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
            self.0.lock().expect("recorder mutex").push(notification);
            Ok(())
        }
    }

    #[test]
    fn dispatch_swallows_sink_failures() {
        dispatch(&ClosedSink, Notification::info("Saved", "Done"));
    }

    #[test]
    fn dispatch_forwards_to_sink() {
        let recorder = Recorder::default();
        dispatch(&recorder, Notification::error("Page not found", "missing"));
        let events = recorder.0.lock().expect("recorder mutex");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Error);
    }
}
