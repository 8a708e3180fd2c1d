use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use serde_json::Value;

use crate::forms::{ApplicationForm, FileReference, ImmediateDelay, SubmissionService};
use crate::notify::{Notification, NotificationError, NotificationSink};

#[derive(Default)]
pub(super) struct MemoryNotifications {
    events: Mutex<Vec<Notification>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("notifications mutex").clone()
    }
}

impl NotificationSink for MemoryNotifications {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notifications mutex")
            .push(notification);
        Ok(())
    }
}

pub(super) fn immediate_service() -> (
    Arc<SubmissionService<MemoryNotifications>>,
    Arc<MemoryNotifications>,
) {
    let notifications = Arc::new(MemoryNotifications::default());
    let service = Arc::new(SubmissionService::new(
        Arc::new(ImmediateDelay),
        notifications.clone(),
    ));
    (service, notifications)
}

pub(super) fn application() -> ApplicationForm {
    ApplicationForm {
        full_name: "Jane Smith".to_string(),
        email: "jane.smith@example.com".to_string(),
        phone: "07700 900123".to_string(),
        cover_letter: Some("I would love to join the team.".to_string()),
        resume: Some(FileReference::new("jane-smith-cv.pdf")),
    }
}

pub(super) fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub(super) async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
