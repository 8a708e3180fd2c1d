use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::employer::{
    sample_applications, ApplicationId, ApplicationRecord, ApplicationRepository,
    ApplicationReviewService, ApplicationStatus, RepositoryError,
};
use crate::listings::ListingStore;
use crate::notify::{Notification, NotificationError, NotificationSink};

pub(super) struct MemoryRepository {
    records: Mutex<Vec<ApplicationRecord>>,
}

impl MemoryRepository {
    pub(super) fn seeded() -> Self {
        Self::with(sample_applications())
    }

    pub(super) fn with(records: Vec<ApplicationRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl ApplicationRepository for MemoryRepository {
    fn all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex").clone())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let records = self.records.lock().expect("repository mutex");
        Ok(records.iter().find(|record| &record.id == id).cloned())
    }

    fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let mut records = self.records.lock().expect("repository mutex");
        let record = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(RepositoryError::NotFound)?;
        record.status = status;
        Ok(record.clone())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update_status(
        &self,
        _id: &ApplicationId,
        _status: ApplicationStatus,
    ) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

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

pub(super) type Service = ApplicationReviewService<MemoryRepository, MemoryNotifications>;

pub(super) fn service() -> (Arc<Service>, Arc<MemoryNotifications>) {
    let notifications = Arc::new(MemoryNotifications::default());
    let service = Arc::new(ApplicationReviewService::new(
        Arc::new(ListingStore::standard()),
        Arc::new(MemoryRepository::seeded()),
        notifications.clone(),
    ));
    (service, notifications)
}

pub(super) fn names(records: &[ApplicationRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|record| record.applicant_name.as_str())
        .collect()
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
