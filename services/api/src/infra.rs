use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

use job_board::employer::{
    sample_applications, ApplicationId, ApplicationRecord, ApplicationRepository,
    ApplicationReviewService, ApplicationStatus, RepositoryError,
};
use job_board::error::AppError;
use job_board::forms::{SubmissionDelay, SubmissionService};
use job_board::listings::{ListingImporter, ListingStore};
use job_board::notify::{Notification, NotificationError, NotificationSink};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Application statuses held for the lifetime of the process.
#[derive(Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<ApplicationRecord>>>,
}

impl InMemoryApplicationRepository {
    pub(crate) fn seeded() -> Self {
        Self {
            records: Arc::new(Mutex::new(sample_applications())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<ApplicationRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self.lock()?.iter().find(|record| &record.id == id).cloned())
    }

    fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.lock()?;
        let record = guard
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(RepositoryError::NotFound)?;
        record.status = status;
        Ok(record.clone())
    }
}

/// Number of toasts retained after they have been logged.
pub(crate) const RECENT_NOTIFICATIONS: usize = 64;

/// Toasts land in the log; the most recent are kept for inspection.
#[derive(Default, Clone)]
pub(crate) struct LoggingNotificationSink {
    events: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationSink for LoggingNotificationSink {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
        info!(
            title = %notification.title,
            description = %notification.description,
            severity = ?notification.severity,
            "notification"
        );
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotificationError::Unavailable("notification mutex poisoned".to_string()))?;
        if guard.len() == RECENT_NOTIFICATIONS {
            guard.pop_front();
        }
        guard.push_back(notification);
        Ok(())
    }
}

impl LoggingNotificationSink {
    pub(crate) fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .map(|guard| guard.iter().cloned().collect())
            .unwrap_or_default()
    }
}

pub(crate) type ReviewService =
    ApplicationReviewService<InMemoryApplicationRepository, LoggingNotificationSink>;

/// Everything the routers and the demo share.
#[derive(Clone)]
pub(crate) struct Board {
    pub(crate) store: Arc<ListingStore>,
    pub(crate) submissions: Arc<SubmissionService<LoggingNotificationSink>>,
    pub(crate) review: Arc<ReviewService>,
    pub(crate) notifications: Arc<LoggingNotificationSink>,
}

impl Board {
    pub(crate) fn assemble(store: ListingStore, delay: Arc<dyn SubmissionDelay>) -> Self {
        let store = Arc::new(store);
        let notifications = Arc::new(LoggingNotificationSink::default());
        let submissions = Arc::new(SubmissionService::new(delay, notifications.clone()));
        let review = Arc::new(ApplicationReviewService::new(
            store.clone(),
            Arc::new(InMemoryApplicationRepository::seeded()),
            notifications.clone(),
        ));

        Self {
            store,
            submissions,
            review,
            notifications,
        }
    }
}

/// CSV listings when a path is given, otherwise the built-in sample.
pub(crate) fn load_store(csv: Option<&Path>) -> Result<ListingStore, AppError> {
    match csv {
        Some(path) => {
            let store = ListingImporter::from_path(path)?;
            info!(path = %path.display(), listings = store.len(), "listings imported");
            Ok(store)
        }
        None => Ok(ListingStore::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_log_keeps_only_the_latest_entries() {
        let sink = LoggingNotificationSink::default();
        for index in 0..RECENT_NOTIFICATIONS * 3 {
            sink.publish(Notification::info("Status Updated", format!("update {index}")))
                .expect("publish succeeds");
        }

        let events = sink.events();
        assert_eq!(events.len(), RECENT_NOTIFICATIONS);
        assert_eq!(
            events.first().map(|event| event.description.as_str()),
            Some(format!("update {}", RECENT_NOTIFICATIONS * 2).as_str())
        );
        assert_eq!(
            events.last().map(|event| event.description.as_str()),
            Some(format!("update {}", RECENT_NOTIFICATIONS * 3 - 1).as_str())
        );
    }

    #[test]
    fn seeded_repository_updates_statuses_in_place() {
        let repository = InMemoryApplicationRepository::seeded();
        let id = ApplicationId::from("1");
        let updated = repository
            .update_status(&id, ApplicationStatus::Interviewed)
            .expect("known application");
        assert_eq!(updated.status, ApplicationStatus::Interviewed);
        assert_eq!(
            repository.fetch(&id).expect("readable").map(|record| record.status),
            Some(ApplicationStatus::Interviewed)
        );
        assert!(matches!(
            repository.update_status(&ApplicationId::from("missing"), ApplicationStatus::Rejected),
            Err(RepositoryError::NotFound)
        ));
    }
}
