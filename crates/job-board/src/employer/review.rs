use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::dashboard::EmployerDashboard;
use super::domain::{ApplicationId, ApplicationRecord, ApplicationStatus, StatusFilter};
use super::repository::{ApplicationRepository, RepositoryError};
use crate::listings::{JobId, ListingStore};
use crate::notify::{dispatch, Notification, NotificationSink};

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("job '{0}' not found")]
    JobNotFound(JobId),
    #[error("application '{0}' not found")]
    ApplicationNotFound(ApplicationId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Applications for one job after the status filter.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationReview {
    pub job_id: JobId,
    pub job_title: String,
    pub status_filter: StatusFilter,
    pub status_options: Vec<&'static str>,
    pub count_label: String,
    pub applications: Vec<ApplicationRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusChange {
    pub application: ApplicationRecord,
    pub notification: Notification,
}

#[derive(Debug, Clone, Serialize)]
pub struct CvDownload {
    pub application_id: ApplicationId,
    pub applicant_name: String,
    pub resume_url: String,
    pub notification: Notification,
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 application received".to_string()
    } else {
        format!("{count} applications received")
    }
}

/// Dashboard and review actions for the mock employer account.
pub struct ApplicationReviewService<R, N> {
    store: Arc<ListingStore>,
    repository: Arc<R>,
    notifications: Arc<N>,
}

impl<R, N> ApplicationReviewService<R, N>
where
    R: ApplicationRepository + 'static,
    N: NotificationSink + 'static,
{
    pub fn new(store: Arc<ListingStore>, repository: Arc<R>, notifications: Arc<N>) -> Self {
        Self {
            store,
            repository,
            notifications,
        }
    }

    pub fn dashboard(&self, search: &str) -> Result<EmployerDashboard, ReviewError> {
        let applications = self.repository.all()?;
        Ok(EmployerDashboard::build(&self.store, &applications, search))
    }

    pub fn review(&self, job_id: &JobId, filter: StatusFilter) -> Result<ApplicationReview, ReviewError> {
        let job = self
            .store
            .find(job_id)
            .ok_or_else(|| ReviewError::JobNotFound(job_id.clone()))?;

        let applications: Vec<ApplicationRecord> = self
            .repository
            .for_job(job_id)?
            .into_iter()
            .filter(|application| filter.admits(application.status))
            .collect();

        Ok(ApplicationReview {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            status_filter: filter,
            status_options: std::iter::once(StatusFilter::All.label())
                .chain(ApplicationStatus::ordered().into_iter().map(ApplicationStatus::label))
                .collect(),
            count_label: count_label(applications.len()),
            applications,
        })
    }

    pub fn set_status(
        &self,
        job_id: &JobId,
        application_id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<StatusChange, ReviewError> {
        self.application_for(job_id, application_id)?;
        let application = match self.repository.update_status(application_id, status) {
            Ok(application) => application,
            Err(RepositoryError::NotFound) => {
                return Err(ReviewError::ApplicationNotFound(application_id.clone()))
            }
            Err(other) => return Err(other.into()),
        };
        info!(application_id = %application.id, status = status.label(), "application status updated");

        let notification = Notification::info(
            "Status Updated",
            "The application status has been updated.",
        );
        dispatch(self.notifications.as_ref(), notification.clone());
        Ok(StatusChange {
            application,
            notification,
        })
    }

    pub fn download_cv(
        &self,
        job_id: &JobId,
        application_id: &ApplicationId,
    ) -> Result<CvDownload, ReviewError> {
        let application = self.application_for(job_id, application_id)?;
        let notification = Notification::info(
            "Download Started",
            format!("Downloading CV for {}", application.applicant_name),
        );
        dispatch(self.notifications.as_ref(), notification.clone());
        Ok(CvDownload {
            application_id: application.id,
            applicant_name: application.applicant_name,
            resume_url: application.resume_url,
            notification,
        })
    }

    fn application_for(
        &self,
        job_id: &JobId,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ReviewError> {
        if self.store.find(job_id).is_none() {
            return Err(ReviewError::JobNotFound(job_id.clone()));
        }
        match self.repository.fetch(application_id)? {
            Some(application) if &application.job_id == job_id => Ok(application),
            _ => {
                debug!(%job_id, %application_id, "application lookup missed");
                Err(ReviewError::ApplicationNotFound(application_id.clone()))
            }
        }
    }
}
