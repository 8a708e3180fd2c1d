use super::domain::{ApplicationId, ApplicationRecord, ApplicationStatus};
use crate::listings::JobId;

/// Volatile application storage; status changes live only as long as the process.
pub trait ApplicationRepository: Send + Sync {
    fn all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;

    fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, RepositoryError>;

    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|record| &record.job_id == job_id)
            .collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
