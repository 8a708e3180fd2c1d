//! Mock employer dashboard and per-job application review.

pub mod dashboard;
pub mod domain;
mod fixtures;
pub mod repository;
pub mod review;
pub mod router;

#[cfg(test)]
mod tests;

pub use dashboard::{DashboardStats, EmployerDashboard, PostingSummary};
pub use domain::{ApplicationId, ApplicationRecord, ApplicationStatus, StatusFilter};
pub use fixtures::sample_applications;
pub use repository::{ApplicationRepository, RepositoryError};
pub use review::{ApplicationReview, ApplicationReviewService, CvDownload, ReviewError, StatusChange};
pub use router::employer_router;
