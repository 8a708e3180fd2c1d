use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{ApplicationRecord, ApplicationStatus};
use crate::listings::{JobId, ListingStore};
use crate::navigation::Route;

/// The mock account owns this many leading listings.
pub const COMPANY_POSTING_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub active_postings: usize,
    pub total_applications: usize,
    pub new_applications: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingSummary {
    pub id: JobId,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub posted_date: NaiveDate,
    pub applications: usize,
    pub review: Route,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployerDashboard {
    pub stats: DashboardStats,
    pub postings: Vec<PostingSummary>,
    pub search: String,
    pub applications: Vec<ApplicationRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    pub post_job: Route,
}

impl EmployerDashboard {
    pub fn build(store: &ListingStore, applications: &[ApplicationRecord], search: &str) -> Self {
        let postings: Vec<PostingSummary> = store
            .company_postings(COMPANY_POSTING_LIMIT)
            .iter()
            .map(|job| PostingSummary {
                id: job.id.clone(),
                title: job.title.clone(),
                location: job.location.clone(),
                job_type: job.job_type.clone(),
                posted_date: job.posted_date,
                applications: applications
                    .iter()
                    .filter(|application| application.job_id == job.id)
                    .count(),
                review: Route::EmployerApplications(job.id.clone()),
            })
            .collect();

        let stats = DashboardStats {
            active_postings: postings.len(),
            total_applications: applications.len(),
            new_applications: applications
                .iter()
                .filter(|application| application.status == ApplicationStatus::New)
                .count(),
        };

        let search = search.trim().to_string();
        let matching: Vec<ApplicationRecord> = applications
            .iter()
            .filter(|application| application.matches_search(&search))
            .cloned()
            .collect();

        let empty_message = match (matching.is_empty(), search.is_empty()) {
            (false, _) => None,
            (true, false) => Some("No applications match your search criteria."),
            (true, true) => Some("You haven't received any applications yet."),
        };

        Self {
            stats,
            postings,
            search,
            applications: matching,
            empty_message,
            post_job: Route::PostJob,
        }
    }
}
