use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Facet, FacetOption, JobRecord, SortOrder};
use super::facets::FacetChoice;
use super::filter::FilterQuery;
use crate::navigation::Route;

#[derive(Debug, Clone, Serialize)]
pub struct JobCardView {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_initial: Option<char>,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub posted_date: NaiveDate,
    pub posted_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub href: Route,
}

impl JobCardView {
    pub fn from_record(job: &JobRecord, today: NaiveDate) -> Self {
        Self {
            id: job.id.0.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            company_initial: job.company_initial(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            job_type: job.job_type.clone(),
            posted_date: job.posted_date,
            posted_label: job.posted_label(today),
            logo: job.logo.clone(),
            href: Route::JobDetail(job.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetGroupView {
    pub facet: Facet,
    pub title: &'static str,
    pub options: Vec<FacetChoice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortOptionView {
    pub value: SortOrder,
    pub label: &'static str,
    pub selected: bool,
}

/// Informational block shown when nothing matches; not an error.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyStateView {
    pub title: &'static str,
    pub message: &'static str,
    pub action_label: &'static str,
    pub action: Route,
}

impl EmptyStateView {
    pub fn no_jobs() -> Self {
        Self {
            title: "No Jobs Found",
            message: "We couldn't find any jobs matching your criteria. Try adjusting your filters.",
            action_label: "Clear All Filters",
            action: Route::jobs(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingPageView {
    pub query: FilterQuery,
    pub total: usize,
    pub count_label: String,
    pub filters: Vec<FacetGroupView>,
    pub sort: SortOrder,
    pub sort_options: Vec<SortOptionView>,
    pub jobs: Vec<JobCardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyStateView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobDetailView {
    pub job: JobRecord,
    pub posted_label: String,
    pub company_blurb: String,
    pub similar_jobs: Vec<JobCardView>,
    pub apply_action: String,
}

impl JobDetailView {
    pub fn new(job: &JobRecord, similar: &[&JobRecord], today: NaiveDate) -> Self {
        Self {
            job: job.clone(),
            posted_label: job.posted_label(today),
            company_blurb: format!(
                "{} is a leading company in the {} industry.",
                job.company, job.category
            ),
            similar_jobs: similar
                .iter()
                .map(|similar| JobCardView::from_record(similar, today))
                .collect(),
            apply_action: format!("{}/apply", Route::JobDetail(job.id.clone()).path()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub search_action: Route,
    pub featured: Vec<JobCardView>,
    pub categories: Vec<FacetOption>,
}
