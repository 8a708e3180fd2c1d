use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attachment::FileReference;
use super::flow::SubmittableForm;
use super::validation::{require_email, require_length, FieldErrors};
use crate::listings::{JobId, JobRecord};
use crate::navigation::Route;
use crate::notify::Notification;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JobPostForm {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub category: String,
    pub salary: String,
    pub description: String,
    /// One requirement per line.
    pub requirements: String,
    pub email: String,
    pub company_logo: Option<FileReference>,
}

/// A validated posting. It is acknowledged but never added to the listing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPostDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub category: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<FileReference>,
}

impl JobPostDraft {
    pub fn into_record(self, id: JobId, posted_date: NaiveDate) -> JobRecord {
        JobRecord {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            salary: self.salary,
            job_type: self.job_type,
            category: self.category,
            description: self.description,
            requirements: self.requirements,
            posted_date,
            logo: self.company_logo.map(|logo| logo.file_name),
        }
    }
}

fn split_requirements(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl SubmittableForm for JobPostForm {
    type Validated = JobPostDraft;

    const NAME: &'static str = "post_job";

    fn validate(&self) -> Result<Self::Validated, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_length(&mut errors, "title", &self.title, 3, "Job title is required");
        require_length(&mut errors, "company", &self.company, 2, "Company name is required");
        require_length(&mut errors, "location", &self.location, 2, "Location is required");
        require_length(&mut errors, "type", &self.job_type, 1, "Job type is required");
        require_length(&mut errors, "category", &self.category, 1, "Category is required");
        require_length(&mut errors, "salary", &self.salary, 1, "Salary is required");
        require_length(
            &mut errors,
            "description",
            &self.description,
            20,
            "Description is required (minimum 20 characters)",
        );
        require_length(
            &mut errors,
            "requirements",
            &self.requirements,
            20,
            "Requirements are required (minimum 20 characters)",
        );
        require_email(&mut errors, "email", &self.email);

        let logo = self.company_logo.clone().filter(|logo| !logo.is_blank());
        if logo.as_ref().is_some_and(|logo| !logo.is_image()) {
            errors.push("company_logo", "Company logo must be an image");
        }

        errors.into_result(JobPostDraft {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            job_type: self.job_type.trim().to_string(),
            category: self.category.trim().to_string(),
            salary: self.salary.trim().to_string(),
            description: self.description.trim().to_string(),
            requirements: split_requirements(&self.requirements),
            contact_email: self.email.trim().to_string(),
            company_logo: logo,
        })
    }

    fn success_notice() -> Notification {
        Notification::info(
            "Job Posted Successfully",
            "Your job has been posted and will be reviewed shortly.",
        )
    }

    fn redirect() -> Option<Route> {
        Some(Route::EmployerLogin)
    }
}
