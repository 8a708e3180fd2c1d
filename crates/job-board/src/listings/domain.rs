use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for listings; unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single advertised position. Immutable once loaded into a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    /// Free text, never geocoded ("London, UK", "Remote").
    pub location: String,
    /// Display string, not a number ("£70,000 - £85,000").
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub category: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl JobRecord {
    /// Placeholder glyph for cards without a logo.
    pub fn company_initial(&self) -> Option<char> {
        self.company.chars().next()
    }

    /// Relative age label used on listing cards.
    pub fn posted_label(&self, today: NaiveDate) -> String {
        match (today - self.posted_date).num_days().abs() {
            0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            days => format!("{days} days ago"),
        }
    }
}

/// Independent filter dimensions on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    JobType,
    Category,
}

impl Facet {
    pub const fn ordered() -> [Self; 2] {
        [Self::JobType, Self::Category]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobType => "Job Type",
            Self::Category => "Category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
}

impl FacetOption {
    fn same(value: &str) -> Self {
        Self {
            id: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// Closed option lists offered for each facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub job_types: Vec<FacetOption>,
    pub categories: Vec<FacetOption>,
}

impl FacetOptions {
    /// Checkbox options on the `/jobs` filter column.
    pub fn standard() -> Self {
        Self {
            job_types: ["Full-time", "Part-time", "Contract", "Remote"]
                .into_iter()
                .map(FacetOption::same)
                .collect(),
            categories: ["Development", "Design", "DevOps", "Marketing", "Product"]
                .into_iter()
                .map(FacetOption::same)
                .collect(),
        }
    }

    /// Select options on the job posting form, which offers a wider range.
    pub fn posting() -> Self {
        Self {
            job_types: ["Full-time", "Part-time", "Contract", "Freelance", "Remote"]
                .into_iter()
                .map(FacetOption::same)
                .collect(),
            categories: [
                "Development",
                "Design",
                "DevOps",
                "Marketing",
                "Sales",
                "Product",
                "Finance",
                "HR",
            ]
            .into_iter()
            .map(FacetOption::same)
            .collect(),
        }
    }

    pub fn for_facet(&self, facet: Facet) -> &[FacetOption] {
        match facet {
            Facet::JobType => &self.job_types,
            Facet::Category => &self.categories,
        }
    }
}

/// Sort selector on the listing page. Accepted and echoed, never applied to results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    Relevant,
    SalaryHigh,
    SalaryLow,
}

impl SortOrder {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Newest,
            Self::Relevant,
            Self::SalaryHigh,
            Self::SalaryLow,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Relevant => "relevant",
            Self::SalaryHigh => "salary-high",
            Self::SalaryLow => "salary-low",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Relevant => "Most Relevant",
            Self::SalaryHigh => "Salary: High to Low",
            Self::SalaryLow => "Salary: Low to High",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(raw))
    }
}
