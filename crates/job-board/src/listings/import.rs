use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::domain::{JobId, JobRecord};
use super::store::{ListingStore, ListingStoreError};

const REQUIREMENT_SEPARATOR: char = '|';

#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// `row` counts data rows from 1, excluding the header.
    InvalidDate { row: usize, id: String, value: String },
    Store(ListingStoreError),
}

impl std::fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            ListingImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
            ListingImportError::InvalidDate { row, id, value } => write!(
                f,
                "row {}: listing '{}' has posted_date '{}', expected YYYY-MM-DD",
                row, id, value
            ),
            ListingImportError::Store(err) => write!(f, "listing export rejected: {}", err),
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::InvalidDate { .. } => None,
            ListingImportError::Store(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<ListingStoreError> for ListingImportError {
    fn from(err: ListingStoreError) -> Self {
        Self::Store(err)
    }
}

/// Hydrates a [`ListingStore`] from a CSV export, preserving row order.
pub struct ListingImporter;

impl ListingImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ListingStore, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ListingStore, ListingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut listings = Vec::new();

        for (index, row) in csv_reader.deserialize::<ListingRow>().enumerate() {
            listings.push(row?.into_record(index + 1)?);
        }

        Ok(ListingStore::new(listings)?)
    }
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: String,
    title: String,
    company: String,
    location: String,
    salary: String,
    #[serde(rename = "type")]
    job_type: String,
    category: String,
    description: String,
    #[serde(default)]
    requirements: String,
    posted_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    logo: Option<String>,
}

impl ListingRow {
    fn into_record(self, row: usize) -> Result<JobRecord, ListingImportError> {
        let posted_date = NaiveDate::parse_from_str(self.posted_date.trim(), "%Y-%m-%d")
            .map_err(|_| ListingImportError::InvalidDate {
                row,
                id: self.id.clone(),
                value: self.posted_date.clone(),
            })?;

        let requirements = self
            .requirements
            .split(REQUIREMENT_SEPARATOR)
            .map(str::trim)
            .filter(|requirement| !requirement.is_empty())
            .map(str::to_string)
            .collect();

        Ok(JobRecord {
            id: JobId(self.id),
            title: self.title,
            company: self.company,
            location: self.location,
            salary: self.salary,
            job_type: self.job_type,
            category: self.category,
            description: self.description,
            requirements,
            posted_date,
            logo: self.logo,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
