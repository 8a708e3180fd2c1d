use std::collections::HashSet;

use super::domain::{JobId, JobRecord};
use super::fixtures::standard_listings;

#[derive(Debug, thiserror::Error)]
pub enum ListingStoreError {
    #[error("duplicate job id '{0}'")]
    DuplicateId(JobId),
}

/// Ordered, read-only collection of listings. Order is the display order.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<JobRecord>,
}

impl ListingStore {
    pub fn new(listings: Vec<JobRecord>) -> Result<Self, ListingStoreError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(&listing.id) {
                return Err(ListingStoreError::DuplicateId(listing.id.clone()));
            }
        }

        Ok(Self { listings })
    }

    /// The built-in sample listings.
    pub fn standard() -> Self {
        Self {
            listings: standard_listings(),
        }
    }

    pub fn all(&self) -> &[JobRecord] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn find(&self, id: &JobId) -> Option<&JobRecord> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    /// Other listings in the same category, in store order.
    pub fn similar_to(&self, job: &JobRecord, limit: usize) -> Vec<&JobRecord> {
        self.listings
            .iter()
            .filter(|candidate| candidate.category == job.category && candidate.id != job.id)
            .take(limit)
            .collect()
    }

    /// Most recently posted listings first; ties keep store order.
    pub fn featured(&self, limit: usize) -> Vec<&JobRecord> {
        let mut newest: Vec<&JobRecord> = self.listings.iter().collect();
        newest.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        newest.truncate(limit);
        newest
    }

    /// Postings owned by the signed-in employer. The mock account owns the
    /// leading listings of the store.
    pub fn company_postings(&self, limit: usize) -> &[JobRecord] {
        &self.listings[..limit.min(self.listings.len())]
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::standard()
    }
}
