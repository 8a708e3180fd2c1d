//! Keyword, location, type, and category predicates over the listing store.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use super::domain::JobRecord;
use super::store::ListingStore;

/// Combined search and facet inputs at a point in time.
///
/// Empty fields impose no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterQuery {
    pub keyword: String,
    pub location: String,
    pub types: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl FilterQuery {
    pub fn is_unrestricted(&self) -> bool {
        self.keyword.is_empty()
            && self.location.is_empty()
            && self.types.is_empty()
            && self.categories.is_empty()
    }
}

/// Lower-cased needles, computed once per evaluation.
struct Predicates<'q> {
    keyword: Option<String>,
    location: Option<String>,
    types: &'q BTreeSet<String>,
    categories: &'q BTreeSet<String>,
}

impl<'q> Predicates<'q> {
    fn new(query: &'q FilterQuery) -> Self {
        Self {
            keyword: needle(&query.keyword),
            location: needle(&query.location),
            types: &query.types,
            categories: &query.categories,
        }
    }

    fn matches(&self, job: &JobRecord) -> bool {
        if let Some(keyword) = &self.keyword {
            let hit = contains_folded(&job.title, keyword)
                || contains_folded(&job.company, keyword)
                || contains_folded(&job.description, keyword);
            if !hit {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !contains_folded(&job.location, location) {
                return false;
            }
        }

        if !self.types.is_empty() && !self.types.contains(&job.job_type) {
            return false;
        }

        self.categories.is_empty() || self.categories.contains(&job.category)
    }
}

fn needle(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_lowercase())
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Order-preserving subsequence of `listings` matching every active clause.
pub fn filter_listings<'a>(listings: &'a [JobRecord], query: &FilterQuery) -> Vec<&'a JobRecord> {
    let predicates = Predicates::new(query);
    listings
        .iter()
        .filter(|job| predicates.matches(job))
        .collect()
}

/// Memoised filter over one store: re-evaluates only when the query changes.
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    store: Arc<ListingStore>,
    cached: Option<(FilterQuery, Vec<usize>)>,
    evaluations: usize,
}

impl FilterPipeline {
    pub fn new(store: Arc<ListingStore>) -> Self {
        Self {
            store,
            cached: None,
            evaluations: 0,
        }
    }

    pub fn store(&self) -> &Arc<ListingStore> {
        &self.store
    }

    /// How many times the predicates have actually been run.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn run(&mut self, query: &FilterQuery) -> Vec<&JobRecord> {
        let stale = !matches!(&self.cached, Some((cached, _)) if cached == query);
        if stale {
            let predicates = Predicates::new(query);
            let positions = self
                .store
                .all()
                .iter()
                .enumerate()
                .filter(|(_, job)| predicates.matches(job))
                .map(|(position, _)| position)
                .collect();
            self.cached = Some((query.clone(), positions));
            self.evaluations += 1;
        }

        let listings = self.store.all();
        match &self.cached {
            Some((_, positions)) => positions.iter().map(|&pos| &listings[pos]).collect(),
            None => Vec::new(),
        }
    }
}
