use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{Facet, FacetOptions, JobRecord, SortOrder};
use super::facets::FacetSelection;
use super::filter::{FilterPipeline, FilterQuery};
use super::search::{SearchInput, SearchQuery};
use super::store::ListingStore;
use super::views::{EmptyStateView, FacetGroupView, JobCardView, ListingPageView, SortOptionView};

/// State behind one `/jobs` page instance.
///
/// Every instance owns its search draft, applied query, facet selection, and
/// memoised pipeline; two pages over the same store never observe each other.
#[derive(Debug, Clone)]
pub struct ListingPage {
    search: SearchInput,
    applied: SearchQuery,
    facets: FacetSelection,
    options: FacetOptions,
    sort: SortOrder,
    pipeline: FilterPipeline,
}

impl ListingPage {
    pub fn new(store: Arc<ListingStore>) -> Self {
        Self::from_deep_link(store, None, None)
    }

    /// Initialise from `/jobs?keyword=..&location=..`. The seed applies immediately.
    pub fn from_deep_link(
        store: Arc<ListingStore>,
        keyword: Option<&str>,
        location: Option<&str>,
    ) -> Self {
        let search = SearchInput::seeded(keyword, location);
        let applied = search.submit();
        Self {
            search,
            applied,
            facets: FacetSelection::new(),
            options: FacetOptions::standard(),
            sort: SortOrder::default(),
            pipeline: FilterPipeline::new(store),
        }
    }

    pub fn with_facets(mut self, facets: FacetSelection) -> Self {
        self.facets = facets;
        self
    }

    pub fn search_mut(&mut self) -> &mut SearchInput {
        &mut self.search
    }

    pub fn submit_search(&mut self) {
        self.applied = self.search.submit();
    }

    pub fn toggle(&mut self, facet: Facet, id: &str) -> bool {
        self.facets.toggle(facet, id)
    }

    /// "Reset Filters": clears facets, keeps the search.
    pub fn reset_filters(&mut self) {
        self.facets.reset();
    }

    /// "Clear All Filters": clears search and facets.
    pub fn clear_all(&mut self) {
        self.search.clear();
        self.applied = SearchQuery::default();
        self.facets.reset();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn facets(&self) -> &FacetSelection {
        &self.facets
    }

    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            keyword: self.applied.keyword.clone(),
            location: self.applied.location.clone(),
            types: self.facets.selected(Facet::JobType).clone(),
            categories: self.facets.selected(Facet::Category).clone(),
        }
    }

    pub fn results(&mut self) -> Vec<&JobRecord> {
        let query = self.query();
        self.pipeline.run(&query)
    }

    pub fn evaluations(&self) -> usize {
        self.pipeline.evaluations()
    }

    pub fn view(&mut self, today: NaiveDate) -> ListingPageView {
        let query = self.query();
        let sort = self.sort;
        let filters = Facet::ordered()
            .into_iter()
            .map(|facet| FacetGroupView {
                facet,
                title: facet.label(),
                options: self.facets.choices(facet, &self.options),
            })
            .collect();

        let jobs: Vec<JobCardView> = self
            .pipeline
            .run(&query)
            .into_iter()
            .map(|job| JobCardView::from_record(job, today))
            .collect();

        let total = jobs.len();
        ListingPageView {
            query,
            total,
            count_label: format!("{total} jobs found"),
            filters,
            sort,
            sort_options: SortOrder::ordered()
                .into_iter()
                .map(|value| SortOptionView {
                    value,
                    label: value.label(),
                    selected: value == sort,
                })
                .collect(),
            empty_state: (total == 0).then(EmptyStateView::no_jobs),
            jobs,
        }
    }
}
