use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use super::domain::{Facet, FacetOptions, JobId, SortOrder};
use super::facets::FacetSelection;
use super::page::ListingPage;
use super::store::ListingStore;
use super::views::{HomeView, JobCardView, JobDetailView};
use crate::navigation::{NotFoundView, Route};

const FEATURED_LIMIT: usize = 3;
const SIMILAR_LIMIT: usize = 3;

/// Public read surface: home page, listing page, and job detail.
pub fn listing_router(store: Arc<ListingStore>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/jobs", get(listing_handler))
        .route("/jobs/:id", get(detail_handler))
        .with_state(store)
}

/// `/jobs` parameters. Facet values are comma separated.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingParams {
    #[serde(default)]
    pub(crate) keyword: Option<String>,
    #[serde(default)]
    pub(crate) location: Option<String>,
    #[serde(default)]
    pub(crate) types: Option<String>,
    #[serde(default)]
    pub(crate) categories: Option<String>,
    #[serde(default)]
    pub(crate) sort: Option<String>,
}

impl ListingParams {
    pub(crate) fn into_page(self, store: Arc<ListingStore>) -> ListingPage {
        let facets = FacetSelection::new()
            .with_selected(Facet::JobType, split_list(self.types.as_deref()))
            .with_selected(Facet::Category, split_list(self.categories.as_deref()));

        let mut page =
            ListingPage::from_deep_link(store, self.keyword.as_deref(), self.location.as_deref())
                .with_facets(facets);

        if let Some(raw) = self.sort.as_deref() {
            match SortOrder::parse(raw) {
                Some(sort) => page.set_sort(sort),
                None => debug!(sort = raw, "ignoring unknown sort order"),
            }
        }
        page
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) async fn home_handler(State(store): State<Arc<ListingStore>>) -> Json<HomeView> {
    let today = today();
    Json(HomeView {
        headline: "Find Your Dream Job Today",
        tagline: "Discover thousands of job opportunities with all the information you need.",
        search_action: Route::jobs(),
        featured: store
            .featured(FEATURED_LIMIT)
            .into_iter()
            .map(|job| JobCardView::from_record(job, today))
            .collect(),
        categories: FacetOptions::standard().categories,
    })
}

pub(crate) async fn listing_handler(
    State(store): State<Arc<ListingStore>>,
    Query(params): Query<ListingParams>,
) -> Response {
    let mut page = params.into_page(store);
    let view = page.view(today());
    debug!(total = view.total, "listing page rendered");
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn detail_handler(
    State(store): State<Arc<ListingStore>>,
    Path(id): Path<String>,
) -> Response {
    let id = JobId(id);
    match store.find(&id) {
        Some(job) => {
            let similar = store.similar_to(job, SIMILAR_LIMIT);
            Json(JobDetailView::new(job, &similar, today())).into_response()
        }
        None => {
            debug!(job_id = %id, "job detail lookup missed");
            NotFoundView::job().into_response()
        }
    }
}
