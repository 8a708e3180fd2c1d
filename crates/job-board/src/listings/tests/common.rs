use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::listings::{FilterQuery, JobRecord, ListingStore};

pub(super) fn store() -> Arc<ListingStore> {
    Arc::new(ListingStore::standard())
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 6).expect("valid date")
}

pub(super) fn ids(jobs: &[&JobRecord]) -> Vec<String> {
    jobs.iter().map(|job| job.id.0.clone()).collect()
}

pub(super) fn keyword(keyword: &str) -> FilterQuery {
    FilterQuery {
        keyword: keyword.to_string(),
        ..FilterQuery::default()
    }
}

pub(super) fn location(location: &str) -> FilterQuery {
    FilterQuery {
        location: location.to_string(),
        ..FilterQuery::default()
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
