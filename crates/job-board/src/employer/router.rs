use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::{ApplicationId, ApplicationStatus, StatusFilter};
use super::repository::ApplicationRepository;
use super::review::{ApplicationReviewService, ReviewError};
use crate::listings::JobId;
use crate::navigation::NotFoundView;
use crate::notify::NotificationSink;

pub fn employer_router<R, N>(service: Arc<ApplicationReviewService<R, N>>) -> Router
where
    R: ApplicationRepository + 'static,
    N: NotificationSink + 'static,
{
    Router::new()
        .route("/employer/dashboard", get(dashboard_handler::<R, N>))
        .route(
            "/employer/applications/:job_id",
            get(review_handler::<R, N>),
        )
        .route(
            "/employer/applications/:job_id/:application_id/status",
            put(status_handler::<R, N>),
        )
        .route(
            "/employer/applications/:job_id/:application_id/cv",
            post(download_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardParams {
    #[serde(default)]
    pub(crate) search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReviewParams {
    #[serde(default)]
    pub(crate) status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdate {
    pub(crate) status: ApplicationStatus,
}

fn review_error_response(error: ReviewError) -> Response {
    match error {
        ReviewError::JobNotFound(_) => NotFoundView::review_job().into_response(),
        ReviewError::ApplicationNotFound(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        ReviewError::Repository(_) => {
            error!(%error, "application repository failure");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn dashboard_handler<R, N>(
    State(service): State<Arc<ApplicationReviewService<R, N>>>,
    Query(params): Query<DashboardParams>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationSink + 'static,
{
    match service.dashboard(params.search.as_deref().unwrap_or_default()) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => review_error_response(error),
    }
}

pub(crate) async fn review_handler<R, N>(
    State(service): State<Arc<ApplicationReviewService<R, N>>>,
    Path(job_id): Path<String>,
    Query(params): Query<ReviewParams>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationSink + 'static,
{
    let filter = match params.status.as_deref() {
        None => StatusFilter::All,
        Some(raw) => match StatusFilter::parse(raw) {
            Some(filter) => filter,
            None => {
                let payload = json!({ "error": format!("unknown status filter '{raw}'") });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        },
    };

    match service.review(&JobId(job_id), filter) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => review_error_response(error),
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<ApplicationReviewService<R, N>>>,
    Path((job_id, application_id)): Path<(String, String)>,
    Json(update): Json<StatusUpdate>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationSink + 'static,
{
    match service.set_status(
        &JobId(job_id),
        &ApplicationId(application_id),
        update.status,
    ) {
        Ok(change) => (StatusCode::OK, Json(change)).into_response(),
        Err(error) => review_error_response(error),
    }
}

pub(crate) async fn download_handler<R, N>(
    State(service): State<Arc<ApplicationReviewService<R, N>>>,
    Path((job_id, application_id)): Path<(String, String)>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationSink + 'static,
{
    match service.download_cv(&JobId(job_id), &ApplicationId(application_id)) {
        Ok(download) => (StatusCode::OK, Json(download)).into_response(),
        Err(error) => review_error_response(error),
    }
}
