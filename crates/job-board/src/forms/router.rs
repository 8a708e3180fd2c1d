use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::debug;

use super::apply::ApplicationForm;
use super::auth::{LoginForm, RegisterForm};
use super::flow::SubmissionService;
use super::post_job::JobPostForm;
use crate::listings::{FacetOption, FacetOptions, JobId, ListingStore};
use crate::navigation::{NotFoundView, Route};
use crate::notify::NotificationSink;

pub(crate) struct FormState<N> {
    store: Arc<ListingStore>,
    service: Arc<SubmissionService<N>>,
}

impl<N> Clone for FormState<N> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            service: Arc::clone(&self.service),
        }
    }
}

/// Form surfaces: apply, post a job, employer login and registration.
pub fn form_router<N>(store: Arc<ListingStore>, service: Arc<SubmissionService<N>>) -> Router
where
    N: NotificationSink + 'static,
{
    Router::new()
        .route("/jobs/:id/apply", post(apply_handler::<N>))
        .route(
            "/post-job",
            get(post_job_form).post(post_job_handler::<N>),
        )
        .route("/employer/login", get(auth_forms).post(login_handler::<N>))
        .route("/employer/register", post(register_handler::<N>))
        .with_state(FormState { store, service })
}

#[derive(Debug, Serialize)]
pub(crate) struct PostJobFormView {
    pub(crate) job_types: Vec<FacetOption>,
    pub(crate) categories: Vec<FacetOption>,
    pub(crate) submit_action: Route,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthFormsView {
    pub(crate) title: &'static str,
    pub(crate) subtitle: &'static str,
    pub(crate) login_action: Route,
    pub(crate) register_action: &'static str,
}

pub(crate) async fn post_job_form() -> Json<PostJobFormView> {
    let FacetOptions {
        job_types,
        categories,
    } = FacetOptions::posting();
    Json(PostJobFormView {
        job_types,
        categories,
        submit_action: Route::PostJob,
    })
}

pub(crate) async fn auth_forms() -> Json<AuthFormsView> {
    Json(AuthFormsView {
        title: "Employer Portal",
        subtitle: "Login or create an account to manage your job postings",
        login_action: Route::EmployerLogin,
        register_action: "/employer/register",
    })
}

pub(crate) async fn apply_handler<N>(
    State(state): State<FormState<N>>,
    Path(id): Path<String>,
    Json(form): Json<ApplicationForm>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let id = JobId(id);
    let Some(job) = state.store.find(&id) else {
        debug!(job_id = %id, "apply target missing");
        return NotFoundView::job().into_response();
    };
    debug!(job_id = %job.id, title = %job.title, "application received");
    state.service.submit(form).await.into_response()
}

pub(crate) async fn post_job_handler<N>(
    State(state): State<FormState<N>>,
    Json(form): Json<JobPostForm>,
) -> Response
where
    N: NotificationSink + 'static,
{
    state.service.submit(form).await.into_response()
}

pub(crate) async fn login_handler<N>(
    State(state): State<FormState<N>>,
    Json(form): Json<LoginForm>,
) -> Response
where
    N: NotificationSink + 'static,
{
    state.service.submit(form).await.into_response()
}

pub(crate) async fn register_handler<N>(
    State(state): State<FormState<N>>,
    Json(form): Json<RegisterForm>,
) -> Response
where
    N: NotificationSink + 'static,
{
    state.service.submit(form).await.into_response()
}
