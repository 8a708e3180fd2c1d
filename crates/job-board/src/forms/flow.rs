//! Editing → Submitting → Succeeded state machine shared by every form.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};

use super::delay::SubmissionDelay;
use super::validation::FieldErrors;
use crate::navigation::Route;
use crate::notify::{dispatch, Notification, NotificationSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    Editing,
    Submitting,
    Succeeded,
}

/// A form that can be validated and pushed through a [`FormFlow`].
pub trait SubmittableForm: Send {
    type Validated: Clone + Serialize + Send;

    const NAME: &'static str;

    fn validate(&self) -> Result<Self::Validated, FieldErrors>;

    fn success_notice() -> Notification;

    /// Where to navigate once the submission completes.
    fn redirect() -> Option<Route> {
        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("the form has already been submitted")]
    AlreadySucceeded,
    #[error("no submission is in progress")]
    NotSubmitting,
}

/// One form instance and its submission state.
#[derive(Debug, Clone)]
pub struct FormFlow<F: SubmittableForm> {
    form: F,
    state: FlowState,
    errors: FieldErrors,
    submission: Option<F::Validated>,
}

impl<F: SubmittableForm> FormFlow<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            state: FlowState::Editing,
            errors: FieldErrors::new(),
            submission: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Field edits are only accepted while editing.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        (self.state == FlowState::Editing).then_some(&mut self.form)
    }

    pub fn submission(&self) -> Option<&F::Validated> {
        self.submission.as_ref()
    }

    /// Validate and, when every field passes, enter Submitting.
    pub fn begin(&mut self) -> Result<F::Validated, FlowError> {
        match self.state {
            FlowState::Submitting => return Err(FlowError::AlreadySubmitting),
            FlowState::Succeeded => return Err(FlowError::AlreadySucceeded),
            FlowState::Editing => {}
        }

        match self.form.validate() {
            Ok(validated) => {
                self.errors = FieldErrors::new();
                self.submission = Some(validated.clone());
                self.state = FlowState::Submitting;
                Ok(validated)
            }
            Err(errors) => {
                debug!(form = F::NAME, fields = errors.len(), "validation failed");
                self.errors = errors.clone();
                Err(FlowError::Invalid(errors))
            }
        }
    }

    /// Finish an in-flight submission. There is no failure path once submitting.
    pub fn complete(&mut self) -> Result<Notification, FlowError> {
        if self.state != FlowState::Submitting {
            return Err(FlowError::NotSubmitting);
        }
        self.state = FlowState::Succeeded;
        Ok(F::success_notice())
    }

    pub async fn submit(&mut self, delay: &dyn SubmissionDelay) -> Result<Notification, FlowError> {
        self.begin()?;
        delay.wait().await;
        self.complete()
    }

    /// Start over with a blank form.
    pub fn reset(&mut self)
    where
        F: Default,
    {
        *self = Self::new(F::default());
    }

    pub fn into_report(self, notification: Option<Notification>) -> FlowReport<F::Validated> {
        let succeeded = self.state == FlowState::Succeeded;
        FlowReport {
            form: F::NAME,
            state: self.state,
            errors: self.errors,
            notification,
            redirect: if succeeded { F::redirect() } else { None },
            submission: if succeeded { self.submission } else { None },
        }
    }
}

/// Outcome of one submission as returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct FlowReport<V> {
    pub form: &'static str,
    pub state: FlowState,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Route>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<V>,
}

impl<V: Serialize> IntoResponse for FlowReport<V> {
    fn into_response(self) -> Response {
        let status = match self.state {
            FlowState::Succeeded => StatusCode::OK,
            FlowState::Editing | FlowState::Submitting => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(self)).into_response()
    }
}

/// Runs forms through their flow with the configured delay and announces success.
pub struct SubmissionService<N> {
    delay: Arc<dyn SubmissionDelay>,
    notifications: Arc<N>,
}

impl<N> SubmissionService<N>
where
    N: NotificationSink + 'static,
{
    pub fn new(delay: Arc<dyn SubmissionDelay>, notifications: Arc<N>) -> Self {
        Self {
            delay,
            notifications,
        }
    }

    pub fn notifications(&self) -> &Arc<N> {
        &self.notifications
    }

    pub async fn submit<F: SubmittableForm>(&self, form: F) -> FlowReport<F::Validated> {
        let mut flow = FormFlow::new(form);
        match flow.submit(self.delay.as_ref()).await {
            Ok(notification) => {
                info!(form = F::NAME, "submission completed");
                dispatch(self.notifications.as_ref(), notification.clone());
                flow.into_report(Some(notification))
            }
            Err(error) => {
                debug!(form = F::NAME, %error, "submission rejected");
                flow.into_report(None)
            }
        }
    }
}
