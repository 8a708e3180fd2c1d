use std::time::Duration;

use super::common::*;
use crate::forms::{
    ApplicationForm, FlowError, FlowState, FormFlow, ImmediateDelay, LoginForm, SubmissionDelay,
    TimerDelay,
};
use crate::navigation::Route;

#[tokio::test]
async fn apply_without_resume_never_enters_submitting() {
    let mut form = application();
    form.resume = None;
    let mut flow = FormFlow::new(form);

    match flow.submit(&ImmediateDelay).await {
        Err(FlowError::Invalid(errors)) => {
            assert_eq!(errors.get("resume"), ["CV is required"]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert_eq!(flow.state(), FlowState::Editing);
    assert!(flow.submission().is_none());
    assert!(flow.form_mut().is_some());
}

#[test]
fn begin_then_complete_walks_the_states() {
    let mut flow = FormFlow::new(application());
    assert_eq!(flow.state(), FlowState::Editing);

    let submission = flow.begin().expect("valid form");
    assert_eq!(submission.full_name, "Jane Smith");
    assert_eq!(flow.state(), FlowState::Submitting);
    assert!(flow.form_mut().is_none());

    assert!(matches!(flow.begin(), Err(FlowError::AlreadySubmitting)));

    let notice = flow.complete().expect("in flight");
    assert_eq!(notice.title, "Application Submitted");
    assert_eq!(flow.state(), FlowState::Succeeded);

    assert!(matches!(flow.begin(), Err(FlowError::AlreadySucceeded)));
    assert!(matches!(flow.complete(), Err(FlowError::NotSubmitting)));
}

#[test]
fn complete_requires_an_in_flight_submission() {
    let mut flow = FormFlow::new(LoginForm::default());
    assert!(matches!(flow.complete(), Err(FlowError::NotSubmitting)));
    assert_eq!(flow.state(), FlowState::Editing);
}

#[test]
fn errors_clear_once_the_form_is_fixed() {
    let mut flow = FormFlow::new(LoginForm {
        email: "employer@example.com".to_string(),
        password: "123".to_string(),
    });
    assert!(flow.begin().is_err());
    assert!(flow.errors().has("password"));

    if let Some(form) = flow.form_mut() {
        form.password = "123456".to_string();
    }
    flow.begin().expect("fixed form validates");
    assert!(flow.errors().is_empty());
}

#[test]
fn reset_returns_a_blank_editing_flow() {
    let mut flow = FormFlow::new(application());
    flow.begin().expect("valid form");
    flow.complete().expect("in flight");

    flow.reset();
    assert_eq!(flow.state(), FlowState::Editing);
    assert_eq!(flow.form(), &ApplicationForm::default());
    assert!(flow.submission().is_none());
}

#[tokio::test(start_paused = true)]
async fn timer_delay_holds_the_flow_in_submitting() {
    let delay = TimerDelay::new(Duration::from_millis(1500));
    let mut flow = FormFlow::new(application());
    flow.begin().expect("valid form");

    let started = tokio::time::Instant::now();
    delay.wait().await;
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(flow.state(), FlowState::Submitting);

    flow.complete().expect("in flight");
    assert_eq!(flow.state(), FlowState::Succeeded);
}

#[tokio::test]
async fn service_reports_success_and_notifies() {
    let (service, notifications) = immediate_service();
    let report = service
        .submit(LoginForm {
            email: "employer@example.com".to_string(),
            password: "secret1".to_string(),
        })
        .await;

    assert_eq!(report.state, FlowState::Succeeded);
    assert_eq!(report.redirect, Some(Route::EmployerDashboard));
    assert_eq!(
        report.submission.map(|session| session.email),
        Some("employer@example.com".to_string())
    );

    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].description, "Welcome back to Halshaw James.");
}

#[tokio::test]
async fn service_reports_validation_failures_without_notifying() {
    let (service, notifications) = immediate_service();
    let report = service.submit(LoginForm::default()).await;

    assert_eq!(report.state, FlowState::Editing);
    assert!(report.redirect.is_none());
    assert!(report.notification.is_none());
    assert!(report.errors.has("email"));
    assert!(report.errors.has("password"));
    assert!(notifications.events().is_empty());
}
