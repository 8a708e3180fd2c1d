use super::common::*;
use crate::forms::{
    FileReference, JobPostForm, RegisterForm, SubmittableForm,
};
use crate::listings::JobId;
use chrono::NaiveDate;

fn job_post() -> JobPostForm {
    JobPostForm {
        title: "Platform Engineer".to_string(),
        company: "Cloud Systems Inc".to_string(),
        location: "Leeds, UK".to_string(),
        job_type: "Contract".to_string(),
        category: "DevOps".to_string(),
        salary: "£500/day".to_string(),
        description: "Own our deployment tooling end to end.".to_string(),
        requirements: "Terraform experience\n\n  Kubernetes in production  \nOn-call rota".to_string(),
        email: "jobs@cloudsystems.example".to_string(),
        company_logo: None,
    }
}

#[test]
fn blank_application_reports_every_field() {
    let errors = crate::forms::ApplicationForm::default()
        .validate()
        .expect_err("blank form fails");

    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(fields, ["email", "full_name", "phone", "resume"]);
    assert_eq!(errors.get("full_name"), ["Name is required"]);
    assert_eq!(errors.get("email"), ["Invalid email address"]);
    assert_eq!(errors.get("phone"), ["Phone number is required"]);
    assert_eq!(errors.get("resume"), ["CV is required"]);
}

#[test]
fn application_resume_must_be_a_document() {
    let mut form = application();
    form.resume = Some(FileReference::new("holiday.png"));
    let errors = form.validate().expect_err("image resume rejected");
    assert_eq!(errors.get("resume"), ["CV must be a PDF or Word document"]);

    form.resume = Some(FileReference::new("   "));
    let errors = form.validate().expect_err("blank resume rejected");
    assert_eq!(errors.get("resume"), ["CV is required"]);
}

#[test]
fn application_name_length_counts_every_character() {
    let mut form = application();
    form.full_name = " x".to_string();
    assert!(form.validate().is_ok());

    form.full_name = "x".to_string();
    let errors = form.validate().expect_err("single character rejected");
    assert_eq!(errors.get("full_name"), ["Name is required"]);
}

#[test]
fn application_cover_letter_is_optional() {
    let mut form = application();
    form.cover_letter = Some("  ".to_string());
    let submission = form.validate().expect("valid");
    assert_eq!(submission.cover_letter, None);
    assert_eq!(submission.resume.file_name, "jane-smith-cv.pdf");
}

#[test]
fn job_post_minimums() {
    let mut form = job_post();
    form.title = "QA".to_string();
    form.description = "Too short".to_string();
    form.requirements = "Short".to_string();
    form.job_type = String::new();

    let errors = form.validate().expect_err("invalid post");
    assert_eq!(errors.get("title"), ["Job title is required"]);
    assert_eq!(
        errors.get("description"),
        ["Description is required (minimum 20 characters)"]
    );
    assert_eq!(
        errors.get("requirements"),
        ["Requirements are required (minimum 20 characters)"]
    );
    assert_eq!(errors.get("type"), ["Job type is required"]);
    assert!(!errors.has("company"));
}

#[test]
fn job_post_logo_must_be_an_image() {
    let mut form = job_post();
    form.company_logo = Some(FileReference::new("logo.pdf"));
    let errors = form.validate().expect_err("pdf logo rejected");
    assert_eq!(errors.get("company_logo"), ["Company logo must be an image"]);

    form.company_logo = Some(FileReference::new("logo.png"));
    assert!(form.validate().is_ok());
}

#[test]
fn job_post_splits_requirements_per_line() {
    let draft = job_post().validate().expect("valid post");
    assert_eq!(
        draft.requirements,
        ["Terraform experience", "Kubernetes in production", "On-call rota"]
    );

    let posted = NaiveDate::from_ymd_opt(2025, 5, 6).expect("valid date");
    let record = draft.into_record(JobId::from("draft"), posted);
    assert_eq!(record.job_type, "Contract");
    assert_eq!(record.posted_date, posted);
    assert_eq!(record.logo, None);
}

#[test]
fn register_reports_mismatch_on_confirmation() {
    let form = RegisterForm {
        company_name: "Growth Brands".to_string(),
        email: "talent@growth.example".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret2".to_string(),
    };
    let errors = form.validate().expect_err("mismatch rejected");
    assert_eq!(errors.get("confirm_password"), ["Passwords don't match"]);
    assert!(!errors.has("password"));
}

#[test]
fn register_checks_lengths_before_matching() {
    let form = RegisterForm {
        company_name: "G".to_string(),
        email: "talent@growth.example".to_string(),
        password: "abc".to_string(),
        confirm_password: "abcd".to_string(),
    };
    let errors = form.validate().expect_err("invalid registration");
    assert_eq!(errors.get("company_name"), ["Company name is required"]);
    assert_eq!(
        errors.get("confirm_password"),
        ["Password must be at least 6 characters"]
    );
}
