use crate::infra::{load_store, Board};
use chrono::{Local, NaiveDate};
use clap::Args;
use job_board::employer::{ApplicationId, ApplicationStatus, StatusFilter};
use job_board::error::AppError;
use job_board::forms::{
    ApplicationForm, FileReference, FlowReport, ImmediateDelay, JobPostForm, LoginForm,
};
use job_board::listings::views::ListingPageView;
use job_board::listings::{Facet, FacetSelection, JobId, ListingPage, SortOrder};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Keyword matched against title, company, and description
    #[arg(long)]
    pub(crate) keyword: Option<String>,
    /// Location substring
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Job types to include (comma separated)
    #[arg(long = "type", value_delimiter = ',')]
    pub(crate) types: Vec<String>,
    /// Categories to include (comma separated)
    #[arg(long = "category", value_delimiter = ',')]
    pub(crate) categories: Vec<String>,
    /// Sort selector to echo (newest, relevant, salary-high, salary-low)
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Load listings from a CSV export instead of the built-in sample
    #[arg(long)]
    pub(crate) listings_csv: Option<PathBuf>,
    /// Emit the listing view as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Load listings from a CSV export instead of the built-in sample
    #[arg(long)]
    pub(crate) listings_csv: Option<PathBuf>,
    /// Override the date used for "posted" labels (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the employer portion of the demo.
    #[arg(long)]
    pub(crate) skip_employer: bool,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        keyword,
        location,
        types,
        categories,
        sort,
        listings_csv,
        json,
    } = args;

    let store = Arc::new(load_store(listings_csv.as_deref())?);
    let facets = FacetSelection::new()
        .with_selected(Facet::JobType, types)
        .with_selected(Facet::Category, categories);
    let mut page = ListingPage::from_deep_link(store, keyword.as_deref(), location.as_deref())
        .with_facets(facets);
    if let Some(order) = sort.as_deref().and_then(SortOrder::parse) {
        page.set_sort(order);
    }

    let view = page.view(Local::now().date_naive());
    if json {
        print_json(&view)?;
    } else {
        render_listing(&view);
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        listings_csv,
        today,
        skip_employer,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let store = load_store(listings_csv.as_deref())?;
    let board = Board::assemble(store, Arc::new(ImmediateDelay));

    println!("=== Candidate Journey ===");
    let mut page = ListingPage::from_deep_link(board.store.clone(), Some("developer"), None);
    println!("Search \"developer\"");
    render_listing(&page.view(today));

    page.clear_all();
    page.search_mut().set_location("remote");
    page.submit_search();
    page.toggle(Facet::Category, "Design");
    println!("\nLocation \"remote\" + Design");
    render_listing(&page.view(today));

    let target = page
        .results()
        .first()
        .map(|job| job.id.clone())
        .unwrap_or_else(|| JobId::from("1"));
    if let Some(job) = board.store.find(&target) {
        println!("\nJob detail: {} at {}", job.title, job.company);
        println!("  {} | {} | {}", job.location, job.salary, job.job_type);
        for requirement in &job.requirements {
            println!("  - {requirement}");
        }
        for similar in board.store.similar_to(job, 3) {
            println!("  similar: {} ({})", similar.title, similar.company);
        }
    }

    let incomplete = ApplicationForm {
        full_name: "Jane Smith".to_string(),
        email: "jane.smith@example.com".to_string(),
        phone: "07700 900123".to_string(),
        ..ApplicationForm::default()
    };
    println!("\nApply without a CV");
    render_report(&board.submissions.submit(incomplete).await);

    let complete = ApplicationForm {
        full_name: "Jane Smith".to_string(),
        email: "jane.smith@example.com".to_string(),
        phone: "07700 900123".to_string(),
        cover_letter: Some("I would love to join the team.".to_string()),
        resume: Some(FileReference::new("jane-smith-cv.pdf")),
    };
    println!("\nApply with a CV");
    render_report(&board.submissions.submit(complete).await);

    if skip_employer {
        return Ok(());
    }

    println!("\n=== Employer Journey ===");
    let post = JobPostForm {
        title: "Platform Engineer".to_string(),
        company: "Cloud Systems Inc".to_string(),
        location: "Leeds, UK".to_string(),
        job_type: "Contract".to_string(),
        category: "DevOps".to_string(),
        salary: "£500/day".to_string(),
        description: "Own our deployment tooling end to end.".to_string(),
        requirements: "Terraform experience\nKubernetes in production".to_string(),
        email: "jobs@cloudsystems.example".to_string(),
        company_logo: None,
    };
    println!("Post a job");
    render_report(&board.submissions.submit(post).await);

    let login = LoginForm {
        email: "hr@techinnovations.example".to_string(),
        password: "hunter22".to_string(),
    };
    println!("\nLog in");
    render_report(&board.submissions.submit(login).await);

    let dashboard = board.review.dashboard("")?;
    println!(
        "\nDashboard: {} active postings, {} applications, {} new",
        dashboard.stats.active_postings,
        dashboard.stats.total_applications,
        dashboard.stats.new_applications
    );
    for posting in &dashboard.postings {
        println!(
            "  {} ({}) - {} application(s) -> {}",
            posting.title, posting.location, posting.applications, posting.review
        );
    }

    let job = JobId::from("1");
    board
        .review
        .set_status(&job, &ApplicationId::from("1"), ApplicationStatus::Reviewed)?;
    let reviewed = board
        .review
        .review(&job, StatusFilter::Only(ApplicationStatus::Reviewed))?;
    println!("\n{}: {}", reviewed.job_title, reviewed.count_label);
    for application in &reviewed.applications {
        println!(
            "  {} <{}> applied {}",
            application.applicant_name, application.email, application.applied_date
        );
    }

    let download = board.review.download_cv(&job, &ApplicationId::from("2"))?;
    println!("\n{}", download.notification.description);

    println!("\nNotifications raised: {}", board.notifications.events().len());
    Ok(())
}

fn render_listing(view: &ListingPageView) {
    println!("{} (sort: {})", view.count_label, view.sort.label());
    for job in &view.jobs {
        println!(
            "  [{}] {} - {} | {} | {} | {}",
            job.id, job.title, job.company, job.location, job.job_type, job.posted_label
        );
    }
    if let Some(empty) = &view.empty_state {
        println!("  {}: {}", empty.title, empty.message);
    }
}

fn render_report<V: Serialize>(report: &FlowReport<V>) {
    println!("  state: {:?}", report.state);
    for field in report.errors.fields() {
        for message in report.errors.get(field) {
            println!("  {field}: {message}");
        }
    }
    if let Some(notification) = &report.notification {
        println!("  {}: {}", notification.title, notification.description);
    }
    if let Some(redirect) = &report.redirect {
        println!("  -> {redirect}");
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
    println!("{rendered}");
    Ok(())
}
