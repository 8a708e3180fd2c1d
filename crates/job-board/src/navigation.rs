//! Route table for the board's page surface and the shared not-found view.

use std::fmt;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Serialize, Serializer};
use tracing::debug;
use url::form_urlencoded;
use url::Url;

use crate::listings::JobId;
use crate::notify::Notification;

const ROUTE_BASE: &str = "http://job-board.local/";

/// Navigable pages. Anything unrecognised resolves to [`Route::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Jobs {
        keyword: Option<String>,
        location: Option<String>,
    },
    JobDetail(JobId),
    PostJob,
    EmployerLogin,
    EmployerDashboard,
    EmployerApplications(JobId),
    NotFound(String),
}

impl Route {
    /// Parse a path (optionally with a query string) into a route.
    ///
    /// `/jobs?keyword=..&location=..` deep links carry the search seed; empty
    /// parameters are treated as absent.
    pub fn parse(target: &str) -> Self {
        let Some(url) = Url::parse(ROUTE_BASE)
            .ok()
            .and_then(|base| base.join(target).ok())
        else {
            return Self::NotFound(target.to_string());
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Self::Home,
            ["jobs"] => {
                let mut keyword = None;
                let mut location = None;
                for (key, value) in url.query_pairs() {
                    if value.is_empty() {
                        continue;
                    }
                    match key.as_ref() {
                        "keyword" => keyword = Some(value.to_string()),
                        "location" => location = Some(value.to_string()),
                        _ => {}
                    }
                }
                Self::Jobs { keyword, location }
            }
            ["jobs", id] => Self::JobDetail(JobId::from(*id)),
            ["post-job"] => Self::PostJob,
            ["employer", "login"] => Self::EmployerLogin,
            ["employer", "dashboard"] => Self::EmployerDashboard,
            ["employer", "applications", job_id] => Self::EmployerApplications(JobId::from(*job_id)),
            _ => Self::NotFound(url.path().to_string()),
        }
    }

    pub fn jobs() -> Self {
        Self::Jobs {
            keyword: None,
            location: None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Jobs { keyword, location } => {
                let mut query = form_urlencoded::Serializer::new(String::new());
                if let Some(keyword) = keyword {
                    query.append_pair("keyword", keyword);
                }
                if let Some(location) = location {
                    query.append_pair("location", location);
                }
                let query = query.finish();
                if query.is_empty() {
                    "/jobs".to_string()
                } else {
                    format!("/jobs?{query}")
                }
            }
            Self::JobDetail(id) => format!("/jobs/{id}"),
            Self::PostJob => "/post-job".to_string(),
            Self::EmployerLogin => "/employer/login".to_string(),
            Self::EmployerDashboard => "/employer/dashboard".to_string(),
            Self::EmployerApplications(job_id) => format!("/employer/applications/{job_id}"),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryLink {
    pub label: &'static str,
    pub href: Route,
}

/// Dedicated empty-state page for identifiers or paths that do not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    pub title: String,
    pub message: String,
    pub recovery: RecoveryLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

const MISSING_JOB_MESSAGE: &str = "The job you're looking for doesn't exist or has been removed.";

impl NotFoundView {
    /// Job detail lookup miss; recovers to the public listing.
    pub fn job() -> Self {
        Self {
            title: "Job Not Found".to_string(),
            message: MISSING_JOB_MESSAGE.to_string(),
            recovery: RecoveryLink {
                label: "View All Jobs",
                href: Route::jobs(),
            },
            notification: None,
        }
    }

    /// Employer review lookup miss; recovers to the dashboard.
    pub fn review_job() -> Self {
        Self {
            title: "Job Not Found".to_string(),
            message: MISSING_JOB_MESSAGE.to_string(),
            recovery: RecoveryLink {
                label: "Back to Dashboard",
                href: Route::EmployerDashboard,
            },
            notification: None,
        }
    }

    pub fn page(path: &str) -> Self {
        Self {
            title: "404".to_string(),
            message: "Oops! Page not found".to_string(),
            recovery: RecoveryLink {
                label: "Return to Home",
                href: Route::Home,
            },
            notification: Some(Notification::error(
                "Page not found",
                format!("The page {path} does not exist."),
            )),
        }
    }
}

impl IntoResponse for NotFoundView {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(self)).into_response()
    }
}

/// Catch-all handler for unmatched paths.
///
/// Targets that resolve to a known page under a non-canonical spelling
/// (`/jobs/`, `/post-job//`) are redirected there with the query kept intact.
pub async fn not_found_fallback(uri: Uri) -> Response {
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |target| target.as_str());

    let page = match Route::parse(target) {
        Route::NotFound(_) => None,
        Route::Jobs { .. } => Some(Route::jobs().path()),
        route => Some(route.path()),
    };

    match page.filter(|page| page != uri.path()) {
        Some(page) => {
            let location = match uri.query() {
                Some(query) => format!("{page}?{query}"),
                None => page,
            };
            debug!(from = %target, to = %location, "redirecting to canonical page");
            Redirect::permanent(&location).into_response()
        }
        None => {
            debug!(path = %uri.path(), "no route matched");
            NotFoundView::page(uri.path()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_surface() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/jobs/4"), Route::JobDetail(JobId::from("4")));
        assert_eq!(Route::parse("/post-job"), Route::PostJob);
        assert_eq!(Route::parse("/employer/login"), Route::EmployerLogin);
        assert_eq!(Route::parse("/employer/dashboard"), Route::EmployerDashboard);
        assert_eq!(
            Route::parse("/employer/applications/3"),
            Route::EmployerApplications(JobId::from("3"))
        );
    }

    #[test]
    fn deep_link_carries_search_seed() {
        let route = Route::parse("/jobs?keyword=frontend%20developer&location=London");
        assert_eq!(
            route,
            Route::Jobs {
                keyword: Some("frontend developer".to_string()),
                location: Some("London".to_string()),
            }
        );
        assert_eq!(Route::parse("/jobs?keyword=&location="), Route::jobs());
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            Route::parse("/employer/settings"),
            Route::NotFound("/employer/settings".to_string())
        );
        assert_eq!(
            Route::parse("/jobs/1/extra"),
            Route::NotFound("/jobs/1/extra".to_string())
        );
    }

    #[test]
    fn path_round_trips_search_seed() {
        let route = Route::Jobs {
            keyword: Some("ux designer".to_string()),
            location: None,
        };
        assert_eq!(route.path(), "/jobs?keyword=ux+designer");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[tokio::test]
    async fn fallback_redirects_trailing_slashes_to_known_pages() {
        let response = not_found_fallback(Uri::from_static("/jobs/?keyword=dev%20&types=Contract")).await;
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).and_then(|value| value.to_str().ok()),
            Some("/jobs?keyword=dev%20&types=Contract")
        );

        let response = not_found_fallback(Uri::from_static("/employer/applications/3/")).await;
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).and_then(|value| value.to_str().ok()),
            Some("/employer/applications/3")
        );

        let response = not_found_fallback(Uri::from_static("/careers")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn page_not_found_raises_error_toast() {
        let view = NotFoundView::page("/nowhere");
        let notice = view.notification.expect("toast attached");
        assert_eq!(notice.title, "Page not found");
        assert_eq!(notice.description, "The page /nowhere does not exist.");
        assert_eq!(view.recovery.href, Route::Home);
    }
}
