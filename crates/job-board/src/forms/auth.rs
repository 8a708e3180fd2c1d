use serde::{Deserialize, Serialize};

use super::flow::SubmittableForm;
use super::validation::{require_email, require_length, FieldErrors};
use crate::navigation::Route;
use crate::notify::Notification;

const PASSWORD_MIN: usize = 6;
const PASSWORD_MESSAGE: &str = "Password must be at least 6 characters";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Mock session; credentials are never checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployerSession {
    pub email: String,
}

impl SubmittableForm for LoginForm {
    type Validated = EmployerSession;

    const NAME: &'static str = "login";

    fn validate(&self) -> Result<Self::Validated, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_email(&mut errors, "email", &self.email);
        require_length(&mut errors, "password", &self.password, PASSWORD_MIN, PASSWORD_MESSAGE);

        errors.into_result(EmployerSession {
            email: self.email.trim().to_string(),
        })
    }

    fn success_notice() -> Notification {
        Notification::info("Login Successful", "Welcome back to Halshaw James.")
    }

    fn redirect() -> Option<Route> {
        Some(Route::EmployerDashboard)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployerAccount {
    pub company_name: String,
    pub email: String,
}

impl SubmittableForm for RegisterForm {
    type Validated = EmployerAccount;

    const NAME: &'static str = "register";

    fn validate(&self) -> Result<Self::Validated, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_length(&mut errors, "company_name", &self.company_name, 2, "Company name is required");
        require_email(&mut errors, "email", &self.email);
        require_length(&mut errors, "password", &self.password, PASSWORD_MIN, PASSWORD_MESSAGE);
        require_length(
            &mut errors,
            "confirm_password",
            &self.confirm_password,
            PASSWORD_MIN,
            PASSWORD_MESSAGE,
        );

        // The match check runs once every field rule passes.
        if errors.is_empty() && self.password != self.confirm_password {
            errors.push("confirm_password", "Passwords don't match");
        }

        errors.into_result(EmployerAccount {
            company_name: self.company_name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }

    fn success_notice() -> Notification {
        Notification::info(
            "Registration Successful",
            "Your employer account has been created.",
        )
    }

    fn redirect() -> Option<Route> {
        Some(Route::EmployerDashboard)
    }
}
