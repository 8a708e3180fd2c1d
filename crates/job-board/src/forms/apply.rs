use serde::{Deserialize, Serialize};

use super::attachment::FileReference;
use super::flow::SubmittableForm;
use super::validation::{optional_text, require_email, require_length, FieldErrors};
use crate::notify::Notification;

/// "Apply for this position" form on the job detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: Option<String>,
    pub resume: Option<FileReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub resume: FileReference,
}

impl SubmittableForm for ApplicationForm {
    type Validated = ApplicationSubmission;

    const NAME: &'static str = "apply";

    fn validate(&self) -> Result<Self::Validated, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_length(&mut errors, "full_name", &self.full_name, 2, "Name is required");
        require_email(&mut errors, "email", &self.email);
        require_length(&mut errors, "phone", &self.phone, 5, "Phone number is required");

        let resume = self.resume.as_ref().filter(|file| !file.is_blank());
        match resume {
            None => errors.push("resume", "CV is required"),
            Some(file) if !file.is_document() => {
                errors.push("resume", "CV must be a PDF or Word document")
            }
            Some(_) => {}
        }

        let Some(resume) = resume.cloned().filter(|_| errors.is_empty()) else {
            return Err(errors);
        };

        Ok(ApplicationSubmission {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            cover_letter: optional_text(self.cover_letter.as_deref()),
            resume,
        })
    }

    fn success_notice() -> Notification {
        Notification::info(
            "Application Submitted",
            "Your application has been successfully submitted.",
        )
    }
}
