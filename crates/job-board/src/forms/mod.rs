//! Apply, post-job, and employer auth forms and the flow that submits them.

mod apply;
mod attachment;
mod auth;
mod delay;
pub mod flow;
mod post_job;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use apply::{ApplicationForm, ApplicationSubmission};
pub use attachment::FileReference;
pub use auth::{EmployerAccount, EmployerSession, LoginForm, RegisterForm};
pub use delay::{DelayFuture, ImmediateDelay, SubmissionDelay, TimerDelay};
pub use flow::{FlowError, FlowReport, FlowState, FormFlow, SubmissionService, SubmittableForm};
pub use post_job::{JobPostDraft, JobPostForm};
pub use router::form_router;
pub use validation::FieldErrors;
