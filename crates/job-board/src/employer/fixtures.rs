use chrono::NaiveDate;

use super::domain::{ApplicationId, ApplicationRecord, ApplicationStatus};
use crate::listings::JobId;

#[allow(clippy::too_many_arguments)]
fn application(
    id: &str,
    job_id: &str,
    job_title: &str,
    applicant_name: &str,
    email: &str,
    phone: &str,
    applied: (i32, u32, u32),
    cover_letter: &str,
    status: ApplicationStatus,
) -> ApplicationRecord {
    let (year, month, day) = applied;
    ApplicationRecord {
        id: ApplicationId::from(id),
        job_id: JobId::from(job_id),
        job_title: job_title.to_string(),
        applicant_name: applicant_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        applied_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        cover_letter: cover_letter.to_string(),
        status,
        resume_url: "#".to_string(),
    }
}

/// Applications received by the mock employer account.
pub fn sample_applications() -> Vec<ApplicationRecord> {
    const FRONTEND: &str = "Senior Frontend Developer";
    vec![
        application(
            "1",
            "1",
            FRONTEND,
            "John Smith",
            "john.smith@example.com",
            "+44 7123 456789",
            (2025, 5, 6),
            "I'm excited to apply for the Senior Frontend Developer position at Tech Innovations Ltd. With over 6 years of experience in React development and a passion for creating responsive, user-friendly interfaces, I believe I would be a great addition to your team.",
            ApplicationStatus::New,
        ),
        application(
            "2",
            "1",
            FRONTEND,
            "Emily Johnson",
            "emily.johnson@example.com",
            "+44 7987 654321",
            (2025, 5, 5),
            "Please consider my application for the Senior Frontend Developer role. I have 7+ years of experience working with modern JavaScript frameworks, particularly React, and have led frontend development for several successful projects.",
            ApplicationStatus::Reviewed,
        ),
        application(
            "3",
            "1",
            FRONTEND,
            "David Wilson",
            "david.wilson@example.com",
            "+44 7111 222333",
            (2025, 5, 4),
            "I'm very interested in the Senior Frontend Developer position. With my strong background in React, Redux, and modern frontend tooling, combined with my experience in leading development teams, I believe I can make a valuable contribution to your organization.",
            ApplicationStatus::Interviewed,
        ),
        application(
            "4",
            "1",
            FRONTEND,
            "Sarah Brown",
            "sarah.brown@example.com",
            "+44 7444 555666",
            (2025, 5, 3),
            "I am applying for the Senior Frontend Developer role at Tech Innovations Ltd. With extensive experience in building scalable React applications and a focus on performance optimization, I am excited about the opportunity to bring my skills to your innovative team.",
            ApplicationStatus::New,
        ),
        application(
            "5",
            "1",
            FRONTEND,
            "Michael Taylor",
            "michael.taylor@example.com",
            "+44 7777 888999",
            (2025, 5, 2),
            "I'm thrilled to apply for the Senior Frontend Developer position. My background includes 5+ years of React development, TypeScript expertise, and experience with state management solutions like Redux and MobX. I'm passionate about creating accessible and performant user interfaces.",
            ApplicationStatus::New,
        ),
        application(
            "6",
            "3",
            "DevOps Engineer",
            "Michael Brown",
            "michael.brown@example.com",
            "+44 7222 333444",
            (2025, 5, 4),
            "I have run production Kubernetes clusters on AWS for four years and would enjoy building out your CI/CD pipelines.",
            ApplicationStatus::Interviewed,
        ),
    ]
}
