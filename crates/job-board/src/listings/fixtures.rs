use chrono::NaiveDate;

use super::domain::{JobId, JobRecord};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    job_type: &str,
    category: &str,
    description: &str,
    requirements: &[&str],
    posted: (i32, u32, u32),
) -> JobRecord {
    let (year, month, day) = posted;
    JobRecord {
        id: JobId::from(id),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        job_type: job_type.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().map(|req| req.to_string()).collect(),
        posted_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        logo: None,
    }
}

/// Sample listings served when no CSV source is configured.
pub fn standard_listings() -> Vec<JobRecord> {
    vec![
        listing(
            "1",
            "Senior Frontend Developer",
            "Tech Innovations Ltd",
            "London, UK",
            "£70,000 - £85,000",
            "Full-time",
            "Development",
            "We are looking for a Senior Frontend Developer to join our team. You will be responsible for developing and maintaining our web applications.",
            &[
                "5+ years of experience with React",
                "Strong knowledge of JavaScript, HTML, and CSS",
                "Experience with state management (Redux, Context API)",
                "Experience with API integration",
            ],
            (2025, 5, 1),
        ),
        listing(
            "2",
            "UX/UI Designer",
            "Creative Solutions",
            "Remote",
            "£45,000 - £60,000",
            "Full-time",
            "Design",
            "Join our creative team as a UX/UI Designer and help us create beautiful and functional user interfaces.",
            &[
                "3+ years of UX/UI design experience",
                "Proficiency with design tools (Figma, Sketch)",
                "Portfolio showcasing your work",
                "Knowledge of user-centered design practices",
            ],
            (2025, 5, 3),
        ),
        listing(
            "3",
            "DevOps Engineer",
            "Cloud Systems Inc",
            "Manchester, UK",
            "£65,000 - £80,000",
            "Full-time",
            "DevOps",
            "We're seeking a DevOps Engineer to help us build and maintain our cloud infrastructure.",
            &[
                "Experience with AWS, Azure, or GCP",
                "Knowledge of CI/CD pipelines",
                "Familiarity with containerization technologies",
                "Experience with infrastructure as code",
            ],
            (2025, 4, 28),
        ),
        listing(
            "4",
            "Marketing Manager",
            "Growth Brands",
            "London, UK",
            "£55,000 - £70,000",
            "Full-time",
            "Marketing",
            "Lead our marketing efforts and help us grow our brand presence across all channels.",
            &[
                "5+ years of marketing experience",
                "Experience managing digital marketing campaigns",
                "Strong analytical skills",
                "Excellent communication skills",
            ],
            (2025, 5, 5),
        ),
        listing(
            "5",
            "Backend Developer",
            "Data Systems Ltd",
            "Birmingham, UK",
            "£60,000 - £75,000",
            "Full-time",
            "Development",
            "Join our team to develop and maintain our backend services and APIs.",
            &[
                "Experience with Node.js or Python",
                "Knowledge of database systems",
                "Understanding of RESTful API design",
                "Experience with microservices architecture",
            ],
            (2025, 4, 30),
        ),
        listing(
            "6",
            "Product Manager",
            "Innovation Hub",
            "Remote",
            "£65,000 - £80,000",
            "Full-time",
            "Product",
            "Lead the development of new products and features from conception to launch.",
            &[
                "3+ years of product management experience",
                "Experience with agile methodologies",
                "Strong understanding of user-centered design",
                "Excellent stakeholder management skills",
            ],
            (2025, 5, 2),
        ),
    ]
}
