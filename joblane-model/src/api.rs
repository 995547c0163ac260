//! Request and response bodies for the HTTP API.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::ids::{JobId, UserId};
use crate::job::{Applicant, Job, JobStatus};
use crate::role::Role;
use crate::user::User;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Slice of the profile returned alongside a fresh token.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub company: String,
}

impl CreateJobRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyField("description"));
        }
        if self.company.trim().is_empty() {
            return Err(ValidationError::EmptyField("company"));
        }
        Ok(())
    }
}

/// Partial edit of a posting. Absent or empty fields keep their current
/// values, so an edit can never blank a field that creation requires to be
/// non-empty. Status and ownership are never touched by an edit.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
}

impl UpdateJobRequest {
    pub fn apply_to(&self, job: &mut Job) {
        if let Some(title) = &self.title
            && !title.trim().is_empty()
        {
            job.title = title.clone();
        }
        if let Some(description) = &self.description
            && !description.trim().is_empty()
        {
            job.description = description.clone();
        }
        if let Some(company) = &self.company
            && !company.trim().is_empty()
        {
            job.company = company.clone();
        }
        job.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusUpdateRequest {
    pub status: JobStatus,
}

/// A job as returned by the listing and detail endpoints, with the owning
/// employer's display name joined in.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobView {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub company: String,
    pub employer_id: UserId,
    pub employer_name: String,
    pub status: JobStatus,
    pub applicants: Vec<Applicant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobView {
    pub fn from_job(job: Job, employer_name: String) -> Self {
        JobView {
            id: job.id,
            title: job.title,
            description: job.description,
            company: job.company,
            employer_id: job.employer_id,
            employer_name,
            status: job.status,
            applicants: job.applicants,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "correct-horse".into(),
            role: Role::Candidate,
        }
    }

    #[test]
    fn register_request_validates() {
        assert!(register_request().validate().is_ok());

        let mut bad = register_request();
        bad.name = "  ".into();
        assert_eq!(bad.validate(), Err(ValidationError::EmptyField("name")));

        let mut bad = register_request();
        bad.email = "not-an-email".into();
        assert_eq!(bad.validate(), Err(ValidationError::InvalidEmail));

        let mut bad = register_request();
        bad.password = "short".into();
        assert!(matches!(
            bad.validate(),
            Err(ValidationError::PasswordTooShort(_))
        ));
    }

    #[test]
    fn partial_update_keeps_absent_fields() {
        let mut job = Job::new(
            "Title".into(),
            "Description".into(),
            "Company".into(),
            UserId::new(),
        );
        let before = job.status;

        let update = UpdateJobRequest {
            title: Some("New title".into()),
            description: None,
            company: None,
        };
        update.apply_to(&mut job);

        assert_eq!(job.title, "New title");
        assert_eq!(job.description, "Description");
        assert_eq!(job.company, "Company");
        assert_eq!(job.status, before);
    }

    #[test]
    fn empty_string_update_keeps_current_value() {
        let mut job = Job::new(
            "Backend Engineer".into(),
            "Description".into(),
            "Company".into(),
            UserId::new(),
        );

        let update = UpdateJobRequest {
            title: Some(String::new()),
            description: Some("   ".into()),
            company: Some("New Co".into()),
        };
        update.apply_to(&mut job);

        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.description, "Description");
        assert_eq!(job.company, "New Co");
    }
}
