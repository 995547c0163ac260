use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::ids::{JobId, UserId};

/// Admin-controlled approval state of a job posting.
///
/// There is deliberately no transition graph: an admin may move a job between
/// any two states, including rejected back to approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum JobStatus {
    Pending,
    Approved,
    Rejected,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Approved => "approved",
            JobStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "approved" => Ok(JobStatus::Approved),
            "rejected" => Ok(JobStatus::Rejected),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// A candidate's application to a job.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Applicant {
    pub candidate_id: UserId,
    pub applied_at: DateTime<Utc>,
}

/// A job posting.
///
/// `employer_id` is set at creation and never changes. The applicant list is
/// ordered by application time and holds each candidate at most once.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub company: String,
    pub employer_id: UserId,
    pub status: JobStatus,
    pub applicants: Vec<Applicant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Build a fresh posting owned by `employer_id`. New jobs always start
    /// out pending review.
    pub fn new(
        title: String,
        description: String,
        company: String,
        employer_id: UserId,
    ) -> Self {
        let now = Utc::now();
        Job {
            id: JobId::new(),
            title,
            description,
            company,
            employer_id,
            status: JobStatus::Pending,
            applicants: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.employer_id == user_id
    }

    pub fn has_applicant(&self, candidate_id: UserId) -> bool {
        self.applicants
            .iter()
            .any(|a| a.candidate_id == candidate_id)
    }

    /// Record an application, rejecting duplicates from the same candidate.
    pub fn apply(
        &mut self,
        candidate_id: UserId,
        applied_at: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if self.has_applicant(candidate_id) {
            return Err(ValidationError::AlreadyApplied);
        }
        self.applicants.push(Applicant {
            candidate_id,
            applied_at,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job::new(
            "Backend Engineer".into(),
            "Build APIs".into(),
            "Acme".into(),
            UserId::new(),
        )
    }

    #[test]
    fn new_job_starts_pending() {
        let job = sample_job();
        assert_eq!(job.status, JobStatus::Pending);
        assert!(job.applicants.is_empty());
    }

    #[test]
    fn apply_appends_one_entry() {
        let mut job = sample_job();
        let candidate = UserId::new();
        let at = Utc::now();

        job.apply(candidate, at).unwrap();

        assert_eq!(job.applicants.len(), 1);
        assert_eq!(job.applicants[0].candidate_id, candidate);
        assert_eq!(job.applicants[0].applied_at, at);
    }

    #[test]
    fn duplicate_application_is_rejected() {
        let mut job = sample_job();
        let candidate = UserId::new();

        job.apply(candidate, Utc::now()).unwrap();
        let err = job.apply(candidate, Utc::now()).unwrap_err();

        assert_eq!(err, ValidationError::AlreadyApplied);
        assert_eq!(job.applicants.len(), 1);
    }

    #[test]
    fn distinct_candidates_keep_application_order() {
        let mut job = sample_job();
        let first = UserId::new();
        let second = UserId::new();

        job.apply(first, Utc::now()).unwrap();
        job.apply(second, Utc::now()).unwrap();

        assert_eq!(job.applicants[0].candidate_id, first);
        assert_eq!(job.applicants[1].candidate_id, second);
    }

    #[test]
    fn ownership_check_matches_employer() {
        let job = sample_job();
        assert!(job.is_owned_by(job.employer_id));
        assert!(!job.is_owned_by(UserId::new()));
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [JobStatus::Pending, JobStatus::Approved, JobStatus::Rejected] {
            assert_eq!(status.as_str().parse::<JobStatus>().unwrap(), status);
        }
        assert!("archived".parse::<JobStatus>().is_err());
    }
}
