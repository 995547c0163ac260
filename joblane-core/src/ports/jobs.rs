use async_trait::async_trait;
use chrono::{DateTime, Utc};
use joblane_model::{Job, JobId, JobStatus, JobView, UserId};

use crate::error::Result;

/// Which postings a listing call may see. Resolved from the caller's role
/// before the repository is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobVisibility {
    /// Anonymous callers and candidates: approved postings only.
    ApprovedOnly,
    /// Employers and admins: every posting regardless of status.
    All,
}

#[async_trait]
pub trait JobsRepository: Send + Sync {
    async fn create_job(&self, job: &Job) -> Result<()>;

    /// Fetch a job with its applicant list, ordered by application time.
    async fn get_job(&self, id: JobId) -> Result<Option<Job>>;

    /// List postings visible under `visibility`, oldest first, with the
    /// owning employer's name joined in.
    async fn list_jobs(&self, visibility: JobVisibility) -> Result<Vec<JobView>>;

    /// Overwrite title/description/company/updated_at. Status and ownership
    /// are not touched by this call. Fails with `CoreError::NotFound` when
    /// the job does not exist.
    async fn update_details(&self, job: &Job) -> Result<()>;

    /// Admin status overwrite. Returns the updated job, or `None` when the
    /// job does not exist.
    async fn set_status(&self, id: JobId, status: JobStatus) -> Result<Option<Job>>;

    /// Returns `true` when a job was deleted. Applications go with it.
    async fn delete_job(&self, id: JobId) -> Result<bool>;

    /// Append an applicant entry. Fails with `CoreError::Conflict` when the
    /// candidate already applied; the storage layer enforces uniqueness even
    /// under concurrent applies.
    async fn add_applicant(
        &self,
        id: JobId,
        candidate_id: UserId,
        applied_at: DateTime<Utc>,
    ) -> Result<()>;
}
