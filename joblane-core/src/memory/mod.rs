//! Process-local storage used by the integration test suite. Implements the
//! same ports as the PostgreSQL adapters, including the conflict behavior the
//! schema enforces (unique email, one application per candidate per job).

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use joblane_model::{Job, JobId, JobStatus, JobView, User, UserId};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::ports::{JobVisibility, JobsRepository, UsersRepository};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    credentials: HashMap<Uuid, String>,
    /// Insertion order doubles as creation order for listings.
    jobs: Vec<Job>,
}

/// In-memory backing store implementing both repository ports.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("memory store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("memory store lock poisoned")
    }
}

#[async_trait]
impl UsersRepository for MemoryStore {
    async fn create_user_with_password(
        &self,
        user: &User,
        password_hash: &str,
    ) -> Result<()> {
        let mut inner = self.write();
        let taken = inner
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email));
        if taken {
            return Err(CoreError::Conflict("User already exists".to_string()));
        }
        inner.users.insert(user.id.to_uuid(), user.clone());
        inner
            .credentials
            .insert(user.id.to_uuid(), password_hash.to_string());
        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .read()
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.read().users.get(id.as_uuid()).cloned())
    }

    async fn get_password_hash(&self, id: UserId) -> Result<Option<String>> {
        Ok(self.read().credentials.get(id.as_uuid()).cloned())
    }
}

#[async_trait]
impl JobsRepository for MemoryStore {
    async fn create_job(&self, job: &Job) -> Result<()> {
        self.write().jobs.push(job.clone());
        Ok(())
    }

    async fn get_job(&self, id: JobId) -> Result<Option<Job>> {
        Ok(self.read().jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn list_jobs(&self, visibility: JobVisibility) -> Result<Vec<JobView>> {
        let inner = self.read();
        let views = inner
            .jobs
            .iter()
            .filter(|job| match visibility {
                JobVisibility::ApprovedOnly => job.status == JobStatus::Approved,
                JobVisibility::All => true,
            })
            .map(|job| {
                let employer_name = inner
                    .users
                    .get(job.employer_id.as_uuid())
                    .map(|u| u.name.clone())
                    .unwrap_or_default();
                JobView::from_job(job.clone(), employer_name)
            })
            .collect();
        Ok(views)
    }

    async fn update_details(&self, job: &Job) -> Result<()> {
        let mut inner = self.write();
        let Some(stored) = inner.jobs.iter_mut().find(|j| j.id == job.id) else {
            return Err(CoreError::NotFound("Job not found".to_string()));
        };
        stored.title = job.title.clone();
        stored.description = job.description.clone();
        stored.company = job.company.clone();
        stored.updated_at = job.updated_at;
        Ok(())
    }

    async fn set_status(&self, id: JobId, status: JobStatus) -> Result<Option<Job>> {
        let mut inner = self.write();
        let Some(stored) = inner.jobs.iter_mut().find(|j| j.id == id) else {
            return Ok(None);
        };
        stored.status = status;
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete_job(&self, id: JobId) -> Result<bool> {
        let mut inner = self.write();
        let before = inner.jobs.len();
        inner.jobs.retain(|j| j.id != id);
        Ok(inner.jobs.len() < before)
    }

    async fn add_applicant(
        &self,
        id: JobId,
        candidate_id: UserId,
        applied_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut inner = self.write();
        let Some(stored) = inner.jobs.iter_mut().find(|j| j.id == id) else {
            return Err(CoreError::NotFound("Job not found".to_string()));
        };
        stored
            .apply(candidate_id, applied_at)
            .map_err(|_| CoreError::Conflict("Already applied".to_string()))?;
        Ok(())
    }
}
