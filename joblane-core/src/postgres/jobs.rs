use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use joblane_model::{Applicant, Job, JobId, JobStatus, JobView, UserId};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::ports::{JobVisibility, JobsRepository};

/// PostgreSQL-backed implementation of the `JobsRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresJobsRepository {
    pool: PgPool,
}

impl PostgresJobsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn applicants_for(&self, job_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Applicant>>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT job_id, candidate_id, applied_at
            FROM job_applications
            WHERE job_id = ANY($1)
            ORDER BY applied_at
            "#,
        )
        .bind(job_ids)
        .fetch_all(self.pool())
        .await?;

        let mut by_job: HashMap<Uuid, Vec<Applicant>> = HashMap::new();
        for row in rows {
            by_job.entry(row.job_id).or_default().push(Applicant {
                candidate_id: UserId::from(row.candidate_id),
                applied_at: row.applied_at,
            });
        }
        Ok(by_job)
    }
}

#[derive(sqlx::FromRow)]
struct JobRow {
    id: Uuid,
    title: String,
    description: String,
    company: String,
    employer_id: Uuid,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl JobRow {
    fn into_job(self, applicants: Vec<Applicant>) -> Result<Job> {
        let status: JobStatus = self.status.parse().map_err(|_| {
            CoreError::Internal(format!("invalid job status in storage: {}", self.status))
        })?;
        Ok(Job {
            id: JobId::from(self.id),
            title: self.title,
            description: self.description,
            company: self.company,
            employer_id: UserId::from(self.employer_id),
            status,
            applicants,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct JobListRow {
    id: Uuid,
    title: String,
    description: String,
    company: String,
    employer_id: Uuid,
    employer_name: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct ApplicationRow {
    job_id: Uuid,
    candidate_id: Uuid,
    applied_at: DateTime<Utc>,
}

#[async_trait]
impl JobsRepository for PostgresJobsRepository {
    async fn create_job(&self, job: &Job) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, title, description, company, employer_id, status,
                              created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(job.id.to_uuid())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(job.employer_id.to_uuid())
        .bind(job.status.as_str())
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(self.pool())
        .await?;

        info!("created job {} for employer {}", job.id, job.employer_id);
        Ok(())
    }

    async fn get_job(&self, id: JobId) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, description, company, employer_id, status,
                   created_at, updated_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id.to_uuid())
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut applicants = self.applicants_for(&[row.id]).await?;
        let entries = applicants.remove(&row.id).unwrap_or_default();
        row.into_job(entries).map(Some)
    }

    async fn list_jobs(&self, visibility: JobVisibility) -> Result<Vec<JobView>> {
        let base = r#"
            SELECT j.id, j.title, j.description, j.company, j.employer_id,
                   u.name AS employer_name, j.status, j.created_at, j.updated_at
            FROM jobs j
            JOIN users u ON u.id = j.employer_id
        "#;
        let rows = match visibility {
            JobVisibility::ApprovedOnly => {
                sqlx::query_as::<_, JobListRow>(&format!(
                    "{base} WHERE j.status = $1 ORDER BY j.created_at"
                ))
                .bind(JobStatus::Approved.as_str())
                .fetch_all(self.pool())
                .await?
            }
            JobVisibility::All => {
                sqlx::query_as::<_, JobListRow>(&format!("{base} ORDER BY j.created_at"))
                    .fetch_all(self.pool())
                    .await?
            }
        };

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut applicants = self.applicants_for(&ids).await?;

        let mut views = Vec::with_capacity(rows.len());
        for row in rows {
            let status: JobStatus = row.status.parse().map_err(|_| {
                CoreError::Internal(format!("invalid job status in storage: {}", row.status))
            })?;
            views.push(JobView {
                id: JobId::from(row.id),
                title: row.title,
                description: row.description,
                company: row.company,
                employer_id: UserId::from(row.employer_id),
                employer_name: row.employer_name,
                status,
                applicants: applicants.remove(&row.id).unwrap_or_default(),
                created_at: row.created_at,
                updated_at: row.updated_at,
            });
        }
        Ok(views)
    }

    async fn update_details(&self, job: &Job) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET title = $2, description = $3, company = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(job.id.to_uuid())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(job.updated_at)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    async fn set_status(&self, id: JobId, status: JobStatus) -> Result<Option<Job>> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET status = $2, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id.to_uuid())
        .bind(status.as_str())
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        info!("job {} status set to {}", id, status);
        self.get_job(id).await
    }

    async fn delete_job(&self, id: JobId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id.to_uuid())
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_applicant(
        &self,
        id: JobId,
        candidate_id: UserId,
        applied_at: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO job_applications (job_id, candidate_id, applied_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id.to_uuid())
        .bind(candidate_id.to_uuid())
        .bind(applied_at)
        .execute(self.pool())
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint() == Some("job_applications_pkey") {
                    return CoreError::Conflict("Already applied".to_string());
                }
            }
            CoreError::from(e)
        })?;

        Ok(())
    }
}
