use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use joblane_core::{ApiResponse, JobVisibility};
use joblane_model::{CreateJobRequest, Job, JobId, JobView, Role, UpdateJobRequest, User};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

/// List postings. Visibility is decided here, server-side: employers and
/// admins see everything, candidates and anonymous callers see approved
/// postings only.
pub async fn list_jobs(
    State(state): State<AppState>,
    user: Option<Extension<User>>,
) -> AppResult<Json<ApiResponse<Vec<JobView>>>> {
    let visibility = match user {
        Some(Extension(user)) if matches!(user.role, Role::Employer | Role::Admin) => {
            JobVisibility::All
        }
        _ => JobVisibility::ApprovedOnly,
    };

    let jobs = state.jobs.list_jobs(visibility).await?;
    Ok(Json(ApiResponse::success(jobs)))
}

pub async fn create_job(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateJobRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Job>>)> {
    request
        .validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let job = Job::new(request.title, request.description, request.company, user.id);
    state.jobs.create_job(&job).await?;

    tracing::info!("employer {} posted job {}", user.id, job.id);
    Ok((StatusCode::CREATED, Json(ApiResponse::success(job))))
}

pub async fn update_job(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateJobRequest>,
) -> AppResult<Json<ApiResponse<Job>>> {
    let mut job = state
        .jobs
        .get_job(JobId::from(id))
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;

    if !job.is_owned_by(user.id) {
        return Err(AppError::forbidden("Not authorized to edit this job"));
    }

    request.apply_to(&mut job);
    state.jobs.update_details(&job).await?;

    Ok(Json(ApiResponse::success(job)))
}

pub async fn delete_job(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    let job = state
        .jobs
        .get_job(JobId::from(id))
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;

    if !job.is_owned_by(user.id) {
        return Err(AppError::forbidden("Not authorized to delete this job"));
    }

    state.jobs.delete_job(job.id).await?;

    tracing::info!("employer {} removed job {}", user.id, job.id);
    Ok(Json(ApiResponse::message_only("Job removed")))
}

pub async fn apply_to_job(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    let job = state
        .jobs
        .get_job(JobId::from(id))
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;

    if job.has_applicant(user.id) {
        return Err(AppError::bad_request("Already applied"));
    }

    // The storage layer enforces uniqueness again, so a concurrent duplicate
    // still comes back as a conflict rather than a second entry.
    state.jobs.add_applicant(job.id, user.id, Utc::now()).await?;

    Ok(Json(ApiResponse::message_only("Application successful")))
}
