use axum::{
    Extension, Json,
    extract::{Path, State},
};
use joblane_core::ApiResponse;
use joblane_model::{Job, JobId, StatusUpdateRequest, User};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

/// Admin status overwrite. Any of the three statuses is accepted; there is
/// no transition graph, so rejected postings can be approved later.
pub async fn update_job_status(
    State(state): State<AppState>,
    Extension(admin): Extension<User>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusUpdateRequest>,
) -> AppResult<Json<ApiResponse<Job>>> {
    let job = state
        .jobs
        .set_status(JobId::from(id), request.status)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;

    tracing::info!(
        "admin {} set job {} status to {}",
        admin.id,
        job.id,
        job.status
    );
    Ok(Json(ApiResponse::success(job)))
}
