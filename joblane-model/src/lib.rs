//! Shared data models for the Joblane job board.
//!
//! Pure types only: identifiers, roles, job lifecycle state and the
//! request/response shapes exchanged over the HTTP API. No I/O, no async.

pub mod api;
pub mod error;
pub mod ids;
pub mod job;
pub mod role;
pub mod user;

pub use api::{
    CreateJobRequest, JobView, LoginRequest, LoginResponse, RegisterRequest,
    StatusUpdateRequest, UpdateJobRequest, UserSummary,
};
pub use error::ValidationError;
pub use ids::{JobId, UserId};
pub use job::{Applicant, Job, JobStatus};
pub use role::Role;
pub use user::User;
