//! # Joblane Server
//!
//! Job board HTTP service built on Axum:
//!
//! - **Employers** create, edit and delete their own postings
//! - **Admins** approve or reject postings
//! - **Candidates** browse approved postings and apply once per job
//!
//! PostgreSQL holds persistent state in production; the test suite wires the
//! same router to in-memory repositories.

pub mod auth;
pub mod errors;
pub mod infra;
pub mod jobs;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::config::Config;
