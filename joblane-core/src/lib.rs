//! Domain errors, repository ports and storage adapters for Joblane.
//!
//! The server crate talks to storage exclusively through the [`ports`]
//! traits. [`postgres`] holds the production adapters; [`memory`] holds
//! process-local adapters used by the integration test suite.

pub mod api_types;
pub mod error;
pub mod memory;
pub mod ports;
pub mod postgres;

pub use api_types::ApiResponse;
pub use error::{CoreError, Result};
pub use ports::{JobVisibility, JobsRepository, UsersRepository};

/// Embedded schema migrations, applied at startup with `sqlx::migrate`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
