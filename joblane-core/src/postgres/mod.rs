//! PostgreSQL adapters for the repository ports.

mod jobs;
mod users;

pub use jobs::PostgresJobsRepository;
pub use users::PostgresUsersRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::Result;

/// Connect a pool and bring the schema up to date.
pub async fn connect_pool(url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await?;
    crate::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| crate::CoreError::Internal(format!("migration failed: {e}")))?;
    Ok(pool)
}
