use async_trait::async_trait;
use chrono::{DateTime, Utc};
use joblane_model::{Role, User, UserId};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::ports::UsersRepository;

/// PostgreSQL-backed implementation of the `UsersRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresUsersRepository {
    pool: PgPool,
}

impl PostgresUsersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User> {
        let role: Role = self
            .role
            .parse()
            .map_err(|_| CoreError::Internal(format!("invalid role in storage: {}", self.role)))?;
        Ok(User {
            id: UserId::from(self.id),
            name: self.name,
            email: self.email,
            role,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl UsersRepository for PostgresUsersRepository {
    async fn create_user_with_password(
        &self,
        user: &User,
        password_hash: &str,
    ) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.to_uuid())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint() == Some("idx_users_email_unique") {
                    return CoreError::Conflict("User already exists".to_string());
                }
            }
            CoreError::from(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO user_credentials (user_id, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(user.id.to_uuid())
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("registered user {} ({})", user.email, user.id);
        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, role, created_at
            FROM users
            WHERE lower(email) = lower($1)
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.to_uuid())
        .fetch_optional(self.pool())
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn get_password_hash(&self, id: UserId) -> Result<Option<String>> {
        let hash: Option<String> = sqlx::query_scalar(
            r#"
            SELECT password_hash
            FROM user_credentials
            WHERE user_id = $1
            "#,
        )
        .bind(id.to_uuid())
        .fetch_optional(self.pool())
        .await?;

        Ok(hash)
    }
}
