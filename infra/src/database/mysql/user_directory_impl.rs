//! MySQL implementation of the UserDirectory trait.
//!
//! Principals live in `users`; every successful login appends a row to
//! `login_history`. See `migrations/` for the schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sg_core::domain::entities::{LoginEvent, Principal, PrincipalId};
use sg_core::errors::{AuthError, DomainError};
use sg_core::repositories::UserDirectory;

/// Upper bound on a single history page
pub const MAX_HISTORY_PAGE: u32 = 100;

/// MySQL implementation of UserDirectory
pub struct MySqlUserDirectory {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserDirectory {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn directory_error(context: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Directory {
            message: format!("{}: {}", context, e),
        }
    }

    fn row_to_principal(row: &sqlx::mysql::MySqlRow) -> Result<Principal, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::directory_error("Failed to get id", e))?;

        Ok(Principal {
            id: Uuid::parse_str(&id).map_err(|e| Self::directory_error("Invalid UUID", e))?,
            email: row
                .try_get("email")
                .map_err(|e| Self::directory_error("Failed to get email", e))?,
            credential_hash: row
                .try_get("hashed_password")
                .map_err(|e| Self::directory_error("Failed to get hashed_password", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| Self::directory_error("Failed to get is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::directory_error("Failed to get created_at", e))?,
        })
    }

    fn row_to_login_event(row: &sqlx::mysql::MySqlRow) -> Result<LoginEvent, DomainError> {
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| Self::directory_error("Failed to get user_id", e))?;

        Ok(LoginEvent {
            principal_id: Uuid::parse_str(&user_id)
                .map_err(|e| Self::directory_error("Invalid UUID", e))?,
            client_descriptor: row
                .try_get("user_agent")
                .map_err(|e| Self::directory_error("Failed to get user_agent", e))?,
            occurred_at: row
                .try_get::<DateTime<Utc>, _>("login_time")
                .map_err(|e| Self::directory_error("Failed to get login_time", e))?,
        })
    }

    /// Duplicate keys on `uq_users_email` become `IdentifierTaken`
    fn write_error(context: &str, e: sqlx::Error) -> DomainError {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AuthError::IdentifierTaken.into()
            }
            _ => Self::directory_error(context, e),
        }
    }
}

#[async_trait]
impl UserDirectory for MySqlUserDirectory {
    async fn find_by_identifier(&self, id: PrincipalId) -> Result<Option<Principal>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, hashed_password, is_active, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::directory_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_principal).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, hashed_password, is_active, created_at
            FROM users
            WHERE email = ?
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::directory_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_principal).transpose()
    }

    async fn create(&self, principal: &Principal) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, hashed_password, is_active, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(principal.id.to_string())
        .bind(&principal.email)
        .bind(&principal.credential_hash)
        .bind(principal.is_active)
        .bind(principal.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::write_error("Failed to insert user", e))?;

        Ok(())
    }

    async fn update(&self, principal: &Principal) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email = ?, hashed_password = ?, is_active = ?
            WHERE id = ?
            "#,
        )
        .bind(&principal.email)
        .bind(&principal.credential_hash)
        .bind(principal.is_active)
        .bind(principal.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::write_error("Failed to update user", e))?;

        // MySQL reports matched rows as affected only when a value changed
        if result.rows_affected() == 0
            && self.find_by_identifier(principal.id).await?.is_none()
        {
            return Err(AuthError::PrincipalNotFound.into());
        }

        Ok(())
    }

    async fn record_login(
        &self,
        principal_id: PrincipalId,
        client_descriptor: &str,
        occurred_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO login_history (user_id, user_agent, login_time)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(principal_id.to_string())
        .bind(client_descriptor)
        .bind(occurred_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::directory_error("Failed to record login", e))?;

        Ok(())
    }

    async fn login_history(
        &self,
        principal_id: PrincipalId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<LoginEvent>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, user_agent, login_time
            FROM login_history
            WHERE user_id = ?
            ORDER BY login_time DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(principal_id.to_string())
        .bind(limit.min(MAX_HISTORY_PAGE))
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::directory_error("Database query failed", e))?;

        rows.iter().map(Self::row_to_login_event).collect()
    }
}
