use sqlx::PgPool;
use tracing::instrument;

use super::model::{Account, AccountWithPassword, Role};
use crate::utils::errors::AppError;

/// Credential store: owns the `accounts` table.
pub struct AccountService;

impl AccountService {
    /// Insert a new account. Email uniqueness is enforced by the database
    /// constraint, so concurrent signups racing on the same email resolve to
    /// one success and one `DuplicateEmail`.
    #[instrument(skip(db, password_hash))]
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"INSERT INTO accounts (username, email, password_hash, role)
               VALUES ($1, $2, $3, $4)
               RETURNING id, username, email, role, created_at"#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(map_insert_error)?;

        Ok(account)
    }

    /// Single-row lookup by email. `Ok(None)` means no such account, which is
    /// distinct from a failed lookup.
    #[instrument(skip(db))]
    pub async fn find_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<AccountWithPassword>, AppError> {
        let account = sqlx::query_as::<_, AccountWithPassword>(
            "SELECT id, username, email, password_hash, role FROM accounts WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(account)
    }
}

fn map_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::DuplicateEmail;
    }
    AppError::from(e)
}
