use sqlx::PgPool;
use tracing::instrument;

use super::model::{LoginRequest, SignupRequest, TokenResponse};
use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::Role;
use crate::modules::accounts::service::AccountService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

pub struct AuthService;

impl AuthService {
    /// Signup for either role. The password is hashed exactly once here; every
    /// step short-circuits, so a failed insert never yields a token.
    #[instrument(skip(db, dto, jwt_config), fields(role = %role))]
    pub async fn signup(
        db: &PgPool,
        dto: SignupRequest,
        role: Role,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let account =
            AccountService::create(db, &dto.username, &dto.email, &password_hash, role).await?;

        let token = create_access_token(account.id, &account.username, account.role, jwt_config)?;

        Ok(TokenResponse { token })
    }

    /// Login against the endpoint's role. Unknown email, role mismatch, and
    /// wrong password all collapse into the same `Unauthorized` so a caller
    /// cannot discover which emails have accounts.
    #[instrument(skip(db, dto, jwt_config), fields(role = %role))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        role: Role,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

        let account = AccountService::find_by_email(db, &dto.email)
            .await?
            .ok_or_else(invalid)?;

        if account.role != role {
            return Err(invalid());
        }

        // Plaintext against the stored hash; the stored hash was produced at
        // signup and is never re-derived here.
        if !verify_password(&dto.password, &account.password_hash)? {
            return Err(invalid());
        }

        let token = create_access_token(account.id, &account.username, account.role, jwt_config)?;

        Ok(TokenResponse { token })
    }
}
