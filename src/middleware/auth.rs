use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::accounts::model::Role;
use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and exposes the claims.
/// Signature and expiry are checked here; role checks happen in the role
/// middleware so the 401/403 distinction stays intact.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    /// Account id from the subject claim.
    pub fn account_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub).map_err(|_| AppError::InvalidToken)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthorized("Invalid authorization header format".to_string())
        })?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_for(role: Role) -> Claims {
        Claims {
            sub: Uuid::new_v4().to_string(),
            username: "alice123".to_string(),
            role,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_role_accessor() {
        assert_eq!(AuthUser(claims_for(Role::User)).role(), Role::User);
        assert_eq!(AuthUser(claims_for(Role::Admin)).role(), Role::Admin);
    }

    #[test]
    fn test_account_id_parses_subject() {
        let id = Uuid::new_v4();
        let mut claims = claims_for(Role::User);
        claims.sub = id.to_string();
        assert_eq!(AuthUser(claims).account_id().unwrap(), id);
    }

    #[test]
    fn test_account_id_rejects_garbage_subject() {
        let mut claims = claims_for(Role::User);
        claims.sub = "not-a-uuid".to_string();
        assert!(AuthUser(claims).account_id().is_err());
    }
}
