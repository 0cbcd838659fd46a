//! Role-based authorization middleware.
//!
//! Applied as a `route_layer` over protected routers. The token must already
//! be valid (that check yields 401 from [`AuthUser`]); a valid token with the
//! wrong role yields 403.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use crate::middleware::auth::AuthUser;
use crate::modules::accounts::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

async fn require_role(
    state: AppState,
    req: Request,
    next: Next,
    required: Role,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if auth_user.role() != required {
        return Err(AppError::Forbidden(format!(
            "Access denied. Required role: {}, but token carries role: {}",
            required,
            auth_user.role()
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer for user-only routes.
pub async fn require_user(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, req, next, Role::User).await
}

/// Layer for admin-only routes.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, req, next, Role::Admin).await
}
