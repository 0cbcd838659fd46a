use axum::{Router, routing::post};

use super::controller::{login_admin, login_user, signup_admin, signup_user};
use crate::state::AppState;

/// Public auth routes nested under `/user`.
pub fn init_user_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup_user))
        .route("/login", post(login_user))
}

/// Public auth routes nested under `/admin`.
pub fn init_admin_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup_admin))
        .route("/login", post(login_admin))
}
