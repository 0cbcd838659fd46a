use axum::{
    Router,
    routing::{delete, get, post},
};

use super::controller::{add_course_content, create_course, delete_course, list_courses};
use crate::state::AppState;

/// Admin course management routes; the caller layers the admin role check.
pub fn init_admin_courses_router() -> Router<AppState> {
    Router::new()
        .route("/create-course", post(create_course))
        .route("/delete-course", delete(delete_course))
        .route("/add-course-content", post(add_course_content))
}

/// Read-only catalog route for users; the caller layers the user role check.
pub fn init_user_courses_router() -> Router<AppState> {
    Router::new().route("/courses", get(list_courses))
}
