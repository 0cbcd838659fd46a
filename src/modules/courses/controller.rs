use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::{AddCourseContentDto, Course, CourseContent, CreateCourseDto, DeleteCourseDto};
use super::service::CourseService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a course owned by the requesting admin
#[utoipa::path(
    post,
    path = "/admin/create-course",
    request_body = CreateCourseDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Course created", body = Course),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let admin_id = auth_user.account_id()?;
    let course = CourseService::create_course(&state.db, dto, admin_id).await?;
    Ok(Json(course))
}

/// Delete a course by id
#[utoipa::path(
    delete,
    path = "/admin/delete-course",
    request_body = DeleteCourseDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn delete_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<DeleteCourseDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    CourseService::delete_course(&state.db, dto.course_id).await?;
    Ok(Json(serde_json::json!({ "message": "Course deleted" })))
}

/// Attach a content block to an existing course
#[utoipa::path(
    post,
    path = "/admin/add-course-content",
    request_body = AddCourseContentDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Content added", body = CourseContent),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn add_course_content(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AddCourseContentDto>,
) -> Result<Json<CourseContent>, AppError> {
    let content = CourseService::add_content(&state.db, dto).await?;
    Ok(Json(content))
}

/// List all courses
#[utoipa::path(
    get,
    path = "/user/courses",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All courses", body = [Course]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "User role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_courses(&state.db).await?;
    Ok(Json(courses))
}
