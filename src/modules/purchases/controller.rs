use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::{Purchase, PurchaseCourseDto};
use super::service::PurchaseService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::courses::model::Course;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Purchase a course for the authenticated user
#[utoipa::path(
    post,
    path = "/user/purchase",
    request_body = PurchaseCourseDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Purchase recorded", body = Purchase),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "User role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 409, description = "Course already purchased", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn purchase_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<PurchaseCourseDto>,
) -> Result<Json<Purchase>, AppError> {
    let account_id = auth_user.account_id()?;
    let purchase = PurchaseService::purchase_course(&state.db, account_id, dto.course_id).await?;
    Ok(Json(purchase))
}

/// List courses the authenticated user has purchased
#[utoipa::path(
    get,
    path = "/user/purchased-courses",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Purchased courses", body = [Course]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "User role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
#[instrument(skip(state, auth_user))]
pub async fn list_purchased_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let account_id = auth_user.account_id()?;
    let courses = PurchaseService::list_purchased_courses(&state.db, account_id).await?;
    Ok(Json(courses))
}
