use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_link: Option<String>,
    pub admin_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// The owning admin comes from the requester's token, never from the body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 10, max = 255, message = "title must be 10-255 characters"))]
    pub title: String,
    #[validate(length(
        min = 100,
        max = 2500,
        message = "description must be 100-2500 characters"
    ))]
    pub description: String,
    #[validate(url(message = "image_link must be a valid URL"))]
    pub image_link: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteCourseDto {
    pub course_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CourseContent {
    pub id: Uuid,
    pub course_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddCourseContentDto {
    pub course_id: Uuid,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}
