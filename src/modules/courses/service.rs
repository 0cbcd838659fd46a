use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::model::{AddCourseContentDto, Course, CourseContent, CreateCourseDto};
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(
        db: &PgPool,
        dto: CreateCourseDto,
        admin_id: Uuid,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"INSERT INTO courses (title, description, image_link, admin_id)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, description, image_link, admin_id, created_at"#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.image_link)
        .bind(admin_id)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    /// Deleting an unknown id reports `NotFound` rather than silently
    /// succeeding.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, course_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn list_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, image_link, admin_id, created_at
             FROM courses ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    #[instrument(skip(db, dto))]
    pub async fn add_content(
        db: &PgPool,
        dto: AddCourseContentDto,
    ) -> Result<CourseContent, AppError> {
        let content = sqlx::query_as::<_, CourseContent>(
            r#"INSERT INTO course_content (course_id, content)
               VALUES ($1, $2)
               RETURNING id, course_id, content, created_at"#,
        )
        .bind(dto.course_id)
        .bind(&dto.content)
        .fetch_one(db)
        .await
        .map_err(map_content_error)?;

        Ok(content)
    }
}

fn map_content_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        return AppError::NotFound("Course not found".to_string());
    }
    AppError::from(e)
}
