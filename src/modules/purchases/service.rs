use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::model::Purchase;
use crate::modules::courses::model::Course;
use crate::utils::errors::AppError;

pub struct PurchaseService;

impl PurchaseService {
    /// Record a purchase. Ownership is at-most-once: the second insert for the
    /// same (account, course) pair trips the unique constraint and surfaces as
    /// `AlreadyPurchased`. An unknown course trips the foreign key instead.
    #[instrument(skip(db))]
    pub async fn purchase_course(
        db: &PgPool,
        account_id: Uuid,
        course_id: Uuid,
    ) -> Result<Purchase, AppError> {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"INSERT INTO purchases (account_id, course_id)
               VALUES ($1, $2)
               RETURNING id, account_id, course_id, created_at"#,
        )
        .bind(account_id)
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(map_insert_error)?;

        Ok(purchase)
    }

    /// Courses the account has purchased, newest purchase first.
    #[instrument(skip(db))]
    pub async fn list_purchased_courses(
        db: &PgPool,
        account_id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"SELECT c.id, c.title, c.description, c.image_link, c.admin_id, c.created_at
               FROM courses c
               JOIN purchases p ON p.course_id = c.id
               WHERE p.account_id = $1
               ORDER BY p.created_at DESC"#,
        )
        .bind(account_id)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }
}

fn map_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::AlreadyPurchased;
        }
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound("Course not found".to_string());
        }
    }
    AppError::from(e)
}
