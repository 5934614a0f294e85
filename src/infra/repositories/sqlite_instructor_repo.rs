use crate::domain::{models::instructor::{Instructor, InstructorApplication}, ports::InstructorRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{SqlitePool, Row};

pub struct SqliteInstructorRepo {
    pool: SqlitePool,
}

impl SqliteInstructorRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstructorRepository for SqliteInstructorRepo {
    async fn create(&self, instructor: &Instructor) -> Result<Instructor, AppError> {
        sqlx::query_as::<_, Instructor>(
            r#"INSERT INTO instructors (id, user_id, expertise, average_rating, available_hours, introduction, certification, career)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&instructor.id)
            .bind(&instructor.user_id)
            .bind(&instructor.expertise)
            .bind(instructor.average_rating)
            .bind(&instructor.available_hours)
            .bind(&instructor.introduction)
            .bind(&instructor.certification)
            .bind(&instructor.career)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Instructor>, AppError> {
        sqlx::query_as::<_, Instructor>("SELECT * FROM instructors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Instructor>, AppError> {
        sqlx::query_as::<_, Instructor>("SELECT * FROM instructors WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_center(&self, center_id: &str) -> Result<Vec<Instructor>, AppError> {
        sqlx::query_as::<_, Instructor>(
            r#"SELECT i.* FROM instructors i
               JOIN instructor_centers ic ON ic.instructor_id = i.id
               WHERE ic.center_id = ?"#
        )
            .bind(center_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn is_registered_at(&self, instructor_id: &str, center_id: &str) -> Result<bool, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM instructor_centers WHERE instructor_id = ? AND center_id = ?"
        )
            .bind(instructor_id)
            .bind(center_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count") > 0)
    }

    async fn register_at_center(&self, instructor_id: &str, center_id: &str) -> Result<(), AppError> {
        sqlx::query("INSERT OR IGNORE INTO instructor_centers (instructor_id, center_id) VALUES (?, ?)")
            .bind(instructor_id)
            .bind(center_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn update_average_rating(&self, instructor_id: &str, rating_hundredths: i32) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE instructors SET average_rating = ? WHERE id = ?")
            .bind(rating_hundredths)
            .bind(instructor_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Instructor not found".into()));
        }
        Ok(())
    }

    async fn create_application(&self, application: &InstructorApplication) -> Result<InstructorApplication, AppError> {
        sqlx::query_as::<_, InstructorApplication>(
            r#"INSERT INTO instructor_applications (id, instructor_id, center_id, status, applied_at)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&application.id)
            .bind(&application.instructor_id)
            .bind(&application.center_id)
            .bind(&application.status)
            .bind(application.applied_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_application(&self, id: &str) -> Result<Option<InstructorApplication>, AppError> {
        sqlx::query_as::<_, InstructorApplication>("SELECT * FROM instructor_applications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_applications_by_center(&self, center_id: &str) -> Result<Vec<InstructorApplication>, AppError> {
        sqlx::query_as::<_, InstructorApplication>(
            "SELECT * FROM instructor_applications WHERE center_id = ? ORDER BY applied_at ASC"
        )
            .bind(center_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn approve_application(&self, id: &str) -> Result<InstructorApplication, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let approved = sqlx::query_as::<_, InstructorApplication>(
            "UPDATE instructor_applications SET status = 'APPROVED' WHERE id = ? AND status = 'PENDING' RETURNING *"
        )
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::Conflict("Application already decided or missing".to_string()))?;

        sqlx::query("INSERT OR IGNORE INTO instructor_centers (instructor_id, center_id) VALUES (?, ?)")
            .bind(&approved.instructor_id)
            .bind(&approved.center_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(approved)
    }

    async fn reject_application(&self, id: &str) -> Result<InstructorApplication, AppError> {
        sqlx::query_as::<_, InstructorApplication>(
            "UPDATE instructor_applications SET status = 'REJECTED' WHERE id = ? AND status = 'PENDING' RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::Conflict("Application already decided or missing".to_string()))
    }
}
