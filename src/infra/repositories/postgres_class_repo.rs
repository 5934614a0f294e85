use crate::domain::{models::class::Class, ports::ClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresClassRepo {
    pool: PgPool,
}

impl PostgresClassRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for PostgresClassRepo {
    async fn create(&self, class: &Class) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            r#"INSERT INTO classes (id, name, center_id, instructor_id, class_type, content, location, start_class, reservation_permission, cancellation_permission, max_member, min_member, is_deleted, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
               RETURNING *"#
        )
            .bind(&class.id)
            .bind(&class.name)
            .bind(&class.center_id)
            .bind(&class.instructor_id)
            .bind(&class.class_type)
            .bind(&class.content)
            .bind(&class.location)
            .bind(class.start_class)
            .bind(class.reservation_permission)
            .bind(class.cancellation_permission)
            .bind(class.max_member)
            .bind(class.min_member)
            .bind(class.is_deleted)
            .bind(class.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Class>, AppError> {
        sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_center(&self, center_id: &str) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(
            "SELECT * FROM classes WHERE center_id = $1 AND is_deleted = FALSE ORDER BY start_class ASC"
        )
            .bind(center_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_instructor(&self, instructor_id: &str) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(
            "SELECT * FROM classes WHERE instructor_id = $1 AND is_deleted = FALSE ORDER BY start_class ASC"
        )
            .bind(instructor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, class: &Class) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            r#"UPDATE classes SET name=$1, instructor_id=$2, class_type=$3, content=$4, location=$5, start_class=$6, reservation_permission=$7, cancellation_permission=$8, max_member=$9, min_member=$10
               WHERE id=$11
               RETURNING *"#
        )
            .bind(&class.name)
            .bind(&class.instructor_id)
            .bind(&class.class_type)
            .bind(&class.content)
            .bind(&class.location)
            .bind(class.start_class)
            .bind(class.reservation_permission)
            .bind(class.cancellation_permission)
            .bind(class.max_member)
            .bind(class.min_member)
            .bind(&class.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn mark_deleted(&self, id: &str) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            "UPDATE classes SET is_deleted = TRUE WHERE id = $1 RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))
    }
}
