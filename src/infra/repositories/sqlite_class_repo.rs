use crate::domain::{models::class::Class, ports::ClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteClassRepo {
    pool: SqlitePool,
}

impl SqliteClassRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for SqliteClassRepo {
    async fn create(&self, class: &Class) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            r#"INSERT INTO classes (id, name, center_id, instructor_id, class_type, content, location, start_class, reservation_permission, cancellation_permission, max_member, min_member, is_deleted, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_center(&self, center_id: &str) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(
            "SELECT * FROM classes WHERE center_id = ? AND is_deleted = FALSE ORDER BY start_class ASC"
        )
            .bind(center_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_instructor(&self, instructor_id: &str) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(
            "SELECT * FROM classes WHERE instructor_id = ? AND is_deleted = FALSE ORDER BY start_class ASC"
        )
            .bind(instructor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, class: &Class) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            r#"UPDATE classes SET name=?, instructor_id=?, class_type=?, content=?, location=?, start_class=?, reservation_permission=?, cancellation_permission=?, max_member=?, min_member=?
               WHERE id=?
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
            "UPDATE classes SET is_deleted = TRUE WHERE id = ? RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))
    }
}
