use crate::domain::{models::center::{Center, Exercise}, ports::CenterRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCenterRepo {
    pool: SqlitePool,
}

impl SqliteCenterRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CenterRepository for SqliteCenterRepo {
    async fn create(&self, center: &Center) -> Result<Center, AppError> {
        sqlx::query_as::<_, Center>(
            "INSERT INTO centers (id, name, location, owner_id) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&center.id)
            .bind(&center.name)
            .bind(&center.location)
            .bind(&center.owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Center>, AppError> {
        sqlx::query_as::<_, Center>("SELECT * FROM centers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Center>, AppError> {
        sqlx::query_as::<_, Center>("SELECT * FROM centers WHERE owner_id = ? ORDER BY name ASC")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, center: &Center) -> Result<Center, AppError> {
        sqlx::query_as::<_, Center>(
            "UPDATE centers SET name=?, location=? WHERE id=? RETURNING *"
        )
            .bind(&center.name)
            .bind(&center.location)
            .bind(&center.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_exercise(&self, exercise: &Exercise) -> Result<Exercise, AppError> {
        sqlx::query_as::<_, Exercise>(
            "INSERT INTO exercises (id, name) VALUES (?, ?) RETURNING *"
        )
            .bind(&exercise.id)
            .bind(&exercise.name)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn add_exercise(&self, center_id: &str, exercise_id: &str) -> Result<(), AppError> {
        sqlx::query("INSERT OR IGNORE INTO center_exercises (center_id, exercise_id) VALUES (?, ?)")
            .bind(center_id)
            .bind(exercise_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_exercises(&self, center_id: &str) -> Result<Vec<Exercise>, AppError> {
        sqlx::query_as::<_, Exercise>(
            r#"SELECT e.* FROM exercises e
               JOIN center_exercises ce ON ce.exercise_id = e.id
               WHERE ce.center_id = ?
               ORDER BY e.name ASC"#
        )
            .bind(center_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
