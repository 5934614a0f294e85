use crate::domain::{models::review::Review, ports::ReviewRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresReviewRepo {
    pool: PgPool,
}

impl PostgresReviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            r#"INSERT INTO reviews (id, member_id, class_id, rating, comment, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING *"#
        )
            .bind(&review.id)
            .bind(&review.member_id)
            .bind(&review.class_id)
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.created_at)
            .bind(review.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_class(&self, class_id: &str) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE class_id = $1 ORDER BY created_at DESC"
        )
            .bind(class_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE member_id = $1 ORDER BY created_at DESC"
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET rating=$1, comment=$2, updated_at=$3 WHERE id=$4 RETURNING *"
        )
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.updated_at)
            .bind(&review.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn average_rating_for_instructor(&self, instructor_id: &str) -> Result<Option<f64>, AppError> {
        let row = sqlx::query(
            r#"SELECT AVG(r.rating)::DOUBLE PRECISION as average FROM reviews r
               JOIN classes c ON c.id = r.class_id
               WHERE c.instructor_id = $1"#
        )
            .bind(instructor_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<Option<f64>, _>("average"))
    }
}
