use crate::domain::{models::reservation::Reservation, ports::ReservationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{SqlitePool, Row};
use chrono::{DateTime, Utc};

pub struct SqliteReservationRepo {
    pool: SqlitePool,
}

impl SqliteReservationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepo {
    async fn create_reserved(&self, reservation: &Reservation, max_member: i32) -> Result<Reservation, AppError> {
        // Counted insert: the row only lands while the class is under
        // capacity. Single statement, so concurrent attempts serialize on
        // the database write path.
        sqlx::query_as::<_, Reservation>(
            r#"INSERT INTO reservations (id, member_id, class_id, status, reserved_at, canceled_at)
               SELECT ?, ?, ?, 'RESERVED', ?, NULL
               WHERE (SELECT COUNT(*) FROM reservations WHERE class_id = ? AND status = 'RESERVED') < ?
               RETURNING *"#
        )
            .bind(&reservation.id)
            .bind(&reservation.member_id)
            .bind(&reservation.class_id)
            .bind(reservation.reserved_at)
            .bind(&reservation.class_id)
            .bind(max_member)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::CapacityExceeded("Class is fully booked".to_string()))
    }

    async fn create_waiting(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>(
            r#"INSERT INTO reservations (id, member_id, class_id, status, reserved_at, canceled_at)
               VALUES (?, ?, ?, 'WAITING', ?, NULL)
               RETURNING *"#
        )
            .bind(&reservation.id)
            .bind(&reservation.member_id)
            .bind(&reservation.class_id)
            .bind(reservation.reserved_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_class(&self, class_id: &str) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE class_id = ? ORDER BY reserved_at ASC"
        )
            .bind(class_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE member_id = ? ORDER BY reserved_at ASC"
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_by_status(&self, class_id: &str, status: &str) -> Result<i64, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM reservations WHERE class_id = ? AND status = ?"
        )
            .bind(class_id)
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn cancel(&self, id: &str, canceled_at: DateTime<Utc>) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = 'CANCELED', canceled_at = ? WHERE id = ? RETURNING *"
        )
            .bind(canceled_at)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    async fn promote_earliest_waiting(&self, class_id: &str, max_member: i32) -> Result<Option<Reservation>, AppError> {
        // Promote the oldest WAITING row, guarded by the same capacity
        // condition as create_reserved.
        sqlx::query_as::<_, Reservation>(
            r#"UPDATE reservations SET status = 'RESERVED'
               WHERE id = (
                   SELECT id FROM reservations
                   WHERE class_id = ? AND status = 'WAITING'
                   ORDER BY reserved_at ASC, id ASC
                   LIMIT 1
               )
               AND (SELECT COUNT(*) FROM reservations WHERE class_id = ? AND status = 'RESERVED') < ?
               RETURNING *"#
        )
            .bind(class_id)
            .bind(class_id)
            .bind(max_member)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
