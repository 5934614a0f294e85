use std::sync::Arc;
use tracing::info;

use crate::domain::models::class::Class;
use crate::domain::models::reservation::{Reservation, STATUS_CANCELED, STATUS_RESERVED, STATUS_WAITING};
use crate::domain::ports::{ClassRepository, Clock, ReservationRepository};
use crate::domain::services::scheduling_service::{is_cancellation_open, is_reservation_open};
use crate::error::AppError;

pub struct ReservationService {
    reservation_repo: Arc<dyn ReservationRepository>,
    class_repo: Arc<dyn ClassRepository>,
    clock: Arc<dyn Clock>,
}

impl ReservationService {
    pub fn new(
        reservation_repo: Arc<dyn ReservationRepository>,
        class_repo: Arc<dyn ClassRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { reservation_repo, class_repo, clock }
    }

    /// Books a slot in the class. The capacity bound is enforced by the
    /// repository's counted insert, so two concurrent attempts near the cap
    /// cannot both succeed; the loser gets `CapacityExceeded`.
    pub async fn reserve(&self, member_id: &str, class_id: &str) -> Result<Reservation, AppError> {
        let class = self.bookable_class(class_id).await?;

        let reservation = Reservation::new(
            member_id.to_string(),
            class_id.to_string(),
            STATUS_RESERVED,
            self.clock.now(),
        );
        let created = self.reservation_repo.create_reserved(&reservation, class.max_member).await?;
        info!("Reservation {} created for class {}", created.id, class_id);
        Ok(created)
    }

    /// Joins the waitlist for a class. Waiting rows carry no capacity
    /// condition; they compete on `reserved_at` when a slot frees.
    pub async fn join_waitlist(&self, member_id: &str, class_id: &str) -> Result<Reservation, AppError> {
        self.bookable_class(class_id).await?;

        let reservation = Reservation::new(
            member_id.to_string(),
            class_id.to_string(),
            STATUS_WAITING,
            self.clock.now(),
        );
        let created = self.reservation_repo.create_waiting(&reservation).await?;
        info!("Reservation {} waitlisted for class {}", created.id, class_id);
        Ok(created)
    }

    async fn bookable_class(&self, class_id: &str) -> Result<Class, AppError> {
        let class = self.class_repo.find_by_id(class_id).await?
            .filter(|c| !c.is_deleted)
            .ok_or_else(|| AppError::NotFound("Class not found".into()))?;

        if !is_reservation_open(&class, self.clock.now()) {
            return Err(AppError::Validation("Reservations are not open for this class".into()));
        }
        Ok(class)
    }

    /// Cancels a reservation. A `RESERVED` row is only cancellable while the
    /// class's cancellation window is open; a freed slot immediately promotes
    /// the earliest waiting reservation. `WAITING` rows cancel at any time.
    pub async fn cancel(&self, reservation_id: &str) -> Result<Reservation, AppError> {
        let reservation = self.reservation_repo.find_by_id(reservation_id).await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".into()))?;

        match reservation.status.as_str() {
            STATUS_CANCELED => {
                return Err(AppError::Conflict("Reservation is already canceled".into()));
            }
            STATUS_RESERVED => {
                let class = self.class_repo.find_by_id(&reservation.class_id).await?
                    .ok_or_else(|| AppError::NotFound("Class not found".into()))?;
                if !is_cancellation_open(&class, self.clock.now()) {
                    return Err(AppError::Validation("Cancellation window has closed".into()));
                }

                let canceled = self.reservation_repo.cancel(reservation_id, self.clock.now()).await?;
                if let Some(promoted) = self.reservation_repo
                    .promote_earliest_waiting(&class.id, class.max_member)
                    .await?
                {
                    info!("Reservation {} promoted from waitlist for class {}", promoted.id, class.id);
                }
                Ok(canceled)
            }
            _ => self.reservation_repo.cancel(reservation_id, self.clock.now()).await,
        }
    }

    /// Fills freed slots from the waitlist, earliest `reserved_at` first,
    /// until the class is at capacity or the waitlist is empty.
    pub async fn promote_waiting(&self, class_id: &str) -> Result<Vec<Reservation>, AppError> {
        let class = self.class_repo.find_by_id(class_id).await?
            .ok_or_else(|| AppError::NotFound("Class not found".into()))?;

        let mut promoted = Vec::new();
        while let Some(reservation) = self.reservation_repo
            .promote_earliest_waiting(class_id, class.max_member)
            .await?
        {
            info!("Reservation {} promoted from waitlist for class {}", reservation.id, class_id);
            promoted.push(reservation);
        }
        Ok(promoted)
    }

    /// Capacity query for callers that want to show remaining slots.
    pub async fn count_reserved(&self, class_id: &str) -> Result<i64, AppError> {
        self.reservation_repo.count_by_status(class_id, STATUS_RESERVED).await
    }
}
