use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::domain::models::class::{Class, NewClassParams};
use crate::domain::ports::{ClassRepository, InstructorRepository};
use crate::error::AppError;

/// Booking opens once `now` reaches the class's reservation window. A class
/// that never got a window (finalize not run) accepts no reservations.
pub fn is_reservation_open(class: &Class, now: DateTime<Utc>) -> bool {
    match class.reservation_permission {
        Some(open_at) => now >= open_at,
        None => false,
    }
}

/// Cancellation is allowed strictly before the cutoff. An unset cutoff
/// counts as closed, mirroring the reservation window.
pub fn is_cancellation_open(class: &Class, now: DateTime<Utc>) -> bool {
    match class.cancellation_permission {
        Some(cutoff) => now < cutoff,
        None => false,
    }
}

pub struct SchedulingService {
    class_repo: Arc<dyn ClassRepository>,
    instructor_repo: Arc<dyn InstructorRepository>,
}

impl SchedulingService {
    pub fn new(class_repo: Arc<dyn ClassRepository>, instructor_repo: Arc<dyn InstructorRepository>) -> Self {
        Self { class_repo, instructor_repo }
    }

    /// Computes the unset derived windows, validates the instructor-center
    /// association and persists the class. Nothing is written when a rule
    /// fails.
    pub async fn finalize_class(&self, params: NewClassParams) -> Result<Class, AppError> {
        let start_class = params.start_class
            .ok_or_else(|| AppError::MissingField("start_class".into()))?;

        let mut class = Class::new(params, start_class);
        self.apply_window_defaults(&mut class);
        self.validate_association(&class).await?;

        let created = self.class_repo.create(&class).await?;
        info!("Class finalized: {} at center {}", created.id, created.center_id);
        Ok(created)
    }

    /// Re-runs the derivation and validation for an existing class, e.g.
    /// after its start time or instructor changed.
    pub async fn finalize_class_update(&self, mut class: Class) -> Result<Class, AppError> {
        self.apply_window_defaults(&mut class);
        self.validate_association(&class).await?;
        self.class_repo.update(&class).await
    }

    fn apply_window_defaults(&self, class: &mut Class) {
        if class.reservation_permission.is_none() {
            class.reservation_permission = Some(class.start_class - Duration::days(7));
        }
        if class.cancellation_permission.is_none() {
            class.cancellation_permission = Some(class.start_class - Duration::hours(24));
        }
    }

    async fn validate_association(&self, class: &Class) -> Result<(), AppError> {
        let registered = self.instructor_repo
            .is_registered_at(&class.instructor_id, &class.center_id)
            .await?;
        if !registered {
            return Err(AppError::InvalidAssociation(format!(
                "Instructor {} is not registered at center {}",
                class.instructor_id, class.center_id
            )));
        }
        Ok(())
    }

    /// Logical delete: the record is retained and related reservations,
    /// reviews and tickets keep referencing it.
    pub async fn soft_delete_class(&self, class_id: &str) -> Result<Class, AppError> {
        let deleted = self.class_repo.mark_deleted(class_id).await?;
        info!("Class soft-deleted: {}", deleted.id);
        Ok(deleted)
    }
}
