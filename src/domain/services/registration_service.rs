use std::sync::Arc;
use tracing::info;

use crate::domain::models::instructor::InstructorApplication;
use crate::domain::ports::{CenterRepository, InstructorRepository};
use crate::error::AppError;

/// Instructor-center registration flow: an instructor applies to a center,
/// the center owner approves or rejects. Approval is what makes the
/// instructor eligible to run classes there.
pub struct RegistrationService {
    instructor_repo: Arc<dyn InstructorRepository>,
    center_repo: Arc<dyn CenterRepository>,
}

impl RegistrationService {
    pub fn new(instructor_repo: Arc<dyn InstructorRepository>, center_repo: Arc<dyn CenterRepository>) -> Self {
        Self { instructor_repo, center_repo }
    }

    pub async fn apply(&self, instructor_id: &str, center_id: &str) -> Result<InstructorApplication, AppError> {
        self.instructor_repo.find_by_id(instructor_id).await?
            .ok_or_else(|| AppError::NotFound("Instructor not found".into()))?;
        self.center_repo.find_by_id(center_id).await?
            .ok_or_else(|| AppError::NotFound("Center not found".into()))?;

        let application = InstructorApplication::new(instructor_id.to_string(), center_id.to_string());
        let created = self.instructor_repo.create_application(&application).await?;
        info!("Instructor {} applied to center {}", instructor_id, center_id);
        Ok(created)
    }

    pub async fn approve(&self, application_id: &str) -> Result<InstructorApplication, AppError> {
        let approved = self.instructor_repo.approve_application(application_id).await?;
        info!(
            "Application {} approved: instructor {} registered at center {}",
            approved.id, approved.instructor_id, approved.center_id
        );
        Ok(approved)
    }

    pub async fn reject(&self, application_id: &str) -> Result<InstructorApplication, AppError> {
        self.instructor_repo.reject_application(application_id).await
    }
}
