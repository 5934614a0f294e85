use std::sync::Arc;
use tracing::info;

use crate::domain::models::review::Review;
use crate::domain::ports::{ClassRepository, InstructorRepository, ReviewRepository};
use crate::error::AppError;

pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    class_repo: Arc<dyn ClassRepository>,
    instructor_repo: Arc<dyn InstructorRepository>,
}

impl ReviewService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        class_repo: Arc<dyn ClassRepository>,
        instructor_repo: Arc<dyn InstructorRepository>,
    ) -> Self {
        Self { review_repo, class_repo, instructor_repo }
    }

    /// Stores a review and refreshes the instructor's average rating
    /// (hundredths, rounded) over every review of their classes.
    pub async fn submit(&self, member_id: &str, class_id: &str, rating: i32, comment: String) -> Result<Review, AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation("Rating must be between 1 and 5".into()));
        }

        let class = self.class_repo.find_by_id(class_id).await?
            .filter(|c| !c.is_deleted)
            .ok_or_else(|| AppError::NotFound("Class not found".into()))?;

        let review = Review::new(member_id.to_string(), class_id.to_string(), rating, comment);
        let created = self.review_repo.create(&review).await?;

        if let Some(average) = self.review_repo.average_rating_for_instructor(&class.instructor_id).await? {
            let hundredths = (average * 100.0).round() as i32;
            self.instructor_repo.update_average_rating(&class.instructor_id, hundredths).await?;
            info!("Instructor {} average rating now {}", class.instructor_id, hundredths);
        }

        Ok(created)
    }
}
