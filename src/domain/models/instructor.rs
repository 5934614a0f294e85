use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const APPLICATION_PENDING: &str = "PENDING";
pub const APPLICATION_APPROVED: &str = "APPROVED";
pub const APPLICATION_REJECTED: &str = "REJECTED";

/// Instructor profile, 1:1 with an `INSTRUCTOR` user. Center registrations
/// live in the `instructor_centers` join table.
///
/// `average_rating` is stored in hundredths (e.g. 450 = 4.50) and is
/// recomputed whenever a review lands on one of the instructor's classes.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Instructor {
    pub id: String,
    pub user_id: String,
    pub expertise: String,
    pub average_rating: i32,
    pub available_hours: Option<String>,
    pub introduction: Option<String>,
    pub certification: Option<String>,
    pub career: Option<String>,
}

impl Instructor {
    pub fn new(user_id: String, expertise: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            expertise,
            average_rating: 0,
            available_hours: None,
            introduction: None,
            certification: None,
            career: None,
        }
    }
}

/// An instructor's request to be registered at a center. Approval inserts
/// the `instructor_centers` row; only `PENDING` applications can be decided.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct InstructorApplication {
    pub id: String,
    pub instructor_id: String,
    pub center_id: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

impl InstructorApplication {
    pub fn new(instructor_id: String, center_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            instructor_id,
            center_id,
            status: APPLICATION_PENDING.to_string(),
            applied_at: Utc::now(),
        }
    }
}
