use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const STATUS_RESERVED: &str = "RESERVED";
pub const STATUS_WAITING: &str = "WAITING";
pub const STATUS_CANCELED: &str = "CANCELED";

/// A member's claim on a class slot.
///
/// Status transitions: `RESERVED -> CANCELED`, `WAITING -> RESERVED`
/// (promotion only), `WAITING -> CANCELED`. `CANCELED` is terminal for a
/// row; booking again creates a fresh reservation, which keeps
/// `reserved_at` honest for waitlist ordering.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub id: String,
    pub member_id: String,
    pub class_id: String,
    pub status: String,
    pub reserved_at: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn new(member_id: String, class_id: String, status: &str, reserved_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            class_id,
            status: status.to_string(),
            reserved_at,
            canceled_at: None,
        }
    }
}
