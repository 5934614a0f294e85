use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A scheduled class at a center, run by an instructor registered there.
///
/// `reservation_permission` is the instant booking opens and
/// `cancellation_permission` the last instant a reservation may still be
/// canceled. Both default from `start_class` during finalization and stay
/// nullable in storage for records written before the rule ran.
///
/// Deletion is logical: `is_deleted` flips and the row stays, so related
/// reservations and reviews keep a valid reference. Listing queries must
/// filter the flag themselves.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub center_id: String,
    pub instructor_id: String,
    pub class_type: String,
    pub content: Option<String>,
    pub location: String,
    pub start_class: DateTime<Utc>,
    pub reservation_permission: Option<DateTime<Utc>>,
    pub cancellation_permission: Option<DateTime<Utc>>,
    pub max_member: i32,
    pub min_member: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Draft of a class as submitted by a center or instructor, before the
/// scheduling rules have filled in the derived windows.
pub struct NewClassParams {
    pub name: String,
    pub center_id: String,
    pub instructor_id: String,
    pub class_type: String,
    pub content: Option<String>,
    pub location: String,
    pub start_class: Option<DateTime<Utc>>,
    pub reservation_permission: Option<DateTime<Utc>>,
    pub cancellation_permission: Option<DateTime<Utc>>,
    pub max_member: i32,
    pub min_member: i32,
}

impl Class {
    pub fn new(params: NewClassParams, start_class: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            center_id: params.center_id,
            instructor_id: params.instructor_id,
            class_type: params.class_type,
            content: params.content,
            location: params.location,
            start_class,
            reservation_permission: params.reservation_permission,
            cancellation_permission: params.cancellation_permission,
            max_member: params.max_member,
            min_member: params.min_member,
            is_deleted: false,
            created_at: Utc::now(),
        }
    }
}
