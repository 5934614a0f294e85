use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::NaiveDate;
use sqlx::FromRow;

/// A center-level access product. `price_minor` is in minor currency units.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Membership {
    pub id: String,
    pub center_id: String,
    pub name: String,
    pub price_minor: i64,
    pub duration_days: i32,
}

impl Membership {
    pub fn new(center_id: String, name: String, price_minor: i64, duration_days: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            center_id,
            name,
            price_minor,
            duration_days,
        }
    }
}

/// A member's ownership of a membership product.
///
/// `end_date` is derived as `start_date + duration_days` when absent.
/// The stored `is_active` flag is a creation-time default; whether the
/// ownership is active *today* is answered lazily from the clock, see
/// `entitlement_service::is_currently_active`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MembershipOwner {
    pub id: String,
    pub member_id: String,
    pub membership_id: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

/// Ownership draft as submitted at purchase time; dates are filled in by
/// the entitlement rules when absent.
pub struct NewOwnershipParams {
    pub member_id: String,
    pub membership_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl MembershipOwner {
    pub fn new(params: NewOwnershipParams, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id: params.member_id,
            membership_id: params.membership_id,
            start_date,
            end_date: params.end_date,
            is_active: true,
        }
    }
}
