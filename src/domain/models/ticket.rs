use serde::{Deserialize, Serialize};
use uuid::Uuid;
use sqlx::FromRow;

/// A purchasable entitlement to a specific class. No derived-date rules
/// apply; tickets are plain storage.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ClassTicket {
    pub id: String,
    pub class_id: String,
    pub price_minor: i64,
}

impl ClassTicket {
    pub fn new(class_id: String, price_minor: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            class_id,
            price_minor,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ClassTicketOwner {
    pub id: String,
    pub member_id: String,
    pub class_ticket_id: String,
    pub quantity: i32,
}

impl ClassTicketOwner {
    pub fn new(member_id: String, class_ticket_id: String, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            class_ticket_id,
            quantity,
        }
    }
}
