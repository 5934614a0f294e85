use serde::{Deserialize, Serialize};
use uuid::Uuid;
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Center {
    pub id: String,
    pub name: String,
    pub location: String,
    pub owner_id: String,
}

impl Center {
    pub fn new(name: String, location: String, owner_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            location,
            owner_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Exercise {
    pub id: String,
    pub name: String,
}

impl Exercise {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }
}
