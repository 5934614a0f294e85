use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

pub const ROLE_MEMBER: &str = "MEMBER";
pub const ROLE_INSTRUCTOR: &str = "INSTRUCTOR";
pub const ROLE_DIRECTOR: &str = "DIRECTOR";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, name: String, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            name,
            role: role.to_string(),
            phone_number: String::new(),
            gender: "UNDISCLOSED".to_string(),
            date_of_birth: None,
            created_at: Utc::now(),
        }
    }
}

/// Member profile, 1:1 with a `MEMBER` user. Body metrics are optional and
/// only filled in once the member records them.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Member {
    pub id: String,
    pub user_id: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub goal_weight: Option<i32>,
    pub body_fat: Option<i32>,
    pub skeletal_muscle: Option<i32>,
    pub health_info: Option<String>,
    pub fit_time: Option<NaiveTime>,
}

impl Member {
    pub fn new(user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            height: None,
            weight: None,
            goal_weight: None,
            body_fat: None,
            skeletal_muscle: None,
            health_info: None,
            fit_time: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CenterOwner {
    pub id: String,
    pub user_id: String,
}

impl CenterOwner {
    pub fn new(user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
        }
    }
}
