use crate::domain::{models::user::{User, Member, CenterOwner}, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, name, role, phone_number, gender, date_of_birth, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.role)
            .bind(&user.phone_number)
            .bind(&user.gender)
            .bind(user.date_of_birth)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_member(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            r#"INSERT INTO members (id, user_id, height, weight, goal_weight, body_fat, skeletal_muscle, health_info, fit_time)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&member.id)
            .bind(&member.user_id)
            .bind(member.height)
            .bind(member.weight)
            .bind(member.goal_weight)
            .bind(member.body_fat)
            .bind(member.skeletal_muscle)
            .bind(&member.health_info)
            .bind(member.fit_time)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_member_by_id(&self, id: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_member_by_user_id(&self, user_id: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_member(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            r#"UPDATE members SET height=?, weight=?, goal_weight=?, body_fat=?, skeletal_muscle=?, health_info=?, fit_time=?
               WHERE id=?
               RETURNING *"#
        )
            .bind(member.height)
            .bind(member.weight)
            .bind(member.goal_weight)
            .bind(member.body_fat)
            .bind(member.skeletal_muscle)
            .bind(&member.health_info)
            .bind(member.fit_time)
            .bind(&member.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_center_owner(&self, owner: &CenterOwner) -> Result<CenterOwner, AppError> {
        sqlx::query_as::<_, CenterOwner>(
            "INSERT INTO center_owners (id, user_id) VALUES (?, ?) RETURNING *"
        )
            .bind(&owner.id)
            .bind(&owner.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_center_owner_by_id(&self, id: &str) -> Result<Option<CenterOwner>, AppError> {
        sqlx::query_as::<_, CenterOwner>("SELECT * FROM center_owners WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
