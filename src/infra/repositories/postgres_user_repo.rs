use crate::domain::{models::user::{User, Member, CenterOwner}, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, name, role, phone_number, gender, date_of_birth, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *"
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
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_member(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            r#"INSERT INTO members (id, user_id, height, weight, goal_weight, body_fat, skeletal_muscle, health_info, fit_time)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
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
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_member_by_user_id(&self, user_id: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_member(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            r#"UPDATE members SET height=$1, weight=$2, goal_weight=$3, body_fat=$4, skeletal_muscle=$5, health_info=$6, fit_time=$7
               WHERE id=$8
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
            "INSERT INTO center_owners (id, user_id) VALUES ($1, $2) RETURNING *"
        )
            .bind(&owner.id)
            .bind(&owner.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_center_owner_by_id(&self, id: &str) -> Result<Option<CenterOwner>, AppError> {
        sqlx::query_as::<_, CenterOwner>("SELECT * FROM center_owners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
