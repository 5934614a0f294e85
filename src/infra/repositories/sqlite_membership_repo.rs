use crate::domain::{models::membership::{Membership, MembershipOwner}, ports::MembershipRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteMembershipRepo {
    pool: SqlitePool,
}

impl SqliteMembershipRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for SqliteMembershipRepo {
    async fn create(&self, membership: &Membership) -> Result<Membership, AppError> {
        sqlx::query_as::<_, Membership>(
            r#"INSERT INTO memberships (id, center_id, name, price_minor, duration_days)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&membership.id)
            .bind(&membership.center_id)
            .bind(&membership.name)
            .bind(membership.price_minor)
            .bind(membership.duration_days)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Membership>, AppError> {
        sqlx::query_as::<_, Membership>("SELECT * FROM memberships WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_center(&self, center_id: &str) -> Result<Vec<Membership>, AppError> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM memberships WHERE center_id = ? ORDER BY price_minor ASC"
        )
            .bind(center_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_owner(&self, owner: &MembershipOwner) -> Result<MembershipOwner, AppError> {
        sqlx::query_as::<_, MembershipOwner>(
            r#"INSERT INTO membership_owners (id, member_id, membership_id, start_date, end_date, is_active)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&owner.id)
            .bind(&owner.member_id)
            .bind(&owner.membership_id)
            .bind(owner.start_date)
            .bind(owner.end_date)
            .bind(owner.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_owner(&self, id: &str) -> Result<Option<MembershipOwner>, AppError> {
        sqlx::query_as::<_, MembershipOwner>("SELECT * FROM membership_owners WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_owners_by_member(&self, member_id: &str) -> Result<Vec<MembershipOwner>, AppError> {
        sqlx::query_as::<_, MembershipOwner>(
            "SELECT * FROM membership_owners WHERE member_id = ? ORDER BY start_date ASC"
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_owner(&self, owner: &MembershipOwner) -> Result<MembershipOwner, AppError> {
        sqlx::query_as::<_, MembershipOwner>(
            r#"UPDATE membership_owners SET start_date=?, end_date=?, is_active=?
               WHERE id=?
               RETURNING *"#
        )
            .bind(owner.start_date)
            .bind(owner.end_date)
            .bind(owner.is_active)
            .bind(&owner.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
