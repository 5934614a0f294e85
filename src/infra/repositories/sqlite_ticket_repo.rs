use crate::domain::{models::ticket::{ClassTicket, ClassTicketOwner}, ports::TicketRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTicketRepo {
    pool: SqlitePool,
}

impl SqliteTicketRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for SqliteTicketRepo {
    async fn create(&self, ticket: &ClassTicket) -> Result<ClassTicket, AppError> {
        sqlx::query_as::<_, ClassTicket>(
            "INSERT INTO class_tickets (id, class_id, price_minor) VALUES (?, ?, ?) RETURNING *"
        )
            .bind(&ticket.id)
            .bind(&ticket.class_id)
            .bind(ticket.price_minor)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ClassTicket>, AppError> {
        sqlx::query_as::<_, ClassTicket>("SELECT * FROM class_tickets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_class(&self, class_id: &str) -> Result<Vec<ClassTicket>, AppError> {
        sqlx::query_as::<_, ClassTicket>("SELECT * FROM class_tickets WHERE class_id = ?")
            .bind(class_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_owner(&self, owner: &ClassTicketOwner) -> Result<ClassTicketOwner, AppError> {
        sqlx::query_as::<_, ClassTicketOwner>(
            r#"INSERT INTO class_ticket_owners (id, member_id, class_ticket_id, quantity)
               VALUES (?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&owner.id)
            .bind(&owner.member_id)
            .bind(&owner.class_ticket_id)
            .bind(owner.quantity)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_owner(&self, member_id: &str, class_ticket_id: &str) -> Result<Option<ClassTicketOwner>, AppError> {
        sqlx::query_as::<_, ClassTicketOwner>(
            "SELECT * FROM class_ticket_owners WHERE member_id = ? AND class_ticket_id = ?"
        )
            .bind(member_id)
            .bind(class_ticket_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_quantity(&self, id: &str, quantity: i32) -> Result<ClassTicketOwner, AppError> {
        sqlx::query_as::<_, ClassTicketOwner>(
            "UPDATE class_ticket_owners SET quantity = ? WHERE id = ? RETURNING *"
        )
            .bind(quantity)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Ticket ownership not found".to_string()))
    }

    async fn list_owners_by_member(&self, member_id: &str) -> Result<Vec<ClassTicketOwner>, AppError> {
        sqlx::query_as::<_, ClassTicketOwner>(
            "SELECT * FROM class_ticket_owners WHERE member_id = ?"
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
