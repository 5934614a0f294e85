pub mod sqlite_user_repo;
pub mod sqlite_center_repo;
pub mod sqlite_instructor_repo;
pub mod sqlite_class_repo;
pub mod sqlite_ticket_repo;
pub mod sqlite_reservation_repo;
pub mod sqlite_review_repo;
pub mod sqlite_membership_repo;

pub mod postgres_user_repo;
pub mod postgres_center_repo;
pub mod postgres_instructor_repo;
pub mod postgres_class_repo;
pub mod postgres_ticket_repo;
pub mod postgres_reservation_repo;
pub mod postgres_review_repo;
pub mod postgres_membership_repo;
