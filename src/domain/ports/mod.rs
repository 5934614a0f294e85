use crate::domain::models::{
    user::{User, Member, CenterOwner}, center::{Center, Exercise},
    instructor::{Instructor, InstructorApplication}, class::Class,
    ticket::{ClassTicket, ClassTicketOwner}, reservation::Reservation,
    review::Review, membership::{Membership, MembershipOwner},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" for every rule that reads wall-clock time. Injected so
/// tests can pin the clock instead of depending on process time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn create_member(&self, member: &Member) -> Result<Member, AppError>;
    async fn find_member_by_id(&self, id: &str) -> Result<Option<Member>, AppError>;
    async fn find_member_by_user_id(&self, user_id: &str) -> Result<Option<Member>, AppError>;
    async fn update_member(&self, member: &Member) -> Result<Member, AppError>;
    async fn create_center_owner(&self, owner: &CenterOwner) -> Result<CenterOwner, AppError>;
    async fn find_center_owner_by_id(&self, id: &str) -> Result<Option<CenterOwner>, AppError>;
}

#[async_trait]
pub trait CenterRepository: Send + Sync {
    async fn create(&self, center: &Center) -> Result<Center, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Center>, AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Center>, AppError>;
    async fn update(&self, center: &Center) -> Result<Center, AppError>;
    async fn create_exercise(&self, exercise: &Exercise) -> Result<Exercise, AppError>;
    async fn add_exercise(&self, center_id: &str, exercise_id: &str) -> Result<(), AppError>;
    async fn list_exercises(&self, center_id: &str) -> Result<Vec<Exercise>, AppError>;
}

#[async_trait]
pub trait InstructorRepository: Send + Sync {
    async fn create(&self, instructor: &Instructor) -> Result<Instructor, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Instructor>, AppError>;
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Instructor>, AppError>;
    async fn list_by_center(&self, center_id: &str) -> Result<Vec<Instructor>, AppError>;
    /// The rule-engine dependency: is this instructor registered at this center?
    async fn is_registered_at(&self, instructor_id: &str, center_id: &str) -> Result<bool, AppError>;
    async fn register_at_center(&self, instructor_id: &str, center_id: &str) -> Result<(), AppError>;
    async fn update_average_rating(&self, instructor_id: &str, rating_hundredths: i32) -> Result<(), AppError>;
    async fn create_application(&self, application: &InstructorApplication) -> Result<InstructorApplication, AppError>;
    async fn find_application(&self, id: &str) -> Result<Option<InstructorApplication>, AppError>;
    async fn list_applications_by_center(&self, center_id: &str) -> Result<Vec<InstructorApplication>, AppError>;
    /// Flips a PENDing application to APPROVED and registers the instructor
    /// at the center in one transaction. Errors with `Conflict` if the
    /// application was already decided.
    async fn approve_application(&self, id: &str) -> Result<InstructorApplication, AppError>;
    async fn reject_application(&self, id: &str) -> Result<InstructorApplication, AppError>;
}

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn create(&self, class: &Class) -> Result<Class, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Class>, AppError>;
    async fn list_by_center(&self, center_id: &str) -> Result<Vec<Class>, AppError>;
    async fn list_by_instructor(&self, instructor_id: &str) -> Result<Vec<Class>, AppError>;
    async fn update(&self, class: &Class) -> Result<Class, AppError>;
    /// Soft delete: flips `is_deleted`, the row and everything referencing
    /// it stay in place.
    async fn mark_deleted(&self, id: &str) -> Result<Class, AppError>;
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn create(&self, ticket: &ClassTicket) -> Result<ClassTicket, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ClassTicket>, AppError>;
    async fn list_by_class(&self, class_id: &str) -> Result<Vec<ClassTicket>, AppError>;
    async fn create_owner(&self, owner: &ClassTicketOwner) -> Result<ClassTicketOwner, AppError>;
    async fn find_owner(&self, member_id: &str, class_ticket_id: &str) -> Result<Option<ClassTicketOwner>, AppError>;
    async fn update_quantity(&self, id: &str, quantity: i32) -> Result<ClassTicketOwner, AppError>;
    async fn list_owners_by_member(&self, member_id: &str) -> Result<Vec<ClassTicketOwner>, AppError>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Counted conditional insert: writes the `RESERVED` row only while the
    /// class holds fewer than `max_member` reserved rows, in one statement,
    /// so concurrent attempts near the cap cannot both land. Errors with
    /// `CapacityExceeded` when the condition fails.
    async fn create_reserved(&self, reservation: &Reservation, max_member: i32) -> Result<Reservation, AppError>;
    async fn create_waiting(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError>;
    async fn list_by_class(&self, class_id: &str) -> Result<Vec<Reservation>, AppError>;
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Reservation>, AppError>;
    async fn count_by_status(&self, class_id: &str, status: &str) -> Result<i64, AppError>;
    async fn cancel(&self, id: &str, canceled_at: DateTime<Utc>) -> Result<Reservation, AppError>;
    /// FIFO promotion: flips the earliest-`reserved_at` WAITING row to
    /// RESERVED, provided capacity allows. Returns the promoted row, if any.
    async fn promote_earliest_waiting(&self, class_id: &str, max_member: i32) -> Result<Option<Reservation>, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, AppError>;
    async fn list_by_class(&self, class_id: &str) -> Result<Vec<Review>, AppError>;
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Review>, AppError>;
    async fn update(&self, review: &Review) -> Result<Review, AppError>;
    /// Mean rating across every review of the instructor's classes, or
    /// None when no review exists yet.
    async fn average_rating_for_instructor(&self, instructor_id: &str) -> Result<Option<f64>, AppError>;
}

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn create(&self, membership: &Membership) -> Result<Membership, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Membership>, AppError>;
    async fn list_by_center(&self, center_id: &str) -> Result<Vec<Membership>, AppError>;
    async fn create_owner(&self, owner: &MembershipOwner) -> Result<MembershipOwner, AppError>;
    async fn find_owner(&self, id: &str) -> Result<Option<MembershipOwner>, AppError>;
    async fn list_owners_by_member(&self, member_id: &str) -> Result<Vec<MembershipOwner>, AppError>;
    async fn update_owner(&self, owner: &MembershipOwner) -> Result<MembershipOwner, AppError>;
}
