use std::sync::Arc;
use crate::domain::ports::{
    UserRepository, CenterRepository, InstructorRepository, ClassRepository,
    TicketRepository, ReservationRepository, ReviewRepository,
    MembershipRepository, Clock,
};
use crate::domain::services::scheduling_service::SchedulingService;
use crate::domain::services::reservation_service::ReservationService;
use crate::domain::services::entitlement_service::EntitlementService;
use crate::domain::services::registration_service::RegistrationService;
use crate::domain::services::review_service::ReviewService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub center_repo: Arc<dyn CenterRepository>,
    pub instructor_repo: Arc<dyn InstructorRepository>,
    pub class_repo: Arc<dyn ClassRepository>,
    pub ticket_repo: Arc<dyn TicketRepository>,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub membership_repo: Arc<dyn MembershipRepository>,
    pub scheduling_service: Arc<SchedulingService>,
    pub reservation_service: Arc<ReservationService>,
    pub entitlement_service: Arc<EntitlementService>,
    pub registration_service: Arc<RegistrationService>,
    pub review_service: Arc<ReviewService>,
    pub clock: Arc<dyn Clock>,
}
