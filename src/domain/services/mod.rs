pub mod scheduling_service;
pub mod reservation_service;
pub mod entitlement_service;
pub mod registration_service;
pub mod review_service;
