use fiton_backend::{
    config::Config,
    domain::models::{
        center::Center,
        class::{Class, NewClassParams},
        instructor::Instructor,
        user::{CenterOwner, Member, User, ROLE_DIRECTOR, ROLE_INSTRUCTOR, ROLE_MEMBER},
    },
    domain::ports::Clock,
    domain::services::{
        entitlement_service::EntitlementService,
        registration_service::RegistrationService,
        reservation_service::ReservationService,
        review_service::ReviewService,
        scheduling_service::SchedulingService,
    },
    infra::repositories::{
        sqlite_center_repo::SqliteCenterRepo,
        sqlite_class_repo::SqliteClassRepo,
        sqlite_instructor_repo::SqliteInstructorRepo,
        sqlite_membership_repo::SqliteMembershipRepo,
        sqlite_reservation_repo::SqliteReservationRepo,
        sqlite_review_repo::SqliteReviewRepo,
        sqlite_ticket_repo::SqliteTicketRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use chrono::{DateTime, TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// Controllable clock so tests pin "now" instead of racing the wall clock.
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

#[allow(dead_code)]
impl TestClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub clock: Arc<TestClock>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        // A date far from the wall clock makes it obvious when something
        // reads system time instead of the injected clock.
        Self::with_now(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()).await
    }

    pub async fn with_now(now: DateTime<Utc>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            max_connections: 5,
            log_dir: "./logs".to_string(),
        };

        let clock = Arc::new(TestClock::new(now));
        let clock_dyn: Arc<dyn Clock> = clock.clone();

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let center_repo = Arc::new(SqliteCenterRepo::new(pool.clone()));
        let instructor_repo = Arc::new(SqliteInstructorRepo::new(pool.clone()));
        let class_repo = Arc::new(SqliteClassRepo::new(pool.clone()));
        let ticket_repo = Arc::new(SqliteTicketRepo::new(pool.clone()));
        let reservation_repo = Arc::new(SqliteReservationRepo::new(pool.clone()));
        let review_repo = Arc::new(SqliteReviewRepo::new(pool.clone()));
        let membership_repo = Arc::new(SqliteMembershipRepo::new(pool.clone()));

        let state = Arc::new(AppState {
            config,
            scheduling_service: Arc::new(SchedulingService::new(class_repo.clone(), instructor_repo.clone())),
            reservation_service: Arc::new(ReservationService::new(reservation_repo.clone(), class_repo.clone(), clock_dyn.clone())),
            entitlement_service: Arc::new(EntitlementService::new(membership_repo.clone(), clock_dyn.clone())),
            registration_service: Arc::new(RegistrationService::new(instructor_repo.clone(), center_repo.clone())),
            review_service: Arc::new(ReviewService::new(review_repo.clone(), class_repo.clone(), instructor_repo.clone())),
            user_repo,
            center_repo,
            instructor_repo,
            class_repo,
            ticket_repo,
            reservation_repo,
            review_repo,
            membership_repo,
            clock: clock_dyn,
        });

        Self {
            pool,
            db_filename,
            state,
            clock,
        }
    }

    pub async fn seed_member(&self, username: &str) -> Member {
        let user = User::new(username.to_string(), username.to_string(), ROLE_MEMBER);
        let user = self.state.user_repo.create(&user).await.unwrap();
        self.state.user_repo.create_member(&Member::new(user.id)).await.unwrap()
    }

    pub async fn seed_center(&self, name: &str) -> Center {
        let user = User::new(format!("{}-owner", name), "Owner".to_string(), ROLE_DIRECTOR);
        let user = self.state.user_repo.create(&user).await.unwrap();
        let owner = self.state.user_repo.create_center_owner(&CenterOwner::new(user.id)).await.unwrap();
        self.state.center_repo
            .create(&Center::new(name.to_string(), "Seoul".to_string(), owner.id))
            .await
            .unwrap()
    }

    pub async fn seed_instructor(&self, username: &str, register_at: Option<&str>) -> Instructor {
        let user = User::new(username.to_string(), username.to_string(), ROLE_INSTRUCTOR);
        let user = self.state.user_repo.create(&user).await.unwrap();
        let instructor = self.state.instructor_repo
            .create(&Instructor::new(user.id, "Pilates".to_string()))
            .await
            .unwrap();

        if let Some(center_id) = register_at {
            self.state.instructor_repo
                .register_at_center(&instructor.id, center_id)
                .await
                .unwrap();
        }
        instructor
    }

    /// Finalizes a class with derived windows, starting at `start_class`.
    pub async fn seed_class(&self, center_id: &str, instructor_id: &str, start_class: DateTime<Utc>, max_member: i32) -> Class {
        self.state.scheduling_service
            .finalize_class(NewClassParams {
                name: "Morning Pilates".to_string(),
                center_id: center_id.to_string(),
                instructor_id: instructor_id.to_string(),
                class_type: "GROUP".to_string(),
                content: None,
                location: "Studio A".to_string(),
                start_class: Some(start_class),
                reservation_permission: None,
                cancellation_permission: None,
                max_member,
                min_member: 1,
            })
            .await
            .unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
