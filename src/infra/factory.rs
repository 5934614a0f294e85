use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::Clock;
use crate::domain::services::scheduling_service::SchedulingService;
use crate::domain::services::reservation_service::ReservationService;
use crate::domain::services::entitlement_service::EntitlementService;
use crate::domain::services::registration_service::RegistrationService;
use crate::domain::services::review_service::ReviewService;
use crate::infra::clock::SystemClock;
use crate::infra::repositories::{
    postgres_user_repo::PostgresUserRepo, postgres_center_repo::PostgresCenterRepo,
    postgres_instructor_repo::PostgresInstructorRepo, postgres_class_repo::PostgresClassRepo,
    postgres_ticket_repo::PostgresTicketRepo, postgres_reservation_repo::PostgresReservationRepo,
    postgres_review_repo::PostgresReviewRepo, postgres_membership_repo::PostgresMembershipRepo,
    sqlite_user_repo::SqliteUserRepo, sqlite_center_repo::SqliteCenterRepo,
    sqlite_instructor_repo::SqliteInstructorRepo, sqlite_class_repo::SqliteClassRepo,
    sqlite_ticket_repo::SqliteTicketRepo, sqlite_reservation_repo::SqliteReservationRepo,
    sqlite_review_repo::SqliteReviewRepo, sqlite_membership_repo::SqliteMembershipRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let user_repo = Arc::new(PostgresUserRepo::new(pool.clone()));
        let center_repo = Arc::new(PostgresCenterRepo::new(pool.clone()));
        let instructor_repo = Arc::new(PostgresInstructorRepo::new(pool.clone()));
        let class_repo = Arc::new(PostgresClassRepo::new(pool.clone()));
        let ticket_repo = Arc::new(PostgresTicketRepo::new(pool.clone()));
        let reservation_repo = Arc::new(PostgresReservationRepo::new(pool.clone()));
        let review_repo = Arc::new(PostgresReviewRepo::new(pool.clone()));
        let membership_repo = Arc::new(PostgresMembershipRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            scheduling_service: Arc::new(SchedulingService::new(class_repo.clone(), instructor_repo.clone())),
            reservation_service: Arc::new(ReservationService::new(reservation_repo.clone(), class_repo.clone(), clock.clone())),
            entitlement_service: Arc::new(EntitlementService::new(membership_repo.clone(), clock.clone())),
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
            clock,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let center_repo = Arc::new(SqliteCenterRepo::new(pool.clone()));
        let instructor_repo = Arc::new(SqliteInstructorRepo::new(pool.clone()));
        let class_repo = Arc::new(SqliteClassRepo::new(pool.clone()));
        let ticket_repo = Arc::new(SqliteTicketRepo::new(pool.clone()));
        let reservation_repo = Arc::new(SqliteReservationRepo::new(pool.clone()));
        let review_repo = Arc::new(SqliteReviewRepo::new(pool.clone()));
        let membership_repo = Arc::new(SqliteMembershipRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            scheduling_service: Arc::new(SchedulingService::new(class_repo.clone(), instructor_repo.clone())),
            reservation_service: Arc::new(ReservationService::new(reservation_repo.clone(), class_repo.clone(), clock.clone())),
            entitlement_service: Arc::new(EntitlementService::new(membership_repo.clone(), clock.clone())),
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
            clock,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
