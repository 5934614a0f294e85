mod common;

use chrono::{TimeZone, Utc};
use common::TestApp;
use fiton_backend::domain::models::reservation::STATUS_RESERVED;
use fiton_backend::error::AppError;
use tokio::task::JoinSet;

#[tokio::test]
async fn test_concurrent_reservations_never_exceed_capacity() {
    let app = TestApp::new().await;
    let center = app.seed_center("race-gym").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 1).await;

    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap());

    let mut members = Vec::new();
    for i in 0..8 {
        members.push(app.seed_member(&format!("racer-{}", i)).await);
    }

    let service = app.state.reservation_service.clone();
    let mut set = JoinSet::new();

    for member in members {
        let service = service.clone();
        let class_id = class.id.clone();
        set.spawn(async move {
            service.reserve(&member.id, &class_id).await
        });
    }

    let mut winners = 0;
    let mut rejected = 0;
    while let Some(result) = set.join_next().await {
        match result.expect("task panicked") {
            Ok(reservation) => {
                assert_eq!(reservation.status, STATUS_RESERVED);
                winners += 1;
            }
            Err(AppError::CapacityExceeded(_)) => rejected += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(winners, 1, "exactly one booking may win the last slot");
    assert_eq!(rejected, 7);
    assert_eq!(app.state.reservation_service.count_reserved(&class.id).await.unwrap(), 1);
}
