mod common;

use chrono::{Duration, TimeZone, Utc};
use common::TestApp;
use fiton_backend::domain::models::reservation::{STATUS_CANCELED, STATUS_RESERVED, STATUS_WAITING};
use fiton_backend::error::AppError;

#[tokio::test]
async fn test_reserve_rejected_before_window_opens() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let member = app.seed_member("alice").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 5).await;

    // Window opens June 3rd 10:00; one second earlier is still closed.
    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 3, 9, 59, 59).unwrap());
    let err = app.state.reservation_service.reserve(&member.id, &class.id).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);

    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap());
    let reservation = app.state.reservation_service.reserve(&member.id, &class.id).await.unwrap();
    assert_eq!(reservation.status, STATUS_RESERVED);
    assert!(reservation.canceled_at.is_none());
}

#[tokio::test]
async fn test_capacity_limit_rejects_overbooking() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let alice = app.seed_member("alice").await;
    let bob = app.seed_member("bob").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 1).await;

    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap());
    let first = app.state.reservation_service.reserve(&alice.id, &class.id).await.unwrap();

    let err = app.state.reservation_service.reserve(&bob.id, &class.id).await.unwrap_err();
    assert!(matches!(err, AppError::CapacityExceeded(_)), "got {:?}", err);

    // The first booking is untouched.
    let kept = app.state.reservation_repo.find_by_id(&first.id).await.unwrap().unwrap();
    assert_eq!(kept.status, STATUS_RESERVED);
    assert_eq!(app.state.reservation_service.count_reserved(&class.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_cancel_frees_slot_and_promotes_fifo() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let alice = app.seed_member("alice").await;
    let bob = app.seed_member("bob").await;
    let carol = app.seed_member("carol").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 1).await;

    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap());
    let reserved = app.state.reservation_service.reserve(&alice.id, &class.id).await.unwrap();

    // Bob joins the waitlist before Carol.
    let bob_waiting = app.state.reservation_service.join_waitlist(&bob.id, &class.id).await.unwrap();
    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 4, 0, 5, 0).unwrap());
    let carol_waiting = app.state.reservation_service.join_waitlist(&carol.id, &class.id).await.unwrap();
    assert_eq!(bob_waiting.status, STATUS_WAITING);
    assert_eq!(carol_waiting.status, STATUS_WAITING);

    let canceled = app.state.reservation_service.cancel(&reserved.id).await.unwrap();
    assert_eq!(canceled.status, STATUS_CANCELED);
    assert!(canceled.canceled_at.is_some());

    // Earliest waiting reservation wins the freed slot.
    let bob_row = app.state.reservation_repo.find_by_id(&bob_waiting.id).await.unwrap().unwrap();
    let carol_row = app.state.reservation_repo.find_by_id(&carol_waiting.id).await.unwrap().unwrap();
    assert_eq!(bob_row.status, STATUS_RESERVED);
    assert_eq!(carol_row.status, STATUS_WAITING);

    assert_eq!(app.state.reservation_service.count_reserved(&class.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_cancel_rejected_after_cutoff() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let member = app.seed_member("alice").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 5).await;

    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap());
    let reservation = app.state.reservation_service.reserve(&member.id, &class.id).await.unwrap();

    // Cutoff is June 9th 10:00 (24h before start).
    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 9, 10, 0, 0).unwrap());
    let err = app.state.reservation_service.cancel(&reservation.id).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);

    let kept = app.state.reservation_repo.find_by_id(&reservation.id).await.unwrap().unwrap();
    assert_eq!(kept.status, STATUS_RESERVED);
}

#[tokio::test]
async fn test_waitlist_cancel_allowed_past_cutoff() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let alice = app.seed_member("alice").await;
    let bob = app.seed_member("bob").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 1).await;

    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap());
    app.state.reservation_service.reserve(&alice.id, &class.id).await.unwrap();
    let waiting = app.state.reservation_service.join_waitlist(&bob.id, &class.id).await.unwrap();

    // Withdrawal from the waitlist is not bound by the cutoff.
    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap());
    let canceled = app.state.reservation_service.cancel(&waiting.id).await.unwrap();
    assert_eq!(canceled.status, STATUS_CANCELED);
}

#[tokio::test]
async fn test_cancel_is_terminal() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let member = app.seed_member("alice").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 5).await;

    app.clock.set(Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap());
    let reservation = app.state.reservation_service.reserve(&member.id, &class.id).await.unwrap();
    app.state.reservation_service.cancel(&reservation.id).await.unwrap();

    let err = app.state.reservation_service.cancel(&reservation.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_promote_waiting_fills_all_free_slots() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 2).await;

    let base = Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap();
    for (i, name) in ["dora", "eve", "fred"].iter().enumerate() {
        app.clock.set(base + Duration::minutes(i as i64));
        let member = app.seed_member(name).await;
        app.state.reservation_service.join_waitlist(&member.id, &class.id).await.unwrap();
    }

    let promoted = app.state.reservation_service.promote_waiting(&class.id).await.unwrap();
    assert_eq!(promoted.len(), 2);

    assert_eq!(app.state.reservation_service.count_reserved(&class.id).await.unwrap(), 2);
    let still_waiting = app.state.reservation_repo.count_by_status(&class.id, STATUS_WAITING).await.unwrap();
    assert_eq!(still_waiting, 1);
}
