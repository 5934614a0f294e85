mod common;

use chrono::{TimeZone, Utc};
use common::TestApp;
use fiton_backend::domain::models::ticket::{ClassTicket, ClassTicketOwner};
use fiton_backend::error::AppError;

#[tokio::test]
async fn test_review_updates_instructor_average() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let alice = app.seed_member("alice").await;
    let bob = app.seed_member("bob").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 10).await;

    app.state.review_service.submit(&alice.id, &class.id, 4, "Great pacing".to_string()).await.unwrap();
    app.state.review_service.submit(&bob.id, &class.id, 5, "Best class in town".to_string()).await.unwrap();

    // Mean of 4 and 5 is 4.5, stored as hundredths.
    let updated = app.state.instructor_repo.find_by_id(&instructor.id).await.unwrap().unwrap();
    assert_eq!(updated.average_rating, 450);

    let reviews = app.state.review_repo.list_by_class(&class.id).await.unwrap();
    assert_eq!(reviews.len(), 2);
}

#[tokio::test]
async fn test_review_rating_bounds() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let member = app.seed_member("alice").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 10).await;

    for rating in [0, 6, -1] {
        let err = app.state.review_service
            .submit(&member.id, &class.id, rating, "out of range".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "rating {}: got {:?}", rating, err);
    }

    let reviews = app.state.review_repo.list_by_class(&class.id).await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_review_rejected_for_deleted_class() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let member = app.seed_member("alice").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 10).await;
    app.state.scheduling_service.soft_delete_class(&class.id).await.unwrap();

    let err = app.state.review_service
        .submit(&member.id, &class.id, 5, "too late".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_ticket_ownership_quantities() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let instructor = app.seed_instructor("ines", Some(&center.id)).await;
    let member = app.seed_member("alice").await;

    let start = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();
    let class = app.seed_class(&center.id, &instructor.id, start, 10).await;

    let ticket = app.state.ticket_repo
        .create(&ClassTicket::new(class.id.clone(), 15_000))
        .await
        .unwrap();

    let owned = app.state.ticket_repo
        .create_owner(&ClassTicketOwner::new(member.id.clone(), ticket.id.clone(), 10))
        .await
        .unwrap();
    assert_eq!(owned.quantity, 10);

    let spent = app.state.ticket_repo.update_quantity(&owned.id, 9).await.unwrap();
    assert_eq!(spent.quantity, 9);

    let found = app.state.ticket_repo.find_owner(&member.id, &ticket.id).await.unwrap().unwrap();
    assert_eq!(found.quantity, 9);

    // Tickets survive a class soft delete, still referencing the class.
    app.state.scheduling_service.soft_delete_class(&class.id).await.unwrap();
    let tickets = app.state.ticket_repo.list_by_class(&class.id).await.unwrap();
    assert_eq!(tickets.len(), 1);
}
