mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::TestApp;
use fiton_backend::domain::models::membership::{Membership, NewOwnershipParams};
use fiton_backend::error::AppError;

#[tokio::test]
async fn test_end_date_derived_from_duration() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let member = app.seed_member("alice").await;

    let membership = app.state.membership_repo
        .create(&Membership::new(center.id.clone(), "30-day pass".to_string(), 99_000, 30))
        .await
        .unwrap();

    let owner = app.state.entitlement_service
        .finalize_ownership(NewOwnershipParams {
            member_id: member.id.clone(),
            membership_id: membership.id.clone(),
            start_date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            end_date: None,
        })
        .await
        .unwrap();

    assert_eq!(owner.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(owner.end_date, Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
    assert!(owner.is_active);
}

#[tokio::test]
async fn test_explicit_end_date_is_kept() {
    let app = TestApp::new().await;
    let center = app.seed_center("fit-one").await;
    let member = app.seed_member("alice").await;

    let membership = app.state.membership_repo
        .create(&Membership::new(center.id.clone(), "90-day pass".to_string(), 249_000, 90))
        .await
        .unwrap();

    let explicit_end = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
    let owner = app.state.entitlement_service
        .finalize_ownership(NewOwnershipParams {
            member_id: member.id.clone(),
            membership_id: membership.id.clone(),
            start_date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            end_date: Some(explicit_end),
        })
        .await
        .unwrap();

    assert_eq!(owner.end_date, Some(explicit_end));
}

#[tokio::test]
async fn test_start_date_defaults_to_today() {
    let app = TestApp::with_now(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()).await;
    let center = app.seed_center("fit-one").await;
    let member = app.seed_member("alice").await;

    let membership = app.state.membership_repo
        .create(&Membership::new(center.id.clone(), "10-day pass".to_string(), 39_000, 10))
        .await
        .unwrap();

    let owner = app.state.entitlement_service
        .finalize_ownership(NewOwnershipParams {
            member_id: member.id.clone(),
            membership_id: membership.id.clone(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();

    assert_eq!(owner.start_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(owner.end_date, Some(NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()));
}

#[tokio::test]
async fn test_unknown_membership_fails() {
    let app = TestApp::new().await;
    let member = app.seed_member("alice").await;

    let err = app.state.entitlement_service
        .finalize_ownership(NewOwnershipParams {
            member_id: member.id.clone(),
            membership_id: "nope".to_string(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_activity_follows_the_clock() {
    let app = TestApp::with_now(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()).await;
    let center = app.seed_center("fit-one").await;
    let member = app.seed_member("alice").await;

    let membership = app.state.membership_repo
        .create(&Membership::new(center.id.clone(), "30-day pass".to_string(), 99_000, 30))
        .await
        .unwrap();

    let owner = app.state.entitlement_service
        .finalize_ownership(NewOwnershipParams {
            member_id: member.id.clone(),
            membership_id: membership.id.clone(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();

    // End date is Jan 31st; active through that day, expired after.
    assert!(app.state.entitlement_service.active_now(&owner));

    app.clock.set(Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap());
    assert!(app.state.entitlement_service.active_now(&owner));

    app.clock.set(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    assert!(!app.state.entitlement_service.active_now(&owner));

    // The stored flag is a creation-time default; expiry does not rewrite it.
    let stored = app.state.membership_repo.find_owner(&owner.id).await.unwrap().unwrap();
    assert!(stored.is_active);
}
