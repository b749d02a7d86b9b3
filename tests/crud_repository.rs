mod common;

use campus_rooms::domain::{
    Classroom, CrudRepository, DomainError, ReservationStatus, RoomType, User, UserRole,
};
use campus_rooms::shared::PageRequest;

use common::*;

#[tokio::test]
async fn save_then_find_returns_the_same_reservation() {
    let app = seeded().await;
    let repos = &app.repos;

    let mut r = reservation(STUDENT, Some("room-a"), day(2026, 3, 2), ReservationStatus::Pending);
    r.created_at = created(5);
    let saved = store(repos, r.clone()).await;
    assert_eq!(saved, r);

    let found = repos.reservations().find_by_id(r.id.clone()).await.unwrap();
    assert_eq!(found, Some(r));
}

#[tokio::test]
async fn save_existing_id_updates_in_place() {
    let app = seeded().await;
    let repos = &app.repos;
    let reservations = repos.reservations();

    let mut r = reservation(STUDENT, Some("room-a"), day(2026, 3, 2), ReservationStatus::Pending);
    r.created_at = created(0);
    let mut r = store(repos, r).await;
    assert_eq!(reservations.count().await.unwrap(), 1);

    r.approve();
    r.purpose = "Exam review".to_string();
    store(repos, r.clone()).await;

    assert_eq!(reservations.count().await.unwrap(), 1);
    let found = reservations.find_by_id(r.id.clone()).await.unwrap().unwrap();
    assert_eq!(found.status, ReservationStatus::Approved);
    assert_eq!(found.purpose, "Exam review");
    assert_eq!(
        reservations
            .count_by_status(ReservationStatus::Pending)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn missing_ids_are_absent() {
    let app = seeded().await;
    let repos = &app.repos;

    assert_eq!(
        repos
            .reservations()
            .find_by_id("no-such-reservation".to_string())
            .await
            .unwrap(),
        None
    );
    assert!(!repos
        .reservations()
        .exists_by_id("no-such-reservation".to_string())
        .await
        .unwrap());
    assert!(repos.users().exists_by_id(STUDENT).await.unwrap());
    assert!(!repos.users().exists_by_id(999).await.unwrap());
}

#[tokio::test]
async fn delete_removes_the_row() {
    let app = seeded().await;
    let repos = &app.repos;
    let reservations = repos.reservations();

    let r = store(
        repos,
        reservation(STUDENT, None, day(2026, 3, 2), ReservationStatus::Cancelled),
    )
    .await;
    reservations.delete_by_id(r.id.clone()).await.unwrap();

    assert!(!reservations.exists_by_id(r.id.clone()).await.unwrap());
    assert_eq!(reservations.count().await.unwrap(), 0);

    let err = reservations.delete_by_id(r.id.clone()).await.unwrap_err();
    match err {
        DomainError::NotFound { entity, value, .. } => {
            assert_eq!(entity, "Reservation");
            assert_eq!(value, r.id);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn find_all_and_pages_follow_primary_key() {
    let app = seeded().await;
    let users = app.repos.users();

    let all: Vec<i64> = users
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(all, vec![ADMIN, PROFESSOR, STUDENT]);

    let first = users.find_page(PageRequest::of(0, 2)).await.unwrap();
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.iter().map(|u| u.id).collect::<Vec<_>>(), vec![ADMIN, PROFESSOR]);

    let second = users.find_page(PageRequest::of(1, 2)).await.unwrap();
    assert_eq!(second.page, 1);
    assert_eq!(second.items.iter().map(|u| u.id).collect::<Vec<_>>(), vec![STUDENT]);

    let past_end = users.find_page(PageRequest::of(5, 2)).await.unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 3);
}

#[tokio::test]
async fn users_by_email_and_role() {
    let app = seeded().await;
    let users = app.repos.users();

    let pat = users.find_by_email("pat@campus.edu").await.unwrap().unwrap();
    assert_eq!(pat.id, PROFESSOR);
    assert_eq!(pat.role, UserRole::Professor);
    assert_eq!(pat.full_name(), "Pat Professor");
    assert_eq!(users.find_by_email("nobody@campus.edu").await.unwrap(), None);

    users
        .save(User::new(43, "Kim", "Lee", "kim@campus.edu", UserRole::Student))
        .await
        .unwrap();
    assert_eq!(users.count_by_role(UserRole::Student).await.unwrap(), 2);
    assert_eq!(users.count_by_role(UserRole::Admin).await.unwrap(), 1);
    assert_eq!(users.count().await.unwrap(), 4);
}

#[tokio::test]
async fn classrooms_by_number_and_type() {
    let app = seeded().await;
    let classrooms = app.repos.classrooms();

    let found = classrooms.find_by_room_number("L-001").await.unwrap();
    assert_eq!(found, Some(room("study-1")));
    assert_eq!(classrooms.find_by_room_number("Z-999").await.unwrap(), None);

    assert_eq!(
        classrooms.count_by_room_type(RoomType::Classroom).await.unwrap(),
        2
    );
    assert_eq!(
        classrooms.count_by_room_type(RoomType::StudyRoom).await.unwrap(),
        1
    );

    let mut resized = room("room-a");
    resized.capacity = 45;
    classrooms.save(resized.clone()).await.unwrap();
    assert_eq!(
        classrooms.find_by_id("room-a".to_string()).await.unwrap(),
        Some(resized)
    );
    assert_eq!(classrooms.count().await.unwrap(), 3);
}

#[tokio::test]
async fn duplicate_room_number_is_a_persistence_error() {
    let app = seeded().await;
    let err = app
        .repos
        .classrooms()
        .save(Classroom::new("room-c", "A-101", 20, RoomType::Classroom))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)), "got {err:?}");
}
