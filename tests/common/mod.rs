//! Shared fixtures: a migrated in-memory database and a few users and rooms.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use campus_rooms::domain::{
    Classroom, CrudRepository, RepositoryProvider, Reservation, ReservationStatus, RoomType,
    User, UserRole,
};
use campus_rooms::{AppHandle, AppOptions, DatabaseConfig};

pub const STUDENT: i64 = 42;
pub const PROFESSOR: i64 = 7;
pub const ADMIN: i64 = 1;

pub async fn setup() -> AppHandle {
    AppHandle::start(AppOptions {
        database: DatabaseConfig::in_memory(),
        auto_migrate: true,
    })
    .await
    .expect("in-memory database")
}

/// Fresh database with three users and three rooms.
pub async fn seeded() -> AppHandle {
    let app = setup().await;
    let repos = app.repos.clone();

    for user in [
        User::new(STUDENT, "Sam", "Student", "sam@campus.edu", UserRole::Student),
        User::new(PROFESSOR, "Pat", "Professor", "pat@campus.edu", UserRole::Professor),
        User::new(ADMIN, "Ada", "Admin", "ada@campus.edu", UserRole::Admin),
    ] {
        repos.users().save(user).await.unwrap();
    }

    for room in rooms() {
        repos.classrooms().save(room).await.unwrap();
    }

    app
}

pub fn rooms() -> [Classroom; 3] {
    [
        Classroom::new("room-a", "A-101", 30, RoomType::Classroom),
        Classroom::new("room-b", "B-204", 60, RoomType::Classroom),
        Classroom::new("study-1", "L-001", 6, RoomType::StudyRoom),
    ]
}

pub fn room(id: &str) -> Classroom {
    rooms()
        .into_iter()
        .find(|c| c.id == id)
        .expect("fixture room")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

/// Fixed creation timestamps, `minutes` after a base instant.
pub fn created(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes)
}

pub fn reservation(
    user_id: i64,
    classroom_id: Option<&str>,
    date: NaiveDate,
    status: ReservationStatus,
) -> Reservation {
    let mut r = Reservation::new(
        user_id,
        classroom_id.map(str::to_string),
        date,
        at(9),
        at(11),
        "Study group",
    );
    r.status = status;
    r
}

pub async fn store(repos: &Arc<dyn RepositoryProvider>, r: Reservation) -> Reservation {
    repos.reservations().save(r).await.unwrap()
}

pub fn ids(rows: &[Reservation]) -> Vec<String> {
    let mut ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
    ids.sort();
    ids
}

pub fn sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}
