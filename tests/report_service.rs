mod common;

use chrono::NaiveDate;

use campus_rooms::application::dto::RoleData;
use campus_rooms::application::report_to_csv;
use campus_rooms::domain::{DomainError, ReservationStatus};

use common::*;

use ReservationStatus::{Approved, Cancelled, Pending, Rejected};

/// Five reservations over three months and three rooms, one unassigned.
async fn populated() -> campus_rooms::AppHandle {
    let app = seeded().await;
    let repos = &app.repos;

    let rows = [
        (STUDENT, Some("room-b"), day(2026, 1, 12), Approved),
        (STUDENT, Some("room-b"), day(2026, 1, 13), Pending),
        (PROFESSOR, Some("room-a"), day(2026, 2, 2), Approved),
        (PROFESSOR, None, day(2026, 2, 3), Rejected),
        (ADMIN, Some("study-1"), day(2026, 3, 2), Cancelled),
    ];
    for (i, (user, room, date, status)) in rows.into_iter().enumerate() {
        let mut r = reservation(user, room, date, status);
        r.created_at = created(i as i64);
        store(repos, r).await;
    }
    app
}

#[tokio::test]
async fn statistics_count_every_bucket() {
    let app = populated().await;
    let stats = app.reports().statistics().await.unwrap();

    assert_eq!(stats.total_reservations, 5);
    assert_eq!(stats.approved_reservations, 2);
    assert_eq!(stats.pending_reservations, 1);
    assert_eq!(stats.rejected_reservations, 1);
    assert_eq!(stats.cancelled_reservations, 1);
    assert_eq!(stats.professor_reservations, 1);
    assert_eq!(stats.student_reservations, 1);
    assert_eq!(stats.total_classrooms, 2);
    assert_eq!(stats.total_study_rooms, 1);
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.users_by_role.admin_count, 1);
    assert_eq!(stats.users_by_role.professor_count, 1);
    assert_eq!(stats.users_by_role.student_count, 1);
    assert_eq!(stats.users_by_role.other_count, 0);
}

#[tokio::test]
async fn report_ranks_rooms_and_users() {
    let app = populated().await;
    let report = app.reports().build_report(2).await.unwrap();

    let rooms: Vec<(&str, u64, f64)> = report
        .popular_rooms
        .iter()
        .map(|r| (r.room.as_str(), r.count, r.percentage))
        .collect();
    assert_eq!(rooms, vec![("B-204", 2, 40.0), ("A-101", 1, 20.0)]);
    assert_eq!(
        report.popular_rooms[0].role_data,
        RoleData {
            student: 2,
            ..RoleData::default()
        }
    );
    assert_eq!(
        report.popular_rooms[1].role_data,
        RoleData {
            professor: 1,
            ..RoleData::default()
        }
    );

    let users: Vec<(i64, &str, &str, u64)> = report
        .active_users
        .iter()
        .map(|u| (u.user_id, u.user_name.as_str(), u.role.as_str(), u.count))
        .collect();
    assert_eq!(
        users,
        vec![
            (PROFESSOR, "Pat Professor", "PROFESSOR", 2),
            (STUDENT, "Sam Student", "STUDENT", 2),
        ]
    );

    assert_eq!(report.recent_reservations.len(), 5);
    assert_eq!(report.recent_reservations[0].status, "CANCELLED");
    assert_eq!(report.recent_reservations[4].status, "APPROVED");
}

#[tokio::test]
async fn monthly_activity_has_twelve_months() {
    let app = populated().await;
    let months = app.reports().monthly_activity().await.unwrap();

    assert_eq!(months.len(), 12);
    assert!(months.iter().enumerate().all(|(i, m)| m.month == i as u32 + 1));

    let jan = &months[0];
    assert_eq!(jan.month_name, "January");
    assert_eq!((jan.student_count, jan.professor_count, jan.admin_count), (2, 0, 0));
    assert_eq!(jan.total, 2);

    let feb = &months[1];
    assert_eq!((feb.student_count, feb.professor_count, feb.admin_count), (0, 2, 0));

    let mar = &months[2];
    assert_eq!(mar.admin_count, 1);
    assert_eq!(mar.total, 1);

    assert!(months[3..].iter().all(|m| m.total == 0));
    assert_eq!(months.iter().map(|m| m.total).sum::<u64>(), 5);
}

#[tokio::test]
async fn empty_database_report() {
    let app = setup().await;
    let report = app.reports().build_report(5).await.unwrap();

    assert_eq!(report.statistics.total_reservations, 0);
    assert!(report.popular_rooms.is_empty());
    assert!(report.active_users.is_empty());
    assert!(report.recent_reservations.is_empty());
    assert_eq!(report.monthly_activity.len(), 12);
}

#[tokio::test]
async fn report_serializes_in_camel_case() {
    let app = populated().await;
    let report = app.reports().build_report(1).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["statistics"]["totalReservations"], 5);
    assert_eq!(json["statistics"]["usersByRole"]["studentCount"], 1);
    assert_eq!(json["popularRooms"][0]["room"], "B-204");
    assert_eq!(json["popularRooms"][0]["roleData"]["student"], 2);
    assert_eq!(json["popularRooms"][0]["roleData"]["unknown"], 0);
    assert_eq!(json["statistics"]["usersByRole"]["otherCount"], 0);
    assert_eq!(json["activeUsers"][0]["userName"], "Pat Professor");
    assert_eq!(json["monthlyActivity"][0]["monthName"], "January");
    assert!(json["recentReservations"][0]["createdAt"].is_string());
}

#[tokio::test]
async fn weekly_schedule_covers_seven_days() {
    let app = seeded().await;
    let repos = &app.repos;

    let monday = store(repos, reservation(STUDENT, Some("room-a"), day(2026, 3, 2), Approved)).await;
    let sunday = store(repos, reservation(STUDENT, Some("room-b"), day(2026, 3, 8), Pending)).await;
    store(repos, reservation(STUDENT, Some("room-a"), day(2026, 3, 5), Rejected)).await;
    store(repos, reservation(STUDENT, Some("room-a"), day(2026, 3, 9), Approved)).await;
    store(repos, reservation(PROFESSOR, Some("room-a"), day(2026, 3, 3), Approved)).await;

    let week: Vec<String> = app
        .reports()
        .weekly_schedule(STUDENT, day(2026, 3, 2))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(week, vec![monday.id, sunday.id]);
}

#[tokio::test]
async fn weekly_schedule_for_unknown_user_is_not_found() {
    let app = seeded().await;
    let err = app
        .reports()
        .weekly_schedule(999, day(2026, 3, 2))
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::NotFound { entity: "User", .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn role_breakdown_sums_to_room_count() {
    let app = populated().await;
    store(
        &app.repos,
        reservation(ADMIN, Some("room-b"), day(2026, 4, 1), Approved),
    )
    .await;
    let report = app.reports().build_report(3).await.unwrap();

    let b204 = &report.popular_rooms[0];
    assert_eq!(b204.room, "B-204");
    assert_eq!(b204.count, 3);
    assert_eq!((b204.role_data.student, b204.role_data.admin), (2, 1));
    for room in &report.popular_rooms {
        let d = &room.role_data;
        assert_eq!(d.professor + d.student + d.admin + d.unknown, room.count);
    }
}

#[tokio::test]
async fn report_exports_as_csv() {
    let app = populated().await;
    let report = app.reports().build_report(2).await.unwrap();
    let text = String::from_utf8(report_to_csv(&report).unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Statistics");
    assert_eq!(lines[1], "Metric,Value");
    assert!(lines.contains(&"Total Reservations,5"));
    assert!(lines.contains(&"Other Users,0"));
    assert!(lines.contains(&"B-204,2,40.0,0,2,0,0"));
    assert!(lines.contains(&"A-101,1,20.0,1,0,0,0"));
    assert!(lines.contains(&"7,Pat Professor,PROFESSOR,2"));
    assert!(lines.contains(&"January,0,2,0,2"));
    assert_eq!(
        lines.iter().filter(|l| l.ends_with(",Study group")).count(),
        5
    );
}

#[tokio::test]
async fn weekly_schedule_past_the_last_date_is_rejected() {
    let app = seeded().await;
    let err = app
        .reports()
        .weekly_schedule(STUDENT, NaiveDate::MAX)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)), "got {err:?}");

    // The last week that still fits is accepted.
    let last_week = NaiveDate::MAX - chrono::Duration::days(6);
    let week = app
        .reports()
        .weekly_schedule(STUDENT, last_week)
        .await
        .unwrap();
    assert!(week.is_empty());
}
