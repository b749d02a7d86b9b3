//! CSV rendering of the admin report
//!
//! One document, one titled section per table. Sections differ in width, so
//! the writer is flexible about record length.

use csv::{Writer, WriterBuilder};

use crate::application::dto::ReservationReport;
use crate::shared::InfraError;

pub fn report_to_csv(report: &ReservationReport) -> Result<Vec<u8>, InfraError> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    write_statistics(&mut wtr, report)?;

    wtr.write_record(["Popular Rooms"])?;
    wtr.write_record([
        "Room",
        "Reservations",
        "Usage %",
        "By Professors",
        "By Students",
        "By Admins",
        "By Unknown",
    ])?;
    for room in &report.popular_rooms {
        wtr.write_record([
            room.room.clone(),
            room.count.to_string(),
            format!("{:.1}", room.percentage),
            room.role_data.professor.to_string(),
            room.role_data.student.to_string(),
            room.role_data.admin.to_string(),
            room.role_data.unknown.to_string(),
        ])?;
    }

    wtr.write_record(["Active Users"])?;
    wtr.write_record(["User Id", "User", "Role", "Reservations"])?;
    for user in &report.active_users {
        wtr.write_record([
            user.user_id.to_string(),
            user.user_name.clone(),
            user.role.clone(),
            user.count.to_string(),
        ])?;
    }

    wtr.write_record(["Monthly Activity"])?;
    wtr.write_record([
        "Month",
        "Professor Reservations",
        "Student Reservations",
        "Admin Reservations",
        "Total",
    ])?;
    for month in &report.monthly_activity {
        wtr.write_record([
            month.month_name.clone(),
            month.professor_count.to_string(),
            month.student_count.to_string(),
            month.admin_count.to_string(),
            month.total.to_string(),
        ])?;
    }

    wtr.write_record(["Recent Reservations"])?;
    wtr.write_record([
        "Id", "User Id", "Classroom", "Date", "Start", "End", "Status", "Purpose",
    ])?;
    for r in &report.recent_reservations {
        wtr.write_record([
            r.id.clone(),
            r.user_id.to_string(),
            r.classroom_id.clone().unwrap_or_default(),
            r.date.to_string(),
            r.start_time.format("%H:%M").to_string(),
            r.end_time.format("%H:%M").to_string(),
            r.status.clone(),
            r.purpose.clone(),
        ])?;
    }

    wtr.into_inner().map_err(|e| InfraError::Io(e.into_error()))
}

fn write_statistics(
    wtr: &mut Writer<Vec<u8>>,
    report: &ReservationReport,
) -> Result<(), InfraError> {
    let stats = &report.statistics;
    let by_role = &stats.users_by_role;
    let metrics = [
        ("Total Reservations", stats.total_reservations),
        ("Approved Reservations", stats.approved_reservations),
        ("Pending Reservations", stats.pending_reservations),
        ("Rejected Reservations", stats.rejected_reservations),
        ("Cancelled Reservations", stats.cancelled_reservations),
        ("Professor Reservations", stats.professor_reservations),
        ("Student Reservations", stats.student_reservations),
        ("Total Classrooms", stats.total_classrooms),
        ("Total Study Rooms", stats.total_study_rooms),
        ("Total Users", stats.total_users),
        ("Admin Users", by_role.admin_count),
        ("Professor Users", by_role.professor_count),
        ("Student Users", by_role.student_count),
        ("Other Users", by_role.other_count),
    ];

    wtr.write_record(["Statistics"])?;
    wtr.write_record(["Metric", "Value"])?;
    for (metric, value) in metrics {
        wtr.write_record([metric.to_string(), value.to_string()])?;
    }
    Ok(())
}
