//! Report data transfer objects
//!
//! Serialized in camelCase, the shape the admin reports page reads.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::domain::{Reservation, UserRole};

// ── Statistics ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsersByRole {
    pub admin_count: u64,
    pub professor_count: u64,
    pub student_count: u64,
    /// Users counted in the total but in none of the roles above
    pub other_count: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    pub total_reservations: u64,
    pub approved_reservations: u64,
    pub pending_reservations: u64,
    pub rejected_reservations: u64,
    pub cancelled_reservations: u64,
    /// Approved reservations made by professors
    pub professor_reservations: u64,
    /// Approved reservations made by students
    pub student_reservations: u64,
    pub total_classrooms: u64,
    pub total_study_rooms: u64,
    pub total_users: u64,
    pub users_by_role: UsersByRole,
}

// ── Rankings ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularRoom {
    pub room: String,
    pub count: u64,
    /// Share of all reservations, in percent, one decimal
    pub percentage: f64,
    pub role_data: RoleData,
}

/// Reservations of one room, split by the role of the booking user.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RoleData {
    pub professor: u64,
    pub student: u64,
    pub admin: u64,
    /// Booking user no longer exists
    pub unknown: u64,
}

impl RoleData {
    pub fn add(&mut self, role: Option<UserRole>, count: u64) {
        match role {
            Some(UserRole::Professor) => self.professor += count,
            Some(UserRole::Student) => self.student += count,
            Some(UserRole::Admin) => self.admin += count,
            None => self.unknown += count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUser {
    pub user_id: i64,
    pub user_name: String,
    pub role: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyActivity {
    pub month: u32,
    pub month_name: String,
    pub admin_count: u64,
    pub professor_count: u64,
    pub student_count: u64,
    pub total: u64,
}

// ── Reservations ───────────────────────────────────────────────

/// Flat, serializable view of a reservation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummary {
    pub id: String,
    pub user_id: i64,
    pub classroom_id: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub purpose: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationSummary {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            classroom_id: r.classroom_id,
            date: r.date,
            start_time: r.start_time,
            end_time: r.end_time,
            purpose: r.purpose,
            status: r.status.as_str().to_string(),
            created_at: r.created_at,
        }
    }
}

// ── Full report ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationReport {
    pub statistics: ReportStatistics,
    pub popular_rooms: Vec<PopularRoom>,
    pub active_users: Vec<ActiveUser>,
    pub monthly_activity: Vec<MonthlyActivity>,
    pub recent_reservations: Vec<ReservationSummary>,
}
