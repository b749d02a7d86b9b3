//! Reservation domain entity

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::user::UserRole;
use crate::shared::DomainError;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationStatus {
    /// Submitted, waiting for an administrator
    Pending,
    /// Room is booked
    Approved,
    /// Refused by an administrator
    Rejected,
    /// Withdrawn by the requester or the system
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 4] = [
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELLED" | "CANCELED" => Ok(Self::Cancelled),
            other => Err(DomainError::Validation(format!(
                "unknown reservation status: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booking of a (possibly not yet assigned) room by a user on one day
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique reservation ID (UUID text)
    pub id: String,
    /// Requesting user
    pub user_id: i64,
    /// Assigned classroom, if any
    pub classroom_id: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub purpose: String,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        user_id: i64,
        classroom_id: Option<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            classroom_id,
            date,
            start_time,
            end_time,
            purpose: purpose.into(),
            status: ReservationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn approve(&mut self) {
        self.status = ReservationStatus::Approved;
    }

    pub fn reject(&mut self) {
        self.status = ReservationStatus::Rejected;
    }

    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }

    /// Approved and not in the past relative to `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == ReservationStatus::Approved && self.date >= today
    }
}

/// Reservation count for one room number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomUsage {
    pub room_number: String,
    pub count: u64,
}

/// Reservation count for one room number and the role of the booking user.
/// `role` is `None` when the user row is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomRoleCount {
    pub room_number: String,
    pub role: Option<UserRole>,
    pub count: u64,
}

/// Reservation count for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActivity {
    pub user_id: i64,
    pub count: u64,
}

/// Reservation count for one calendar month (1 = January)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: u32,
    pub count: u64,
}

// ── Tests ──────────────────────────────────────────────────────
