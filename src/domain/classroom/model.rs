//! Classroom domain entity

use std::str::FromStr;

use crate::shared::DomainError;

/// Kind of bookable room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Classroom,
    StudyRoom,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classroom => "CLASSROOM",
            Self::StudyRoom => "STUDY_ROOM",
        }
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CLASSROOM" => Ok(Self::Classroom),
            "STUDY_ROOM" | "STUDYROOM" => Ok(Self::StudyRoom),
            other => Err(DomainError::Validation(format!("unknown room type: {other}"))),
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bookable room
#[derive(Debug, Clone, PartialEq)]
pub struct Classroom {
    pub id: String,
    /// Human-facing room number, e.g. "B-204". Unique.
    pub room_number: String,
    pub capacity: i32,
    pub room_type: RoomType,
}

impl Classroom {
    pub fn new(
        id: impl Into<String>,
        room_number: impl Into<String>,
        capacity: i32,
        room_type: RoomType,
    ) -> Self {
        Self {
            id: id.into(),
            room_number: room_number.into(),
            capacity,
            room_type,
        }
    }
}
