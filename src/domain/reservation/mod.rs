//! Reservation aggregate
//!
//! Contains the Reservation entity, report row types, and repository interface.

pub mod model;
pub mod repository;

pub use model::{
    ClassroomRoleCount, ClassroomUsage, MonthlyCount, Reservation, ReservationStatus,
    UserActivity,
};
pub use repository::ReservationRepository;
