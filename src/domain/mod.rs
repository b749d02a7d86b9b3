pub mod classroom;
pub mod repositories;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use classroom::{Classroom, ClassroomRepository, RoomType};
pub use repositories::{CrudRepository, DomainResult, RepositoryProvider};
pub use reservation::{
    ClassroomRoleCount, ClassroomUsage, MonthlyCount, Reservation, ReservationRepository,
    ReservationStatus, UserActivity,
};
pub use user::{User, UserRepository, UserRole};

pub use crate::shared::DomainError;
