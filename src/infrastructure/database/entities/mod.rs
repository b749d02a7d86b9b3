//! Database entities module

pub mod classroom;
pub mod reservation;
pub mod user;

pub use classroom::Entity as Classroom;
pub use reservation::Entity as Reservation;
pub use user::Entity as User;
