//! Classroom aggregate

pub mod model;
pub mod repository;

pub use model::{Classroom, RoomType};
pub use repository::ClassroomRepository;
