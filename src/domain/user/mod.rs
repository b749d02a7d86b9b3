//! User aggregate
//!
//! Contains the User entity, its role, and repository interface.

pub mod model;
pub mod repository;

pub use model::{User, UserRole};
pub use repository::UserRepository;
