//! # Campus Rooms
//!
//! Data access for the campus room-booking application: reservations, the
//! users who make them, and the classrooms they book.
//!
//! ## Architecture
//!
//! - **domain**: Entities, status/role enums and repository traits
//! - **application**: Report composition over the repositories
//! - **infrastructure**: SeaORM entities, migrations and repository implementations
//! - **shared**: Error and pagination types
//! - **app**: Connection bootstrap and logging setup
//!
//! ```ignore
//! let handle = AppHandle::start(AppOptions::default()).await?;
//! let approved = handle
//!     .repos
//!     .reservations()
//!     .find_by_status(ReservationStatus::Approved)
//!     .await?;
//! ```

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use app::{init_tracing, AppHandle, AppOptions};
pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};
