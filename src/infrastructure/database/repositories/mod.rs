//! Database repository implementations
//!
//! Generic SeaORM CRUD, per-aggregate queries, and the unified RepositoryProvider.

pub mod classroom_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod sea_orm_repository;
pub mod user_repository;

pub use classroom_repository::SeaOrmClassroomRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use reservation_repository::SeaOrmReservationRepository;
pub use sea_orm_repository::{MappedEntity, SeaOrmRepository};
pub use user_repository::SeaOrmUserRepository;
