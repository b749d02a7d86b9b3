//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{ClassroomRepository, RepositoryProvider, ReservationRepository, UserRepository};

use super::classroom_repository::SeaOrmClassroomRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.classrooms().find_by_room_number("B-204").await?;
/// let approved = repos.reservations().count_by_status(ReservationStatus::Approved).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    reservations: SeaOrmReservationRepository,
    users: SeaOrmUserRepository,
    classrooms: SeaOrmClassroomRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            reservations: SeaOrmReservationRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db.clone()),
            classrooms: SeaOrmClassroomRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn classrooms(&self) -> &dyn ClassroomRepository {
        &self.classrooms
    }
}
