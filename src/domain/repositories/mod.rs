//! Repository traits for the domain layer
//!
//! Contains:
//! - `CrudRepository`: generic create/read/update/delete shared by every aggregate
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use async_trait::async_trait;

use super::classroom::ClassroomRepository;
use super::reservation::ReservationRepository;
use super::user::UserRepository;
use crate::shared::{DomainError, PageRequest, PaginatedResult};

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── CrudRepository ──────────────────────────────────────────────

/// Basic persistence operations over entities of type `T` keyed by `Id`.
#[async_trait]
pub trait CrudRepository<T, Id>: Send + Sync
where
    T: Send + 'static,
    Id: Send + 'static,
{
    /// Insert `entity`, or overwrite the stored row with the same id.
    async fn save(&self, entity: T) -> DomainResult<T>;

    async fn find_by_id(&self, id: Id) -> DomainResult<Option<T>>;

    /// All rows, ordered by primary key
    async fn find_all(&self) -> DomainResult<Vec<T>>;

    /// One page of rows, ordered by primary key
    async fn find_page(&self, page: PageRequest) -> DomainResult<PaginatedResult<T>>;

    async fn exists_by_id(&self, id: Id) -> DomainResult<bool>;

    async fn count(&self) -> DomainResult<u64>;

    /// Fails with `NotFound` when nothing was deleted.
    async fn delete_by_id(&self, id: Id) -> DomainResult<()>;
}

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_id(42).await?;
///     let upcoming = repos.reservations().count_upcoming_by_user_id(42).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn reservations(&self) -> &dyn ReservationRepository;
    fn users(&self) -> &dyn UserRepository;
    fn classrooms(&self) -> &dyn ClassroomRepository;
}
