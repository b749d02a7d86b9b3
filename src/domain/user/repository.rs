//! User repository interface

use async_trait::async_trait;

use super::model::{User, UserRole};
use crate::domain::{CrudRepository, DomainResult};

#[async_trait]
pub trait UserRepository: CrudRepository<User, i64> {
    /// Find user by e-mail address
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Number of users holding `role`
    async fn count_by_role(&self, role: UserRole) -> DomainResult<u64>;
}
