use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use super::sea_orm_repository::{MappedEntity, SeaOrmRepository};
use crate::domain::{DomainResult, User, UserRepository, UserRole};
use crate::infrastructure::database::entities::user;

pub type SeaOrmUserRepository = SeaOrmRepository<user::Entity>;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Professor => UserRole::Professor,
        user::UserRole::Student => UserRole::Student,
    }
}

pub(crate) fn role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Professor => user::UserRole::Professor,
        UserRole::Student => user::UserRole::Student,
    }
}

impl MappedEntity for user::Entity {
    type Domain = User;
    type Id = i64;

    const NAME: &'static str = "User";

    fn id_of(domain: &User) -> i64 {
        domain.id
    }

    fn to_domain(model: user::Model) -> User {
        User {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            role: entity_role_to_domain(model.role),
            created_at: model.created_at,
        }
    }

    fn to_active_model(u: User) -> user::ActiveModel {
        user::ActiveModel {
            id: Set(u.id),
            first_name: Set(u.first_name),
            last_name: Set(u.last_name),
            email: Set(u.email),
            role: Set(role_to_entity(u.role)),
            created_at: Set(u.created_at),
        }
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(user::Entity::to_domain))
    }

    async fn count_by_role(&self, role: UserRole) -> DomainResult<u64> {
        let n = user::Entity::find()
            .filter(user::Column::Role.eq(role_to_entity(role)))
            .count(&self.db)
            .await?;
        Ok(n)
    }
}
