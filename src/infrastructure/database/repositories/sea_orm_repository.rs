//! Generic SeaORM implementation of CrudRepository
//!
//! Each aggregate implements [`MappedEntity`] on its SeaORM entity once; the
//! CRUD half of its repository then comes from [`SeaOrmRepository`], and only
//! the aggregate-specific queries are written by hand.

use std::fmt::Display;
use std::marker::PhantomData;

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, Select,
};

use crate::domain::{CrudRepository, DomainError, DomainResult};
use crate::shared::{PageRequest, PaginatedResult};

/// Binds a SeaORM entity to the domain type it stores.
pub trait MappedEntity: EntityTrait {
    type Domain: Send + Sync + 'static;
    type Id: Into<<Self::PrimaryKey as PrimaryKeyTrait>::ValueType>
        + Clone
        + Display
        + Send
        + Sync
        + 'static;

    /// Entity name used in `NotFound` errors
    const NAME: &'static str;

    fn id_of(domain: &Self::Domain) -> Self::Id;

    fn to_domain(model: Self::Model) -> Self::Domain;

    fn to_active_model(domain: Self::Domain) -> Self::ActiveModel;
}

/// Repository over one SeaORM entity, sharing the connection pool.
pub struct SeaOrmRepository<E> {
    pub(crate) db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// `SELECT * FROM e ORDER BY <primary key>`
fn ordered_by_primary_key<E: EntityTrait>() -> Select<E> {
    let mut select = E::find();
    for key in E::PrimaryKey::iter() {
        select = select.order_by_asc(key.into_column());
    }
    select
}

#[async_trait]
impl<E> CrudRepository<E::Domain, E::Id> for SeaOrmRepository<E>
where
    E: MappedEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    async fn save(&self, entity: E::Domain) -> DomainResult<E::Domain> {
        let id = E::id_of(&entity);
        let exists = self.exists_by_id(id.clone()).await?;
        let active = E::to_active_model(entity);

        let model = if exists {
            debug!("Updating {} {}", E::NAME, id);
            active.update(&self.db).await?
        } else {
            debug!("Inserting {} {}", E::NAME, id);
            active.insert(&self.db).await?
        };
        Ok(E::to_domain(model))
    }

    async fn find_by_id(&self, id: E::Id) -> DomainResult<Option<E::Domain>> {
        let model = E::find_by_id(id).one(&self.db).await?;
        Ok(model.map(E::to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<E::Domain>> {
        let models = ordered_by_primary_key::<E>().all(&self.db).await?;
        Ok(models.into_iter().map(E::to_domain).collect())
    }

    async fn find_page(&self, page: PageRequest) -> DomainResult<PaginatedResult<E::Domain>> {
        let paginator = ordered_by_primary_key::<E>().paginate(&self.db, page.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page() as u64).await?;

        Ok(PaginatedResult::new(
            models.into_iter().map(E::to_domain).collect(),
            total,
            page.page(),
            page.size(),
        ))
    }

    async fn exists_by_id(&self, id: E::Id) -> DomainResult<bool> {
        let n = E::find_by_id(id).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(E::find().count(&self.db).await?)
    }

    async fn delete_by_id(&self, id: E::Id) -> DomainResult<()> {
        debug!("Deleting {} {}", E::NAME, id);
        let result = E::delete_by_id(id.clone()).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: E::NAME,
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
