//! SeaORM implementation of ClassroomRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use super::sea_orm_repository::{MappedEntity, SeaOrmRepository};
use crate::domain::{Classroom, ClassroomRepository, DomainResult, RoomType};
use crate::infrastructure::database::entities::classroom;

pub type SeaOrmClassroomRepository = SeaOrmRepository<classroom::Entity>;

fn room_type_to_entity(room_type: RoomType) -> classroom::RoomType {
    match room_type {
        RoomType::Classroom => classroom::RoomType::Classroom,
        RoomType::StudyRoom => classroom::RoomType::StudyRoom,
    }
}

fn entity_room_type_to_domain(room_type: classroom::RoomType) -> RoomType {
    match room_type {
        classroom::RoomType::Classroom => RoomType::Classroom,
        classroom::RoomType::StudyRoom => RoomType::StudyRoom,
    }
}

impl MappedEntity for classroom::Entity {
    type Domain = Classroom;
    type Id = String;

    const NAME: &'static str = "Classroom";

    fn id_of(domain: &Classroom) -> String {
        domain.id.clone()
    }

    fn to_domain(m: classroom::Model) -> Classroom {
        Classroom {
            id: m.id,
            room_number: m.room_number,
            capacity: m.capacity,
            room_type: entity_room_type_to_domain(m.room_type),
        }
    }

    fn to_active_model(c: Classroom) -> classroom::ActiveModel {
        classroom::ActiveModel {
            id: Set(c.id),
            room_number: Set(c.room_number),
            capacity: Set(c.capacity),
            room_type: Set(room_type_to_entity(c.room_type)),
        }
    }
}

#[async_trait]
impl ClassroomRepository for SeaOrmClassroomRepository {
    async fn find_by_room_number(&self, room_number: &str) -> DomainResult<Option<Classroom>> {
        let model = classroom::Entity::find()
            .filter(classroom::Column::RoomNumber.eq(room_number))
            .one(&self.db)
            .await?;
        Ok(model.map(classroom::Entity::to_domain))
    }

    async fn count_by_room_type(&self, room_type: RoomType) -> DomainResult<u64> {
        let n = classroom::Entity::find()
            .filter(classroom::Column::RoomType.eq(room_type_to_entity(room_type)))
            .count(&self.db)
            .await?;
        Ok(n)
    }
}
