//! Classroom repository interface

use async_trait::async_trait;

use super::model::{Classroom, RoomType};
use crate::domain::{CrudRepository, DomainResult};

#[async_trait]
pub trait ClassroomRepository: CrudRepository<Classroom, String> {
    async fn find_by_room_number(&self, room_number: &str) -> DomainResult<Option<Classroom>>;

    async fn count_by_room_type(&self, room_type: RoomType) -> DomainResult<u64>;
}
