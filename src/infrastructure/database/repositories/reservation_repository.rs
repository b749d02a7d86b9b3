//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use log::debug;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

use super::sea_orm_repository::{MappedEntity, SeaOrmRepository};
use super::user_repository::role_to_entity;
use crate::domain::classroom::Classroom;
use crate::domain::reservation::{
    ClassroomRoleCount, ClassroomUsage, MonthlyCount, Reservation, ReservationRepository, ReservationStatus,
    UserActivity,
};
use crate::domain::user::{User, UserRole};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{classroom, reservation, user};
use crate::shared::PageRequest;

pub type SeaOrmReservationRepository = SeaOrmRepository<reservation::Entity>;

// ── Conversion helpers ──────────────────────────────────────────

fn status_to_entity(status: ReservationStatus) -> reservation::ReservationStatus {
    match status {
        ReservationStatus::Pending => reservation::ReservationStatus::Pending,
        ReservationStatus::Approved => reservation::ReservationStatus::Approved,
        ReservationStatus::Rejected => reservation::ReservationStatus::Rejected,
        ReservationStatus::Cancelled => reservation::ReservationStatus::Cancelled,
    }
}

fn entity_status_to_domain(status: reservation::ReservationStatus) -> ReservationStatus {
    match status {
        reservation::ReservationStatus::Pending => ReservationStatus::Pending,
        reservation::ReservationStatus::Approved => ReservationStatus::Approved,
        reservation::ReservationStatus::Rejected => ReservationStatus::Rejected,
        reservation::ReservationStatus::Cancelled => ReservationStatus::Cancelled,
    }
}

fn statuses_to_entity(statuses: &[ReservationStatus]) -> Vec<reservation::ReservationStatus> {
    statuses.iter().copied().map(status_to_entity).collect()
}

impl MappedEntity for reservation::Entity {
    type Domain = Reservation;
    type Id = String;

    const NAME: &'static str = "Reservation";

    fn id_of(domain: &Reservation) -> String {
        domain.id.clone()
    }

    fn to_domain(m: reservation::Model) -> Reservation {
        Reservation {
            id: m.id,
            user_id: m.user_id,
            classroom_id: m.classroom_id,
            date: m.date,
            start_time: m.start_time,
            end_time: m.end_time,
            purpose: m.purpose,
            status: entity_status_to_domain(m.status),
            created_at: m.created_at,
        }
    }

    fn to_active_model(r: Reservation) -> reservation::ActiveModel {
        reservation::ActiveModel {
            id: Set(r.id),
            user_id: Set(r.user_id),
            classroom_id: Set(r.classroom_id),
            date: Set(r.date),
            start_time: Set(r.start_time),
            end_time: Set(r.end_time),
            purpose: Set(r.purpose),
            status: Set(status_to_entity(r.status)),
            created_at: Set(r.created_at),
        }
    }
}

impl SeaOrmReservationRepository {
    async fn fetch(&self, query: Select<reservation::Entity>) -> DomainResult<Vec<Reservation>> {
        let models = query.all(&self.db).await?;
        Ok(models
            .into_iter()
            .map(reservation::Entity::to_domain)
            .collect())
    }

    async fn count_upcoming_as_of(&self, user_id: i64, today: NaiveDate) -> DomainResult<u64> {
        let n = reservation::Entity::find()
            .filter(reservation::Column::UserId.eq(user_id))
            .filter(reservation::Column::Date.gte(today))
            .filter(reservation::Column::Status.eq(reservation::ReservationStatus::Approved))
            .count(&self.db)
            .await?;
        Ok(n)
    }
}

/// Calendar month (1-12) of `reservations.date` as a BIGINT.
fn month_of_date(backend: DbBackend) -> SimpleExpr {
    let sql = match backend {
        DbBackend::Sqlite => r#"CAST(strftime('%m', "reservations"."date") AS INTEGER)"#,
        DbBackend::Postgres => r#"CAST(EXTRACT(MONTH FROM "reservations"."date") AS BIGINT)"#,
        DbBackend::MySql => "CAST(MONTH(`reservations`.`date`) AS SIGNED)",
    };
    Expr::cust(sql)
}

fn by_classroom_and_date(classroom_id: &str, date: NaiveDate) -> Select<reservation::Entity> {
    reservation::Entity::find()
        .filter(reservation::Column::ClassroomId.eq(classroom_id))
        .filter(reservation::Column::Date.eq(date))
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn find_by_status(&self, status: ReservationStatus) -> DomainResult<Vec<Reservation>> {
        self.fetch(
            reservation::Entity::find()
                .filter(reservation::Column::Status.eq(status_to_entity(status))),
        )
        .await
    }

    async fn count_by_status(&self, status: ReservationStatus) -> DomainResult<u64> {
        let n = reservation::Entity::find()
            .filter(reservation::Column::Status.eq(status_to_entity(status)))
            .count(&self.db)
            .await?;
        Ok(n)
    }

    async fn find_by_status_in(
        &self,
        statuses: &[ReservationStatus],
    ) -> DomainResult<Vec<Reservation>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            reservation::Entity::find()
                .filter(reservation::Column::Status.is_in(statuses_to_entity(statuses))),
        )
        .await
    }

    async fn find_by_classroom(&self, classroom: &Classroom) -> DomainResult<Vec<Reservation>> {
        self.fetch(
            reservation::Entity::find()
                .filter(reservation::Column::ClassroomId.eq(classroom.id.as_str())),
        )
        .await
    }

    async fn find_by_classroom_and_date(
        &self,
        classroom: &Classroom,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        self.fetch(by_classroom_and_date(&classroom.id, date)).await
    }

    async fn find_by_classroom_and_date_and_status_in(
        &self,
        classroom: &Classroom,
        date: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> DomainResult<Vec<Reservation>> {
        self.find_by_classroom_id_and_date_and_status_in(&classroom.id, date, statuses)
            .await
    }

    async fn find_by_classroom_id_and_date_and_status_in(
        &self,
        classroom_id: &str,
        date: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> DomainResult<Vec<Reservation>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            by_classroom_and_date(classroom_id, date)
                .filter(reservation::Column::Status.is_in(statuses_to_entity(statuses))),
        )
        .await
    }

    async fn find_by_user(&self, user: &User) -> DomainResult<Vec<Reservation>> {
        self.find_by_user_id(user.id).await
    }

    async fn find_by_user_id(&self, user_id: i64) -> DomainResult<Vec<Reservation>> {
        self.fetch(reservation::Entity::find().filter(reservation::Column::UserId.eq(user_id)))
            .await
    }

    async fn count_by_user_id(&self, user_id: i64) -> DomainResult<u64> {
        let n = reservation::Entity::find()
            .filter(reservation::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;
        Ok(n)
    }

    async fn count_by_user_id_and_status(
        &self,
        user_id: i64,
        status: ReservationStatus,
    ) -> DomainResult<u64> {
        let n = reservation::Entity::find()
            .filter(reservation::Column::UserId.eq(user_id))
            .filter(reservation::Column::Status.eq(status_to_entity(status)))
            .count(&self.db)
            .await?;
        Ok(n)
    }

    async fn count_upcoming_by_user_id(&self, user_id: i64) -> DomainResult<u64> {
        self.count_upcoming_as_of(user_id, Local::now().date_naive())
            .await
    }

    async fn find_by_user_id_and_date_between_and_status(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        status: ReservationStatus,
    ) -> DomainResult<Vec<Reservation>> {
        self.fetch(
            reservation::Entity::find()
                .filter(reservation::Column::UserId.eq(user_id))
                .filter(reservation::Column::Date.between(start, end))
                .filter(reservation::Column::Status.eq(status_to_entity(status))),
        )
        .await
    }

    async fn find_by_user_and_date_between_and_status_in(
        &self,
        user: &User,
        start: NaiveDate,
        end: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> DomainResult<Vec<Reservation>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            reservation::Entity::find()
                .filter(reservation::Column::UserId.eq(user.id))
                .filter(reservation::Column::Date.between(start, end))
                .filter(reservation::Column::Status.is_in(statuses_to_entity(statuses)))
                .order_by_asc(reservation::Column::Date)
                .order_by_asc(reservation::Column::StartTime),
        )
        .await
    }

    async fn find_by_date_and_status(
        &self,
        date: NaiveDate,
        status: ReservationStatus,
    ) -> DomainResult<Vec<Reservation>> {
        self.fetch(
            reservation::Entity::find()
                .filter(reservation::Column::Date.eq(date))
                .filter(reservation::Column::Status.eq(status_to_entity(status))),
        )
        .await
    }

    async fn find_by_date_and_status_not(
        &self,
        date: NaiveDate,
        excluded: ReservationStatus,
    ) -> DomainResult<Vec<Reservation>> {
        self.fetch(
            reservation::Entity::find()
                .filter(reservation::Column::Date.eq(date))
                .filter(reservation::Column::Status.ne(status_to_entity(excluded))),
        )
        .await
    }

    async fn find_recent_by_status(
        &self,
        status: ReservationStatus,
        page: PageRequest,
    ) -> DomainResult<Vec<Reservation>> {
        self.fetch(
            reservation::Entity::find()
                .filter(reservation::Column::Status.eq(status_to_entity(status)))
                .order_by_desc(reservation::Column::CreatedAt)
                .limit(page.limit())
                .offset(page.offset()),
        )
        .await
    }

    async fn find_top10_by_order_by_created_at_desc(&self) -> DomainResult<Vec<Reservation>> {
        self.fetch(
            reservation::Entity::find()
                .order_by_desc(reservation::Column::CreatedAt)
                .limit(10),
        )
        .await
    }

    async fn count_by_user_role_and_status(
        &self,
        role: UserRole,
        status: ReservationStatus,
    ) -> DomainResult<u64> {
        let n = reservation::Entity::find()
            .inner_join(user::Entity)
            .filter(user::Column::Role.eq(role_to_entity(role)))
            .filter(reservation::Column::Status.eq(status_to_entity(status)))
            .count(&self.db)
            .await?;
        Ok(n)
    }

    async fn find_popular_classrooms(
        &self,
        page: PageRequest,
    ) -> DomainResult<Vec<ClassroomUsage>> {
        debug!("Ranking classrooms by reservation count ({:?})", page);

        let rows: Vec<(String, i64)> = reservation::Entity::find()
            .select_only()
            .column(classroom::Column::RoomNumber)
            .column_as(reservation::Column::Id.count(), "count")
            .inner_join(classroom::Entity)
            .group_by(classroom::Column::RoomNumber)
            .order_by_desc(reservation::Column::Id.count())
            .order_by_asc(classroom::Column::RoomNumber)
            .limit(page.limit())
            .offset(page.offset())
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(room_number, count)| ClassroomUsage {
                room_number,
                count: count.max(0) as u64,
            })
            .collect())
    }

    async fn count_by_classroom_and_user_role(&self) -> DomainResult<Vec<ClassroomRoleCount>> {
        // Left join so reservations of deleted users still count, with no role.
        let rows: Vec<(String, Option<String>, i64)> = reservation::Entity::find()
            .select_only()
            .column(classroom::Column::RoomNumber)
            .column(user::Column::Role)
            .column_as(reservation::Column::Id.count(), "count")
            .inner_join(classroom::Entity)
            .left_join(user::Entity)
            .group_by(classroom::Column::RoomNumber)
            .group_by(user::Column::Role)
            .order_by_asc(classroom::Column::RoomNumber)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(room_number, role, count)| ClassroomRoleCount {
                room_number,
                role: role.and_then(|r| r.parse::<UserRole>().ok()),
                count: count.max(0) as u64,
            })
            .collect())
    }

    async fn find_most_active_users(&self, page: PageRequest) -> DomainResult<Vec<UserActivity>> {
        debug!("Ranking users by reservation count ({:?})", page);

        let rows: Vec<(i64, i64)> = reservation::Entity::find()
            .select_only()
            .column(reservation::Column::UserId)
            .column_as(reservation::Column::Id.count(), "count")
            .group_by(reservation::Column::UserId)
            .order_by_desc(reservation::Column::Id.count())
            .order_by_asc(reservation::Column::UserId)
            .limit(page.limit())
            .offset(page.offset())
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, count)| UserActivity {
                user_id,
                count: count.max(0) as u64,
            })
            .collect())
    }

    async fn count_reservations_by_month_and_role(
        &self,
        role: UserRole,
    ) -> DomainResult<Vec<MonthlyCount>> {
        let month = month_of_date(self.db.get_database_backend());

        let rows: Vec<(i64, i64)> = reservation::Entity::find()
            .select_only()
            .column_as(month.clone(), "month")
            .column_as(reservation::Column::Id.count(), "count")
            .inner_join(user::Entity)
            .filter(user::Column::Role.eq(role_to_entity(role)))
            .group_by(month.clone())
            .order_by_asc(month)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(month, count)| {
                Some(MonthlyCount {
                    month: u32::try_from(month).ok()?,
                    count: count.max(0) as u64,
                })
            })
            .collect())
    }
}
