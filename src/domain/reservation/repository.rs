//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{
    ClassroomRoleCount, ClassroomUsage, MonthlyCount, Reservation, ReservationStatus,
    UserActivity,
};
use crate::domain::classroom::Classroom;
use crate::domain::user::{User, UserRole};
use crate::domain::{CrudRepository, DomainResult};
use crate::shared::PageRequest;

/// Read and report queries over reservations.
///
/// Every method is a single side-effect-free query. Methods taking a status
/// set return an empty list when the set is empty. Date ranges are inclusive
/// on both ends. Results are unordered unless the method says otherwise.
#[async_trait]
pub trait ReservationRepository: CrudRepository<Reservation, String> {
    // ── By status ──────────────────────────────────────────────

    async fn find_by_status(&self, status: ReservationStatus) -> DomainResult<Vec<Reservation>>;

    async fn count_by_status(&self, status: ReservationStatus) -> DomainResult<u64>;

    async fn find_by_status_in(
        &self,
        statuses: &[ReservationStatus],
    ) -> DomainResult<Vec<Reservation>>;

    // ── By classroom ───────────────────────────────────────────

    async fn find_by_classroom(&self, classroom: &Classroom) -> DomainResult<Vec<Reservation>>;

    async fn find_by_classroom_and_date(
        &self,
        classroom: &Classroom,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>>;

    async fn find_by_classroom_and_date_and_status_in(
        &self,
        classroom: &Classroom,
        date: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> DomainResult<Vec<Reservation>>;

    async fn find_by_classroom_id_and_date_and_status_in(
        &self,
        classroom_id: &str,
        date: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> DomainResult<Vec<Reservation>>;

    // ── By user ────────────────────────────────────────────────

    async fn find_by_user(&self, user: &User) -> DomainResult<Vec<Reservation>>;

    async fn find_by_user_id(&self, user_id: i64) -> DomainResult<Vec<Reservation>>;

    async fn count_by_user_id(&self, user_id: i64) -> DomainResult<u64>;

    async fn count_by_user_id_and_status(
        &self,
        user_id: i64,
        status: ReservationStatus,
    ) -> DomainResult<u64>;

    /// Approved reservations of the user dated today or later (local date)
    async fn count_upcoming_by_user_id(&self, user_id: i64) -> DomainResult<u64>;

    async fn find_by_user_id_and_date_between_and_status(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        status: ReservationStatus,
    ) -> DomainResult<Vec<Reservation>>;

    /// Weekly schedule lookup
    async fn find_by_user_and_date_between_and_status_in(
        &self,
        user: &User,
        start: NaiveDate,
        end: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> DomainResult<Vec<Reservation>>;

    // ── By date ────────────────────────────────────────────────

    async fn find_by_date_and_status(
        &self,
        date: NaiveDate,
        status: ReservationStatus,
    ) -> DomainResult<Vec<Reservation>>;

    async fn find_by_date_and_status_not(
        &self,
        date: NaiveDate,
        excluded: ReservationStatus,
    ) -> DomainResult<Vec<Reservation>>;

    // ── Most recent ────────────────────────────────────────────

    /// Newest first, bounded by `page`
    async fn find_recent_by_status(
        &self,
        status: ReservationStatus,
        page: PageRequest,
    ) -> DomainResult<Vec<Reservation>>;

    /// The ten newest reservations, newest first
    async fn find_top10_by_order_by_created_at_desc(&self) -> DomainResult<Vec<Reservation>>;

    // ── Reports ────────────────────────────────────────────────

    async fn count_by_user_role_and_status(
        &self,
        role: UserRole,
        status: ReservationStatus,
    ) -> DomainResult<u64>;

    /// Rooms ranked by reservation count, highest first
    async fn find_popular_classrooms(&self, page: PageRequest)
        -> DomainResult<Vec<ClassroomUsage>>;

    /// Reservations with a classroom, counted per room number and user role
    async fn count_by_classroom_and_user_role(&self) -> DomainResult<Vec<ClassroomRoleCount>>;

    /// Users ranked by reservation count, highest first
    async fn find_most_active_users(&self, page: PageRequest) -> DomainResult<Vec<UserActivity>>;

    /// Per calendar month, ascending; months without reservations are omitted
    async fn count_reservations_by_month_and_role(
        &self,
        role: UserRole,
    ) -> DomainResult<Vec<MonthlyCount>>;
}
