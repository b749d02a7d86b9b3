//! Report service: admin statistics and schedule views over reservations

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Month, NaiveDate};
use log::info;

use crate::application::dto::{
    ActiveUser, MonthlyActivity, PopularRoom, ReportStatistics, ReservationReport,
    ReservationSummary, RoleData, UsersByRole,
};
use crate::domain::{
    CrudRepository, DomainError, DomainResult, RepositoryProvider, Reservation,
    ReservationStatus, RoomType, UserRole,
};
use crate::shared::PageRequest;

/// Statuses shown on a weekly schedule
const SCHEDULE_STATUSES: [ReservationStatus; 2] =
    [ReservationStatus::Pending, ReservationStatus::Approved];

/// Service composing repository queries into reports
pub struct ReportService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReportService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Full admin report; `top` bounds the room and user rankings.
    pub async fn build_report(&self, top: u32) -> DomainResult<ReservationReport> {
        let statistics = self.statistics().await?;
        let popular_rooms = self
            .popular_rooms(top, statistics.total_reservations)
            .await?;
        let active_users = self.active_users(top).await?;
        let monthly_activity = self.monthly_activity().await?;
        let recent_reservations = self
            .repos
            .reservations()
            .find_top10_by_order_by_created_at_desc()
            .await?
            .into_iter()
            .map(ReservationSummary::from)
            .collect();

        info!(
            "Report built: {} reservations, {} ranked rooms, {} ranked users",
            statistics.total_reservations,
            popular_rooms.len(),
            active_users.len()
        );

        Ok(ReservationReport {
            statistics,
            popular_rooms,
            active_users,
            monthly_activity,
            recent_reservations,
        })
    }

    pub async fn statistics(&self) -> DomainResult<ReportStatistics> {
        let reservations = self.repos.reservations();
        let users = self.repos.users();
        let classrooms = self.repos.classrooms();

        let total_users = users.count().await?;
        let admin_count = users.count_by_role(UserRole::Admin).await?;
        let professor_count = users.count_by_role(UserRole::Professor).await?;
        let student_count = users.count_by_role(UserRole::Student).await?;

        Ok(ReportStatistics {
            total_reservations: reservations.count().await?,
            approved_reservations: reservations
                .count_by_status(ReservationStatus::Approved)
                .await?,
            pending_reservations: reservations
                .count_by_status(ReservationStatus::Pending)
                .await?,
            rejected_reservations: reservations
                .count_by_status(ReservationStatus::Rejected)
                .await?,
            cancelled_reservations: reservations
                .count_by_status(ReservationStatus::Cancelled)
                .await?,
            professor_reservations: reservations
                .count_by_user_role_and_status(UserRole::Professor, ReservationStatus::Approved)
                .await?,
            student_reservations: reservations
                .count_by_user_role_and_status(UserRole::Student, ReservationStatus::Approved)
                .await?,
            total_classrooms: classrooms.count_by_room_type(RoomType::Classroom).await?,
            total_study_rooms: classrooms.count_by_room_type(RoomType::StudyRoom).await?,
            total_users,
            users_by_role: UsersByRole {
                admin_count,
                professor_count,
                student_count,
                other_count: total_users
                    .saturating_sub(admin_count + professor_count + student_count),
            },
        })
    }

    async fn popular_rooms(&self, top: u32, total: u64) -> DomainResult<Vec<PopularRoom>> {
        let reservations = self.repos.reservations();
        let ranking = reservations
            .find_popular_classrooms(PageRequest::first(top))
            .await?;

        let mut by_room: HashMap<String, RoleData> = HashMap::new();
        for row in reservations.count_by_classroom_and_user_role().await? {
            by_room
                .entry(row.room_number)
                .or_default()
                .add(row.role, row.count);
        }

        Ok(ranking
            .into_iter()
            .map(|usage| PopularRoom {
                percentage: percentage(usage.count, total),
                role_data: by_room.remove(&usage.room_number).unwrap_or_default(),
                room: usage.room_number,
                count: usage.count,
            })
            .collect())
    }

    async fn active_users(&self, top: u32) -> DomainResult<Vec<ActiveUser>> {
        let ranking = self
            .repos
            .reservations()
            .find_most_active_users(PageRequest::first(top))
            .await?;

        let mut result = Vec::with_capacity(ranking.len());
        for activity in ranking {
            let user = self.repos.users().find_by_id(activity.user_id).await?;
            let (user_name, role) = match user {
                Some(u) => (u.full_name(), u.role.as_str().to_string()),
                None => ("Unknown User".to_string(), "UNKNOWN".to_string()),
            };
            result.push(ActiveUser {
                user_id: activity.user_id,
                user_name,
                role,
                count: activity.count,
            });
        }
        Ok(result)
    }

    /// Twelve entries, January first.
    pub async fn monthly_activity(&self) -> DomainResult<Vec<MonthlyActivity>> {
        let mut months: Vec<MonthlyActivity> = (1..=12u32)
            .map(|month| MonthlyActivity {
                month,
                month_name: month_name(month),
                ..MonthlyActivity::default()
            })
            .collect();

        for role in UserRole::ALL {
            let counts = self
                .repos
                .reservations()
                .count_reservations_by_month_and_role(role)
                .await?;

            for monthly in counts {
                let index = (monthly.month as usize).checked_sub(1);
                let Some(entry) = index.and_then(|i| months.get_mut(i)) else {
                    continue;
                };
                match role {
                    UserRole::Admin => entry.admin_count += monthly.count,
                    UserRole::Professor => entry.professor_count += monthly.count,
                    UserRole::Student => entry.student_count += monthly.count,
                }
                entry.total += monthly.count;
            }
        }
        Ok(months)
    }

    /// The user's pending and approved reservations for the seven days
    /// starting at `week_start`, in date and start-time order.
    pub async fn weekly_schedule(
        &self,
        user_id: i64,
        week_start: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        let user = self
            .repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            })?;

        let week_end = week_start
            .checked_add_signed(Duration::days(6))
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "week starting {week_start} runs past the calendar"
                ))
            })?;
        self.repos
            .reservations()
            .find_by_user_and_date_between_and_status_in(
                &user,
                week_start,
                week_end,
                &SCHEDULE_STATUSES,
            )
            .await
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(5, 5), 100.0);
    }

    #[test]
    fn percentage_of_nothing_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
    }
}
