use std::sync::Arc;

use crate::application::dtos::{
    CalendarMonthDto, DashboardStatsDto, StreakDto, StreakPreviewDto, TodayDto,
};
use habitflow_domain::calendar::normalize_or_err;
use habitflow_domain::habit::HabitRepository;
use habitflow_domain::shared::{DomainError, HabitId, UserId};
use habitflow_domain::{Clock, DateInput};

mod calendar;
mod stats;
mod streak;
mod today;

pub use calendar::day_status;

/// Read-side views over a user's habits that depend on "today".
pub struct HabitProgressQueries {
    habit_repo: Arc<dyn HabitRepository>,
    clock: Arc<dyn Clock>,
}

impl HabitProgressQueries {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { habit_repo, clock }
    }

    /// Current, longest and total figures for one habit
    pub async fn get_streak(&self, habit_id: &str) -> Result<StreakDto, DomainError> {
        let id = HabitId::parse(habit_id)?;
        let habit = self
            .habit_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

        Ok(streak::streak_stats(&habit, self.clock.today()))
    }

    /// Streak that setting `date` to `completed` would produce. Nothing is saved.
    pub async fn preview_streak(
        &self,
        habit_id: &str,
        date: DateInput,
        completed: bool,
    ) -> Result<StreakPreviewDto, DomainError> {
        let day = normalize_or_err(date)?;
        let id = HabitId::parse(habit_id)?;
        let habit = self
            .habit_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

        let today = self.clock.today();
        let current_streak = habit.completions().preview(day, completed, today)?;

        Ok(StreakPreviewDto {
            habit_id: habit.id().to_string(),
            date: day.to_string(),
            completed,
            current_streak,
        })
    }

    /// Habits scheduled today and whether each is done
    pub async fn get_today(&self, user_id: &str) -> Result<TodayDto, DomainError> {
        let id = UserId::parse(user_id)?;
        let habits = self.habit_repo.find_by_user(&id).await?;
        Ok(today::due_today(&habits, self.clock.today()))
    }

    /// Day-by-day completion status for a month
    pub async fn get_calendar(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<CalendarMonthDto, DomainError> {
        let id = UserId::parse(user_id)?;
        let habits = self.habit_repo.find_by_user(&id).await?;
        calendar::month(&habits, year, month, self.clock.today())
    }

    pub async fn get_stats(&self, user_id: &str) -> Result<DashboardStatsDto, DomainError> {
        let id = UserId::parse(user_id)?;
        let habits = self.habit_repo.find_by_user(&id).await?;
        Ok(stats::dashboard(&habits, self.clock.today()))
    }
}
