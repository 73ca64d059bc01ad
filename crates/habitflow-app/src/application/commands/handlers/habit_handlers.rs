use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::HabitDto;
use habitflow_domain::habit::{
    normalize_plan_field, Habit, HabitPlan, HabitRepository, Schedule, MAX_CUE_TIME_LENGTH,
    MAX_PLAN_FIELD_LENGTH,
};
use habitflow_domain::shared::{DomainError, HabitId, UserId};
use habitflow_domain::user::UserRepository;

fn schedule_from(frequency: Option<Vec<i64>>) -> Schedule {
    frequency
        .map(Schedule::from_indices)
        .unwrap_or_else(Schedule::every_day)
}

/// Create habit command handler
pub struct CreateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl CreateHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            habit_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateHabitCommand> for CreateHabitCommandHandler {
    type Result = HabitDto;

    async fn handle(&self, cmd: CreateHabitCommand) -> Result<Self::Result, DomainError> {
        info!("Handling CreateHabitCommand for user: {}", cmd.user_id);

        let user_id = UserId::parse(&cmd.user_id)?;
        if self.user_repo.find_by_id(&user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(cmd.user_id));
        }

        let plan = HabitPlan::new(
            cmd.cue_time.as_deref(),
            cmd.cue_location.as_deref(),
            cmd.stack_after.as_deref(),
            cmd.tiny_version.as_deref(),
        );
        let habit = Habit::new(
            user_id,
            cmd.name,
            cmd.description,
            plan,
            schedule_from(cmd.frequency),
        )?;

        self.habit_repo.save(&habit).await?;

        info!("Habit created: {} ({})", habit.name(), habit.id());

        Ok(HabitDto::from(&habit))
    }
}

/// Update habit command handler
pub struct UpdateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl UpdateHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateHabitCommand> for UpdateHabitCommandHandler {
    type Result = HabitDto;

    async fn handle(&self, cmd: UpdateHabitCommand) -> Result<Self::Result, DomainError> {
        info!("Handling UpdateHabitCommand for habit: {}", cmd.habit_id);

        let habit_id = HabitId::parse(&cmd.habit_id)?;
        let mut habit = self
            .habit_repo
            .find_by_id(&habit_id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(cmd.habit_id.clone()))?;

        habit.update_details(cmd.name, cmd.description)?;

        // Absent plan fields keep their stored value
        let current = habit.plan().clone();
        let pick = |value: Option<String>, max: usize, keep: String| match value {
            Some(v) => normalize_plan_field(Some(&v), max),
            None => keep,
        };
        habit.update_plan(HabitPlan {
            cue_time: pick(cmd.cue_time, MAX_CUE_TIME_LENGTH, current.cue_time),
            cue_location: pick(cmd.cue_location, MAX_PLAN_FIELD_LENGTH, current.cue_location),
            stack_after: pick(cmd.stack_after, MAX_PLAN_FIELD_LENGTH, current.stack_after),
            tiny_version: pick(cmd.tiny_version, MAX_PLAN_FIELD_LENGTH, current.tiny_version),
        });

        if let Some(frequency) = cmd.frequency {
            habit.update_schedule(Schedule::from_indices(frequency));
        }

        self.habit_repo.save(&habit).await?;

        info!("Habit updated: {}", habit.id());

        Ok(HabitDto::from(&habit))
    }
}

/// Delete habit command handler
pub struct DeleteHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl DeleteHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteHabitCommand> for DeleteHabitCommandHandler {
    type Result = DeleteHabitResult;

    async fn handle(&self, cmd: DeleteHabitCommand) -> Result<Self::Result, DomainError> {
        info!("Handling DeleteHabitCommand for habit: {}", cmd.habit_id);

        let habit_id = HabitId::parse(&cmd.habit_id)?;
        if !self.habit_repo.delete(&habit_id).await? {
            return Err(DomainError::HabitNotFound(cmd.habit_id));
        }

        info!("Habit deleted: {}", habit_id);

        Ok(DeleteHabitResult { success: true })
    }
}
