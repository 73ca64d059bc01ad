use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::{CompletionResultDto, HabitDto};
use habitflow_domain::calendar::normalize_or_err;
use habitflow_domain::habit::{Habit, HabitRepository};
use habitflow_domain::shared::{DomainError, HabitId};
use habitflow_domain::{Clock, DateKey};

/// Attempts per completion write before a version conflict is surfaced
pub const MAX_COMPLETION_ATTEMPTS: u32 = 3;

/// Shared read-modify-write loop for every completion command.
///
/// `today` is read once by the caller so that every retry judges "future"
/// and the streak against the same day.
async fn apply_completion<F>(
    habit_repo: &dyn HabitRepository,
    habit_id_raw: &str,
    operation: &str,
    mutate: F,
) -> Result<CompletionResultDto, DomainError>
where
    F: Fn(&mut Habit) -> Result<u32, DomainError> + Send + Sync,
{
    let habit_id = HabitId::parse(habit_id_raw)?;
    let mut attempt = 1;

    loop {
        let mut habit = habit_repo
            .find_by_id(&habit_id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(habit_id_raw.to_string()))?;

        let streak = mutate(&mut habit)?;

        match habit_repo.save_completions(&habit).await {
            Ok(version) => {
                habit.set_version(version);
                info!(
                    "[completion] {} habit_id={} streak={} attempt={}",
                    operation, habit_id, streak, attempt
                );
                return Ok(CompletionResultDto {
                    current_streak: streak,
                    habit: HabitDto::from(&habit),
                });
            }
            Err(DomainError::ConcurrentModification(msg)) if attempt < MAX_COMPLETION_ATTEMPTS => {
                warn!(
                    "[completion] {} habit_id={} lost a version race (attempt {}): {}",
                    operation, habit_id, attempt, msg
                );
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Strict "mark today done"
pub struct CompleteHabitTodayCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    clock: Arc<dyn Clock>,
}

impl CompleteHabitTodayCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { habit_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<CompleteHabitTodayCommand> for CompleteHabitTodayCommandHandler {
    type Result = CompletionResultDto;

    async fn handle(&self, cmd: CompleteHabitTodayCommand) -> Result<Self::Result, DomainError> {
        let today = self.clock.today();
        apply_completion(self.habit_repo.as_ref(), &cmd.habit_id, "complete", |habit| {
            habit.complete_today(today)
        })
        .await
    }
}

/// Strict "undo today"
pub struct UndoHabitTodayCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    clock: Arc<dyn Clock>,
}

impl UndoHabitTodayCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { habit_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<UndoHabitTodayCommand> for UndoHabitTodayCommandHandler {
    type Result = CompletionResultDto;

    async fn handle(&self, cmd: UndoHabitTodayCommand) -> Result<Self::Result, DomainError> {
        let today = self.clock.today();
        apply_completion(self.habit_repo.as_ref(), &cmd.habit_id, "undo", |habit| {
            habit.undo_today(today)
        })
        .await
    }
}

/// Idempotent set for an arbitrary day up to today
pub struct SetHabitCompletionCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    clock: Arc<dyn Clock>,
}

impl SetHabitCompletionCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { habit_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<SetHabitCompletionCommand> for SetHabitCompletionCommandHandler {
    type Result = CompletionResultDto;

    async fn handle(&self, cmd: SetHabitCompletionCommand) -> Result<Self::Result, DomainError> {
        let day: DateKey = normalize_or_err(cmd.date)?;
        let today = self.clock.today();
        debug!(
            "[completion] set habit_id={} day={} completed={}",
            cmd.habit_id, day, cmd.completed
        );

        apply_completion(self.habit_repo.as_ref(), &cmd.habit_id, "set", |habit| {
            habit.set_completion(day, cmd.completed, today)
        })
        .await
    }
}
