use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::persistence::RepositoryErrorMapper;
use habitflow_domain::habit::{CompletionLedger, Habit, HabitPlan, Schedule};
use habitflow_domain::shared::{DomainError, HabitId, UserId};

#[derive(FromRow)]
pub(super) struct HabitRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub cue_time: String,
    pub cue_location: String,
    pub stack_after: String,
    pub tiny_version: String,
    pub schedule: String,
    pub current_streak: i64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(FromRow)]
pub(super) struct CompletionRow {
    pub habit_id: String,
    pub date_key: String,
}

impl HabitRow {
    /// Rebuild the aggregate. Completion rows that do not read as a day are dropped.
    pub fn into_habit(self, completion_keys: Vec<String>) -> Result<Habit, DomainError> {
        let schedule: Schedule = serde_json::from_str(&self.schedule)
            .map_err(|e| RepositoryErrorMapper::map_json_error(e, "Deserialize habit schedule"))?;

        let ledger = CompletionLedger::from_raw(&completion_keys);

        Ok(Habit::restore(
            HabitId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.name,
            self.description,
            HabitPlan {
                cue_time: self.cue_time,
                cue_location: self.cue_location,
                stack_after: self.stack_after,
                tiny_version: self.tiny_version,
            },
            schedule,
            ledger,
            self.current_streak.max(0) as u32,
            self.created_at,
            self.version,
        ))
    }
}
