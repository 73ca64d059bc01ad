use chrono::{DateTime, Utc};

use super::ledger::{CompletionLedger, LedgerUpdate};
use super::plan::HabitPlan;
use super::schedule::Schedule;
use super::streak::StreakSummary;
use crate::calendar::DateKey;
use crate::shared::{DomainError, HabitId, UserId};

#[derive(Debug, Clone)]
pub struct Habit {
    id: HabitId,
    user_id: UserId,
    name: String,
    description: String,
    plan: HabitPlan,
    schedule: Schedule,
    completions: CompletionLedger,
    current_streak: u32,
    created_at: DateTime<Utc>,
    version: i64,
}

impl Habit {
    pub fn new(
        user_id: UserId,
        name: String,
        description: Option<String>,
        plan: HabitPlan,
        schedule: Schedule,
    ) -> Result<Self, DomainError> {
        let name = validate_name(&name)?;

        Ok(Self {
            id: HabitId::new(),
            user_id,
            name,
            description: description.unwrap_or_default(),
            plan,
            schedule,
            completions: CompletionLedger::new(),
            current_streak: 0,
            created_at: Utc::now(),
            version: 0,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HabitId,
        user_id: UserId,
        name: String,
        description: String,
        plan: HabitPlan,
        schedule: Schedule,
        completions: CompletionLedger,
        current_streak: u32,
        created_at: DateTime<Utc>,
        version: i64,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            plan,
            schedule,
            completions,
            current_streak,
            created_at,
            version,
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn plan(&self) -> &HabitPlan {
        &self.plan
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn completions(&self) -> &CompletionLedger {
        &self.completions
    }

    /// Streak cached at the last completion change.
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Store version this habit was loaded at.
    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn set_version(&mut self, version: i64) {
        self.version = version;
    }

    pub fn update_details(
        &mut self,
        name: String,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        self.name = validate_name(&name)?;
        self.description = description.unwrap_or_default();
        Ok(())
    }

    pub fn update_plan(&mut self, plan: HabitPlan) {
        self.plan = plan;
    }

    pub fn update_schedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
    }

    pub fn is_scheduled_on(&self, day: &DateKey) -> bool {
        self.schedule.is_scheduled_on(day)
    }

    pub fn is_completed_on(&self, day: &DateKey) -> bool {
        self.completions.contains(day)
    }

    pub fn complete_today(&mut self, today: DateKey) -> Result<u32, DomainError> {
        self.mark_complete(today, today)
    }

    pub fn undo_today(&mut self, today: DateKey) -> Result<u32, DomainError> {
        self.mark_incomplete(today, today)
    }

    pub fn mark_complete(&mut self, day: DateKey, today: DateKey) -> Result<u32, DomainError> {
        let update = self.completions.mark_complete(day, today)?;
        Ok(self.apply(update))
    }

    pub fn mark_incomplete(&mut self, day: DateKey, today: DateKey) -> Result<u32, DomainError> {
        let update = self.completions.mark_incomplete(day, today)?;
        Ok(self.apply(update))
    }

    pub fn set_completion(
        &mut self,
        day: DateKey,
        desired: bool,
        today: DateKey,
    ) -> Result<u32, DomainError> {
        let update = self.completions.set_completion(day, desired, today)?;
        Ok(self.apply(update))
    }

    /// Live streak figures for `today`, independent of the cached value.
    pub fn streak_summary(&self, today: DateKey) -> StreakSummary {
        self.completions.summary(today)
    }

    fn apply(&mut self, update: LedgerUpdate) -> u32 {
        self.completions = update.ledger;
        self.current_streak = update.streak;
        update.streak
    }
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("Name is required".to_string()));
    }
    Ok(trimmed.to_string())
}
