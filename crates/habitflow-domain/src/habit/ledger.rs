use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::streak::{streak_from_keys, StreakSummary};
use crate::calendar::{normalize, DateKey};
use crate::shared::DomainError;

/// Stored form of a single completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub date_key: DateKey,
    pub completed: bool,
}

/// Set of completed calendar days for one habit.
///
/// Mutations never touch `self`; they build the next ledger and hand it back
/// with its streak so the caller can persist both together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLedger {
    days: BTreeSet<DateKey>,
}

/// Result of a ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerUpdate {
    pub ledger: CompletionLedger,
    pub streak: u32,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw stored dates, dropping anything that is not a day.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            days: raw
                .into_iter()
                .filter_map(|value| normalize(value.as_ref()))
                .collect(),
        }
    }

    pub fn contains(&self, day: &DateKey) -> bool {
        self.days.contains(day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DateKey> {
        self.days.iter()
    }

    pub fn days(&self) -> &BTreeSet<DateKey> {
        &self.days
    }

    pub fn records(&self) -> Vec<CompletionRecord> {
        self.days
            .iter()
            .map(|day| CompletionRecord {
                date_key: *day,
                completed: true,
            })
            .collect()
    }

    /// Number of completions falling in `from..=to`.
    pub fn count_between(&self, from: DateKey, to: DateKey) -> usize {
        if from > to {
            return 0;
        }
        self.days.range(from..=to).count()
    }

    pub fn streak(&self, today: DateKey) -> u32 {
        streak_from_keys(&self.days, today)
    }

    pub fn summary(&self, today: DateKey) -> StreakSummary {
        StreakSummary::from_keys(&self.days, today)
    }

    /// Strict insert used for the "done today" path.
    pub fn mark_complete(&self, day: DateKey, today: DateKey) -> Result<LedgerUpdate, DomainError> {
        reject_future(day, today)?;
        if self.days.contains(&day) {
            return Err(DomainError::AlreadyCompleted(format!(
                "Habit already completed on {}",
                day
            )));
        }

        let mut days = self.days.clone();
        days.insert(day);
        Ok(Self::update(days, today))
    }

    /// Strict removal used for the "undo today" path.
    pub fn mark_incomplete(
        &self,
        day: DateKey,
        today: DateKey,
    ) -> Result<LedgerUpdate, DomainError> {
        reject_future(day, today)?;
        if !self.days.contains(&day) {
            return Err(DomainError::NotCompleted(format!(
                "Habit is not marked complete on {}",
                day
            )));
        }

        let mut days = self.days.clone();
        days.remove(&day);
        Ok(Self::update(days, today))
    }

    /// Idempotent upsert for retroactive edits.
    pub fn set_completion(
        &self,
        day: DateKey,
        desired: bool,
        today: DateKey,
    ) -> Result<LedgerUpdate, DomainError> {
        reject_future(day, today)?;

        let mut days = self.days.clone();
        days.remove(&day);
        if desired {
            days.insert(day);
        }
        Ok(Self::update(days, today))
    }

    /// Streak `set_completion` would produce, without keeping the result.
    pub fn preview(&self, day: DateKey, desired: bool, today: DateKey) -> Result<u32, DomainError> {
        self.set_completion(day, desired, today)
            .map(|update| update.streak)
    }

    fn update(days: BTreeSet<DateKey>, today: DateKey) -> LedgerUpdate {
        let streak = streak_from_keys(&days, today);
        LedgerUpdate {
            ledger: Self { days },
            streak,
        }
    }
}

fn reject_future(day: DateKey, today: DateKey) -> Result<(), DomainError> {
    if day > today {
        return Err(DomainError::FutureDateRejected(format!(
            "Cannot change completion for {} (today is {})",
            day, today
        )));
    }
    Ok(())
}
