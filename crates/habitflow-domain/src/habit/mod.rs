mod aggregate;
mod ledger;
mod plan;
mod repository;
mod schedule;
mod streak;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::Habit;
pub use ledger::{CompletionLedger, CompletionRecord, LedgerUpdate};
pub use plan::{normalize_plan_field, HabitPlan, MAX_CUE_TIME_LENGTH, MAX_PLAN_FIELD_LENGTH};
pub use repository::HabitRepository;
pub use schedule::Schedule;
pub use streak::{compute_streak, longest_streak, streak_from_keys, StreakSummary};
