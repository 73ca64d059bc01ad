use std::collections::BTreeSet;

use crate::application::dtos::{BestStreakDto, DashboardStatsDto};
use habitflow_domain::habit::Habit;
use habitflow_domain::DateKey;

/// Days in the completion-rate window, today included
pub const COMPLETION_WINDOW_DAYS: i64 = 30;

pub(super) fn dashboard(habits: &[Habit], today: DateKey) -> DashboardStatsDto {
    let done_today = habits.iter().filter(|h| h.is_completed_on(&today)).count();

    // First habit wins ties
    let best_streak = habits
        .iter()
        .fold(None::<&Habit>, |best, h| match best {
            Some(b) if b.current_streak() >= h.current_streak() => Some(b),
            _ => Some(h),
        })
        .map(|h| BestStreakDto {
            habit_id: h.id().to_string(),
            habit_name: h.name().to_string(),
            current_streak: h.current_streak(),
        });

    let window_start = today
        .add_days(1 - COMPLETION_WINDOW_DAYS)
        .unwrap_or(today);
    let completions_last_30_days: usize = habits
        .iter()
        .map(|h| h.completions().count_between(window_start, today))
        .sum();

    let possible = habits.len() as f64 * COMPLETION_WINDOW_DAYS as f64;
    let completion_rate = if habits.is_empty() {
        0
    } else {
        (completions_last_30_days as f64 / possible * 100.0).round() as u32
    };

    let month_days_logged = habits
        .iter()
        .flat_map(|h| h.completions().iter())
        .filter(|d| d.year() == today.year() && d.month() == today.month())
        .collect::<BTreeSet<_>>()
        .len();

    DashboardStatsDto {
        total_habits: habits.len(),
        done_today,
        best_streak,
        completions_last_30_days,
        completion_rate,
        month_days_logged,
    }
}
