use tracing::info;

use crate::application::dtos::StreakDto;
use habitflow_domain::habit::Habit;
use habitflow_domain::DateKey;

/// Streak figures are recomputed from the ledger rather than read from the
/// cached field, so a habit untouched since yesterday still reports correctly.
pub(super) fn streak_stats(habit: &Habit, today: DateKey) -> StreakDto {
    let summary = habit.streak_summary(today);

    let dto = StreakDto {
        habit_id: habit.id().to_string(),
        habit_name: habit.name().to_string(),
        current_streak: summary.current_streak,
        longest_streak: summary.longest_streak,
        total_days: summary.total_days,
        last_completed: summary.last_completed.map(|d| d.to_string()),
    };

    info!(
        "[streak] streak_stats habit_id={} current={} longest={} total={}",
        dto.habit_id, dto.current_streak, dto.longest_streak, dto.total_days
    );

    dto
}
