use crate::application::dtos::{TodayDto, TodayHabitDto};
use habitflow_domain::habit::Habit;
use habitflow_domain::DateKey;

pub(super) fn due_today(habits: &[Habit], today: DateKey) -> TodayDto {
    let due: Vec<TodayHabitDto> = habits
        .iter()
        .filter(|h| h.is_scheduled_on(&today))
        .map(|h| TodayHabitDto {
            id: h.id().to_string(),
            name: h.name().to_string(),
            tiny_version: h.plan().tiny_version.clone(),
            cue_time: h.plan().cue_time.clone(),
            current_streak: h.current_streak(),
            done_today: h.is_completed_on(&today),
        })
        .collect();

    TodayDto {
        date: today.to_string(),
        total: due.len(),
        done: due.iter().filter(|h| h.done_today).count(),
        habits: due,
    }
}
