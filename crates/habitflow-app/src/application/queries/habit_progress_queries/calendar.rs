use crate::application::dtos::{CalendarDayDto, CalendarMonthDto, DayStatus};
use habitflow_domain::habit::Habit;
use habitflow_domain::shared::DomainError;
use habitflow_domain::DateKey;

/// Status of `day` across the habits scheduled on it.
///
/// `None` for days after `today` and for days with nothing scheduled.
pub fn day_status(habits: &[Habit], day: DateKey, today: DateKey) -> Option<DayStatus> {
    if day > today {
        return None;
    }
    let (scheduled, completed) = counts(habits, &day);
    status_of(scheduled, completed)
}

fn counts(habits: &[Habit], day: &DateKey) -> (usize, usize) {
    habits
        .iter()
        .filter(|h| h.is_scheduled_on(day))
        .fold((0, 0), |(scheduled, completed), h| {
            (scheduled + 1, completed + usize::from(h.is_completed_on(day)))
        })
}

fn status_of(scheduled: usize, completed: usize) -> Option<DayStatus> {
    match (scheduled, completed) {
        (0, _) => None,
        (_, 0) => Some(DayStatus::None),
        (s, c) if c >= s => Some(DayStatus::Full),
        _ => Some(DayStatus::Partial),
    }
}

pub(super) fn month(
    habits: &[Habit],
    year: i32,
    month: u32,
    today: DateKey,
) -> Result<CalendarMonthDto, DomainError> {
    let first = DateKey::from_ymd(year, month, 1).ok_or_else(|| {
        DomainError::InvalidDate(format!("No such month: {}-{:02}", year, month))
    })?;

    let mut days = Vec::with_capacity(31);
    let mut cursor = Some(first);
    while let Some(day) = cursor.filter(|d| d.month() == month) {
        let (scheduled, completed) = counts(habits, &day);
        let status = if day > today {
            None
        } else {
            status_of(scheduled, completed)
        };
        days.push(CalendarDayDto {
            date: day.to_string(),
            scheduled,
            completed,
            status,
        });
        cursor = day.succ();
    }

    Ok(CalendarMonthDto { year, month, days })
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitflow_domain::habit::{HabitPlan, Schedule};
    use habitflow_domain::UserId;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    fn habit(days: &[i64], done: &[&str], today: DateKey) -> Habit {
        let mut habit = Habit::new(
            UserId::new(),
            "Read".to_string(),
            None,
            HabitPlan::default(),
            Schedule::from_indices(days.iter().copied()),
        )
        .unwrap();
        for d in done {
            habit.mark_complete(key(d), today).unwrap();
        }
        habit
    }

    #[test]
    fn test_day_status_levels() {
        let today = key("2024-01-10");
        // 2024-01-08 is a Monday
        let habits = vec![
            habit(&[], &["2024-01-08", "2024-01-09"], today),
            habit(&[0], &["2024-01-08"], today),
        ];

        assert_eq!(day_status(&habits, key("2024-01-08"), today), Some(DayStatus::Full));
        assert_eq!(day_status(&habits, key("2024-01-09"), today), Some(DayStatus::Full));
        assert_eq!(day_status(&habits, key("2024-01-10"), today), Some(DayStatus::None));
        assert_eq!(day_status(&habits, key("2024-01-15"), today), None);

        let partial = vec![
            habit(&[], &["2024-01-08"], today),
            habit(&[], &[], today),
        ];
        assert_eq!(
            day_status(&partial, key("2024-01-08"), today),
            Some(DayStatus::Partial)
        );
    }

    #[test]
    fn test_nothing_scheduled_has_no_status() {
        let today = key("2024-01-10");
        // Sunday-only habit, 2024-01-09 is a Tuesday
        let habits = vec![habit(&[6], &[], today)];
        assert_eq!(day_status(&habits, key("2024-01-09"), today), None);
        assert_eq!(day_status(&[], key("2024-01-09"), today), None);
    }

    #[test]
    fn test_month_covers_every_day() {
        let today = key("2024-02-10");
        let habits = vec![habit(&[], &["2024-02-01"], today)];
        let cal = month(&habits, 2024, 2, today).unwrap();

        assert_eq!(cal.days.len(), 29);
        assert_eq!(cal.days[0].date, "2024-02-01");
        assert_eq!(cal.days[0].status, Some(DayStatus::Full));
        assert_eq!(cal.days[1].status, Some(DayStatus::None));
        assert_eq!(cal.days[28].status, None);
    }

    #[test]
    fn test_invalid_month_rejected() {
        let today = key("2024-02-10");
        assert!(matches!(
            month(&[], 2024, 13, today),
            Err(DomainError::InvalidDate(_))
        ));
    }
}
