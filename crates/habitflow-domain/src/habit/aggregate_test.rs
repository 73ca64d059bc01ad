#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::calendar::DateKey;
    use crate::shared::{DomainError, UserId};

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    fn habit() -> Habit {
        Habit::new(
            UserId::new(),
            "  Read ".to_string(),
            None,
            HabitPlan::default(),
            Schedule::every_day(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_habit() {
        let habit = habit();
        assert_eq!(habit.name(), "Read");
        assert_eq!(habit.description(), "");
        assert!(habit.completions().is_empty());
        assert_eq!(habit.current_streak(), 0);
        assert_eq!(habit.version(), 0);
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Habit::new(
            UserId::new(),
            "   ".to_string(),
            None,
            HabitPlan::default(),
            Schedule::every_day(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_complete_and_undo_today_refresh_cached_streak() {
        let mut habit = habit();
        let today = key("2024-01-07");
        habit.set_completion(key("2024-01-06"), true, today).unwrap();
        assert_eq!(habit.current_streak(), 1);

        assert_eq!(habit.complete_today(today).unwrap(), 2);
        assert_eq!(habit.current_streak(), 2);
        assert!(habit.is_completed_on(&today));

        assert_eq!(habit.undo_today(today).unwrap(), 1);
        assert_eq!(habit.current_streak(), 1);
    }

    #[test]
    fn test_failed_mutation_keeps_state() {
        let mut habit = habit();
        let today = key("2024-01-07");
        habit.complete_today(today).unwrap();

        let err = habit.complete_today(today).unwrap_err();
        assert!(matches!(err, DomainError::AlreadyCompleted(_)));
        assert_eq!(habit.completions().len(), 1);
        assert_eq!(habit.current_streak(), 1);

        let err = habit
            .set_completion(key("2024-01-08"), true, today)
            .unwrap_err();
        assert!(matches!(err, DomainError::FutureDateRejected(_)));
        assert_eq!(habit.completions().len(), 1);
    }

    #[test]
    fn test_update_details_and_schedule() {
        let mut habit = habit();
        habit
            .update_details("Read 10 pages".to_string(), Some("before bed".to_string()))
            .unwrap();
        habit.update_schedule(Schedule::from_indices([5, 6]));

        assert_eq!(habit.name(), "Read 10 pages");
        assert_eq!(habit.description(), "before bed");
        // 2024-01-06 is a Saturday
        assert!(habit.is_scheduled_on(&key("2024-01-06")));
        assert!(!habit.is_scheduled_on(&key("2024-01-05")));
        assert!(habit.update_details(String::new(), None).is_err());
    }

    #[test]
    fn test_streak_summary_is_live() {
        let mut habit = habit();
        habit.complete_today(key("2024-01-07")).unwrap();
        // Two days later the cached value is stale but the summary is not
        let summary = habit.streak_summary(key("2024-01-09"));
        assert_eq!(habit.current_streak(), 1);
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.total_days, 1);
    }
}
