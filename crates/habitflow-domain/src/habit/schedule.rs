use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::calendar::DateKey;

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Weekdays a habit is due, Monday = 0 .. Sunday = 6. Empty means every day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule(BTreeSet<u8>);

impl Schedule {
    pub fn every_day() -> Self {
        Self::default()
    }

    /// Keep only indices in 0..=6, collapsing duplicates.
    pub fn from_indices(indices: impl IntoIterator<Item = i64>) -> Self {
        Self(
            indices
                .into_iter()
                .filter(|d| (0..=6).contains(d))
                .map(|d| d as u8)
                .collect(),
        )
    }

    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn is_every_day(&self) -> bool {
        self.0.is_empty() || self.0.len() == DAY_NAMES.len()
    }

    pub fn is_scheduled_on(&self, day: &DateKey) -> bool {
        self.0.is_empty() || self.0.contains(&day.weekday_index())
    }

    /// Short label such as `Mon, Wed (2x/week)`.
    pub fn describe(&self) -> String {
        if self.is_every_day() {
            return "Every day".to_string();
        }
        let names: Vec<&str> = self.0.iter().map(|d| DAY_NAMES[*d as usize]).collect();
        format!("{} ({}x/week)", names.join(", "), self.0.len())
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<i64>::deserialize(deserializer)?;
        Ok(Self::from_indices(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn test_empty_schedule_is_every_day() {
        let schedule = Schedule::every_day();
        for day in ["2024-01-01", "2024-01-03", "2024-01-07"] {
            assert!(schedule.is_scheduled_on(&key(day)));
        }
        assert_eq!(schedule.describe(), "Every day");
    }

    #[test]
    fn test_weekday_filter() {
        // Monday and Wednesday
        let schedule = Schedule::from_indices([0, 2]);
        assert!(schedule.is_scheduled_on(&key("2024-01-01")));
        assert!(!schedule.is_scheduled_on(&key("2024-01-02")));
        assert!(schedule.is_scheduled_on(&key("2024-01-03")));
        assert_eq!(schedule.describe(), "Mon, Wed (2x/week)");
    }

    #[test]
    fn test_out_of_range_and_duplicates_dropped() {
        let schedule = Schedule::from_indices([6, 6, 7, -1, 3]);
        assert_eq!(schedule.days().collect::<Vec<_>>(), vec![3, 6]);
    }

    #[test]
    fn test_all_seven_days_described_as_every_day() {
        let schedule = Schedule::from_indices(0..7);
        assert_eq!(schedule.describe(), "Every day");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let schedule: Schedule = serde_json::from_str("[4, 1, 9, 1]").unwrap();
        assert_eq!(schedule, Schedule::from_indices([1, 4]));
        assert_eq!(serde_json::to_string(&schedule).unwrap(), "[1,4]");
    }
}
