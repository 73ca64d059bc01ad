use serde::Serialize;
use std::collections::BTreeSet;

use super::ledger::CompletionLedger;
use crate::calendar::DateKey;

/// Current streak over raw stored completion dates.
///
/// Entries that do not normalize to a calendar day are dropped, and entries
/// naming the same day count once. Same reading as the repositories use when
/// loading a ledger.
pub fn compute_streak<I, S>(completions: I, today: DateKey) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CompletionLedger::from_raw(completions).streak(today)
}

/// Consecutive days ending today, or ending yesterday when today has no
/// completion yet. Days after `today` are skipped, the first gap ends the scan.
pub fn streak_from_keys(keys: &BTreeSet<DateKey>, today: DateKey) -> u32 {
    let mut expected = if keys.contains(&today) {
        Some(today)
    } else {
        today.pred()
    };
    let mut streak = 0u32;

    for day in keys.iter().rev() {
        let Some(want) = expected else { break };
        if *day > want {
            continue;
        }
        if *day < want {
            break;
        }
        streak += 1;
        expected = want.pred();
    }

    streak
}

/// Longest run of consecutive days anywhere in the set.
pub fn longest_streak(keys: &BTreeSet<DateKey>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<DateKey> = None;

    for day in keys {
        run = match previous {
            Some(prev) if day.days_since(&prev) == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(*day);
    }

    longest
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
    pub last_completed: Option<DateKey>,
}

impl StreakSummary {
    pub fn from_keys(keys: &BTreeSet<DateKey>, today: DateKey) -> Self {
        Self {
            current_streak: streak_from_keys(keys, today),
            longest_streak: longest_streak(keys),
            total_days: keys.len() as u32,
            last_completed: keys.iter().next_back().copied(),
        }
    }
}
