use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` calendar day.
///
/// Years are restricted to 0000..=9999 so that the string form is always ten
/// characters and string order matches chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Parse a strict `YYYY-MM-DD` key. Anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return None;
        }

        let year: i32 = s[0..4].parse().ok()?;
        let month: u32 = s[5..7].parse().ok()?;
        let day: u32 = s[8..10].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (0..=9999).contains(&date.year()).then_some(Self(date))
    }

    /// Clock values are trusted; a date outside 0000..=9999 keeps its
    /// chronological order even though its string form widens.
    pub(crate) fn from_clock_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Calendar day of an instant, in UTC.
    pub fn from_instant(instant: DateTime<Utc>) -> Option<Self> {
        Self::from_naive(instant.date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_naive)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Weekday index with Monday = 0 .. Sunday = 6.
    pub fn weekday_index(&self) -> u8 {
        self.0.weekday().num_days_from_monday() as u8
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().and_then(Self::from_naive)
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().and_then(Self::from_naive)
    }

    /// Shift by a signed number of days.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        chrono::TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .and_then(Self::from_naive)
    }

    /// Whole days from `earlier` to `self` (negative when `earlier` is later).
    pub fn days_since(&self, earlier: &DateKey) -> i64 {
        (self.0 - earlier.0).num_days()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidDate(s.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date key: {}", raw)))
    }
}
