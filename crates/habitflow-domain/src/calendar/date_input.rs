use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::DateKey;
use crate::shared::DomainError;

/// Any date-like value a caller may hand us.
///
/// Only accepted at the normalization boundary; past it everything is a
/// [`DateKey`].
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Text(String),
    Instant(DateTime<Utc>),
    Date(NaiveDate),
    EpochMillis(i64),
}

impl DateInput {
    pub fn normalize(&self) -> Option<DateKey> {
        match self {
            DateInput::Text(raw) => normalize_text(raw),
            DateInput::Instant(instant) => DateKey::from_instant(*instant),
            DateInput::Date(date) => DateKey::from_naive(*date),
            DateInput::EpochMillis(millis) => from_epoch_millis(*millis),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<DateKey> for DateInput {
    fn from(value: DateKey) -> Self {
        DateInput::Date(value.as_naive())
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Millis(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Millis(millis) => DateInput::EpochMillis(millis),
            Raw::Text(text) => DateInput::Text(text),
        })
    }
}

/// Normalize a date-like input to its calendar-day key, or `None` when it
/// cannot be read as a valid date.
pub fn normalize(input: impl Into<DateInput>) -> Option<DateKey> {
    input.into().normalize()
}

pub fn normalize_or_err(input: impl Into<DateInput>) -> Result<DateKey, DomainError> {
    let input = input.into();
    input
        .normalize()
        .ok_or_else(|| DomainError::InvalidDate(format!("Cannot read {:?} as a date", input)))
}

fn normalize_text(raw: &str) -> Option<DateKey> {
    let trimmed = raw.trim();

    // Leading date digits win over any time suffix; a browser serializing local
    // midnight as UTC must not land on the neighbouring day.
    if let Some(prefix) = trimmed.get(0..10) {
        let rest = &trimmed[10..];
        if rest.is_empty() || rest.starts_with('T') {
            if let Some(key) = DateKey::parse(prefix) {
                return Some(key);
            }
        }
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return DateKey::from_instant(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(trimmed) {
        return DateKey::from_instant(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return DateKey::from_naive(naive.date());
        }
    }
    for format in ["%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return DateKey::from_naive(date);
        }
    }
    if let Ok(millis) = trimmed.parse::<i64>() {
        return from_epoch_millis(millis);
    }

    None
}

fn from_epoch_millis(millis: i64) -> Option<DateKey> {
    DateTime::<Utc>::from_timestamp_millis(millis).and_then(DateKey::from_instant)
}
