use chrono::{NaiveDate, TimeZone, Utc};

use super::*;

fn key(s: &str) -> DateKey {
    DateKey::parse(s).unwrap()
}

#[test]
fn test_plain_key_passes_through() {
    assert_eq!(normalize("2024-03-01"), Some(key("2024-03-01")));
    assert_eq!(key("2024-03-01").to_string(), "2024-03-01");
}

#[test]
fn test_time_suffix_is_ignored() {
    assert_eq!(normalize("2024-03-01T00:00:00Z"), Some(key("2024-03-01")));
    // Late-evening offset that would shift to the next UTC day if parsed as an instant
    assert_eq!(
        normalize("2024-03-01T23:30:00-05:00"),
        Some(key("2024-03-01"))
    );
}

#[test]
fn test_two_formats_collapse_to_one_key() {
    let a = normalize("2024-03-01").unwrap();
    let b = normalize("2024-03-01T00:00:00Z").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_normalization_is_idempotent() {
    for raw in [
        "2024-01-05",
        "2024-02-29T08:15:00.000Z",
        "Fri, 01 Mar 2024 10:00:00 +0000",
        "2024-12-31 23:59:59",
        "1709251200000",
    ] {
        let once = normalize(raw).unwrap();
        let twice = normalize(once.to_string()).unwrap();
        assert_eq!(once, twice, "input {}", raw);
    }
}

#[test]
fn test_slash_and_dot_separators_are_accepted() {
    assert_eq!(normalize("2024/03/01"), Some(key("2024-03-01")));
    assert_eq!(normalize("2024.03.01"), Some(key("2024-03-01")));
    assert_eq!(normalize("2024/3/1"), Some(key("2024-03-01")));
    assert_eq!(normalize("2024/02/30"), None);
}

#[test]
fn test_invalid_inputs_yield_none() {
    for raw in ["", "yesterday", "2024-13-01", "2024-02-30", "2024-3-1", "20240301x"] {
        assert_eq!(normalize(raw), None, "input {:?}", raw);
    }
    assert!(matches!(
        normalize_or_err("garbage"),
        Err(crate::shared::DomainError::InvalidDate(_))
    ));
}

#[test]
fn test_instant_and_epoch_inputs_use_utc_day() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap();
    assert_eq!(normalize(instant), Some(key("2024-03-01")));

    // 2024-03-01T00:00:00Z
    assert_eq!(
        DateInput::EpochMillis(1_709_251_200_000).normalize(),
        Some(key("2024-03-01"))
    );
    assert_eq!(
        normalize(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        Some(key("2024-03-01"))
    );
}

#[test]
fn test_out_of_range_year_rejected() {
    let far = NaiveDate::from_ymd_opt(12000, 1, 1).unwrap();
    assert_eq!(DateKey::from_naive(far), None);
}

#[test]
fn test_ordering_matches_string_order() {
    let mut keys = vec![key("2024-01-10"), key("2023-12-31"), key("2024-01-02")];
    keys.sort();
    let strings: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    let mut sorted_strings = strings.clone();
    sorted_strings.sort();
    assert_eq!(strings, sorted_strings);
}

#[test]
fn test_weekday_index_starts_monday() {
    assert_eq!(key("2024-01-01").weekday_index(), 0); // Monday
    assert_eq!(key("2024-01-07").weekday_index(), 6); // Sunday
}

#[test]
fn test_day_arithmetic() {
    let d = key("2024-03-01");
    assert_eq!(d.pred(), Some(key("2024-02-29")));
    assert_eq!(d.succ(), Some(key("2024-03-02")));
    assert_eq!(d.add_days(-29), Some(key("2024-02-01")));
    assert_eq!(d.days_since(&key("2024-02-01")), 29);
}

#[test]
fn test_serde_uses_string_form() {
    let json = serde_json::to_string(&key("2024-03-01")).unwrap();
    assert_eq!(json, "\"2024-03-01\"");
    let back: DateKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key("2024-03-01"));
    assert!(serde_json::from_str::<DateKey>("\"2024-03-01T00:00:00Z\"").is_err());
}

#[test]
fn test_date_input_deserializes_text_and_millis() {
    let text: DateInput = serde_json::from_str("\"2024-03-01T10:00:00Z\"").unwrap();
    assert_eq!(text, DateInput::Text("2024-03-01T10:00:00Z".to_string()));
    let millis: DateInput = serde_json::from_str("1709251200000").unwrap();
    assert_eq!(millis, DateInput::EpochMillis(1_709_251_200_000));
}

#[test]
fn test_fixed_clock_today() {
    let clock = FixedClock::on(key("2024-01-07"));
    assert_eq!(clock.today(), key("2024-01-07"));

    let late = FixedClock::at(Utc.with_ymd_and_hms(2024, 1, 7, 23, 59, 0).unwrap());
    assert_eq!(late.today(), key("2024-01-07"));
}
