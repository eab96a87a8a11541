//! Unit tests for the pure window resolver, driven through the library API.

use chrono::{NaiveDate, NaiveDateTime};
use weekplan::core::resolver::resolve_occurrences;
use weekplan::models::weekday::Weekday;
use weekplan::models::window::WindowRow;

fn window(id: i64, sub_id: i64, name: &str, day: Weekday, start: &str, end: &str) -> WindowRow {
    WindowRow {
        id,
        subscription_id: sub_id,
        subscription_name: name.to_string(),
        day,
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn monday() -> NaiveDate {
    // 2025-09-01 is a Monday
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

#[test]
fn non_overnight_window_stays_on_target_date() {
    let current = vec![window(1, 1, "work", Weekday::Monday, "09:00", "17:30")];

    let res = resolve_occurrences(monday(), &current, &[]);

    assert_eq!(res.occurrences.len(), 1);
    assert!(res.skipped.is_empty());
    let occ = &res.occurrences[0];
    assert_eq!(occ.title, "work");
    assert_eq!(occ.start, dt("2025-09-01 09:00"));
    assert_eq!(occ.end, dt("2025-09-01 17:30"));
}

#[test]
fn equal_start_and_end_is_not_overnight() {
    let current = vec![window(1, 1, "pomodoro", Weekday::Monday, "10:00", "10:00")];

    let res = resolve_occurrences(monday(), &current, &[]);

    assert_eq!(res.occurrences[0].end, dt("2025-09-01 10:00"));
}

#[test]
fn overnight_window_defaults_to_seven_am_next_day() {
    let current = vec![window(1, 1, "sleep", Weekday::Monday, "22:00", "07:00")];

    let res = resolve_occurrences(monday(), &current, &[]);

    let occ = &res.occurrences[0];
    assert_eq!(occ.start, dt("2025-09-01 22:00"));
    assert_eq!(occ.end, dt("2025-09-02 07:00"));
}

#[test]
fn overnight_window_uses_next_day_end_of_same_subscription() {
    let current = vec![window(1, 2, "sleep", Weekday::Monday, "22:00", "07:00")];
    // a different subscription's row comes first; it must not be picked up
    let next = vec![
        window(10, 5, "work", Weekday::Tuesday, "09:00", "17:00"),
        window(11, 2, "sleep", Weekday::Tuesday, "23:00", "06:30"),
    ];

    let res = resolve_occurrences(monday(), &current, &next);

    assert_eq!(res.occurrences[0].end, dt("2025-09-02 06:30"));
}

#[test]
fn duplicate_next_day_rows_first_one_wins() {
    let current = vec![window(1, 2, "sleep", Weekday::Monday, "22:00", "07:00")];
    let next = vec![
        window(10, 2, "sleep", Weekday::Tuesday, "23:00", "06:15"),
        window(11, 2, "sleep", Weekday::Tuesday, "23:00", "08:45"),
    ];

    let res = resolve_occurrences(monday(), &current, &next);

    assert_eq!(res.occurrences[0].end, dt("2025-09-02 06:15"));
}

#[test]
fn one_occurrence_per_window_even_when_identical() {
    let current = vec![
        window(1, 1, "work", Weekday::Monday, "08:00", "17:00"),
        window(2, 1, "work", Weekday::Monday, "08:00", "17:00"),
        window(3, 3, "exercise", Weekday::Monday, "18:00", "19:00"),
    ];

    let res = resolve_occurrences(monday(), &current, &[]);

    assert_eq!(res.occurrences.len(), current.len());
}

#[test]
fn empty_current_day_yields_empty_output() {
    let next = vec![window(1, 1, "sleep", Weekday::Tuesday, "23:00", "06:30")];

    let res = resolve_occurrences(monday(), &[], &next);

    assert!(res.occurrences.is_empty());
    assert!(res.skipped.is_empty());
}

#[test]
fn identical_inputs_give_identical_output() {
    let current = vec![
        window(1, 2, "sleep", Weekday::Monday, "22:00", "07:00"),
        window(2, 1, "work", Weekday::Monday, "09:00", "17:00"),
    ];
    let next = vec![window(10, 2, "sleep", Weekday::Tuesday, "23:00", "06:30")];

    let first = resolve_occurrences(monday(), &current, &next);
    let second = resolve_occurrences(monday(), &current, &next);

    assert_eq!(first.occurrences, second.occurrences);
}

#[test]
fn malformed_time_skips_only_that_window() {
    let current = vec![
        // not zero-padded, must be rejected rather than compared as garbage
        window(1, 1, "work", Weekday::Monday, "8:00", "17:00"),
        window(2, 2, "exercise", Weekday::Monday, "18:00", "19:00"),
    ];

    let res = resolve_occurrences(monday(), &current, &[]);

    assert_eq!(res.occurrences.len(), 1);
    assert_eq!(res.occurrences[0].title, "exercise");
    assert_eq!(res.skipped.len(), 1);
    assert_eq!(res.skipped[0].subscription_name, "work");
}

#[test]
fn non_numeric_time_is_rejected() {
    let current = vec![window(1, 1, "sleep", Weekday::Monday, "ten pm", "07:00")];

    let res = resolve_occurrences(monday(), &current, &[]);

    assert!(res.occurrences.is_empty());
    assert_eq!(res.skipped.len(), 1);
}
