use crate::errors::{AppError, AppResult};
use crate::models::event::DATETIME_FMT;
use chrono::{NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse "YYYY-MM-DD HH:MM" as used by ad-hoc event start/end instants.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT)
        .map_err(|_| AppError::InvalidDateTime(s.to_string()))
}

/// The calendar day after `d`.
pub fn next_day(d: NaiveDate) -> NaiveDate {
    // succ_opt only fails at NaiveDate::MAX
    d.succ_opt().unwrap_or(d)
}
