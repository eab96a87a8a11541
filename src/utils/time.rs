//! Time utilities: strict HH:MM parsing and formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

/// Zero-padded 24-hour clock, "00:00".."23:59". Window times must match this
/// exactly; overnight detection compares start and end and is only sound on
/// fixed-width values.
fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap())
}

/// Parse a wall-clock time, rejecting anything that is not strict "HH:MM".
/// chrono alone would accept unpadded input like "8:00", so the format is
/// checked first.
pub fn parse_hhmm(t: &str) -> AppResult<NaiveTime> {
    if !hhmm_re().is_match(t) {
        return Err(AppError::MalformedTime(t.to_string()));
    }
    NaiveTime::parse_from_str(t, "%H:%M").map_err(|_| AppError::MalformedTime(t.to_string()))
}
