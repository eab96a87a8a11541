use chrono::NaiveDateTime;
use serde::Serialize;

/// A recurring window materialized for one concrete calendar date.
/// Derived on every query, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Occurrence {
    pub title: String,        // owning subscription's name
    pub start: NaiveDateTime, // target date @ window start
    pub end: NaiveDateTime,   // same date or the day after, for overnight spans
}
