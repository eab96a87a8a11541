//! Window resolver: turn recurring per-weekday windows into concrete
//! dated occurrences for one target date.
//!
//! Pure and synchronous. Everything the resolution depends on arrives through
//! the arguments, so two calls with identical inputs produce identical output
//! and the function is safe to call from anywhere, including batch
//! materialization across many dates.

use crate::errors::{AppError, AppResult};
use crate::models::occurrence::Occurrence;
use crate::models::window::WindowRow;
use crate::utils::date::next_day;
use crate::utils::time::parse_hhmm;
use chrono::{NaiveDate, NaiveTime};

/// End-of-span fallback when an overnight window has no next-day row.
pub const DEFAULT_OVERNIGHT_END: &str = "07:00";

/// A window left out of the result because one of its time values failed
/// strict HH:MM validation.
#[derive(Debug)]
pub struct SkippedWindow {
    pub subscription_name: String,
    pub reason: AppError,
}

/// Result of resolving one day. Valid windows land in `occurrences`
/// (one each, input order, never merged); malformed ones in `skipped`.
#[derive(Debug, Default)]
pub struct Resolution {
    pub occurrences: Vec<Occurrence>,
    pub skipped: Vec<SkippedWindow>,
}

/// Materialize `current` (the windows whose day-of-week matches `target`)
/// into dated occurrences.
///
/// A window whose start is later than its end spans midnight: its end instant
/// comes from the *same subscription's* window on the following day, or from
/// [`DEFAULT_OVERNIGHT_END`] when that row is missing. `next` is consulted
/// only for that lookup.
///
/// No active-status filtering happens here; callers pass pre-filtered rows.
pub fn resolve_occurrences(
    target: NaiveDate,
    current: &[WindowRow],
    next: &[WindowRow],
) -> Resolution {
    let mut res = Resolution::default();

    for w in current {
        match resolve_window(target, w, next) {
            Ok(occ) => res.occurrences.push(occ),
            Err(reason) => res.skipped.push(SkippedWindow {
                subscription_name: w.subscription_name.clone(),
                reason,
            }),
        }
    }

    res
}

fn resolve_window(target: NaiveDate, w: &WindowRow, next: &[WindowRow]) -> AppResult<Occurrence> {
    let start = parse_hhmm(&w.start_time)?;
    let end = parse_hhmm(&w.end_time)?;

    let start_instant = target.and_time(start);

    let end_instant = if start > end {
        // Overnight span: the end lives on the following calendar day.
        next_day(target).and_time(overnight_end(w.subscription_id, next)?)
    } else {
        target.and_time(end)
    };

    Ok(Occurrence {
        title: w.subscription_name.clone(),
        start: start_instant,
        end: end_instant,
    })
}

/// End time for an overnight span: the same subscription's next-day window
/// if present (first row wins when duplicates exist), otherwise the default.
fn overnight_end(subscription_id: i64, next: &[WindowRow]) -> AppResult<NaiveTime> {
    match next.iter().find(|n| n.subscription_id == subscription_id) {
        Some(n) => parse_hhmm(&n.end_time),
        None => parse_hhmm(DEFAULT_OVERNIGHT_END),
    }
}
