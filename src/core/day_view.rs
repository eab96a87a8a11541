//! Day view composer: merge stored ad-hoc events with occurrences
//! materialized from recurring windows for one calendar date.

use crate::core::resolver::resolve_occurrences;
use crate::db::events::events_on_date;
use crate::db::pool::DbPool;
use crate::db::windows::active_windows_for_day;
use crate::models::day_view::{DayView, DisplayEvent};
use crate::models::weekday::Weekday;
use chrono::{Datelike, NaiveDate};

pub struct DayViewLogic;

impl DayViewLogic {
    /// Compose the view for one date.
    ///
    /// Each collaborator failure degrades the result to a partial view with a
    /// problem entry instead of failing the whole render: a broken events
    /// table still shows the generated schedule, and vice versa.
    pub fn compose(pool: &DbPool, date: NaiveDate) -> DayView {
        let mut events: Vec<DisplayEvent> = Vec::new();
        let mut problems: Vec<String> = Vec::new();

        // 1) Ad-hoc events stored for this date
        match events_on_date(&pool.conn, &date) {
            Ok(stored) => events.extend(stored.into_iter().map(DisplayEvent::from_ad_hoc)),
            Err(e) => problems.push(format!("ad-hoc events unavailable: {}", e)),
        }

        // 2) Occurrences generated from active subscription windows
        let day = Weekday::from(date.weekday());
        let current = active_windows_for_day(&pool.conn, day);
        let next = active_windows_for_day(&pool.conn, day.succ());

        match (current, next) {
            (Ok(current), Ok(next)) => {
                let res = resolve_occurrences(date, &current, &next);
                events.extend(res.occurrences.into_iter().map(DisplayEvent::from_occurrence));
                for s in res.skipped {
                    problems.push(format!(
                        "window for '{}' skipped: {}",
                        s.subscription_name, s.reason
                    ));
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                problems.push(format!("recurring windows unavailable: {}", e));
            }
        }

        // 3) Chronological order; the sort is stable, so ad-hoc events keep
        //    their place ahead of generated ones on equal start instants.
        events.sort_by_key(|e| e.start);

        DayView {
            date,
            events,
            problems,
        }
    }
}
