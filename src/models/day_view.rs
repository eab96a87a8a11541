use super::event::AdHocEvent;
use super::occurrence::Occurrence;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Stored in the `events` table by an explicit user action.
    AdHoc,
    /// Materialized from a recurring subscription window.
    Generated,
}

/// One row of the composed day view.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub description: String,
    pub provenance: Provenance,
}

impl DisplayEvent {
    pub fn from_ad_hoc(ev: AdHocEvent) -> Self {
        Self {
            title: ev.title,
            start: ev.start,
            end: ev.end,
            description: ev.description,
            provenance: Provenance::AdHoc,
        }
    }

    pub fn from_occurrence(occ: Occurrence) -> Self {
        Self {
            title: occ.title,
            start: occ.start,
            end: occ.end,
            description: "Generated from subscription windows".to_string(),
            provenance: Provenance::Generated,
        }
    }
}

/// Composed view for one calendar date. `problems` carries collaborator
/// failures that degraded the view to a partial one.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub date: chrono::NaiveDate,
    pub events: Vec<DisplayEvent>,
    pub problems: Vec<String>,
}
