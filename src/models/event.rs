use chrono::{Local, NaiveDateTime};
use serde::Serialize;

pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Serialize)]
pub struct AdHocEvent {
    pub id: i64,                  // ⇔ events.id
    pub title: String,            // ⇔ events.title
    pub start: NaiveDateTime,     // ⇔ events.start_time (TEXT "YYYY-MM-DD HH:MM")
    pub end: NaiveDateTime,       // ⇔ events.end_time
    pub description: String,      // ⇔ events.description
    pub location: Option<String>, // ⇔ events.location (nullable)
    pub status: String,           // ⇔ events.status (free text, default 'Scheduled')
    pub created_at: String,       // ⇔ events.created_at (TEXT, ISO8601)
}

impl AdHocEvent {
    /// Constructor for events created from the CLI.
    /// - `status` falls back to "Scheduled"
    /// - `created_at` = now() in ISO8601
    pub fn new(
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        description: String,
        location: Option<String>,
        status: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            title,
            start,
            end,
            description,
            location,
            status: status.unwrap_or_else(|| "Scheduled".to_string()),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATETIME_FMT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATETIME_FMT).to_string()
    }
}
