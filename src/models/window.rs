use super::weekday::Weekday;
use serde::Serialize;

/// One recurring time window, joined with its owning subscription.
///
/// `start_time` / `end_time` are kept as the raw TEXT stored in
/// `subscription_windows` ("HH:MM"); they are validated only when the
/// resolver materializes the window, so one malformed row cannot poison
/// a whole day query.
#[derive(Debug, Clone, Serialize)]
pub struct WindowRow {
    pub id: i64,                   // ⇔ subscription_windows.id
    pub subscription_id: i64,      // ⇔ subscription_windows.subscription_id
    pub subscription_name: String, // ⇔ subscriptions.name (joined)
    pub day: Weekday,              // ⇔ subscription_windows.day_of_week
    pub start_time: String,        // ⇔ subscription_windows.start_time ("HH:MM")
    pub end_time: String,          // ⇔ subscription_windows.end_time ("HH:MM")
}
