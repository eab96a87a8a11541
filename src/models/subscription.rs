use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub id: i64,         // ⇔ subscriptions.id
    pub name: String,    // ⇔ subscriptions.name (lowercase, unique)
    pub active: bool,    // ⇔ subscriptions.active (0 | 1)
}

/// Subscriptions seeded on first run, all inactive.
pub const DEFAULT_SUBSCRIPTIONS: [&str; 4] = ["work", "sleep", "exercise", "pomodoro"];

impl Subscription {
    pub fn status_str(&self) -> &'static str {
        if self.active { "active" } else { "inactive" }
    }
}
