use chrono::{DateTime, Local};
use uuid::Uuid;

/// A single to-do entry within a category
#[derive(Debug, Clone)]
pub struct Task {
    /// Stable ID for UI bookkeeping; operations stay positional
    pub id: Uuid,
    /// Display text, as entered (immutable after creation)
    text: String,
    /// Completion flag
    pub checked: bool,
    /// When the task was added
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            checked: false,
            created_at: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    /// Creation time as HH:MM
    pub fn created_formatted(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}
