//! Daily routine model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One day's instructional content plus its completion status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayRoutine {
    /// Short label taken from the first line of the content
    pub title: String,

    /// Instructional text for the day
    pub content: String,

    /// Whether the day has been marked complete
    #[serde(default)]
    pub is_completed: bool,

    /// When the day was marked complete, cleared when it is un-marked
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

impl DayRoutine {
    /// Creates an incomplete routine from generated content.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            title: title_from_content(&content),
            content,
            is_completed: false,
            completed_at: None,
        }
    }

    /// Sets the completion fields together so that `completed_at` is present
    /// exactly when the day is complete.
    pub(crate) fn set_completed(&mut self, completed_at: Option<Timestamp>) {
        self.is_completed = completed_at.is_some();
        self.completed_at = completed_at;
    }
}

/// Derives a routine title from the first line of its content.
pub fn title_from_content(content: &str) -> String {
    content.lines().next().unwrap_or_default().trim().to_string()
}
