//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{models::StudyPlan, progress::ToggleOutcome};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use studyplan_core::{display::CreateResult, models::{DayRoutine, StudyPlan}};
/// use jiff::Timestamp;
///
/// let plan = StudyPlan {
///     id: 1,
///     title: "Physics Routine".to_string(),
///     overview: String::new(),
///     resources: String::new(),
///     topics: String::new(),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     daily_routines: vec![DayRoutine::new("Vectors")],
/// };
///
/// let output = CreateResult::new(plan).to_string();
/// assert!(output.contains("Created plan with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<StudyPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<StudyPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

/// Wrapper type for displaying a confirmed day toggle.
pub struct ToggleResult {
    pub plan_id: u64,
    pub outcome: ToggleOutcome,
}

impl ToggleResult {
    /// Create a new ToggleResult wrapper.
    pub fn new(plan_id: u64, outcome: ToggleOutcome) -> Self {
        Self { plan_id, outcome }
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.outcome.day_index + 1;
        match &self.outcome.completed_at {
            Some(at) => writeln!(
                f,
                "Marked Day {day} of plan {} complete at {}",
                self.plan_id,
                LocalDateTime(at)
            ),
            None => writeln!(
                f,
                "Marked Day {day} of plan {} as not completed",
                self.plan_id
            ),
        }
    }
}
