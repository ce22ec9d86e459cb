//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::PlanSummary;

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Titles are left to the caller; an empty collection renders a short notice.
///
/// # Examples
///
/// ```rust
/// use studyplan_core::{display::PlanSummaries, models::PlanSummary};
/// use jiff::Timestamp;
///
/// let plan = PlanSummary {
///     id: 1,
///     title: "Physics Routine".to_string(),
///     created_at: Timestamp::now(),
///     total_days: 30,
///     completed_days: 4,
///     last_completed_at: None,
///     next_day: Some(5),
/// };
///
/// let summaries = PlanSummaries(vec![plan]);
/// let output = format!("{}", summaries);
/// assert!(output.contains("Physics Routine"));
/// assert!(output.contains("(4/30)"));
/// assert!(output.contains("Day 5"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }

    /// Plans that still have at least one incomplete day.
    pub fn in_progress(&self) -> impl Iterator<Item = &PlanSummary> {
        self.0.iter().filter(|plan| plan.next_day.is_some())
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{}", plan)?;
            }
            Ok(())
        }
    }
}
