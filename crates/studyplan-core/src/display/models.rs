//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer and MCP clients can present it
//! directly.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{DayRoutine, DaySyncState, PlanSummary, StudyPlan};

impl fmt::Display for DaySyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A routine together with its 1-indexed day number.
pub struct DayView<'a> {
    pub number: usize,
    pub routine: &'a DayRoutine,
}

impl<'a> DayView<'a> {
    /// Wraps the routine at `index` (0-based) for display.
    pub fn new(index: usize, routine: &'a DayRoutine) -> Self {
        Self {
            number: index + 1,
            routine,
        }
    }
}

impl DayRoutine {
    /// Completion label with a status icon.
    pub fn status_label(&self) -> &'static str {
        if self.is_completed {
            "✓ Completed"
        } else {
            "○ Not Completed"
        }
    }
}

impl fmt::Display for DayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Day {}: {} ({})",
            self.number,
            self.routine.title,
            self.routine.status_label()
        )?;
        writeln!(f)?;

        if let Some(completed_at) = &self.routine.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
            writeln!(f)?;
        }

        // The title line is already in the heading
        let body = self
            .routine
            .content
            .split_once('\n')
            .map(|(_, rest)| rest.trim())
            .unwrap_or_default();
        if !body.is_empty() {
            writeln!(f, "{body}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for StudyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(
            f,
            "- Progress: {}/{} days",
            self.completed_days(),
            self.total_days()
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        for (heading, text) in [
            ("Overview", &self.overview),
            ("Resources", &self.resources),
            ("Topics", &self.topics),
        ] {
            if !text.trim().is_empty() {
                writeln!(f, "\n## {heading}")?;
                writeln!(f)?;
                writeln!(f, "{}", text.trim())?;
            }
        }

        if self.daily_routines.is_empty() {
            writeln!(f, "\nNo daily routines in this plan.")?;
        } else {
            writeln!(f, "\n## Daily Routines")?;
            writeln!(f)?;
            for (index, routine) in self.daily_routines.iter().enumerate() {
                write!(f, "{}", DayView::new(index, routine))?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.title, self.id, self.completed_days, self.total_days
        )?;
        writeln!(f)?;

        match self.next_day {
            Some(day) => writeln!(f, "- **Next**: Day {day}")?,
            None => writeln!(f, "- **Next**: all days completed")?,
        }
        if let Some(last) = &self.last_completed_at {
            writeln!(f, "- **Last completed**: {}", LocalDateTime(last))?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}
