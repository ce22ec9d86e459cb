//! Study plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::DayRoutine;

/// Represents a saved study plan with its daily routines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyPlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Title of the plan
    pub title: String,

    /// General overview of the plan
    #[serde(default)]
    pub overview: String,

    /// Recommended study resources
    #[serde(default)]
    pub resources: String,

    /// Topics covered by the plan
    #[serde(default)]
    pub topics: String,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Daily routines, index = day number - 1
    #[serde(default)]
    pub daily_routines: Vec<DayRoutine>,
}

impl StudyPlan {
    /// Number of days in the plan.
    pub fn total_days(&self) -> usize {
        self.daily_routines.len()
    }

    /// Number of days marked complete.
    pub fn completed_days(&self) -> usize {
        self.daily_routines
            .iter()
            .filter(|day| day.is_completed)
            .count()
    }

    /// Index of the first incomplete day, or `None` once every day is done.
    pub fn next_day_index(&self) -> Option<usize> {
        self.daily_routines.iter().position(|day| !day.is_completed)
    }

    /// Most recent completion timestamp across all days.
    pub fn last_completed_at(&self) -> Option<Timestamp> {
        self.daily_routines
            .iter()
            .filter_map(|day| day.completed_at)
            .max()
    }
}
