//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StudyPlan;

/// Summary information about a plan with progress statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Title of the plan
    pub title: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of days
    pub total_days: u32,
    /// Number of completed days
    pub completed_days: u32,
    /// Most recent completion, if any
    pub last_completed_at: Option<Timestamp>,
    /// 1-indexed number of the first incomplete day, `None` once finished
    pub next_day: Option<u32>,
}

impl From<&StudyPlan> for PlanSummary {
    fn from(plan: &StudyPlan) -> Self {
        Self {
            id: plan.id,
            title: plan.title.clone(),
            created_at: plan.created_at,
            total_days: plan.total_days() as u32,
            completed_days: plan.completed_days() as u32,
            last_completed_at: plan.last_completed_at(),
            next_day: plan.next_day_index().map(|index| index as u32 + 1),
        }
    }
}
