//! The persistence contract used by the progress protocol.
//!
//! A [`PlanStore`] is a document store holding one record per study plan. The
//! progress controller only needs two things from it: loading a plan by id and
//! a partial update that touches a single day's completion fields.
//!
//! Two implementations ship with the crate:
//!
//! - [`crate::Planner`], backed by SQLite
//! - [`MemoryPlanStore`], an in-process store with failure injection

use std::time::Instant;

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::StudyPlan};

pub mod memory;

pub use memory::{FailureMode, MemoryPlanStore};

/// Request body for a single-day update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayUpdate {
    pub plan_id: u64,
    pub day_index: usize,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
}

/// Response body for a single-day update.
///
/// A transport-level failure is reported as an `Err` from
/// [`PlanStore::update_day`]; an application-level failure as
/// `success == false` with an optional message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateResponse {
    /// A confirmed update.
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// An update the store refused.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Storage backend for study plans.
///
/// `update_day` must behave as a partial update: it changes only the targeted
/// day's `is_completed` and `completed_at`, and concurrent updates to
/// different days of the same plan must not overwrite one another.
///
/// An update must not take effect after its `deadline`. A store that cannot
/// finish in time gives up and reports an error, so a caller that stops
/// waiting at the deadline never sees its "failed" write land later.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Loads a plan with all of its daily routines.
    ///
    /// Returns `Err(PlannerError::PlanNotFound)` if the plan does not exist.
    async fn fetch_by_id(&self, id: u64) -> Result<StudyPlan>;

    /// Writes one day's completion fields, or nothing if `deadline` passes
    /// first.
    async fn update_day(&self, update: &DayUpdate, deadline: Instant) -> Result<UpdateResponse>;
}
