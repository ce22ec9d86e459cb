//! Day toggling for the Planner and its [`PlanStore`] implementation.

use std::{sync::Arc, time::Instant};

use async_trait::async_trait;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{DayRoutine, StudyPlan},
    params::{Id, ShowDay, ToggleDay},
    progress::{ProgressController, ToggleOutcome},
    store::{DayUpdate, PlanStore, UpdateResponse},
};

impl Planner {
    /// Loads a plan into a progress controller that persists through this
    /// planner.
    ///
    /// A missing plan or a database failure is reported as
    /// [`ProgressError::LoadFailed`](crate::ProgressError::LoadFailed).
    pub async fn open_progress(&self, params: &Id) -> Result<ProgressController<Planner>> {
        let controller = ProgressController::load(Arc::new(self.clone()), params.id)
            .await?
            .with_clock(self.clock.clone())
            .with_sync_timeout(self.sync_timeout);
        Ok(controller)
    }

    /// Loads the plan and toggles one day in a single call.
    pub async fn toggle_day(&self, params: &ToggleDay) -> Result<ToggleOutcome> {
        let day_index = params.day_index()?;
        let mut progress = self.open_progress(&Id { id: params.plan_id }).await?;
        Ok(progress.request_toggle(day_index).await?)
    }

    /// Retrieves one day of a plan, or `None` if the plan or day is missing.
    pub async fn get_day(&self, params: &ShowDay) -> Result<Option<DayRoutine>> {
        let Some(index) = params.day.checked_sub(1) else {
            return Ok(None);
        };
        let plan = self.get_plan(&Id { id: params.plan_id }).await?;
        Ok(plan.and_then(|mut plan| {
            (index < plan.daily_routines.len()).then(|| plan.daily_routines.swap_remove(index))
        }))
    }
}

#[async_trait]
impl PlanStore for Planner {
    async fn fetch_by_id(&self, id: u64) -> Result<StudyPlan> {
        self.get_plan(&Id { id })
            .await?
            .ok_or(PlannerError::PlanNotFound { id })
    }

    async fn update_day(&self, update: &DayUpdate, deadline: Instant) -> Result<UpdateResponse> {
        let db_path = self.db_path.clone();
        let update = update.clone();

        let found = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_day_before(
                update.plan_id,
                update.day_index,
                update.is_completed,
                update.completed_at,
                deadline,
            )
            .map(|found| (found, update))
        })
        .await
        .map_err(PlannerError::join)??;

        Ok(match found {
            (true, _) => UpdateResponse::ok(),
            (false, update) => UpdateResponse::failed(format!(
                "Day {} of plan {} not found",
                update.day_index + 1,
                update.plan_id
            )),
        })
    }
}
