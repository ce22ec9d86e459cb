//! Optimistic day toggling against a [`PlanStore`].

use std::{sync::Arc, time::Duration};

use jiff::Timestamp;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use super::{
    clock::{Clock, SystemClock},
    gate,
};
use crate::{
    error::ProgressError,
    models::{DayRoutine, DaySyncState, StudyPlan},
    store::{DayUpdate, PlanStore},
};

/// Default bound on a single store update.
pub const DEFAULT_SYNC_TIMEOUT: Duration = Duration::from_secs(10);

/// Extra wait past the deadline for a store to report that it gave up.
///
/// A store that ignores its deadline is abandoned once this runs out too.
pub const DEADLINE_GRACE: Duration = Duration::from_secs(1);

/// The confirmed result of a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub day_index: usize,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
}

/// An optimistic change that has been applied locally but not yet confirmed.
///
/// Produced by [`ProgressController::begin_toggle`] and consumed by
/// [`ProgressController::settle`].
#[derive(Debug)]
#[must_use = "a pending toggle leaves the day busy until it is settled"]
pub struct PendingToggle {
    previous: DayRoutine,
    update: DayUpdate,
}

impl PendingToggle {
    /// The update to send to the store.
    pub fn update(&self) -> &DayUpdate {
        &self.update
    }

    pub fn day_index(&self) -> usize {
        self.update.day_index
    }
}

/// Owns one plan's daily routines and drives the completion protocol.
///
/// Every toggle follows the same path: validate, mutate locally, send the
/// change to the store, then either keep the change or restore the day.
pub struct ProgressController<S> {
    plan_id: u64,
    routines: Vec<DayRoutine>,
    sync: Vec<DaySyncState>,
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    sync_timeout: Duration,
}

impl<S: PlanStore> ProgressController<S> {
    /// Creates a controller for a plan that has already been loaded.
    pub fn new(plan: StudyPlan, store: Arc<S>) -> Self {
        let sync = vec![DaySyncState::Synced; plan.daily_routines.len()];
        Self {
            plan_id: plan.id,
            routines: plan.daily_routines,
            sync,
            store,
            clock: Arc::new(SystemClock),
            sync_timeout: DEFAULT_SYNC_TIMEOUT,
        }
    }

    /// Fetches the plan from the store and wraps it in a controller.
    pub async fn load(store: Arc<S>, plan_id: u64) -> Result<Self, ProgressError> {
        let plan = store
            .fetch_by_id(plan_id)
            .await
            .map_err(|e| ProgressError::LoadFailed {
                plan_id,
                reason: e.to_string(),
            })?;
        debug!(
            "loaded plan {plan_id} with {} days",
            plan.daily_routines.len()
        );
        Ok(Self::new(plan, store))
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets how long to wait for the store before rolling back.
    pub fn with_sync_timeout(mut self, timeout: Duration) -> Self {
        self.sync_timeout = timeout;
        self
    }

    pub fn plan_id(&self) -> u64 {
        self.plan_id
    }

    /// Current local view of the routines, including unconfirmed changes.
    pub fn routines(&self) -> &[DayRoutine] {
        &self.routines
    }

    pub fn sync_state(&self, day_index: usize) -> Option<DaySyncState> {
        self.sync.get(day_index).copied()
    }

    /// Validates a toggle of `day_index` and applies it locally.
    ///
    /// On success the day holds its new value and is `PendingConfirm` until
    /// the returned [`PendingToggle`] is passed to [`Self::settle`]. On error
    /// nothing has changed.
    pub fn begin_toggle(&mut self, day_index: usize) -> Result<PendingToggle, ProgressError> {
        let Some(day) = self.routines.get(day_index) else {
            return Err(ProgressError::DayOutOfRange {
                index: day_index,
                len: self.routines.len(),
            });
        };

        if self.sync[day_index].is_busy() {
            return Err(ProgressError::DayBusy { day: day_index });
        }

        let now = self.clock.now();
        let is_marking_complete = !day.is_completed;

        if is_marking_complete {
            if let Err(rejection) = gate::check_completion(&self.routines, day_index, now) {
                info!(
                    "rejected completion of day {} in plan {}: {rejection}",
                    day_index + 1,
                    self.plan_id
                );
                return Err(rejection);
            }
        }

        let previous = day.clone();
        let completed_at = is_marking_complete.then_some(now);
        self.routines[day_index].set_completed(completed_at);
        self.sync[day_index] = DaySyncState::PendingConfirm;

        debug!(
            "optimistically set day {} of plan {} to completed={is_marking_complete}",
            day_index + 1,
            self.plan_id
        );

        Ok(PendingToggle {
            previous,
            update: DayUpdate {
                plan_id: self.plan_id,
                day_index,
                is_completed: is_marking_complete,
                completed_at,
            },
        })
    }

    /// Resolves a pending toggle with the store's answer.
    ///
    /// `Ok(())` keeps the optimistic change. `Err(reason)` restores the day to
    /// its value before [`Self::begin_toggle`] and returns
    /// [`ProgressError::SyncFailed`]. Other days are left alone, so toggles on
    /// different days can be in flight together. A toggle whose day does not
    /// exist in this controller is refused with [`ProgressError::DayOutOfRange`].
    pub fn settle(
        &mut self,
        pending: PendingToggle,
        confirmation: Result<(), String>,
    ) -> Result<ToggleOutcome, ProgressError> {
        let PendingToggle { previous, update } = pending;
        let day_index = update.day_index;
        let len = self.routines.len();
        let (Some(routine), Some(sync)) = (
            self.routines.get_mut(day_index),
            self.sync.get_mut(day_index),
        ) else {
            return Err(ProgressError::DayOutOfRange {
                index: day_index,
                len,
            });
        };

        match confirmation {
            Ok(()) => {
                *sync = DaySyncState::Synced;
                Ok(ToggleOutcome {
                    day_index,
                    is_completed: update.is_completed,
                    completed_at: update.completed_at,
                })
            }
            Err(reason) => {
                *sync = DaySyncState::RollbackPending;
                warn!(
                    "rolling back day {} of plan {}: {reason}",
                    day_index + 1,
                    self.plan_id
                );
                *routine = previous;
                *sync = DaySyncState::Synced;
                Err(ProgressError::SyncFailed {
                    day: day_index,
                    reason,
                })
            }
        }
    }

    /// Toggles `day_index` end to end: validate, mutate, persist, reconcile.
    ///
    /// Exactly one store call is made when validation passes and none when it
    /// fails.
    pub async fn request_toggle(&mut self, day_index: usize) -> Result<ToggleOutcome, ProgressError> {
        let pending = self.begin_toggle(day_index)?;

        // The store must not commit after `deadline`. The grace period is for
        // hearing back that it gave up.
        let deadline = Instant::now() + self.sync_timeout;
        let sent = self.store.update_day(pending.update(), deadline.into_std());

        let confirmation = match tokio::time::timeout_at(deadline + DEADLINE_GRACE, sent).await {
            Ok(Ok(response)) if response.success => Ok(()),
            Ok(Ok(response)) => Err(response
                .error
                .unwrap_or_else(|| "store did not confirm the update".to_string())),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(format!(
                "no response from store within {}s",
                self.sync_timeout.as_secs_f64()
            )),
        };

        self.settle(pending, confirmation)
    }
}
