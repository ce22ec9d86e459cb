//! In-process plan store.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::{Duration, Instant},
};

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use super::{DayUpdate, PlanStore, UpdateResponse};
use crate::{
    error::{PlannerError, Result},
    models::StudyPlan,
};

/// How the next `update_day` call should fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMode {
    /// Respond with `success: false` and the given message
    Reject(String),
    /// Fail as if the connection dropped
    Transport(String),
    /// Never respond
    Hang,
}

/// A [`PlanStore`] that keeps plans in memory.
///
/// Failures can be queued with [`MemoryPlanStore::fail_next_update`]; each
/// queued failure is consumed by exactly one `update_day` call. A failed update
/// leaves the stored plan untouched.
#[derive(Debug, Default)]
pub struct MemoryPlanStore {
    plans: Mutex<HashMap<u64, StudyPlan>>,
    failures: Mutex<Vec<FailureMode>>,
    latency: Option<Duration>,
    update_calls: AtomicUsize,
}

impl MemoryPlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every `update_day` response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Adds or replaces a plan.
    pub async fn insert(&self, plan: StudyPlan) {
        self.plans.lock().await.insert(plan.id, plan);
    }

    /// Queues a failure for the next `update_day` call.
    pub async fn fail_next_update(&self, mode: FailureMode) {
        self.failures.lock().await.push(mode);
    }

    /// Number of `update_day` calls received so far, including failed ones.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanStore for MemoryPlanStore {
    async fn fetch_by_id(&self, id: u64) -> Result<StudyPlan> {
        self.plans
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(PlannerError::PlanNotFound { id })
    }

    async fn update_day(&self, update: &DayUpdate, deadline: Instant) -> Result<UpdateResponse> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if Instant::now() >= deadline {
            return Err(PlannerError::Store {
                message: "deadline passed before the update was applied".to_string(),
            });
        }

        let failure = {
            let mut failures = self.failures.lock().await;
            if failures.is_empty() {
                None
            } else {
                Some(failures.remove(0))
            }
        };

        match failure {
            Some(FailureMode::Reject(message)) => {
                debug!("memory store rejecting update for plan {}", update.plan_id);
                return Ok(UpdateResponse::failed(message));
            }
            Some(FailureMode::Transport(message)) => {
                return Err(PlannerError::Store { message });
            }
            Some(FailureMode::Hang) => std::future::pending::<()>().await,
            None => {}
        }

        let mut plans = self.plans.lock().await;
        let Some(plan) = plans.get_mut(&update.plan_id) else {
            return Ok(UpdateResponse::failed(format!(
                "Plan with ID {} not found",
                update.plan_id
            )));
        };
        let Some(day) = plan.daily_routines.get_mut(update.day_index) else {
            return Ok(UpdateResponse::failed(format!(
                "Day index {} is out of range",
                update.day_index
            )));
        };

        day.is_completed = update.is_completed;
        day.completed_at = update.completed_at;
        Ok(UpdateResponse::ok())
    }
}
