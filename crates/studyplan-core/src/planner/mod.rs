//! High-level planner API for managing study plans.
//!
//! The [`Planner`] is the async facade over the SQLite database. Blocking
//! database work runs on `tokio::task::spawn_blocking`, and the planner also
//! implements [`PlanStore`](crate::store::PlanStore) so a
//! [`ProgressController`](crate::progress::ProgressController) can persist
//! day toggles through it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (plan_handlers, │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │  progress_ops)  │    │  PlanStore)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan database operations (create, get, list, delete by id)
//! - [`plan_handlers`]: Plan summaries and confirmed deletion
//! - [`progress_ops`]: Day toggling and the [`PlanStore`](crate::store::PlanStore) impl
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use studyplan_core::{params::{CreatePlan, ToggleDay}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         title: "Physics Routine for JEE Advanced in 2 days.".to_string(),
//!         daily_routines: vec!["Vectors\n- 20 problems".to_string(), "Kinematics".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let outcome = planner.toggle_day(&ToggleDay { plan_id: plan.id, day: 1 }).await?;
//! assert!(outcome.is_completed);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc, time::Duration};

use crate::progress::Clock;

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;
pub mod progress_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing study plans.
#[derive(Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) sync_timeout: Duration,
    pub(crate) clock: Arc<dyn Clock>,
}
