//! Core library for the studyplan daily routine tracker.
//!
//! A study plan is an ordered list of daily routines. This crate stores plans
//! in SQLite and enforces how days may be marked complete:
//!
//! - a day can only be completed after the day before it
//! - a new completion needs 20 hours since the latest completion of any
//!   other day
//! - un-marking a day is always allowed and clears its timestamp
//!
//! Toggles are applied locally first and rolled back if the store does not
//! confirm them. See [`progress`] for the state machine and [`store`] for the
//! persistence seam it talks to.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use studyplan_core::{
//!     params::{CreatePlan, ToggleDay},
//!     PlannerBuilder, ProgressError,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         title: "Chemistry Routine for NEET in 2 days.".to_string(),
//!         daily_routines: vec!["Atomic structure".to_string(), "Chemical bonding".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! planner.toggle_day(&ToggleDay { plan_id: plan.id, day: 1 }).await?;
//!
//! // Day 2 is locked until 20 hours have passed
//! match planner.toggle_day(&ToggleDay { plan_id: plan.id, day: 2 }).await {
//!     Err(studyplan_core::PlannerError::Progress(ProgressError::CooldownActive { .. })) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod progress;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DayView, DeleteResult, LocalDateTime, OperationStatus, PlanSummaries,
    ToggleResult,
};
pub use error::{PlannerError, ProgressError, Result};
pub use models::{DayRoutine, DaySyncState, PlanSummary, StudyPlan};
pub use params::{CreatePlan, DeletePlan, Id, ShowDay, ToggleDay};
pub use planner::{Planner, PlannerBuilder};
pub use progress::{Clock, ManualClock, ProgressController, SystemClock, ToggleOutcome};
pub use store::{DayUpdate, PlanStore, UpdateResponse};
