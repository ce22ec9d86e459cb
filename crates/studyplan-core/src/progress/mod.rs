//! The day-completion protocol for a study plan.
//!
//! A day may be marked complete only when
//!
//! 1. the previous day is already complete, and
//! 2. at least [`COOLDOWN`] (20 hours) has passed since the most recent
//!    completion of any other day in the plan.
//!
//! Un-marking a completed day is always allowed and clears its timestamp.
//!
//! [`ProgressController`] applies accepted changes locally before the store
//! confirms them and restores the day if the store fails:
//!
//! ```text
//! request_toggle(i)
//!   ├─ validate ──────────────▶ OutOfSequence / CooldownActive (no change, no call)
//!   ├─ apply locally          (day i: PendingConfirm)
//!   ├─ PlanStore::update_day
//!   ├─ ok ────────────────────▶ ToggleOutcome (day i: Synced)
//!   └─ failed / timed out ────▶ restore day i, SyncFailed
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use jiff::{SignedDuration, Timestamp};
//! use studyplan_core::{
//!     models::{DayRoutine, StudyPlan},
//!     progress::{ManualClock, ProgressController},
//!     store::MemoryPlanStore,
//!     ProgressError,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let start = Timestamp::from_second(1_700_000_000).unwrap();
//! let store = Arc::new(MemoryPlanStore::new());
//! store
//!     .insert(StudyPlan {
//!         id: 7,
//!         title: "Physics Routine".to_string(),
//!         overview: String::new(),
//!         resources: String::new(),
//!         topics: String::new(),
//!         created_at: start,
//!         updated_at: start,
//!         daily_routines: vec![DayRoutine::new("Vectors"), DayRoutine::new("Kinematics")],
//!     })
//!     .await;
//!
//! let clock = Arc::new(ManualClock::new(start));
//! let mut progress = ProgressController::load(store, 7)
//!     .await
//!     .unwrap()
//!     .with_clock(clock.clone());
//!
//! progress.request_toggle(0).await.unwrap();
//!
//! clock.advance(SignedDuration::from_hours(5));
//! let err = progress.request_toggle(1).await.unwrap_err();
//! assert!(matches!(err, ProgressError::CooldownActive { .. }));
//! assert_eq!(err.hours_left(), Some(15.0));
//! # }
//! ```

pub mod clock;
pub mod controller;
pub mod gate;


pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{PendingToggle, ProgressController, ToggleOutcome, DEFAULT_SYNC_TIMEOUT};
pub use gate::{check_completion, cooldown_remaining, COOLDOWN};
