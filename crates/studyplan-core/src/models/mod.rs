//! Data models for study plans and their daily routines.
//!
//! A [`StudyPlan`] owns an ordered list of [`DayRoutine`] entries where the
//! position in the list is the day number minus one. Only the completion
//! fields of a routine ever change after the plan is saved, and only through
//! the progress protocol in [`crate::progress`].
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that presentation stays separate from the
//! data structures.
//!
//! # Examples
//!
//! ```rust
//! use studyplan_core::models::DayRoutine;
//!
//! let day = DayRoutine::new("  Kinematics basics\n- read chapter 2\n- 20 problems");
//! assert_eq!(day.title, "Kinematics basics");
//! assert!(!day.is_completed);
//! assert!(day.completed_at.is_none());
//! ```

pub mod plan;
pub mod routine;
pub mod summary;
pub mod sync;

#[cfg(test)]
mod tests;

pub use plan::StudyPlan;
pub use routine::DayRoutine;
pub use summary::PlanSummary;
pub use sync::DaySyncState;
