//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while the wrappers in this module give collections and operation results
//! a consistent markdown shape for the terminal renderer and the MCP server.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers &   │    │   Formatted     │
//! │ (StudyPlan, ..) │───▶│  Result Types   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries)
//! - [`results`]: Operation result types (CreateResult, DeleteResult, ToggleResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use studyplan_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Plan saved".to_string());
//! assert!(success.to_string().starts_with("Success:"));
//!
//! let error = OperationStatus::failure("Couldn't save progress.".to_string());
//! assert!(error.to_string().starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PlanSummaries;
pub use datetime::LocalDateTime;
pub use models::DayView;
pub use results::{CreateResult, DeleteResult, ToggleResult};
pub use status::OperationStatus;
