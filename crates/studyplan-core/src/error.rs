//! Error types for the study plan library.

use std::path::PathBuf;

use jiff::SignedDuration;
use thiserror::Error;

/// Errors raised by the day-completion protocol.
///
/// Validation failures ([`ProgressError::OutOfSequence`],
/// [`ProgressError::CooldownActive`], [`ProgressError::DayBusy`],
/// [`ProgressError::DayOutOfRange`]) are raised before any local mutation or
/// store call. [`ProgressError::SyncFailed`] is raised after the optimistic
/// mutation has been rolled back.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProgressError {
    /// The previous day must be completed first
    #[error("Please complete Day {blocking_day} before starting Day {}.", .blocking_day + 1)]
    OutOfSequence {
        /// 1-indexed number of the day that blocks the transition
        blocking_day: usize,
    },
    /// Another day was completed less than the cooldown window ago
    #[error(
        "Please wait {:.1} more hours before marking another day complete.",
        rounded_hours(.remaining)
    )]
    CooldownActive { remaining: SignedDuration },
    /// The store did not confirm the change; local state was rolled back
    #[error("Couldn't save progress for Day {}: {reason}", .day + 1)]
    SyncFailed { day: usize, reason: String },
    /// The plan could not be loaded into a progress view
    #[error("Failed to load plan {plan_id}: {reason}")]
    LoadFailed { plan_id: u64, reason: String },
    /// The day index does not exist in the plan
    #[error("Day index {index} is out of range. Plan has {len} days")]
    DayOutOfRange { index: usize, len: usize },
    /// A toggle for this day is still waiting on the store
    #[error("Day {} is still saving, try again once it settles", .day + 1)]
    DayBusy { day: usize },
}

/// Hours in `remaining`, rounded half away from zero to one decimal place.
fn rounded_hours(remaining: &SignedDuration) -> f64 {
    (remaining.as_secs_f64() / 360.0).round() / 10.0
}

impl ProgressError {
    /// Short heading shown above the message in notifications.
    pub fn title(&self) -> &'static str {
        match self {
            ProgressError::OutOfSequence { .. } => "One step at a time!",
            ProgressError::CooldownActive { .. } => "Slow down!",
            ProgressError::SyncFailed { .. } => "Sync Failed",
            ProgressError::LoadFailed { .. } => "Load Failed",
            ProgressError::DayOutOfRange { .. } => "Unknown day",
            ProgressError::DayBusy { .. } => "Still saving",
        }
    }

    /// Hours left on the cooldown window, rounded to one decimal place.
    pub fn hours_left(&self) -> Option<f64> {
        match self {
            ProgressError::CooldownActive { remaining } => Some(rounded_hours(remaining)),
            _ => None,
        }
    }

    /// Whether the error was raised before any local mutation took place.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            ProgressError::SyncFailed { .. } | ProgressError::LoadFailed { .. }
        )
    }
}

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The plan store could not be reached or gave up before answering
    #[error("Store error: {message}")]
    Store { message: String },
    /// Day-completion protocol errors
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        PlannerError::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
