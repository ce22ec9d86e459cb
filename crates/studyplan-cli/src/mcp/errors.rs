//! Error handling utilities for the MCP server

use rmcp::ErrorData;
use studyplan_core::PlannerError;

/// Converts a planner error into an MCP error.
///
/// Caller mistakes and rejected toggles become `invalid_params` so the client
/// sees the user-facing message; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    match error {
        PlannerError::InvalidInput { .. } | PlannerError::PlanNotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        PlannerError::Progress(progress) if progress.is_rejection() => {
            ErrorData::invalid_params(format!("{}: {progress}", progress.title()), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
