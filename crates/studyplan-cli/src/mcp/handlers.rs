//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use studyplan_core::{
    display::{CreateResult, DayView, DeleteResult, OperationStatus, ToggleResult},
    params as core,
    Planner,
};

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// `#[serde(transparent)]` passes JSON straight through to the core type,
/// which keeps the core crate free of rmcp.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreatePlan = McpParams<core::CreatePlan>;
pub type DeletePlan = McpParams<core::DeletePlan>;
pub type ToggleDay = McpParams<core::ToggleDay>;
pub type ShowDay = McpParams<core::ShowDay>;

/// Tools that take no arguments.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct Empty {}

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub async fn create_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("create_plan: {:?}", params);

        let plan = self
            .planner
            .create_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create plan", &e))?;

        text(CreateResult::new(plan).to_string())
    }

    pub async fn list_plans(&self) -> McpResult {
        debug!("list_plans");

        let summaries = self
            .planner
            .list_plans_summary()
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let title = if summaries.is_empty() {
            "No study plans found".to_string()
        } else {
            format!(
                "Study Plans ({} of {} in progress)",
                summaries.in_progress().count(),
                summaries.len()
            )
        };
        text(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let plan = self
            .planner
            .get_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Plan with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;

        text(plan.to_string())
    }

    pub async fn show_day(&self, Parameters(params): Parameters<ShowDay>) -> McpResult {
        debug!("show_day: {:?}", params);

        let inner = params.as_ref();
        let routine = self
            .planner
            .get_day(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to get day", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Day {} of plan {} not found", inner.day, inner.plan_id),
                    None,
                )
            })?;

        text(
            DayView {
                number: inner.day,
                routine: &routine,
            }
            .to_string(),
        )
    }

    pub async fn toggle_day(&self, Parameters(params): Parameters<ToggleDay>) -> McpResult {
        debug!("toggle_day: {:?}", params);

        let inner = params.as_ref();
        let outcome = self
            .planner
            .toggle_day(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to toggle day", &e))?;

        text(ToggleResult::new(inner.plan_id, outcome).to_string())
    }

    pub async fn delete_plan(&self, Parameters(params): Parameters<DeletePlan>) -> McpResult {
        debug!("delete_plan: {:?}", params);

        let inner = params.as_ref();
        let deleted = self
            .planner
            .delete_plan(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to delete plan", &e))?;

        match deleted {
            Some(plan) => text(DeleteResult::new(plan).to_string()),
            None => text(
                OperationStatus::failure(format!("Plan with ID {} not found", inner.id))
                    .to_string(),
            ),
        }
    }
}
