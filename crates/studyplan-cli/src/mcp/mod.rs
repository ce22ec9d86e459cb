//! MCP server for studyplan
//!
//! Exposes plan management and day toggling as Model Context Protocol tools
//! over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use studyplan_core::Planner;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{CreatePlan, DeletePlan, Empty, Id, McpResult, ShowDay, ToggleDay};

/// MCP server for studyplan
#[derive(Clone)]
pub struct StudyplanMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StudyplanMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "create_plan",
        description = "Save a generated study plan. Requires a title and dailyRoutines, an ordered list with the full content of each day (the first line becomes the day's title). Optional overview, resources and topics. Every day starts incomplete. Returns the new plan ID."
    )]
    async fn create_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        self.handlers().create_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List all study plans, newest first, with completed/total days, the next day to work on and the time of the last completion."
    )]
    async fn list_plans(&self, _params: Parameters<Empty>) -> McpResult {
        self.handlers().list_plans().await
    }

    #[tool(
        name = "show_plan",
        description = "Show a study plan with its overview, resources, topics and every daily routine with its completion status."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "show_day",
        description = "Show one day of a study plan. Days are numbered from 1."
    )]
    async fn show_day(&self, params: Parameters<ShowDay>) -> McpResult {
        self.handlers().show_day(params).await
    }

    #[tool(
        name = "toggle_day",
        description = "Mark a day complete, or un-mark it if it is already complete. Days are numbered from 1. Completing a day requires the previous day to be complete and at least 20 hours since the most recent completion of any other day; otherwise the call fails with the reason and nothing changes. Un-marking is always allowed and clears the completion time."
    )]
    async fn toggle_day(&self, params: Parameters<ToggleDay>) -> McpResult {
        self.handlers().toggle_day(params).await
    }

    #[tool(
        name = "delete_plan",
        description = "Permanently delete a study plan and all of its days. Requires confirmed=true. This cannot be undone."
    )]
    async fn delete_plan(&self, params: Parameters<DeletePlan>) -> McpResult {
        self.handlers().delete_plan(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StudyplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "studyplan".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"studyplan tracks progress through study plans one day at a time.

## Core Concepts
- **Plans**: a title, optional overview/resources/topics, and an ordered list of daily routines
- **Days**: numbered from 1; each is either completed (with a completion time) or not

## Completion Rules
- Day N can only be completed after Day N-1
- A completion needs 20 hours since the latest completion of any other day
- Un-marking a completed day is always allowed

## Workflow
1. Save a generated plan with `create_plan`
2. Use `list_plans` to find the next day to work on
3. Read the day with `show_day`, then mark it with `toggle_day`
4. `show_plan` shows every day with its status

Rejected toggles return the reason (for example how many hours remain) and change nothing."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StudyplanMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting studyplan MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_core::PlannerBuilder;
    use tempfile::TempDir;

    async fn create_test_server() -> (TempDir, StudyplanMcpServer) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let planner = PlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .expect("Failed to create planner");
        (temp_dir, StudyplanMcpServer::new(planner))
    }

    fn tool_args<T: serde::de::DeserializeOwned>(json: serde_json::Value) -> Parameters<T> {
        Parameters(serde_json::from_value(json).expect("valid tool arguments"))
    }

    #[tokio::test]
    async fn test_tools_are_registered() {
        let (_temp_dir, server) = create_test_server().await;
        let names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();

        for expected in [
            "create_plan",
            "list_plans",
            "show_plan",
            "show_day",
            "toggle_day",
            "delete_plan",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing tool {expected}");
        }
    }

    #[tokio::test]
    async fn test_toggle_rejection_is_invalid_params() {
        let (_temp_dir, server) = create_test_server().await;

        server
            .create_plan(tool_args(serde_json::json!({
                "title": "Maths Routine",
                "dailyRoutines": ["Algebra", "Calculus"]
            })))
            .await
            .expect("create plan");

        let err = server
            .toggle_day(tool_args(serde_json::json!({ "planId": 1, "day": 2 })))
            .await
            .unwrap_err();

        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Please complete Day 1"));
    }

    #[tokio::test]
    async fn test_toggle_first_day_succeeds() {
        let (_temp_dir, server) = create_test_server().await;

        server
            .create_plan(tool_args(serde_json::json!({
                "title": "Maths Routine",
                "dailyRoutines": ["Algebra"]
            })))
            .await
            .expect("create plan");

        let result = server
            .toggle_day(tool_args(serde_json::json!({ "planId": 1, "day": 1 })))
            .await
            .expect("toggle");
        assert_eq!(result.is_error, Some(false));
    }
}
