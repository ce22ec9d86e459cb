//! studyplan CLI application
//!
//! Command-line interface and MCP server for gated daily study routines.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StudyplanMcpServer};
use renderer::TerminalRenderer;
use studyplan_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("studyplan started");

    match command {
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Day { command }) => {
            Cli::new(planner, renderer)
                .handle_day_command(command)
                .await
        }
        Some(Serve) => run_stdio_server(StudyplanMcpServer::new(planner))
            .await
            .context("MCP server failed"),
        None => Cli::new(planner, renderer).list_plans().await,
    }
}
