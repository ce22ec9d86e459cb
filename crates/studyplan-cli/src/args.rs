use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DayCommands, PlanCommands};

/// Track progress through a study plan one day at a time
///
/// A study plan is an ordered list of daily routines. Days are completed in
/// order, and a new day can only be marked complete 20 hours after the last
/// completion. The `serve` command exposes the same operations over MCP
/// (Model Context Protocol) for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "studyplan")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/studyplan/studyplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the studyplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage study plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Mark days complete and inspect them
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Start the MCP server
    Serve,
}
