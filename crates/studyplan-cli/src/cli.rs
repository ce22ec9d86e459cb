//! Subcommand arguments and their handlers.
//!
//! Each clap argument struct converts into a core parameter type, so the core
//! crate stays free of clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use studyplan_core::{
    display::{CreateResult, DayView, DeleteResult, OperationStatus, ToggleResult},
    params::{CreatePlan, DeletePlan, Id, ShowDay, ToggleDay},
    Planner, PlannerError,
};

use crate::renderer::TerminalRenderer;

/// Save a new study plan
///
/// Days are given in order with repeated `--day` flags; the first line of
/// each becomes the day's title. Alternatively `--from-file` reads a JSON
/// document with `title`, `overview`, `resources`, `topics` and
/// `dailyRoutines`.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the plan
    #[arg(required_unless_present = "from_file")]
    pub title: Option<String>,
    #[arg(long, default_value = "", help = "General overview of the plan")]
    pub overview: String,
    #[arg(long, default_value = "", help = "Recommended study resources")]
    pub resources: String,
    #[arg(long, default_value = "", help = "Topics covered by the plan")]
    pub topics: String,
    #[arg(
        long = "day",
        value_name = "TEXT",
        help = "Content of one day; repeat for each day in order"
    )]
    pub days: Vec<String>,
    #[arg(
        long,
        value_name = "JSON",
        conflicts_with_all = ["title", "days"],
        help = "Read the whole plan from a JSON file"
    )]
    pub from_file: Option<PathBuf>,
}

impl CreatePlanArgs {
    /// Builds the core parameters, reading `--from-file` if given.
    pub fn into_params(self) -> Result<CreatePlan> {
        if let Some(path) = self.from_file {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read plan file {}", path.display()))?;
            return CreatePlan::from_json(&text)
                .with_context(|| format!("Failed to parse plan file {}", path.display()));
        }

        Ok(CreatePlan {
            title: self.title.unwrap_or_default(),
            overview: self.overview,
            resources: self.resources,
            topics: self.topics,
            daily_routines: self.days,
        })
    }
}

/// Show details of a specific plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Unique identifier of the plan to show")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    #[arg(help = "Unique identifier of the plan to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Save a new study plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans with their progress
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Mark a day complete, or un-mark it if it is already complete
///
/// Completing a day requires the previous day to be complete and 20 hours to
/// have passed since the most recent completion of any other day. Un-marking
/// is always allowed.
#[derive(Args)]
pub struct ToggleDayArgs {
    #[arg(help = "Unique identifier of the plan")]
    pub plan_id: u64,
    #[arg(help = "Day number, starting at 1")]
    pub day: usize,
}

impl From<ToggleDayArgs> for ToggleDay {
    fn from(val: ToggleDayArgs) -> Self {
        ToggleDay {
            plan_id: val.plan_id,
            day: val.day,
        }
    }
}

/// Show a single day of a plan
#[derive(Args)]
pub struct ShowDayArgs {
    #[arg(help = "Unique identifier of the plan")]
    pub plan_id: u64,
    #[arg(help = "Day number, starting at 1")]
    pub day: usize,
}

impl From<ShowDayArgs> for ShowDay {
    fn from(val: ShowDayArgs) -> Self {
        ShowDay {
            plan_id: val.plan_id,
            day: val.day,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Mark a day complete, or un-mark it
    #[command(alias = "t")]
    Toggle(ToggleDayArgs),
    /// Show a single day of a plan
    #[command(alias = "s")]
    Show(ShowDayArgs),
}

/// Runs CLI commands against a planner and renders the output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let params = args.into_params()?;
                debug!("creating plan with {} days", params.daily_routines.len());
                let plan = self.planner.create_plan(&params).await?;
                self.renderer
                    .render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let params = Id::from(args);
                let Some(plan) = self.planner.get_plan(&params).await? else {
                    bail!("Plan with ID {} not found", params.id);
                };
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Delete(args) => {
                let params = DeletePlan::from(args);
                if !params.confirmed {
                    let status = OperationStatus::failure(format!(
                        "Deleting plan {} cannot be undone. Re-run with --confirm to proceed.",
                        params.id
                    ));
                    self.renderer.render(&status.to_string())?;
                    bail!("Deletion of plan {} was not confirmed", params.id);
                }
                match self.planner.delete_plan(&params).await? {
                    Some(plan) => self.renderer.render(&DeleteResult::new(plan).to_string()),
                    None => bail!("Plan with ID {} not found", params.id),
                }
            }
        }
    }

    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Toggle(args) => {
                let params = ToggleDay::from(args);
                let outcome = self
                    .planner
                    .toggle_day(&params)
                    .await
                    .map_err(|e| match e {
                        PlannerError::Progress(progress) => {
                            anyhow!("{} {progress}", progress.title())
                        }
                        other => other.into(),
                    })?;
                self.renderer
                    .render(&ToggleResult::new(params.plan_id, outcome).to_string())
            }
            DayCommands::Show(args) => {
                let params = ShowDay::from(args);
                let Some(routine) = self.planner.get_day(&params).await? else {
                    bail!("Day {} of plan {} not found", params.day, params.plan_id);
                };
                let view = DayView {
                    number: params.day,
                    routine: &routine,
                };
                self.renderer.render(&view.to_string())
            }
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self.planner.list_plans_summary().await?;
        self.renderer.render(&summaries.to_string())
    }
}
