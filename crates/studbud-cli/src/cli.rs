//! Command-line interface definitions using clap
//!
//! This module defines the CLI subcommand structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ## Parameter Wrapper Pattern Implementation
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and converts it into the matching core parameter type via `From`. This
//! keeps CLI concerns (help text, aliases, value parsing) out of the core
//! parameter definitions, which stay interface-agnostic.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use studbud_core::{
    display::OperationStatus,
    models::{PlanStatus, PlanType},
    params::{CreatePlan, DeletePlan, Id, ListPlans},
    Planner,
};

use crate::renderer::TerminalRenderer;

/// Create a new study plan
///
/// CLI wrapper for CreatePlan that adds clap-specific argument handling
/// including short/long flags, help text generation, and input validation.
/// The task schedule is generated from these parameters at creation time.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the plan
    pub title: String,
    /// Kind of plan, selecting the generation strategy
    #[arg(short = 't', long = "type", value_enum, default_value_t = PlanTypeArg::Exam)]
    pub plan_type: PlanTypeArg,
    /// Subject to study, matched against the built-in topic catalogs
    #[arg(short, long)]
    pub subject: String,
    /// First day of the study window (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: jiff::civil::Date,
    /// Last day of the study window, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: jiff::civil::Date,
    /// Daily time budget in hours (1 to 12)
    #[arg(long, default_value_t = 2.0)]
    pub daily_hours: f64,
    /// Weak topics to prioritize - comma-separated list
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Weak topics to prioritize as comma-separated list"
    )]
    pub weaknesses: Vec<String>,
    /// Preferred learning methods - comma-separated list
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Preferred learning methods as comma-separated list"
    )]
    pub learning_methods: Vec<String>,
    /// Free-text goals for the plan
    #[arg(short, long)]
    pub goals: Option<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    /// Convert CLI arguments to core parameter structure
    ///
    /// This explicit conversion ensures type safety and makes the boundary
    /// between CLI concerns and core logic clear and verifiable.
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            title: val.title,
            plan_type: val.plan_type.into(),
            subject: val.subject,
            start_date: val.start_date,
            end_date: val.end_date,
            daily_hours: val.daily_hours,
            weaknesses: val.weaknesses,
            learning_methods: val.learning_methods,
            goals: val.goals,
        }
    }
}

/// List study plans
///
/// Lists every plan by default; use --status to restrict the listing to
/// active, paused, or completed plans.
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only show plans with this status
    #[arg(long, value_enum)]
    pub status: Option<PlanStatusArg>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            status: val.status.map(Into::into),
        }
    }
}

/// Show details of a specific plan
///
/// Display comprehensive information about a plan including its window,
/// progress, and every generated task with its current status.
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(help = "Unique identifier of the plan to show details for")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Toggle a plan between active and paused
///
/// Active plans pause; paused plans resume. Toggling a completed plan
/// reopens it as active.
#[derive(Args)]
pub struct TogglePlanArgs {
    /// ID of the plan to toggle
    #[arg(help = "Unique identifier of the plan to pause or resume")]
    pub id: u64,
}

impl From<TogglePlanArgs> for Id {
    fn from(val: TogglePlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Mark a plan as completed
#[derive(Args)]
pub struct CompletePlanArgs {
    /// ID of the plan to mark completed
    #[arg(help = "Unique identifier of the plan to mark as completed")]
    pub id: u64,
}

impl From<CompletePlanArgs> for Id {
    fn from(val: CompletePlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
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
    /// Create a new plan with a generated schedule
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Toggle a plan between active and paused
    #[command(alias = "t")]
    Toggle(TogglePlanArgs),
    /// Mark a plan as completed
    Complete(CompletePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// List all tasks of a plan
///
/// Tasks print in generation order by default, which groups them by
/// phase rather than by date.
#[derive(Args)]
pub struct ListTasksArgs {
    /// ID of the plan whose tasks to list
    #[arg(help = "Unique identifier of the plan whose tasks to list")]
    pub plan_id: u64,
    /// Sort tasks chronologically by due date
    #[arg(long)]
    pub by_date: bool,
}

impl From<ListTasksArgs> for Id {
    fn from(val: ListTasksArgs) -> Self {
        Id { id: val.plan_id }
    }
}

/// Show details of a specific task
#[derive(Args)]
pub struct ShowTaskArgs {
    #[arg(help = "Unique identifier of the task to show details for")]
    pub id: u64,
}

impl From<ShowTaskArgs> for Id {
    fn from(val: ShowTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Toggle a task's completion state
///
/// Completing a task credits its full hour estimate to the plan; toggling
/// it back resets the credited hours.
#[derive(Args)]
pub struct ToggleTaskArgs {
    #[arg(help = "Unique identifier of the task to toggle")]
    pub id: u64,
}

impl From<ToggleTaskArgs> for Id {
    fn from(val: ToggleTaskArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List all tasks of a plan
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a specific task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Toggle a task's completion state
    #[command(alias = "t")]
    Toggle(ToggleTaskArgs),
}

/// Command-line argument representation of plan type values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PlanTypeArg {
    /// Exam preparation with foundation, practice, and review phases
    Exam,
    /// Project work walked through four phases
    Project,
    /// Subject mastery with weekly study and practice pairs
    Subject,
}

impl From<PlanTypeArg> for PlanType {
    fn from(val: PlanTypeArg) -> Self {
        match val {
            PlanTypeArg::Exam => PlanType::Exam,
            PlanTypeArg::Project => PlanType::Project,
            PlanTypeArg::Subject => PlanType::Subject,
        }
    }
}

/// Command-line argument representation of plan status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PlanStatusArg {
    /// Plans being actively worked on
    Active,
    /// Plans temporarily on hold
    Paused,
    /// Plans marked finished
    Completed,
}

impl From<PlanStatusArg> for PlanStatus {
    fn from(val: PlanStatusArg) -> Self {
        match val {
            PlanStatusArg::Active => PlanStatus::Active,
            PlanStatusArg::Paused => PlanStatus::Paused,
            PlanStatusArg::Completed => PlanStatus::Completed,
        }
    }
}

/// Command dispatcher that pairs the planner with a terminal renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI dispatcher.
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Handle a plan subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let result = self.planner.create_plan_result(&args.into()).await?;
                self.renderer.render(&format!("{result}"))
            }
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                match self.planner.show_plan_with_tasks(&params).await? {
                    Some(plan) => self.renderer.render(&format!("{plan}")),
                    None => self.render_not_found(&format!("Plan with ID {} not found", params.id)),
                }
            }
            PlanCommands::Toggle(args) => {
                let result = self.planner.toggle_plan_result(&args.into()).await?;
                self.renderer.render(&format!("{result}"))
            }
            PlanCommands::Complete(args) => {
                let result = self.planner.complete_plan_result(&args.into()).await?;
                self.renderer.render(&format!("{result}"))
            }
            PlanCommands::Delete(args) => {
                let params: DeletePlan = args.into();
                match self.planner.delete_plan(&params).await? {
                    Some(plan) => self.renderer.render(&format!(
                        "{}",
                        studbud_core::DeleteResult::new(plan)
                    )),
                    None => self.render_not_found(&format!("Plan with ID {} not found", params.id)),
                }
            }
        }
    }

    /// Handle a task subcommand.
    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::List(args) => {
                let by_date = args.by_date;
                let mut tasks = self.planner.list_tasks(&args.into()).await?;
                if by_date {
                    tasks.0.sort_by_key(|task| task.due_date);
                }
                self.renderer.render(&format!("{tasks}"))
            }
            TaskCommands::Show(args) => {
                let params: Id = args.into();
                match self.planner.show_task(&params).await? {
                    Some(task) => self.renderer.render(&format!("{task}")),
                    None => self.render_not_found(&format!("Task with ID {} not found", params.id)),
                }
            }
            TaskCommands::Toggle(args) => {
                let result = self.planner.toggle_task_result(&args.into()).await?;
                self.renderer.render(&format!("{result}"))
            }
        }
    }

    /// List plans with the given filter.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self.planner.list_plans_summary(params).await?;
        self.renderer.render(&format!("{summaries}"))
    }

    /// Render the study overview dashboard.
    ///
    /// Shows the cross-plan aggregates followed by the summaries of every
    /// active plan.
    pub async fn dashboard(&self) -> Result<()> {
        let overview = self.planner.overview_result().await?;
        self.renderer.render(&format!("{overview}"))?;

        let active = self
            .planner
            .list_plans_summary(&ListPlans {
                status: Some(PlanStatus::Active),
            })
            .await?;
        if !active.is_empty() {
            self.renderer.render(&format!("\n{active}"))?;
        }
        Ok(())
    }

    fn render_not_found(&self, message: &str) -> Result<()> {
        self.renderer
            .render(&format!("{}", OperationStatus::failure(message.to_string())))
    }
}
