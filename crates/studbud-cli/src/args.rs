use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, TaskCommands};

/// Main command-line interface for the Studbud study planner
///
/// Studbud generates dated study schedules from a few plan parameters and
/// tracks progress as tasks are completed. Plans are organized by type
/// (exam preparation, project work, or subject mastery), and each plan
/// carries its generated task list.
#[derive(Parser)]
#[command(version, about, name = "studbud")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/studbud/studbud.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Studbud CLI
///
/// The CLI is organized into two main command categories:
/// - `plan`: Operations for managing study plans (create, list, toggle, etc.)
/// - `task`: Operations for the generated tasks within plans
///
/// Running without a command prints the study overview dashboard.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage study plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage tasks within plans
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show the study overview dashboard
    #[command(alias = "d")]
    Dashboard,
}
