use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AdviseArgs, PlanCommands, ProgressArgs, ResumeCommands, ServeArgs, TaskCommands, TrendsArgs,
};

/// Personalized learning plans from the command line
///
/// Pathfinder turns a career goal and your current skills into a day-by-day
/// study plan, tracks progress against it, and watches technology trends so
/// plans can be refreshed when they drift.
#[derive(Parser)]
#[command(version, about, name = "pf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pathfinder/pathfinder.db
    #[arg(long, global = true, env = "PATHFINDER_DATABASE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record resume data
    #[command(alias = "r")]
    Resume {
        #[command(subcommand)]
        command: ResumeCommands,
    },
    /// Generate, inspect and update learning plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Record progress on daily tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show a user's progress snapshot
    Progress(ProgressArgs),
    /// List trending technologies
    Trends(TrendsArgs),
    /// Assess a user's skills and suggest technologies
    Advise(AdviseArgs),
    /// Run one reconciler sweep now
    Sweep,
    /// Run the trend poller and plan sweeper until interrupted
    Serve(ServeArgs),
}
