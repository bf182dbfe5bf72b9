//! Pathfinder CLI
//!
//! Command-line interface for generating and following learning plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pathfinder_core::{params::ListPlans, PlannerBuilder};
use renderer::TerminalRenderer;
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

    info!("Pathfinder started with database {}", planner.database_path().display());

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));
    match command {
        Some(Resume { command }) => cli.handle_resume_command(command).await,
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Progress(args)) => cli.show_progress(args).await,
        Some(Trends(args)) => cli.show_trends(args),
        Some(Advise(args)) => cli.advise(args).await,
        Some(Sweep) => cli.sweep().await,
        Some(Serve(args)) => {
            info!("Starting background service");
            cli.serve(args).await
        }
        None => cli.list_plans(&ListPlans::default()).await,
    }
}
