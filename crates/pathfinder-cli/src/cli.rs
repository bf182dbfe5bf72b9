//! Command-line arguments and their dispatch.
//!
//! Each clap `Args` struct wraps a core parameter type and converts into it
//! with `From`, keeping clap out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use pathfinder_core::{
    display::OperationStatus,
    params::{
        ApplySuggestion, ApplyTechnologies, CreatePlan, Id, ListPlans, ListTasks, RecordResume,
        TrendQuery, UpdateTask,
    },
    BackgroundService, Planner, ReconcilerConfig,
};

use crate::renderer::TerminalRenderer;

/// The learner an operation acts for
#[derive(Args, Clone, Copy)]
pub struct UserArg {
    /// User ID supplied by the surrounding system
    #[arg(short, long = "user", env = "PATHFINDER_USER", default_value_t = 1)]
    pub user_id: u64,
}

// ============================================================================
// Resume commands
// ============================================================================

/// Record the skills and experience extracted from a resume
#[derive(Args)]
pub struct AddResumeArgs {
    #[command(flatten)]
    pub user: UserArg,
    /// Skills as a comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub skills: Vec<String>,
    /// Experience level (beginner, intermediate, advanced)
    #[arg(short, long)]
    pub level: Option<String>,
}

impl From<AddResumeArgs> for RecordResume {
    fn from(val: AddResumeArgs) -> Self {
        RecordResume {
            user_id: val.user.user_id,
            skills: val
                .skills
                .into_iter()
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect(),
            experience_level: val.level,
        }
    }
}

#[derive(Subcommand)]
pub enum ResumeCommands {
    /// Record resume data for a user
    #[command(alias = "a")]
    Add(AddResumeArgs),
}

// ============================================================================
// Plan commands
// ============================================================================

/// Generate a new learning plan
///
/// Skills come from the given resume, or the user's latest one. Goals
/// without a template get a generic plan.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Career goal, e.g. "AI Engineer"
    pub goal: String,
    #[command(flatten)]
    pub user: UserArg,
    /// Plan length in months
    #[arg(short, long)]
    pub months: Option<u32>,
    /// Resume to take skills from
    #[arg(short, long)]
    pub resume: Option<u64>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            user_id: val.user.user_id,
            goal: val.goal,
            duration_months: val.months,
            resume_id: val.resume,
        }
    }
}

/// List plans, newest first
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only plans owned by this user
    #[arg(short, long)]
    pub user: Option<u64>,
    /// Only plans in this status (active, paused, completed, updated,
    /// update_pending, update_available)
    #[arg(short, long)]
    pub status: Option<String>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            user_id: val.user,
            status: val.status,
        }
    }
}

/// Arguments naming a single plan
#[derive(Args)]
pub struct PlanIdArgs {
    #[arg(help = "Unique identifier of the plan")]
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Page through a plan's daily tasks
#[derive(Args)]
pub struct ListTasksArgs {
    #[arg(help = "Unique identifier of the plan")]
    pub plan_id: u64,
    /// 1-based page number
    #[arg(short, long)]
    pub page: Option<u32>,
    /// Tasks per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            plan_id: val.plan_id,
            page: val.page,
            per_page: val.per_page,
        }
    }
}

/// Replace a plan's technology list
///
/// Bumps the plan version and marks it updated. Daily tasks are kept.
#[derive(Args)]
pub struct ApplyTechArgs {
    #[arg(help = "Unique identifier of the plan")]
    pub plan_id: u64,
    /// The new technology list, comma-separated
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub technologies: Vec<String>,
}

impl From<ApplyTechArgs> for ApplyTechnologies {
    fn from(val: ApplyTechArgs) -> Self {
        ApplyTechnologies {
            plan_id: val.plan_id,
            technologies: val.technologies,
        }
    }
}

/// Accept an advisor suggestion for one of your plans
#[derive(Args)]
pub struct AcceptSuggestionArgs {
    #[arg(help = "Unique identifier of the plan")]
    pub plan_id: u64,
    #[command(flatten)]
    pub user: UserArg,
    /// Suggested technologies, comma-separated
    #[arg(short, long, value_delimiter = ',')]
    pub technologies: Vec<String>,
}

impl From<AcceptSuggestionArgs> for ApplySuggestion {
    fn from(val: AcceptSuggestionArgs) -> Self {
        ApplySuggestion {
            user_id: val.user.user_id,
            plan_id: val.plan_id,
            new_technologies: val.technologies,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a new learning plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a plan with its milestones and next task
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Page through a plan's daily tasks
    Tasks(ListTasksArgs),
    /// Check whether a plan has drifted from current trends
    Check(PlanIdArgs),
    /// Recommend trending technologies missing from a plan
    Recommend(PlanIdArgs),
    /// Replace a plan's technology list
    ApplyTech(ApplyTechArgs),
    /// Accept an advisor suggestion and mark the plan update pending
    AcceptSuggestion(AcceptSuggestionArgs),
    /// Completion, velocity, badges and focus areas for a plan
    Analytics(PlanIdArgs),
}

// ============================================================================
// Task commands
// ============================================================================

/// Record progress on a daily task
///
/// Options left out keep their stored value.
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
    /// Mark the task completed
    #[arg(long, conflicts_with = "reopen")]
    pub done: bool,
    /// Mark the task not completed
    #[arg(long)]
    pub reopen: bool,
    /// Hours spent on the task so far
    #[arg(long)]
    pub hours: Option<f64>,
    /// Free-form notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        let is_completed = match (val.done, val.reopen) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        UpdateTask {
            id: val.id,
            is_completed,
            hours_spent: val.hours,
            notes: val.notes,
        }
    }
}

/// Arguments naming a single task
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Record completion, hours or notes
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Show a single task
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// Show the next open task of a plan
    #[command(alias = "n")]
    Next(PlanIdArgs),
}

// ============================================================================
// Other commands
// ============================================================================

#[derive(Args)]
pub struct ProgressArgs {
    #[command(flatten)]
    pub user: UserArg,
}

/// List trending technologies
#[derive(Args)]
pub struct TrendsArgs {
    /// Only technologies relevant to this profession
    #[arg(short, long)]
    pub profession: Option<String>,
    /// Minimum relevance score (0-100)
    #[arg(short, long)]
    pub min_relevance: Option<u8>,
}

impl From<TrendsArgs> for TrendQuery {
    fn from(val: TrendsArgs) -> Self {
        TrendQuery {
            profession: val.profession,
            min_relevance: val.min_relevance,
        }
    }
}

#[derive(Args)]
pub struct AdviseArgs {
    #[command(flatten)]
    pub user: UserArg,
}

/// Background service settings
#[derive(Args)]
pub struct ServeArgs {
    /// Seconds between trend polls
    #[arg(long, env = "PATHFINDER_TREND_INTERVAL", default_value_t = 60)]
    pub trend_interval: u64,
    /// Seconds between plan sweeps
    #[arg(long, env = "PATHFINDER_SWEEP_INTERVAL", default_value_t = 3600)]
    pub sweep_interval: u64,
    /// Re-check plans untouched for this many days
    #[arg(long, default_value_t = 7)]
    pub stale_after_days: i64,
}

impl From<ServeArgs> for ReconcilerConfig {
    fn from(val: ServeArgs) -> Self {
        ReconcilerConfig {
            trend_poll_interval: Duration::from_secs(val.trend_interval),
            plan_sweep_interval: Duration::from_secs(val.sweep_interval),
            stale_after_days: val.stale_after_days,
            ..Default::default()
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Runs commands against a planner and renders their markdown output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    fn show(&self, output: impl std::fmt::Display) -> Result<()> {
        self.renderer.render(&output.to_string())
    }

    pub async fn handle_resume_command(&self, command: ResumeCommands) -> Result<()> {
        match command {
            ResumeCommands::Add(args) => {
                let result = self
                    .planner
                    .record_resume_result(&args.into())
                    .await
                    .context("Failed to record resume")?;
                self.show(result)
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let result = self
                    .planner
                    .create_plan_result(&args.into())
                    .await
                    .context("Failed to create plan")?;
                self.show(result)
            }
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => {
                let id = args.id;
                match self.planner.get_plan(&args.into()).await? {
                    Some(plan) => self.show(plan),
                    None => bail!("Plan with ID {id} not found"),
                }
            }
            PlanCommands::Tasks(args) => {
                let page = self.planner.list_tasks(&args.into()).await?;
                self.show(page)
            }
            PlanCommands::Check(args) => {
                let check = self.planner.check_plan_updates(&args.into()).await?;
                self.show(check)
            }
            PlanCommands::Recommend(args) => {
                let recs = self.planner.tech_recommendations(&args.into()).await?;
                self.show(recs)
            }
            PlanCommands::ApplyTech(args) => {
                let update = self.planner.apply_technologies(&args.into()).await?;
                self.show(update)
            }
            PlanCommands::AcceptSuggestion(args) => {
                let outcome = self.planner.apply_suggestion(&args.into()).await?;
                self.show(outcome)
            }
            PlanCommands::Analytics(args) => {
                let analytics = self.planner.plan_analytics(&args.into()).await?;
                self.show(analytics)
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Update(args) => {
                let update = self.planner.update_task(&args.into()).await?;
                self.show(update)
            }
            TaskCommands::Show(args) => {
                let id = args.id;
                match self.planner.get_task(&args.into()).await? {
                    Some(task) => self.show(task),
                    None => bail!("Task with ID {id} not found"),
                }
            }
            TaskCommands::Next(args) => match self.planner.next_task(&args.into()).await? {
                Some(task) => self.show(task),
                None => self.show(OperationStatus::success(
                    "All tasks in this plan are completed".to_string(),
                )),
            },
        }
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self.planner.list_plans_summary(params).await?;
        self.show(summaries)
    }

    pub async fn show_progress(&self, args: ProgressArgs) -> Result<()> {
        let user_id = args.user.user_id;
        match self.planner.get_progress(user_id).await? {
            Some(snapshot) => self.show(snapshot),
            None => self.show(OperationStatus::failure(format!(
                "No progress recorded for user {user_id}"
            ))),
        }
    }

    pub fn show_trends(&self, args: TrendsArgs) -> Result<()> {
        self.show(self.planner.trending_list(&args.into()))
    }

    pub async fn advise(&self, args: AdviseArgs) -> Result<()> {
        let suggestions = self.planner.suggestions_for_user(args.user.user_id).await?;
        self.show(suggestions)
    }

    pub async fn sweep(&self) -> Result<()> {
        let status = self.planner.sweep_status().await?;
        self.show(status)
    }

    /// Runs the background loops until Ctrl-C or SIGTERM.
    pub async fn serve(&self, args: ServeArgs) -> Result<()> {
        let mut service = BackgroundService::start(self.planner.clone(), args.into());
        self.show(OperationStatus::success(
            "Background service running, press Ctrl-C to stop".to_string(),
        ))?;

        let signal = shutdown_signal().await;
        service.shutdown().await;
        signal?;

        self.show(OperationStatus::success(
            "Background service stopped".to_string(),
        ))
    }
}

#[cfg(unix)]
async fn shutdown_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result.context("Failed to listen for Ctrl-C"),
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_task_args_map_flags() {
        let args = UpdateTaskArgs {
            id: 3,
            done: false,
            reopen: true,
            hours: Some(1.0),
            notes: None,
        };
        let params = UpdateTask::from(args);
        assert_eq!(params.is_completed, Some(false));
        assert_eq!(params.hours_spent, Some(1.0));

        let untouched = UpdateTask::from(UpdateTaskArgs {
            id: 3,
            done: false,
            reopen: false,
            hours: None,
            notes: Some("note".to_string()),
        });
        assert_eq!(untouched.is_completed, None);
    }

    #[test]
    fn test_resume_args_drop_blank_skills() {
        let params = RecordResume::from(AddResumeArgs {
            user: UserArg { user_id: 2 },
            skills: vec!["Python".to_string(), " ".to_string(), " SQL".to_string()],
            level: None,
        });
        assert_eq!(params.skills, vec!["Python".to_string(), "SQL".to_string()]);
        assert_eq!(params.user_id, 2);
    }

    #[test]
    fn test_serve_args_to_config() {
        let config = ReconcilerConfig::from(ServeArgs {
            trend_interval: 5,
            sweep_interval: 10,
            stale_after_days: 3,
        });
        assert_eq!(config.trend_poll_interval, Duration::from_secs(5));
        assert_eq!(config.plan_sweep_interval, Duration::from_secs(10));
        assert_eq!(config.stale_after_days, 3);
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
    }
}
