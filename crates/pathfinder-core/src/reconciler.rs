//! Periodic reconciliation of stored plans against the trend table.
//!
//! Two loops run in the background:
//!
//! - the trend poller refreshes a snapshot of what is trending and never
//!   touches the database;
//! - the plan sweeper re-checks stale active plans and flags the ones whose
//!   technology list has drifted.
//!
//! Both run one iteration immediately, then wait for their interval or the
//! stop signal, whichever comes first. A failed iteration is logged and the
//! loop carries on.

use std::time::Duration;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    planner::Planner,
    trends::{DriftReport, TechDiff, TechRecommendations, TrendEntry, TrendTable, MIN_PLAN_AGE_DAYS},
};

/// Relevance floor of the poller's snapshot.
pub const TREND_POLL_MIN_RELEVANCE: u8 = 80;

/// Intervals and limits for the background loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcilerConfig {
    pub trend_poll_interval: Duration,
    pub plan_sweep_interval: Duration,
    /// How long shutdown waits for each loop before abandoning it
    pub shutdown_timeout: Duration,
    /// Plans untouched for at least this many days are re-checked
    pub stale_after_days: i64,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            trend_poll_interval: Duration::from_secs(60),
            plan_sweep_interval: Duration::from_secs(3600),
            shutdown_timeout: Duration::from_secs(5),
            stale_after_days: MIN_PLAN_AGE_DAYS,
        }
    }
}

/// What the trend poller saw on its latest pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub trending: Vec<TrendEntry>,
    pub polled_at: Timestamp,
}

/// On-demand drift check of one plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCheck {
    pub plan_id: u64,
    pub days_since_creation: i64,
    pub report: DriftReport,
    pub checked_at: Timestamp,
}

/// Technology recommendations for one plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecommendations {
    pub plan_id: u64,
    /// The plan goal the recommendations were computed for
    pub profession: String,
    pub recommendations: TechRecommendations,
    pub generated_at: Timestamp,
}

/// Result of replacing a plan's technology list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechUpdate {
    pub plan_id: u64,
    pub new_version: u32,
    pub changes: TechDiff,
}

/// Result of applying an advisor suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SuggestionOutcome {
    Applied {
        plan_id: u64,
        new_version: u32,
        new_technologies_count: usize,
    },
    /// No plan with that id belongs to the user
    NotFound,
}

/// Handle to the running background loops.
///
/// Dropping the service without calling [`BackgroundService::shutdown`]
/// leaves the loops running until the runtime stops.
#[derive(Debug)]
pub struct BackgroundService {
    cancel: CancellationToken,
    handles: Vec<(&'static str, JoinHandle<()>)>,
    trends: watch::Receiver<Option<TrendSnapshot>>,
    shutdown_timeout: Duration,
}

impl BackgroundService {
    /// Spawns the trend poller and the plan sweeper on the current runtime.
    pub fn start(planner: Planner, config: ReconcilerConfig) -> Self {
        let cancel = CancellationToken::new();
        let (trend_tx, trend_rx) = watch::channel(None);

        log::info!(
            "Starting background service (trend poll every {:?}, plan sweep every {:?})",
            config.trend_poll_interval,
            config.plan_sweep_interval
        );

        let poller = tokio::spawn(trend_poll_loop(
            trend_tx,
            config.trend_poll_interval,
            cancel.clone(),
        ));
        let sweeper = tokio::spawn(plan_sweep_loop(
            planner,
            config.plan_sweep_interval,
            config.stale_after_days,
            cancel.clone(),
        ));

        Self {
            cancel,
            handles: vec![("trend poller", poller), ("plan sweeper", sweeper)],
            trends: trend_rx,
            shutdown_timeout: config.shutdown_timeout,
        }
    }

    /// Receiver for the poller's snapshots; `None` until the first poll.
    pub fn latest_trends(&self) -> watch::Receiver<Option<TrendSnapshot>> {
        self.trends.clone()
    }

    /// True until shutdown has been requested.
    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Signals both loops to stop and waits up to the configured timeout for
    /// each. Loops that do not finish in time are aborted. Calling this more
    /// than once is harmless.
    pub async fn shutdown(&mut self) {
        self.cancel.cancel();
        for (name, mut handle) in self.handles.drain(..) {
            match tokio::time::timeout(self.shutdown_timeout, &mut handle).await {
                Ok(Ok(())) => log::info!("{name} stopped"),
                Ok(Err(err)) => log::error!("{name} ended abnormally: {err}"),
                Err(_) => {
                    log::warn!(
                        "{name} did not stop within {:?}, abandoning it",
                        self.shutdown_timeout
                    );
                    handle.abort();
                }
            }
        }
    }
}

/// Waits for `interval` or cancellation. Returns false once cancelled.
async fn wait_or_cancel(interval: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(interval) => true,
        _ = cancel.cancelled() => false,
    }
}

async fn trend_poll_loop(
    trends: watch::Sender<Option<TrendSnapshot>>,
    interval: Duration,
    cancel: CancellationToken,
) {
    log::info!("Trend poller started");
    loop {
        let trending = TrendTable::builtin().trending(None, TREND_POLL_MIN_RELEVANCE);
        log::debug!("Trend poll found {} technologies", trending.len());
        trends.send_replace(Some(TrendSnapshot {
            trending,
            polled_at: Timestamp::now(),
        }));

        if !wait_or_cancel(interval, &cancel).await {
            break;
        }
    }
    log::info!("Trend poller shutting down");
}

async fn plan_sweep_loop(
    planner: Planner,
    interval: Duration,
    stale_after_days: i64,
    cancel: CancellationToken,
) {
    log::info!("Plan sweeper started");
    loop {
        match planner
            .sweep_plans_older_than(Timestamp::now(), stale_after_days)
            .await
        {
            Ok(flagged) if flagged.is_empty() => log::debug!("Plan sweep flagged no plans"),
            Ok(flagged) => log::info!("Plan sweep flagged plans {flagged:?} for update"),
            Err(err) => log::error!("Plan sweep failed: {err}"),
        }

        if !wait_or_cancel(interval, &cancel).await {
            break;
        }
    }
    log::info!("Plan sweeper shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReconcilerConfig::default();
        assert_eq!(config.trend_poll_interval, Duration::from_secs(60));
        assert_eq!(config.plan_sweep_interval, Duration::from_secs(3600));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
        assert_eq!(config.stale_after_days, 7);
    }

    #[test]
    fn test_suggestion_outcome_serialization() {
        let json = serde_json::to_value(SuggestionOutcome::NotFound).unwrap();
        assert_eq!(json["outcome"], "not_found");

        let applied = SuggestionOutcome::Applied {
            plan_id: 2,
            new_version: 3,
            new_technologies_count: 1,
        };
        let json = serde_json::to_value(applied).unwrap();
        assert_eq!(json["outcome"], "applied");
        assert_eq!(json["new_version"], 3);
    }

    #[tokio::test]
    async fn test_cancelled_wait_returns_immediately() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(!wait_or_cancel(Duration::from_secs(3600), &cancel).await);
    }
}
