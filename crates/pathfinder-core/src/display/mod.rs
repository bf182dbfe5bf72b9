//! Markdown rendering of planner results.
//!
//! Domain models implement `Display` directly; collections and operation
//! outcomes go through small wrapper types so each context can pick its own
//! framing.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │    Markdown     │
//! │ (Plan, Task...) │───▶│ Result Types    │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `PlanSummaries` and `TrendList`
//! - [`results`]: creation results, drift checks and technology updates
//! - [`insights`]: assessments, suggestions and analytics
//! - [`status`]: one-line confirmations
//! - [`datetime`]: timestamps in the local timezone
//! - [`models`]: the domain model implementations
//!
//! # Examples
//!
//! ```rust
//! use pathfinder_core::display::{OperationStatus, TrendList};
//! use pathfinder_core::trends::TrendTable;
//!
//! let trending = TrendTable::builtin().trending(Some("DevOps Engineer"), 90);
//! let output = TrendList(trending).to_string();
//! assert!(output.contains("| Kubernetes 1.28 | Orchestration | 90 |"));
//!
//! let status = OperationStatus::success("Sweep finished".to_string());
//! assert_eq!(status.to_string(), "Success: Sweep finished\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod insights;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PlanSummaries, TrendList};
pub use datetime::{LocalDate, LocalDateTime};
pub use results::CreateResult;
pub use status::OperationStatus;
