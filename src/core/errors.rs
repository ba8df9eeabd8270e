/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::data_structures::InlineString;
use crate::core::types::Tick;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler result type
///
/// # Must Use
/// A simulation that fails validation produces no result and must be reported
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Workload or configuration rejected before a simulation starts
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Workload contains no processes")]
    #[diagnostic(
        code(scheduler::empty_workload),
        help("Add at least one entry to the \"processes\" array.")
    )]
    EmptyWorkload,

    #[error("Process {name} has invalid burst time {burst}")]
    #[diagnostic(
        code(scheduler::invalid_burst),
        help("Every process needs a strictly positive burst time.")
    )]
    InvalidBurst { name: InlineString, burst: i64 },

    #[error("Process {name} has invalid arrival time {arrival}")]
    #[diagnostic(
        code(scheduler::invalid_arrival),
        help("Arrival times must be zero or positive.")
    )]
    InvalidArrival { name: InlineString, arrival: i64 },

    #[error("Invalid quantum for {owner}: {quantum}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Quanta must be strictly positive. AG workloads need a quantum on every process.")
    )]
    InvalidQuantum { owner: InlineString, quantum: i64 },

    #[error("Invalid context switch cost: {0}")]
    #[diagnostic(
        code(scheduler::invalid_context_switch),
        help("Context switch cost must be zero or positive.")
    )]
    InvalidContextSwitch(i64),

    #[error("Invalid aging interval: {0}")]
    #[diagnostic(
        code(scheduler::invalid_aging_interval),
        help("Aging interval must be zero (disabled) or positive.")
    )]
    InvalidAgingInterval(i64),

    #[error("Duplicate process name: {0}")]
    #[diagnostic(
        code(scheduler::duplicate_process),
        help("Process names identify rows in the result table and must be unique.")
    )]
    DuplicateProcess(InlineString),
}

impl SchedulerError {
    /// Build an [`SchedulerError::InvalidQuantum`] for the round robin quantum
    pub(crate) fn invalid_rr_quantum(quantum: Tick) -> Self {
        Self::InvalidQuantum {
            owner: InlineString::from("round robin"),
            quantum: quantum as i64,
        }
    }
}

/// Workload file errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read workload file {path}: {source}")]
    #[diagnostic(
        code(config::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed workload JSON: {0}")]
    #[diagnostic(
        code(config::parse),
        help("Expected an object with \"processes\" and optional \"contextSwitch\", \"rrQuantum\", \"agingInterval\".")
    )]
    Parse(#[from] serde_json::Error),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Config error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    #[diagnostic(code(sim::output))]
    Output(#[from] std::io::Error),
}
