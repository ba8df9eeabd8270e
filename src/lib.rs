/*!
 * CPU Scheduling Simulator Library
 * Tick-level simulation of SJF, Round Robin, Priority-with-aging and AG scheduling
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{ConfigError, SchedulerError, SchedulerResult, SimError};
pub use crate::core::types::{Priority, Tick};
pub use config::Workload;
pub use monitoring::init_tracing;
pub use process::{ProcessMetrics, ProcessSpec};
pub use report::Report;
pub use scheduler::{
    run, simulator_for, Ag, ExecutionTrace, Policy, PriorityAging, RoundRobin, SimConfig,
    SimulationResult, Simulator, Sjf,
};
