/*!
 * Scheduler Module
 * Tick-level CPU scheduling simulators and their shared building blocks
 */

pub mod ag;
pub(crate) mod admission;
pub(crate) mod aging;
pub(crate) mod ordering;
pub mod priority;
pub mod round_robin;
pub(crate) mod run;
pub mod sjf;
pub mod traits;
pub mod types;

use crate::core::errors::SchedulerResult;
use crate::process::ProcessSpec;

// Re-export public API
pub use ag::Ag;
pub use priority::PriorityAging;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use traits::Simulator;
pub use types::{ExecutionTrace, Policy, SimConfig, SimulationResult, Slice};

/// Build the simulator for `policy` from the shared configuration
pub fn simulator_for(policy: Policy, config: &SimConfig) -> Box<dyn Simulator> {
    match policy {
        Policy::Sjf => Box::new(Sjf::new(config.context_switch)),
        Policy::RoundRobin => Box::new(RoundRobin::new(config.context_switch, config.rr_quantum)),
        Policy::Priority => Box::new(PriorityAging::new(
            config.context_switch,
            config.aging_interval,
        )),
        Policy::Ag => Box::new(Ag),
    }
}

/// Run one policy over `workload`
pub fn run(
    policy: Policy,
    workload: &[ProcessSpec],
    config: &SimConfig,
) -> SchedulerResult<SimulationResult> {
    simulator_for(policy, config).simulate(workload)
}
