/*!
 * Simulation Run State
 * Clock, process table, arrivals and trace owned by a single run
 */

use super::admission::{Admission, ArrivalTracker, ReadyPool};
use super::types::{ExecutionTrace, Policy, SimulationResult};
use crate::core::errors::SchedulerResult;
use crate::core::types::{Slot, Tick};
use crate::process::validation::validate_workload;
use crate::process::{Process, ProcessMetrics, ProcessSpec};
use tracing::debug;

/// Mutable state of one simulator invocation
///
/// Built from a validated workload; every run gets its own copy of the
/// process table.
pub(crate) struct RunState {
    pub now: Tick,
    pub processes: Vec<Process>,
    arrivals: ArrivalTracker,
    trace: ExecutionTrace,
    completed: usize,
}

impl RunState {
    pub fn new(specs: &[ProcessSpec], admission: Admission) -> SchedulerResult<Self> {
        validate_workload(specs)?;

        let processes: Vec<Process> = specs.iter().map(Process::from_spec).collect();
        let arrivals = ArrivalTracker::new(&processes, admission);

        Ok(Self {
            now: 0,
            processes,
            arrivals,
            trace: ExecutionTrace::new(),
            completed: 0,
        })
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Admit arrivals due at the current tick
    #[inline]
    pub fn admit<R: ReadyPool>(&mut self, ready: &mut R) -> usize {
        self.arrivals.admit(self.now, &mut self.processes, ready)
    }

    #[inline]
    pub fn next_arrival(&self) -> Option<Tick> {
        self.arrivals.next_arrival()
    }

    /// Charge `ticks` of CPU time to `slot` starting at the current tick
    ///
    /// Records the trace only; the caller owns clock movement.
    pub fn execute(&mut self, slot: Slot, ticks: Tick) {
        let process = &mut self.processes[slot];
        process.run_for(ticks);
        self.trace.record(process.name(), self.now, self.now + ticks);
    }

    /// Finalize `slot` at the current tick
    pub fn complete(&mut self, slot: Slot) {
        let process = &mut self.processes[slot];
        process.complete(self.now);
        self.completed += 1;
        debug!(time = self.now, process = %process.name(), "completed");
    }

    pub fn into_result(self, policy: Policy) -> SimulationResult {
        debug_assert!(self.is_finished(), "{:?} run ended with unfinished work", policy);

        SimulationResult {
            policy,
            trace: self.trace,
            processes: self.processes.into_iter().map(ProcessMetrics::from).collect(),
        }
    }
}
