/*!
 * Round Robin Simulator
 * Fixed-quantum rotating FIFO queue with event-stepped time
 */

use super::admission::Admission;
use super::run::RunState;
use super::traits::Simulator;
use super::types::{Policy, SimulationResult};
use crate::core::errors::SchedulerResult;
use crate::core::types::{Slot, Tick};
use crate::process::validation::validate_rr_quantum;
use crate::process::ProcessSpec;
use std::collections::VecDeque;
use tracing::{debug, info, info_span};

/// Round robin with a global quantum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    pub context_switch: Tick,
    pub quantum: Tick,
}

impl RoundRobin {
    pub const fn new(context_switch: Tick, quantum: Tick) -> Self {
        Self {
            context_switch,
            quantum,
        }
    }
}

/// Run `workload` under round robin
pub fn simulate(
    workload: &[ProcessSpec],
    context_switch: Tick,
    quantum: Tick,
) -> SchedulerResult<SimulationResult> {
    RoundRobin::new(context_switch, quantum).simulate(workload)
}

impl Simulator for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn simulate(&self, workload: &[ProcessSpec]) -> SchedulerResult<SimulationResult> {
        validate_rr_quantum(self.quantum)?;

        let _span = info_span!(
            "simulate",
            policy = Policy::RoundRobin.as_str(),
            processes = workload.len(),
            context_switch = self.context_switch,
            quantum = self.quantum
        )
        .entered();

        let mut run = RunState::new(workload, Admission::Due)?;
        let mut queue: VecDeque<Slot> = VecDeque::new();

        run.admit(&mut queue);

        while !run.is_finished() {
            if queue.is_empty() {
                // Jump straight to the next arrival instead of idling tick by tick
                let next = run
                    .next_arrival()
                    .expect("unfinished round robin run with no queued or pending process");
                run.now = run.now.max(next);
                run.admit(&mut queue);
            }

            let slot = queue
                .pop_front()
                .expect("admission after a jump always queues a process");

            let slice = run.processes[slot].remaining().min(self.quantum);
            debug!(
                time = run.now,
                process = %run.processes[slot].name(),
                slice,
                "dispatched"
            );
            run.execute(slot, slice);
            run.now += slice;

            // Arrivals during the slice queue ahead of the process that just ran
            run.admit(&mut queue);

            if run.processes[slot].is_finished() {
                run.complete(slot);
            } else {
                queue.push_back(slot);
            }

            // A lone process picking up its own next slice is not a switch
            if !run.is_finished() && queue.front() != Some(&slot) {
                run.now += self.context_switch;
                run.admit(&mut queue);
            }
        }

        let result = run.into_result(Policy::RoundRobin);
        info!(
            makespan = result.trace.makespan(),
            avg_waiting = result.average_waiting(),
            avg_turnaround = result.average_turnaround(),
            "simulation finished"
        );
        Ok(result)
    }
}
