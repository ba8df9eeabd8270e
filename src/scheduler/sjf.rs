/*!
 * SJF Simulator
 * Preemptive shortest-remaining-time-first, stepped one tick at a time
 */

use super::admission::Admission;
use super::ordering::shortest_remaining;
use super::run::RunState;
use super::traits::Simulator;
use super::types::{Policy, SimulationResult};
use crate::core::errors::SchedulerResult;
use crate::core::types::{Slot, Tick};
use crate::process::ProcessSpec;
use tracing::{debug, info, info_span};

/// Preemptive SJF with a fixed context switch cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sjf {
    pub context_switch: Tick,
}

impl Sjf {
    pub const fn new(context_switch: Tick) -> Self {
        Self { context_switch }
    }
}

/// Run `workload` under preemptive SJF
pub fn simulate(workload: &[ProcessSpec], context_switch: Tick) -> SchedulerResult<SimulationResult> {
    Sjf::new(context_switch).simulate(workload)
}

impl Simulator for Sjf {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn simulate(&self, workload: &[ProcessSpec]) -> SchedulerResult<SimulationResult> {
        let _span = info_span!(
            "simulate",
            policy = Policy::Sjf.as_str(),
            processes = workload.len(),
            context_switch = self.context_switch
        )
        .entered();

        let mut run = RunState::new(workload, Admission::OnTick)?;
        let mut ready: Vec<Slot> = Vec::new();
        let mut running: Option<Slot> = None;

        run.admit(&mut ready);

        while !run.is_finished() {
            let candidate = shortest_remaining(&run.processes, &ready);

            // Preempt only on a strictly shorter remaining time
            let next = match (running, candidate) {
                (None, candidate) => candidate,
                (Some(current), Some(candidate))
                    if run.processes[candidate].remaining() < run.processes[current].remaining() =>
                {
                    Some(candidate)
                }
                (Some(current), _) => Some(current),
            };

            let Some(slot) = next else {
                advance(&mut run, &mut ready, 1);
                continue;
            };

            if running != Some(slot) {
                let switch_due = running.is_some() || run.now > 0;
                if let Some(previous) = running.take() {
                    debug!(
                        time = run.now,
                        preempted = %run.processes[previous].name(),
                        by = %run.processes[slot].name(),
                        "preempted"
                    );
                    ready.push(previous);
                }
                ready.retain(|&s| s != slot);
                if switch_due {
                    advance(&mut run, &mut ready, self.context_switch);
                }
                running = Some(slot);
                debug!(time = run.now, process = %run.processes[slot].name(), "dispatched");
            }

            run.execute(slot, 1);
            advance(&mut run, &mut ready, 1);

            if run.processes[slot].is_finished() {
                run.complete(slot);
                running = None;
            }
        }

        let result = run.into_result(Policy::Sjf);
        info!(
            makespan = result.trace.makespan(),
            avg_waiting = result.average_waiting(),
            avg_turnaround = result.average_turnaround(),
            "simulation finished"
        );
        Ok(result)
    }
}

/// Move the clock forward tick by tick, admitting arrivals at each tick
fn advance(run: &mut RunState, ready: &mut Vec<Slot>, ticks: Tick) {
    for _ in 0..ticks {
        run.now += 1;
        run.admit(ready);
    }
}
