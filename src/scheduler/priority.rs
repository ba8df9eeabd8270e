/*!
 * Priority Simulator
 * Preemptive lowest-value-first scheduling with aging of waiting processes
 */

use super::admission::Admission;
use super::aging::Aging;
use super::ordering::{highest_priority, PriorityRank};
use super::run::RunState;
use super::traits::Simulator;
use super::types::{Policy, SimulationResult};
use crate::core::errors::SchedulerResult;
use crate::core::types::{Slot, Tick};
use crate::process::ProcessSpec;
use tracing::{debug, info, info_span};

/// Preemptive priority scheduling with aging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityAging {
    pub context_switch: Tick,
    /// Ticks of waiting per one-step promotion; 0 disables aging
    pub aging_interval: Tick,
}

impl PriorityAging {
    pub const fn new(context_switch: Tick, aging_interval: Tick) -> Self {
        Self {
            context_switch,
            aging_interval,
        }
    }
}

/// Run `workload` under preemptive priority with aging
pub fn simulate(
    workload: &[ProcessSpec],
    context_switch: Tick,
    aging_interval: Tick,
) -> SchedulerResult<SimulationResult> {
    PriorityAging::new(context_switch, aging_interval).simulate(workload)
}

impl Simulator for PriorityAging {
    fn policy(&self) -> Policy {
        Policy::Priority
    }

    fn simulate(&self, workload: &[ProcessSpec]) -> SchedulerResult<SimulationResult> {
        let _span = info_span!(
            "simulate",
            policy = Policy::Priority.as_str(),
            processes = workload.len(),
            context_switch = self.context_switch,
            aging_interval = self.aging_interval
        )
        .entered();

        let aging = Aging::new(self.aging_interval);
        let mut run = RunState::new(workload, Admission::OnTick)?;
        let mut ready: Vec<Slot> = Vec::new();
        let mut running: Option<Slot> = None;

        run.admit(&mut ready);

        while !run.is_finished() {
            let candidate = highest_priority(&run.processes, &ready);

            let next = match (running, candidate) {
                (None, candidate) => candidate,
                (Some(current), Some(candidate))
                    if PriorityRank::of(&run.processes[candidate])
                        < PriorityRank::of(&run.processes[current]) =>
                {
                    Some(candidate)
                }
                (Some(current), _) => Some(current),
            };

            let Some(slot) = next else {
                advance(&mut run, &mut ready, &aging, 1);
                continue;
            };

            if running != Some(slot) {
                ready.retain(|&s| s != slot);

                // Only a preemption costs a switch; dispatch after a completion or idle is free
                if let Some(previous) = running.take() {
                    let process = &mut run.processes[previous];
                    process.mark_ready(run.now);
                    debug!(
                        time = run.now,
                        preempted = %process.name(),
                        priority = process.priority(),
                        "preempted"
                    );
                    ready.push(previous);

                    // The incoming process is off the ready list, so it does not age during the switch
                    advance(&mut run, &mut ready, &aging, self.context_switch);
                }
                running = Some(slot);
                debug!(
                    time = run.now,
                    process = %run.processes[slot].name(),
                    priority = run.processes[slot].priority(),
                    "dispatched"
                );
            }

            run.execute(slot, 1);
            advance(&mut run, &mut ready, &aging, 1);

            if run.processes[slot].is_finished() {
                run.complete(slot);
                running = None;
            }
        }

        let result = run.into_result(Policy::Priority);
        info!(
            makespan = result.trace.makespan(),
            avg_waiting = result.average_waiting(),
            avg_turnaround = result.average_turnaround(),
            "simulation finished"
        );
        Ok(result)
    }
}

/// Move the clock forward tick by tick; arrivals and aging apply at every tick
fn advance(run: &mut RunState, ready: &mut Vec<Slot>, aging: &Aging, ticks: Tick) {
    for _ in 0..ticks {
        run.now += 1;
        run.admit(ready);
        aging.apply(run.now, &mut run.processes, &ready[..]);
    }
}
