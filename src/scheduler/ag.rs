/*!
 * AG Simulator
 * Adaptive-quantum round robin with priority and SJF driven early yields
 *
 * Each process carries its own quantum. Within a quantum window:
 * - at ⌈25%⌉ of the quantum, a strictly more urgent waiting process takes over
 *   and the yielding process gains ⌈unused / 2⌉;
 * - from ⌈50%⌉ onwards, a waiting process with strictly less remaining work
 *   takes over and the yielding process gains the whole unused part;
 * - a fully used quantum grows by 2 and the process goes to the back of the queue.
 */

use super::admission::Admission;
use super::run::RunState;
use super::traits::Simulator;
use super::types::{Policy, SimulationResult};
use crate::core::errors::SchedulerResult;
use crate::core::limits::AG_QUANTUM_EXHAUSTED_BONUS;
use crate::core::types::{Slot, Tick};
use crate::process::validation::validate_adaptive_quanta;
use crate::process::{Process, ProcessSpec};
use std::collections::VecDeque;
use tracing::{debug, info, info_span};

/// Adaptive-quantum scheduler; quanta come from the workload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ag;

/// Run `workload` under AG scheduling
pub fn simulate(workload: &[ProcessSpec]) -> SchedulerResult<SimulationResult> {
    Ag.simulate(workload)
}

/// Why the active process gave up the CPU early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Yield {
    /// A waiting process has a lower priority value
    Priority,
    /// A waiting process has less remaining work
    ShortestJob,
}

impl Simulator for Ag {
    fn policy(&self) -> Policy {
        Policy::Ag
    }

    fn simulate(&self, workload: &[ProcessSpec]) -> SchedulerResult<SimulationResult> {
        let _span = info_span!(
            "simulate",
            policy = Policy::Ag.as_str(),
            processes = workload.len()
        )
        .entered();

        let mut run = RunState::new(workload, Admission::OnTick)?;
        validate_adaptive_quanta(workload)?;

        let mut queue: VecDeque<Slot> = VecDeque::new();
        let mut active: Option<Slot> = None;

        run.admit(&mut queue);

        while !run.is_finished() {
            let current = match active {
                Some(slot) => slot,
                None => match queue.pop_front() {
                    Some(slot) => {
                        activate(&mut run.processes[slot], run.now);
                        active = Some(slot);
                        slot
                    }
                    None => {
                        advance(&mut run, &mut queue);
                        continue;
                    }
                },
            };

            run.execute(current, 1);
            advance(&mut run, &mut queue);

            if run.processes[current].is_finished() {
                run.processes[current].retire_quantum();
                run.complete(current);
                active = None;
                continue;
            }

            let process = &run.processes[current];
            let quantum = process.quantum();
            let executed = process.executed_in_quantum();

            if executed == quantum {
                let process = &mut run.processes[current];
                process.grow_quantum(AG_QUANTUM_EXHAUSTED_BONUS);
                debug!(
                    time = run.now,
                    process = %process.name(),
                    quantum = process.quantum(),
                    "quantum exhausted"
                );
                queue.push_back(current);
                active = None;
                continue;
            }

            if queue.is_empty() {
                continue;
            }

            let Some((next, reason, bonus)) = challenger(&run.processes, &queue, current) else {
                continue;
            };

            let process = &mut run.processes[current];
            process.grow_quantum(bonus);
            debug!(
                time = run.now,
                process = %process.name(),
                quantum = process.quantum(),
                ?reason,
                "yielded"
            );

            queue.retain(|&slot| slot != next);
            queue.push_back(current);
            activate(&mut run.processes[next], run.now);
            active = Some(next);
        }

        let result = run.into_result(Policy::Ag);
        info!(
            makespan = result.trace.makespan(),
            avg_waiting = result.average_waiting(),
            avg_turnaround = result.average_turnaround(),
            "simulation finished"
        );
        Ok(result)
    }
}

/// Pick the waiting process that should take over from `current`, if any,
/// with the quantum bonus owed to `current`
fn challenger(processes: &[Process], queue: &VecDeque<Slot>, current: Slot) -> Option<(Slot, Yield, Tick)> {
    let active = &processes[current];
    let quantum = active.quantum();
    let executed = active.executed_in_quantum();
    let unused = quantum - executed;

    let first_quarter = quantum.div_ceil(4);
    let half = quantum.div_ceil(2);

    let by_priority = (executed == first_quarter)
        .then(|| {
            queue
                .iter()
                .copied()
                .filter(|&slot| processes[slot].priority() < active.priority())
                .min_by_key(|&slot| processes[slot].priority())
        })
        .flatten()
        .map(|slot| (slot, Yield::Priority, unused.div_ceil(2)));

    by_priority.or_else(|| {
        (executed >= half)
            .then(|| {
                queue
                    .iter()
                    .copied()
                    .filter(|&slot| processes[slot].remaining() < active.remaining())
                    .min_by_key(|&slot| processes[slot].remaining())
            })
            .flatten()
            .map(|slot| (slot, Yield::ShortestJob, unused))
    })
}

fn activate(process: &mut Process, now: Tick) {
    process.reset_quantum_window();
    debug!(
        time = now,
        process = %process.name(),
        quantum = process.quantum(),
        "dispatched"
    );
}

/// One tick forward with tick-exact admission into the FIFO queue
fn advance(run: &mut RunState, queue: &mut VecDeque<Slot>) {
    run.now += 1;
    run.admit(queue);
}
