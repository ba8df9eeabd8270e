/*!
 * Selection Orderings
 * Total orders used to pick and preempt processes
 */

use crate::core::types::{Priority, Slot, Tick};
use crate::process::Process;

/// Priority ranking: (priority, arrival, name), smaller ranks first
///
/// Field order is the comparison order; `Ord` is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct PriorityRank<'a> {
    priority: Priority,
    arrival: Tick,
    name: &'a str,
}

impl<'a> PriorityRank<'a> {
    #[inline]
    pub fn of(process: &'a Process) -> Self {
        Self {
            priority: process.priority(),
            arrival: process.arrival(),
            name: process.name().as_str(),
        }
    }
}

/// Shortest-remaining ranking: (remaining, arrival, workload slot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RemainingRank {
    remaining: Tick,
    arrival: Tick,
    slot: Slot,
}

impl RemainingRank {
    #[inline]
    pub fn of(processes: &[Process], slot: Slot) -> Self {
        let process = &processes[slot];
        Self {
            remaining: process.remaining(),
            arrival: process.arrival(),
            slot,
        }
    }
}

/// Best-ranked slot in `ready` under `PriorityRank`
pub(crate) fn highest_priority(processes: &[Process], ready: &[Slot]) -> Option<Slot> {
    ready
        .iter()
        .copied()
        .min_by_key(|&slot| PriorityRank::of(&processes[slot]))
}

/// Best-ranked slot in `ready` under `RemainingRank`
pub(crate) fn shortest_remaining(processes: &[Process], ready: &[Slot]) -> Option<Slot> {
    ready
        .iter()
        .copied()
        .min_by_key(|&slot| RemainingRank::of(processes, slot))
}
