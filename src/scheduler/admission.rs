/*!
 * Arrival Admission
 * Moves processes from "not yet arrived" into a simulator's ready structure
 */

use crate::core::types::{Slot, Tick};
use crate::process::Process;
use std::collections::VecDeque;
use tracing::trace;

/// When an arrival counts as due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    /// Admit exactly at the arrival tick; the caller visits every tick
    OnTick,
    /// Admit everything with arrival ≤ now; the caller may jump the clock
    Due,
}

/// Ready structure a tracker can admit into
pub(crate) trait ReadyPool {
    fn contains_slot(&self, slot: Slot) -> bool;
    fn enqueue(&mut self, slot: Slot);
}

impl ReadyPool for VecDeque<Slot> {
    #[inline]
    fn contains_slot(&self, slot: Slot) -> bool {
        self.contains(&slot)
    }

    #[inline]
    fn enqueue(&mut self, slot: Slot) {
        self.push_back(slot);
    }
}

impl ReadyPool for Vec<Slot> {
    #[inline]
    fn contains_slot(&self, slot: Slot) -> bool {
        self.contains(&slot)
    }

    #[inline]
    fn enqueue(&mut self, slot: Slot) {
        self.push(slot);
    }
}

/// Pending arrivals in (arrival, workload order), consumed front to back
///
/// Each process leaves the pending list once, so repeated calls for the same
/// tick never admit anything twice.
#[derive(Debug, Clone)]
pub(crate) struct ArrivalTracker {
    pending: VecDeque<(Tick, Slot)>,
    mode: Admission,
}

impl ArrivalTracker {
    pub fn new(processes: &[Process], mode: Admission) -> Self {
        let mut pending: Vec<(Tick, Slot)> = processes
            .iter()
            .enumerate()
            .map(|(slot, process)| (process.arrival(), slot))
            .collect();
        // Stable on workload order for simultaneous arrivals
        pending.sort_by_key(|&(arrival, _)| arrival);

        Self {
            pending: pending.into(),
            mode,
        }
    }

    /// Admit every due process into `ready`, returning how many were added
    pub fn admit<R: ReadyPool>(
        &mut self,
        now: Tick,
        processes: &mut [Process],
        ready: &mut R,
    ) -> usize {
        let mut admitted = 0;

        while let Some(&(arrival, slot)) = self.pending.front() {
            if arrival > now {
                break;
            }
            self.pending.pop_front();

            if self.mode == Admission::OnTick {
                debug_assert_eq!(
                    arrival, now,
                    "tick-exact admission skipped the arrival of slot {}",
                    slot
                );
            }

            let process = &mut processes[slot];
            if process.remaining() == 0 || ready.contains_slot(slot) {
                continue;
            }

            process.mark_ready(now);
            ready.enqueue(slot);
            admitted += 1;
            trace!(time = now, process = %process.name(), "admitted");
        }

        admitted
    }

    /// Arrival tick of the next process not yet admitted
    #[inline]
    pub fn next_arrival(&self) -> Option<Tick> {
        self.pending.front().map(|&(arrival, _)| arrival)
    }
}
