/*!
 * Priority Aging
 * Promotes ready processes that have waited a full aging interval
 */

use crate::core::types::{Slot, Tick};
use crate::process::Process;
use tracing::debug;

/// Aging rule: one priority step per full interval spent waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Aging {
    interval: Tick,
}

impl Aging {
    /// An interval of 0 disables aging
    pub const fn new(interval: Tick) -> Self {
        Self { interval }
    }

    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.interval > 0
    }

    /// Age every process in `ready` at tick `now`, returning how many were promoted
    ///
    /// Due processes are collected before any priority changes so the pass
    /// never observes its own updates.
    pub fn apply(&self, now: Tick, processes: &mut [Process], ready: &[Slot]) -> usize {
        if !self.is_enabled() {
            return 0;
        }

        let due: Vec<Slot> = ready
            .iter()
            .copied()
            .filter(|&slot| {
                let waited = processes[slot].waited_since_aged(now);
                waited > 0 && waited % self.interval == 0
            })
            .collect();

        for &slot in &due {
            let process = &mut processes[slot];
            let before = process.priority();
            process.promote(now);
            debug!(
                time = now,
                process = %process.name(),
                from = before,
                to = process.priority(),
                "aged"
            );
        }

        due.len()
    }
}
