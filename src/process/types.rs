/*!
 * Process Types
 * Input descriptors and per-run simulation state
 */

use crate::core::data_structures::InlineString;
use crate::core::limits::{AG_FINISHED_QUANTUM, MIN_AGED_PRIORITY};
use crate::core::types::{Priority, Tick};
use serde::{Deserialize, Serialize};

/// Immutable process descriptor supplied by the workload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: InlineString,
    pub arrival: Tick,
    pub burst: Tick,
    pub priority: Priority,
    /// Initial adaptive quantum, only meaningful for AG runs
    #[serde(default)]
    pub quantum: Tick,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<InlineString>, arrival: Tick, burst: Tick, priority: Priority) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            priority,
            quantum: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = quantum;
        self
    }
}

/// Process state for one simulation run
///
/// Created fresh from a [`ProcessSpec`] at the start of every run, so runs never
/// observe each other's mutations.
#[derive(Debug, Clone)]
pub struct Process {
    spec: ProcessSpec,
    remaining: Tick,
    priority: Priority,
    quantum: Tick,
    executed_in_quantum: Tick,
    last_aged: Tick,
    completion: Option<Tick>,
    quantum_history: Vec<Tick>,
}

impl Process {
    #[must_use]
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        let quantum_history = if spec.quantum > 0 {
            vec![spec.quantum]
        } else {
            Vec::new()
        };

        Self {
            spec: spec.clone(),
            remaining: spec.burst,
            priority: spec.priority,
            quantum: spec.quantum,
            executed_in_quantum: 0,
            last_aged: spec.arrival,
            completion: None,
            quantum_history,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &InlineString {
        &self.spec.name
    }

    #[inline(always)]
    pub fn spec(&self) -> &ProcessSpec {
        &self.spec
    }

    #[inline(always)]
    pub fn arrival(&self) -> Tick {
        self.spec.arrival
    }

    #[inline(always)]
    pub fn burst(&self) -> Tick {
        self.spec.burst
    }

    #[inline(always)]
    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    /// Current (possibly aged) priority
    #[inline(always)]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[inline(always)]
    pub fn quantum(&self) -> Tick {
        self.quantum
    }

    #[inline(always)]
    pub fn executed_in_quantum(&self) -> Tick {
        self.executed_in_quantum
    }

    #[inline(always)]
    pub fn quantum_history(&self) -> &[Tick] {
        &self.quantum_history
    }

    #[inline(always)]
    pub fn completion(&self) -> Option<Tick> {
        self.completion
    }

    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Record admission to a ready pool; restarts the aging counter
    pub(crate) fn mark_ready(&mut self, now: Tick) {
        self.last_aged = now;
    }

    /// Consume `ticks` of CPU time
    pub(crate) fn run_for(&mut self, ticks: Tick) {
        assert!(
            ticks <= self.remaining,
            "process {} ran {} ticks with only {} remaining",
            self.spec.name,
            ticks,
            self.remaining
        );
        self.remaining -= ticks;
        self.executed_in_quantum += ticks;
    }

    /// Fix completion metrics; only valid once remaining time hits zero
    pub(crate) fn complete(&mut self, now: Tick) {
        assert_eq!(self.remaining, 0, "process {} completed early", self.spec.name);
        debug_assert!(self.completion.is_none(), "process {} completed twice", self.spec.name);
        self.completion = Some(now);
    }

    /// Ticks waited since the last arrival or aging step
    #[inline]
    pub(crate) fn waited_since_aged(&self, now: Tick) -> Tick {
        now.saturating_sub(self.last_aged)
    }

    /// Lower the priority value by one, never below [`MIN_AGED_PRIORITY`]
    pub(crate) fn promote(&mut self, now: Tick) {
        if self.priority > MIN_AGED_PRIORITY {
            self.priority -= 1;
        }
        self.last_aged = now;
    }

    /// Start a fresh quantum window
    pub(crate) fn reset_quantum_window(&mut self) {
        self.executed_in_quantum = 0;
    }

    /// Grow the adaptive quantum and record it
    pub(crate) fn grow_quantum(&mut self, by: Tick) {
        self.quantum += by;
        self.quantum_history.push(self.quantum);
    }

    /// Zero the adaptive quantum at completion and record it
    pub(crate) fn retire_quantum(&mut self) {
        self.quantum = AG_FINISHED_QUANTUM;
        self.quantum_history.push(AG_FINISHED_QUANTUM);
    }
}

/// Final per-process metrics extracted from a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub name: InlineString,
    pub arrival: Tick,
    pub burst: Tick,
    pub priority: Priority,
    pub completion: Tick,
    pub turnaround: Tick,
    pub waiting: Tick,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quantum_history: Vec<Tick>,
}

impl From<Process> for ProcessMetrics {
    fn from(process: Process) -> Self {
        let completion = process
            .completion
            .unwrap_or_else(|| panic!("process {} never completed", process.spec.name));
        let turnaround = completion - process.spec.arrival;
        let waiting = turnaround - process.spec.burst;

        Self {
            name: process.spec.name,
            arrival: process.spec.arrival,
            burst: process.spec.burst,
            priority: process.spec.priority,
            completion,
            turnaround,
            waiting,
            quantum_history: process.quantum_history,
        }
    }
}
