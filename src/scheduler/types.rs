/*!
 * Scheduler Types
 * Policies, configuration and the result contract handed to reporters
 */

use crate::core::data_structures::InlineString;
use crate::core::limits::{DEFAULT_AGING_INTERVAL, DEFAULT_CONTEXT_SWITCH, DEFAULT_RR_QUANTUM};
use crate::core::types::Tick;
use crate::process::ProcessMetrics;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Preemptive shortest remaining time first
    Sjf,
    /// Fixed-quantum rotating queue
    RoundRobin,
    /// Preemptive priority with aging
    Priority,
    /// Adaptive per-process quantum
    Ag,
}

impl Policy {
    /// Policies offered for workloads without per-process quanta
    pub const STANDARD: [Policy; 3] = [Policy::Sjf, Policy::RoundRobin, Policy::Priority];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sjf => "sjf",
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
            Self::Ag => "ag",
        }
    }

    /// Human-readable heading used by the reporter
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Sjf => "SJF (Preemptive)",
            Self::RoundRobin => "Round Robin",
            Self::Priority => "Priority (Preemptive + Aging)",
            Self::Ag => "AG Scheduler",
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sjf" | "srtf" => Ok(Self::Sjf),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            "ag" => Ok(Self::Ag),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: sjf, round_robin, priority, ag",
                s
            )),
        }
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Global knobs shared by the standard policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    /// Ticks lost per context switch
    pub context_switch: Tick,
    /// Fixed round robin quantum
    pub rr_quantum: Tick,
    /// Ticks a ready process waits per priority promotion; 0 disables aging
    pub aging_interval: Tick,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            context_switch: DEFAULT_CONTEXT_SWITCH,
            rr_quantum: DEFAULT_RR_QUANTUM,
            aging_interval: DEFAULT_AGING_INTERVAL,
        }
    }
}

/// Contiguous run of one process on the CPU, `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub name: InlineString,
    pub start: Tick,
    pub end: Tick,
}

/// Execution trace: who held the CPU, collapsed to transition points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    order: Vec<InlineString>,
    slices: Vec<Slice>,
}

impl ExecutionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` ran during `[start, end)`
    pub(crate) fn record(&mut self, name: &InlineString, start: Tick, end: Tick) {
        debug_assert!(start < end, "empty execution slice for {}", name);

        if self.order.last() != Some(name) {
            self.order.push(name.clone());
        }

        if let Some(last) = self.slices.last_mut() {
            if last.name == *name && last.end == start {
                last.end = end;
                return;
            }
            debug_assert!(last.end <= start, "overlapping slices: {:?} then {}", last, name);
        }

        self.slices.push(Slice {
            name: name.clone(),
            start,
            end,
        });
    }

    /// Repeat-collapsed dispatch order
    pub fn order(&self) -> &[InlineString] {
        &self.order
    }

    /// Gantt slices in time order
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Order as plain string slices, handy for assertions and rendering
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(InlineString::as_str).collect()
    }

    /// Tick at which the last process left the CPU
    pub fn makespan(&self) -> Tick {
        self.slices.last().map_or(0, |slice| slice.end)
    }
}

/// Outcome of one simulator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationResult {
    pub policy: Policy,
    pub trace: ExecutionTrace,
    /// Per-process metrics in workload order
    pub processes: Vec<ProcessMetrics>,
}

impl SimulationResult {
    /// Look up a process by name
    pub fn process(&self, name: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|p| p.name == name)
    }

    pub fn average_waiting(&self) -> f64 {
        mean(self.processes.iter().map(|p| p.waiting))
    }

    pub fn average_turnaround(&self) -> f64 {
        mean(self.processes.iter().map(|p| p.turnaround))
    }
}

fn mean(values: impl ExactSizeIterator<Item = Tick>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<Tick>() as f64 / count as f64
}
