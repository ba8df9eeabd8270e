/*!
 * Workload Files
 * JSON workload loading, defaults and boundary validation
 */

use crate::core::data_structures::InlineString;
use crate::core::errors::{ConfigError, SchedulerError, SchedulerResult};
use crate::core::limits::{DEFAULT_AGING_INTERVAL, DEFAULT_CONTEXT_SWITCH, DEFAULT_RR_QUANTUM};
use crate::core::types::{Priority, Tick};
use crate::process::ProcessSpec;
use crate::scheduler::SimConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// One process entry as written in a workload file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub name: InlineString,
    pub arrival: i64,
    pub burst: i64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

/// Workload file contents
///
/// ```json
/// {
///   "contextSwitch": 1,
///   "rrQuantum": 2,
///   "agingInterval": 5,
///   "processes": [
///     { "name": "P1", "arrival": 0, "burst": 8, "priority": 3 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workload {
    #[serde(default = "default_context_switch")]
    pub context_switch: i64,
    #[serde(default = "default_rr_quantum")]
    pub rr_quantum: i64,
    #[serde(default = "default_aging_interval")]
    pub aging_interval: i64,
    pub processes: Vec<ProcessRecord>,
}

fn default_context_switch() -> i64 {
    DEFAULT_CONTEXT_SWITCH as i64
}

fn default_rr_quantum() -> i64 {
    DEFAULT_RR_QUANTUM as i64
}

fn default_aging_interval() -> i64 {
    DEFAULT_AGING_INTERVAL as i64
}

/// Test-case files wrap the workload in an `input` object next to the expected output
#[derive(Deserialize)]
#[serde(untagged)]
enum WorkloadFile {
    Wrapped { input: Workload },
    Bare(Workload),
}

impl Workload {
    /// Parse a workload from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let workload = match serde_json::from_str::<WorkloadFile>(json) {
            Ok(WorkloadFile::Wrapped { input }) => input,
            Ok(WorkloadFile::Bare(workload)) => workload,
            // Untagged errors are opaque; reparse as the bare shape for a useful message
            Err(_) => serde_json::from_str::<Workload>(json)?,
        };
        debug!(processes = workload.processes.len(), "workload parsed");
        Ok(workload)
    }

    /// Read and parse a workload file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let workload = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            processes = workload.processes.len(),
            "workload loaded"
        );
        Ok(workload)
    }

    /// Global knobs, rejecting negative costs and non-positive quanta
    pub fn sim_config(&self) -> SchedulerResult<SimConfig> {
        let context_switch = Tick::try_from(self.context_switch)
            .map_err(|_| SchedulerError::InvalidContextSwitch(self.context_switch))?;
        let aging_interval = Tick::try_from(self.aging_interval)
            .map_err(|_| SchedulerError::InvalidAgingInterval(self.aging_interval))?;
        let rr_quantum = match Tick::try_from(self.rr_quantum) {
            Ok(quantum) if quantum > 0 => quantum,
            _ => {
                return Err(SchedulerError::InvalidQuantum {
                    owner: InlineString::from("round robin"),
                    quantum: self.rr_quantum,
                })
            }
        };

        Ok(SimConfig {
            context_switch,
            rr_quantum,
            aging_interval,
        })
    }

    /// Process descriptors in file order
    pub fn processes(&self) -> SchedulerResult<Vec<ProcessSpec>> {
        if self.processes.is_empty() {
            return Err(SchedulerError::EmptyWorkload);
        }
        self.processes.iter().map(ProcessRecord::to_spec).collect()
    }

    /// True when any process carries its own quantum
    pub fn has_quanta(&self) -> bool {
        self.processes.iter().any(|p| p.quantum.is_some())
    }

    /// AG workloads are recognised by per-process quanta or an `ag` file name
    pub fn is_adaptive(&self, source: Option<&Path>) -> bool {
        let named_ag = source
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_lowercase().contains("ag"))
            .unwrap_or(false);
        named_ag || self.has_quanta()
    }
}

impl ProcessRecord {
    fn to_spec(&self) -> SchedulerResult<ProcessSpec> {
        let arrival = Tick::try_from(self.arrival).map_err(|_| SchedulerError::InvalidArrival {
            name: self.name.clone(),
            arrival: self.arrival,
        })?;
        let burst = match Tick::try_from(self.burst) {
            Ok(burst) if burst > 0 => burst,
            _ => {
                return Err(SchedulerError::InvalidBurst {
                    name: self.name.clone(),
                    burst: self.burst,
                })
            }
        };
        let quantum = match self.quantum {
            None => 0,
            Some(quantum) => match Tick::try_from(quantum) {
                Ok(quantum) if quantum > 0 => quantum,
                _ => {
                    return Err(SchedulerError::InvalidQuantum {
                        owner: self.name.clone(),
                        quantum,
                    })
                }
            },
        };

        Ok(ProcessSpec::new(self.name.clone(), arrival, burst, self.priority).with_quantum(quantum))
    }
}
