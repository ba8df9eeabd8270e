/*!
 * Workload Validation
 * Precondition checks run before any simulator touches a workload
 */

use super::types::ProcessSpec;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Tick;
use std::collections::HashSet;

/// Validate a process set shared by every policy
pub(crate) fn validate_workload(specs: &[ProcessSpec]) -> SchedulerResult<()> {
    if specs.is_empty() {
        return Err(SchedulerError::EmptyWorkload);
    }

    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if spec.burst == 0 {
            return Err(SchedulerError::InvalidBurst {
                name: spec.name.clone(),
                burst: 0,
            });
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(SchedulerError::DuplicateProcess(spec.name.clone()));
        }
    }

    Ok(())
}

/// AG runs additionally need a positive starting quantum on every process
pub(crate) fn validate_adaptive_quanta(specs: &[ProcessSpec]) -> SchedulerResult<()> {
    match specs.iter().find(|spec| spec.quantum == 0) {
        Some(spec) => Err(SchedulerError::InvalidQuantum {
            owner: spec.name.clone(),
            quantum: 0,
        }),
        None => Ok(()),
    }
}

/// Round robin needs a positive global quantum
pub(crate) fn validate_rr_quantum(quantum: Tick) -> SchedulerResult<()> {
    if quantum == 0 {
        return Err(SchedulerError::invalid_rr_quantum(quantum));
    }
    Ok(())
}
