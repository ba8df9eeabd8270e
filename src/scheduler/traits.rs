/*!
 * Simulator Traits
 * Interface shared by every scheduling policy
 */

use super::types::{Policy, SimulationResult};
use crate::core::errors::SchedulerResult;
use crate::process::ProcessSpec;

/// A scheduling policy that can replay a workload
///
/// Implementations are pure: the same workload always yields the same result,
/// and the input slice is never mutated.
pub trait Simulator {
    /// Policy implemented by this simulator
    fn policy(&self) -> Policy;

    /// Run the workload to completion
    fn simulate(&self, workload: &[ProcessSpec]) -> SchedulerResult<SimulationResult>;
}
