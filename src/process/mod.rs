/*!
 * Process Module
 * Process descriptors, per-run state and workload validation
 */

pub mod types;
pub(crate) mod validation;

pub use types::{Process, ProcessMetrics, ProcessSpec};
