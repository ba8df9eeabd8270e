/*!
 * Defaults and Constants
 *
 * Centralized location for workload defaults and scheduling constants.
 */

use crate::core::types::{Priority, Tick};

// =============================================================================
// WORKLOAD DEFAULTS
// =============================================================================

/// Context switch cost when the workload omits `contextSwitch`
pub const DEFAULT_CONTEXT_SWITCH: Tick = 0;

/// Round robin quantum when the workload omits `rrQuantum`
pub const DEFAULT_RR_QUANTUM: Tick = 2;

/// Aging interval when the workload omits `agingInterval`
pub const DEFAULT_AGING_INTERVAL: Tick = 1;

// =============================================================================
// PRIORITY AGING
// =============================================================================

/// Aging never promotes a process past this value
pub const MIN_AGED_PRIORITY: Priority = 1;

// =============================================================================
// AG ADAPTIVE QUANTUM
// =============================================================================

/// Growth applied when a process exhausts its whole quantum
pub const AG_QUANTUM_EXHAUSTED_BONUS: Tick = 2;

/// Quantum recorded in the history once a process completes
pub const AG_FINISHED_QUANTUM: Tick = 0;
