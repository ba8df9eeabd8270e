/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated clock value, in ticks
pub type Tick = u64;

/// Priority level (lower value is more urgent)
pub type Priority = i32;

/// Index of a process inside one simulation run's process table
pub type Slot = usize;
