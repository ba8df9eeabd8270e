/*!
 * Configuration Module
 * Workload files consumed by the driver
 */

mod workload;

pub use workload::{ProcessRecord, Workload};
