/*!
 * Monitoring
 * Logging setup shared by the library and the driver
 */

mod tracer;

pub use tracer::{init_tracing, TRACE_JSON_ENV};
