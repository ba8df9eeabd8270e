/*!
 * Structured Tracing
 * Subscriber setup for simulator logs using the tracing crate
 *
 * Simulators emit:
 * - one `simulate` span per run carrying the policy and its knobs
 * - `debug` events for dispatch, preemption, aging and completion
 * - one `info` event per run with makespan and averages
 */

use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that switches output to JSON lines
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn, so tables stay readable)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
///
/// Logs go to stderr; stdout is reserved for result tables. Calling this
/// twice is harmless; the second call is ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let initialized = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if initialized {
        info!(json = use_json, "tracing initialized");
    }
}
