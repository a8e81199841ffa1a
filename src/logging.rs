//! Logging utilities for colorstrip.
//!
//! Structured `tracing` helpers shared by the engine, the renderer and the
//! command-line tool.

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    // A second initialization (tests, embedding hosts) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed with warnings"
        );
    }
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = Uuid::new_v4();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log the outcome of a grid-range scan
pub fn log_grid_scan_stats(dims: [usize; 3], cells: usize, min: f64, max: f64) {
    info!(
        operation = "grid_scan",
        dims = ?dims,
        cells = cells,
        min = min,
        max = max,
        "Grid value range computed"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::ColorStripError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name::<crate::error::ColorStripError>(),
        "Error occurred"
    );
}

/// Generate a unique identifier for maps and surfaces
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}
