//! Collectors for content operations, labelled by operation and outcome.

use crate::error::AppError;
use once_cell::sync::Lazy;
use prometheus::{register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec};
use std::time::Duration;

static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "content_operations_total",
        "Content operations segmented by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("failed to register content_operations_total")
});

static OPERATION_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "content_operation_duration_seconds",
        "Duration of content operations including storage round-trips",
        &["operation"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]
    )
    .expect("failed to register content_operation_duration_seconds")
});

/// Outcome label for an operation result.
pub fn outcome_label<T>(result: &Result<T, AppError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(AppError::NotFound(_)) => "not_found",
        Err(AppError::Validation(_)) => "invalid",
        Err(_) => "error",
    }
}

pub fn record_operation(operation: &str, outcome: &str, elapsed: Duration) {
    OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
    OPERATION_DURATION_SECONDS
        .with_label_values(&[operation])
        .observe(elapsed.as_secs_f64());
}
