use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static STUDENT_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "student_operations_total",
        "Student record operations by operation and outcome",
        &["op", "outcome"]
    )
    .expect("register student_operations_total")
});

pub static STUDENT_OPERATION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "student_operation_duration_seconds",
        "Student record operation latency in seconds",
        &["op"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("register student_operation_duration")
});

/// Count one finished operation and its latency.
pub fn observe_student_op(op: &str, outcome: &str, elapsed_secs: f64) {
    STUDENT_OPERATIONS_TOTAL.with_label_values(&[op, outcome]).inc();
    STUDENT_OPERATION_DURATION.with_label_values(&[op]).observe(elapsed_secs);
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
