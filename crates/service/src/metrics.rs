use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec};

// Prometheus metrics (default registry)
pub static CATALOG_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "college_catalog_operations_total",
        "Catalog operations applied, by record kind and operation",
        &["kind", "op"]
    )
    .expect("register catalog_operations_total")
});

pub static VALIDATION_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "college_catalog_validation_failures_total",
        "Add/edit submissions rejected by validation",
        &["kind"]
    )
    .expect("register validation_failures_total")
});

pub fn record_operation(kind: &str, op: &str) {
    CATALOG_OPERATIONS_TOTAL.with_label_values(&[kind, op]).inc();
}

pub fn record_validation_failure(kind: &str) {
    VALIDATION_FAILURES_TOTAL.with_label_values(&[kind]).inc();
}
