//! Prometheus metrics for generation volume and latency.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Generation latency histogram name (labeled by content kind).
pub const METRIC_GENERATION_LATENCY: &str = "content_generation_latency_ms";
/// Content generated counter name (labeled by content kind).
pub const METRIC_CONTENT_GENERATED: &str = "content_generated_total";
/// Generation failures counter name.
pub const METRIC_GENERATION_FAILED: &str = "content_generation_failed_total";
/// Brands created counter name.
pub const METRIC_BRANDS_CREATED: &str = "brands_created_total";
/// Calendar entries produced counter name.
pub const METRIC_CALENDAR_ENTRIES: &str = "calendar_entries_total";
/// Performance analyses run counter name.
pub const METRIC_ANALYSES_RUN: &str = "analyses_run_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_GENERATION_LATENCY,
        "Content generation latency in milliseconds"
    );

    describe_counter!(
        METRIC_CONTENT_GENERATED,
        "Total number of content pieces generated"
    );
    describe_counter!(
        METRIC_GENERATION_FAILED,
        "Total number of failed generation requests"
    );
    describe_counter!(METRIC_BRANDS_CREATED, "Total number of brands created");
    describe_counter!(
        METRIC_CALENDAR_ENTRIES,
        "Total number of calendar entries produced"
    );
    describe_counter!(
        METRIC_ANALYSES_RUN,
        "Total number of performance analyses run"
    );

    debug!("Metrics initialized");
}

/// Record generation latency for a content kind.
pub fn record_generation_latency(start: Instant, kind: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_GENERATION_LATENCY, "kind" => kind).record(latency_ms);
}

/// Increment the generated-content counter for a content kind.
pub fn inc_content_generated(kind: &'static str) {
    counter!(METRIC_CONTENT_GENERATED, "kind" => kind).increment(1);
}

/// Increment the failed-generation counter.
pub fn inc_generation_failed() {
    counter!(METRIC_GENERATION_FAILED).increment(1);
}

/// Increment the brands-created counter.
pub fn inc_brands_created() {
    counter!(METRIC_BRANDS_CREATED).increment(1);
}

/// Add produced calendar entries to the counter.
pub fn add_calendar_entries(count: u64) {
    counter!(METRIC_CALENDAR_ENTRIES).increment(count);
}

/// Increment the analyses counter.
pub fn inc_analyses_run() {
    counter!(METRIC_ANALYSES_RUN).increment(1);
}

/// RAII guard for timing generation.
/// Records latency for its kind when dropped.
pub struct GenerationTimer {
    start: Instant,
    kind: &'static str,
}

impl GenerationTimer {
    /// Start a timer for the given content kind.
    pub fn new(kind: &'static str) -> Self {
        Self {
            start: Instant::now(),
            kind,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for GenerationTimer {
    fn drop(&mut self) {
        record_generation_latency(self.start, self.kind);
    }
}
