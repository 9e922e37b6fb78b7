//! Observability for the herd monitor
//!
//! Provides:
//! - Prometheus metrics (generation latency, herd size, active alerts,
//!   attention queue length, validation failures)
//! - Structured logging of snapshot, ranking and validation events

use prometheus::{
    register_histogram, register_int_counter, register_int_gauge, Encoder, Histogram,
    IntCounter, IntGauge, TextEncoder,
};
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::models::Snapshot;

/// Histogram buckets for generation latency (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
];

static GLOBAL_METRICS: OnceLock<HerdMetricsInner> = OnceLock::new();

struct HerdMetricsInner {
    generation_latency_seconds: Histogram,
    animals_total: IntGauge,
    active_alerts: IntGauge,
    attention_animals: IntGauge,
    validation_errors: IntCounter,
}

impl HerdMetricsInner {
    fn new() -> Self {
        Self {
            generation_latency_seconds: register_histogram!(
                "herd_generation_latency_seconds",
                "Time spent generating a herd snapshot",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register generation_latency_seconds"),

            animals_total: register_int_gauge!(
                "herd_animals_total",
                "Number of animals in the current snapshot"
            )
            .expect("Failed to register animals_total"),

            active_alerts: register_int_gauge!(
                "herd_active_alerts",
                "Number of unresolved alerts in the current snapshot"
            )
            .expect("Failed to register active_alerts"),

            attention_animals: register_int_gauge!(
                "herd_attention_animals",
                "Number of animals currently needing attention"
            )
            .expect("Failed to register attention_animals"),

            validation_errors: register_int_counter!(
                "herd_validation_errors_total",
                "Total number of validation errors found in snapshots"
            )
            .expect("Failed to register validation_errors"),
        }
    }
}

/// Handle to the process-wide herd metrics
///
/// Clones share the same underlying registry entries.
#[derive(Clone)]
pub struct HerdMetrics {
    _private: (),
}

impl Default for HerdMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl HerdMetrics {
    /// Create a handle, registering the metrics on first use
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(HerdMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &HerdMetricsInner {
        GLOBAL_METRICS.get_or_init(HerdMetricsInner::new)
    }

    pub fn observe_generation_latency(&self, duration_secs: f64) {
        self.inner().generation_latency_seconds.observe(duration_secs);
    }

    /// Refresh the herd gauges from a snapshot
    pub fn record_snapshot(&self, snapshot: &Snapshot) {
        self.inner().animals_total.set(snapshot.animals.len() as i64);
        self.inner()
            .active_alerts
            .set(snapshot.active_alerts().count() as i64);
    }

    pub fn set_attention_animals(&self, count: usize) {
        self.inner().attention_animals.set(count as i64);
    }

    pub fn inc_validation_errors(&self, count: usize) {
        self.inner().validation_errors.inc_by(count as u64);
    }

    /// Render every registered metric in the Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

/// Structured logger for herd events
///
/// Every event carries an `event` field so JSON logs can be filtered by kind.
#[derive(Clone)]
pub struct StructuredLogger {
    source: String,
}

impl StructuredLogger {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn log_snapshot_generated(&self, snapshot: &Snapshot, elapsed_secs: f64) {
        info!(
            event = "snapshot_generated",
            source = %self.source,
            seed = snapshot.seed,
            generated_at = %snapshot.generated_at,
            animals = snapshot.animals.len(),
            alerts = snapshot.alerts.len(),
            active_alerts = snapshot.active_alerts().count(),
            activities = snapshot.activities.len(),
            elapsed_secs = elapsed_secs,
            "Herd snapshot generated"
        );
    }

    /// Log the outcome of an attention ranking
    pub fn log_attention(&self, candidates: usize, returned: usize, top_score: Option<u32>) {
        info!(
            event = "attention_ranked",
            source = %self.source,
            candidates = candidates,
            returned = returned,
            top_score = ?top_score,
            "Attention ranking computed"
        );
    }

    pub fn log_validation(&self, records_checked: usize, records_with_issues: usize) {
        if records_with_issues == 0 {
            info!(
                event = "snapshot_validated",
                source = %self.source,
                records_checked = records_checked,
                "Snapshot passed validation"
            );
        } else {
            warn!(
                event = "snapshot_validated",
                source = %self.source,
                records_checked = records_checked,
                records_with_issues = records_with_issues,
                "Snapshot failed validation"
            );
        }
    }

    pub fn log_export(&self, destination: &str, bytes: usize) {
        info!(
            event = "snapshot_exported",
            source = %self.source,
            destination = %destination,
            bytes = bytes,
            "Snapshot exported"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::config::GeneratorConfig;
    use crate::test_support::fixed_now;

    fn snapshot() -> Snapshot {
        let config = GeneratorConfig::default()
            .with_population(10)
            .with_day_window(1)
            .with_seed(3)
            .with_now(fixed_now());
        Generator::new(config).unwrap().generate()
    }

    #[test]
    fn test_herd_metrics_render() {
        // The registry is process-global, so only check metric names
        let metrics = HerdMetrics::new();
        metrics.observe_generation_latency(0.004);
        metrics.record_snapshot(&snapshot());
        metrics.set_attention_animals(2);
        metrics.inc_validation_errors(0);

        let text = metrics.render().unwrap();
        assert!(text.contains("herd_generation_latency_seconds"));
        assert!(text.contains("herd_animals_total"));
        assert!(text.contains("herd_active_alerts"));
        assert!(text.contains("herd_attention_animals"));
        assert!(text.contains("herd_validation_errors_total"));
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("herd-cli");
        assert_eq!(logger.source, "herd-cli");

        let snap = snapshot();
        logger.log_snapshot_generated(&snap, 0.01);
        logger.log_attention(snap.animals.len(), 0, None);
        logger.log_validation(snap.animals.len(), 0);
        logger.log_export("stdout", 128);
    }
}
