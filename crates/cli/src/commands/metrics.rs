//! Prometheus exposition command

use anyhow::{Context, Result};
use herd_lib::{validate_snapshot, AttentionRanker, HerdMetrics, Snapshot};

/// Print the herd metrics in the Prometheus text format
pub fn show_metrics(snapshot: &Snapshot, metrics: &HerdMetrics) -> Result<()> {
    let attention = snapshot
        .animals
        .iter()
        .filter(|a| AttentionRanker::needs_attention(a))
        .count();
    metrics.set_attention_animals(attention);

    let errors: usize = validate_snapshot(snapshot)
        .iter()
        .map(|issue| issue.errors.len())
        .sum();
    metrics.inc_validation_errors(errors);

    let text = metrics.render().context("Failed to encode metrics")?;
    print!("{}", text);

    Ok(())
}
