//! Herd monitoring core
//!
//! This crate provides:
//! - Synthetic, seedable generation of a herd snapshot (animals, alerts,
//!   activity log and dashboard aggregates)
//! - Attention scoring and top-K ranking of animals
//! - Herd-level metrics and record validation
//! - Filters, sorts and groupings over a snapshot
//! - Prometheus metrics and structured logging

pub mod attention;
pub mod config;
pub mod constants;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod observability;
pub mod query;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use attention::{score_priority, top_attention, AttentionRanker, RankedAnimal, ScoreBreakdown};
pub use config::{ConfigError, GeneratorConfig};
pub use generator::{generate, Generator};
pub use models::*;
pub use observability::{HerdMetrics, StructuredLogger};
pub use validation::{validate_alert, validate_animal, validate_snapshot, RecordIssues};
