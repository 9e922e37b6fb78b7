//! Synthetic herd generation
//!
//! Builds a self-consistent [`Snapshot`] in four stages, each reading only
//! the output of earlier ones:
//! 1. animals
//! 2. alerts (attached to a prefix of the herd)
//! 3. activity log
//! 4. aggregates: trends, barn layout, pregnancy distribution, behavioural
//!    indicators, KPIs and the live feed
//!
//! A single seeded random source is threaded through every stage, so the
//! same seed and generation time always yield the same snapshot.

mod activities;
mod aggregates;
mod alerts;
mod animals;
mod sampling;


pub use aggregates::{behavioral_indicators, pregnancy_distribution};

use chrono::Utc;
use tracing::{debug, info};

use crate::config::{ConfigError, GeneratorConfig};
use crate::models::Snapshot;
use sampling::Sampler;

/// Snapshot generator
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator, rejecting out-of-range rates
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce a fresh snapshot
    ///
    /// Without a configured seed every call draws a new one; the seed used is
    /// recorded on the snapshot.
    pub fn generate(&self) -> Snapshot {
        let config = &self.config;
        let seed = config.seed.unwrap_or_else(rand::random);
        let now = config.now.unwrap_or_else(Utc::now);
        let mut sampler = Sampler::from_seed(seed);

        let mut animals = animals::generate_animals(
            &mut sampler,
            config.population_size,
            config.pregnancy_rate,
            now,
        );
        debug!(count = animals.len(), "Generated animals");

        let alerts = alerts::generate_alerts(
            &mut sampler,
            &mut animals,
            config.alert_coverage,
            config.alert_resolved_rate,
            now,
        );
        debug!(count = alerts.len(), "Generated alerts");

        let activities =
            activities::generate_activities(&mut sampler, &animals, config.day_window, now);
        debug!(count = activities.len(), "Generated activity log");

        let daily_trends = aggregates::generate_daily_trends(
            &mut sampler,
            config.day_window,
            aggregates::saturating_count(config.population_size),
            now,
        );
        let barn_layout = aggregates::generate_barn_layout(&mut sampler);
        let pregnancy_distribution = aggregates::pregnancy_distribution(&animals);
        let behavioral_indicators = aggregates::behavioral_indicators(&animals);
        let kpi_metrics = aggregates::generate_kpi_metrics(&mut sampler, &animals, &alerts);
        let real_time_activity = aggregates::generate_real_time_activity(
            &mut sampler,
            &animals,
            config.realtime_feed_len,
            now,
        );
        debug!(
            trends = daily_trends.len(),
            feed = real_time_activity.len(),
            "Generated aggregates"
        );

        info!(
            seed = seed,
            animals = animals.len(),
            alerts = alerts.len(),
            activities = activities.len(),
            days = config.day_window,
            "Generated herd snapshot"
        );

        Snapshot {
            generated_at: now,
            seed,
            animals,
            alerts,
            activities,
            daily_trends,
            barn_layout,
            pregnancy_distribution,
            behavioral_indicators,
            kpi_metrics,
            real_time_activity,
        }
    }
}

/// Generate a snapshot of `population_size` animals over `day_window` days
/// with default rates
pub fn generate(population_size: usize, day_window: u32) -> Snapshot {
    let config = GeneratorConfig::default()
        .with_population(population_size)
        .with_day_window(day_window);
    // Default rates are always valid
    Generator { config }.generate()
}
