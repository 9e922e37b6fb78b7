//! Static domain constants for the herd monitor

use crate::models::{Breed, HealthStatus, Zone};

/// Average cow gestation period
pub const GESTATION_PERIOD_DAYS: i64 = 283;

/// Average estrous cycle length
pub const BREEDING_CYCLE_DAYS: i64 = 21;

/// Default number of animals in a generated population
pub const DEFAULT_POPULATION_SIZE: usize = 50;

/// Default number of days of activity history
pub const DEFAULT_DAY_WINDOW: u32 = 7;

/// All breeds, in display order
pub const BREEDS: [Breed; 5] = [
    Breed::Holstein,
    Breed::Jersey,
    Breed::Angus,
    Breed::Hereford,
    Breed::Simmental,
];

/// Health statuses sampled with repetition, skewing the herd toward healthy
pub const HEALTH_STATUS_POOL: [HealthStatus; 5] = [
    HealthStatus::Healthy,
    HealthStatus::Healthy,
    HealthStatus::Healthy,
    HealthStatus::Attention,
    HealthStatus::Sick,
];

/// Zones an animal can be placed in at generation time
pub const PLACEMENT_ZONES: [Zone; 4] =
    [Zone::Feeding, Zone::Resting, Zone::Walkway, Zone::Milking];

/// Barn floor dimensions in barn units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarnDimensions {
    pub width: i32,
    pub height: i32,
    /// Meters per unit
    pub scale: f64,
}

pub const BARN_DIMENSIONS: BarnDimensions = BarnDimensions {
    width: 100,
    height: 60,
    scale: 1.0,
};

/// Inclusive-exclusive numeric band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Body temperature bands in Celsius
pub mod temperature {
    use super::Band;

    pub const NORMAL: Band = Band { min: 38.0, max: 39.5 };
    pub const FEVER: Band = Band { min: 39.5, max: 41.0 };
    pub const CRITICAL: Band = Band { min: 41.0, max: 43.0 };

    /// Physiological bounds used by record validation
    pub const VALID: Band = Band { min: 35.0, max: 45.0 };
}

/// Behaviour activity score bands (0-100 scale)
pub mod activity {
    use super::Band;

    pub const LOW: Band = Band { min: 0.0, max: 30.0 };
    pub const NORMAL: Band = Band { min: 30.0, max: 70.0 };
    pub const HIGH: Band = Band { min: 70.0, max: 100.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_bands_are_contiguous() {
        assert_eq!(temperature::NORMAL.max, temperature::FEVER.min);
        assert_eq!(temperature::FEVER.max, temperature::CRITICAL.min);
        assert!(temperature::NORMAL.contains(38.6));
        assert!(!temperature::NORMAL.contains(39.5));
        assert!(temperature::FEVER.contains(39.5));
    }

    #[test]
    fn test_health_pool_is_skewed_toward_healthy() {
        let healthy = HEALTH_STATUS_POOL
            .iter()
            .filter(|s| **s == HealthStatus::Healthy)
            .count();
        assert_eq!(healthy, 3);
        assert!(!HEALTH_STATUS_POOL.contains(&HealthStatus::Critical));
    }
}
