//! Attention-priority ranking
//!
//! Scores each animal with a tiered heuristic: every signal adds a fixed
//! number of points when its condition holds. Animals that are unhealthy or
//! carry alerts are then ranked by descending score.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Animal, HealthStatus};

/// Temperature above which the fever bonus applies (Celsius)
const FEVER_TEMPERATURE: f64 = 39.5;

/// Temperature above which the elevated-temperature bonus applies (Celsius)
const ELEVATED_TEMPERATURE: f64 = 39.2;

/// Behaviour activity outside (LOW, HIGH) counts as abnormal
const ACTIVITY_ABNORMAL_LOW: u8 = 20;
const ACTIVITY_ABNORMAL_HIGH: u8 = 90;

const CHECKUP_OVERDUE_DAYS: i64 = 7;
const CHECKUP_DUE_DAYS: i64 = 3;

/// Per-signal contribution to an attention score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub health: u32,
    pub temperature: u32,
    pub activity: u32,
    pub pregnancy: u32,
    pub checkup: u32,
    pub alerts: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.health + self.temperature + self.activity + self.pregnancy + self.checkup + self.alerts
    }
}

/// Animal paired with its attention score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedAnimal<'a> {
    pub animal: &'a Animal,
    pub score: u32,
}

/// Attention-priority scoring relative to a reference time
#[derive(Debug, Clone, Copy)]
pub struct AttentionRanker {
    now: DateTime<Utc>,
}

impl AttentionRanker {
    /// Create a ranker that measures checkup recency against `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Break the score down by signal
    pub fn breakdown(&self, animal: &Animal) -> ScoreBreakdown {
        let health = match animal.health_status {
            HealthStatus::Critical => 100,
            HealthStatus::Sick => 80,
            HealthStatus::Attention => 60,
            HealthStatus::Healthy => 0,
        };

        let temperature = if animal.vitals.temperature > FEVER_TEMPERATURE {
            30
        } else if animal.vitals.temperature > ELEVATED_TEMPERATURE {
            15
        } else {
            0
        };

        let activity_score = animal.behavior.activity;
        let activity =
            if activity_score < ACTIVITY_ABNORMAL_LOW || activity_score > ACTIVITY_ABNORMAL_HIGH {
                20
            } else {
                0
            };

        // Uncertain pregnancy bonus. The condition can never hold and is kept
        // as-is until the intended band is confirmed.
        let confidence = animal.pregnancy.confidence;
        #[allow(clippy::impossible_comparisons)]
        let pregnancy = if confidence < 40 && confidence > 60 { 15 } else { 0 };

        let days_since_checkup = (self.now - animal.last_checkup).num_days();
        let checkup = if days_since_checkup > CHECKUP_OVERDUE_DAYS {
            25
        } else if days_since_checkup > CHECKUP_DUE_DAYS {
            10
        } else {
            0
        };

        let alerts = if animal.has_alerts() { 40 } else { 0 };

        ScoreBreakdown {
            health,
            temperature,
            activity,
            pregnancy,
            checkup,
            alerts,
        }
    }

    /// Scalar attention priority
    pub fn score(&self, animal: &Animal) -> u32 {
        self.breakdown(animal).total()
    }

    /// Whether an animal belongs on the attention list at all
    pub fn needs_attention(animal: &Animal) -> bool {
        !animal.health_status.is_healthy() || animal.has_alerts()
    }

    /// Up to `k` animals needing attention, highest score first
    ///
    /// Ties keep population order.
    pub fn top_attention<'a>(&self, animals: &'a [Animal], k: usize) -> Vec<RankedAnimal<'a>> {
        let mut ranked: Vec<RankedAnimal<'a>> = animals
            .iter()
            .filter(|a| Self::needs_attention(a))
            .map(|animal| RankedAnimal {
                animal,
                score: self.score(animal),
            })
            .collect();

        // Vec::sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(k);

        tracing::debug!(
            candidates = animals.len(),
            returned = ranked.len(),
            k = k,
            "Ranked attention list"
        );

        ranked
    }
}

/// Attention priority of one animal at `now`
pub fn score_priority(animal: &Animal, now: DateTime<Utc>) -> u32 {
    AttentionRanker::new(now).score(animal)
}

/// Up to `k` animals needing attention at `now`, highest score first
pub fn top_attention(animals: &[Animal], k: usize, now: DateTime<Utc>) -> Vec<RankedAnimal<'_>> {
    AttentionRanker::new(now).top_attention(animals, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{animal, fixed_now};
    use chrono::Duration;

    fn scenario() -> Vec<Animal> {
        let now = fixed_now();

        let mut a = animal("A");
        a.health_status = HealthStatus::Critical;
        a.vitals.temperature = 40.0;
        a.last_checkup = now - Duration::days(10);
        a.alert_ids.push("ALERT001".to_string());

        let mut b = animal("B");
        b.vitals.temperature = 38.5;
        b.last_checkup = now - Duration::days(1);

        let mut c = animal("C");
        c.health_status = HealthStatus::Attention;
        c.vitals.temperature = 39.3;
        c.last_checkup = now - Duration::days(5);

        vec![a, b, c]
    }

    #[test]
    fn test_scenario_scores() {
        let herd = scenario();
        let now = fixed_now();

        assert_eq!(score_priority(&herd[0], now), 195);
        assert_eq!(score_priority(&herd[1], now), 0);
        assert_eq!(score_priority(&herd[2], now), 85);
    }

    #[test]
    fn test_scenario_top_attention() {
        let herd = scenario();
        let top = top_attention(&herd, 5, fixed_now());

        let ids: Vec<&str> = top.iter().map(|r| r.animal.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
        assert_eq!(top[0].score, 195);
        assert_eq!(top[1].score, 85);
    }

    #[test]
    fn test_health_severity_is_monotonic() {
        let now = fixed_now();
        let scores: Vec<u32> = [
            HealthStatus::Healthy,
            HealthStatus::Attention,
            HealthStatus::Sick,
            HealthStatus::Critical,
        ]
        .iter()
        .map(|status| {
            let mut cow = animal("X");
            cow.health_status = *status;
            score_priority(&cow, now)
        })
        .collect();

        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(scores, vec![0, 60, 80, 100]);
    }

    #[test]
    fn test_temperature_tiers() {
        let ranker = AttentionRanker::new(fixed_now());
        let mut cow = animal("X");

        cow.vitals.temperature = 39.2;
        assert_eq!(ranker.breakdown(&cow).temperature, 0);
        cow.vitals.temperature = 39.5;
        assert_eq!(ranker.breakdown(&cow).temperature, 15);
        cow.vitals.temperature = 39.6;
        assert_eq!(ranker.breakdown(&cow).temperature, 30);
    }

    #[test]
    fn test_activity_extremes() {
        let ranker = AttentionRanker::new(fixed_now());
        let mut cow = animal("X");

        for (activity, expected) in [(19, 20), (20, 0), (90, 0), (91, 20)] {
            cow.behavior.activity = activity;
            assert_eq!(ranker.breakdown(&cow).activity, expected, "activity {}", activity);
        }
    }

    #[test]
    fn test_pregnancy_uncertainty_bonus_never_fires() {
        let ranker = AttentionRanker::new(fixed_now());
        let mut cow = animal("X");

        for confidence in 0..=100u8 {
            cow.pregnancy.confidence = confidence;
            assert_eq!(ranker.breakdown(&cow).pregnancy, 0);
        }
    }

    #[test]
    fn test_checkup_recency_uses_whole_days() {
        let now = fixed_now();
        let ranker = AttentionRanker::new(now);
        let mut cow = animal("X");

        // 7 days 23 hours is still 7 whole days
        cow.last_checkup = now - Duration::days(7) - Duration::hours(23);
        assert_eq!(ranker.breakdown(&cow).checkup, 10);

        cow.last_checkup = now - Duration::days(8);
        assert_eq!(ranker.breakdown(&cow).checkup, 25);

        cow.last_checkup = now - Duration::days(3) - Duration::hours(12);
        assert_eq!(ranker.breakdown(&cow).checkup, 0);

        cow.last_checkup = now - Duration::days(4);
        assert_eq!(ranker.breakdown(&cow).checkup, 10);
    }

    #[test]
    fn test_ties_keep_population_order_and_truncate() {
        let herd: Vec<Animal> = (1..=6)
            .map(|i| {
                let mut cow = animal(&format!("COW00{}", i));
                cow.health_status = HealthStatus::Sick;
                cow
            })
            .collect();

        let top = top_attention(&herd, 4, fixed_now());
        let ids: Vec<&str> = top.iter().map(|r| r.animal.id.as_str()).collect();
        assert_eq!(ids, vec!["COW001", "COW002", "COW003", "COW004"]);
    }

    #[test]
    fn test_healthy_with_alert_is_included() {
        let mut cow = animal("X");
        cow.alert_ids.push("ALERT009".to_string());
        let herd = vec![animal("Y"), cow];

        let top = top_attention(&herd, 10, fixed_now());
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].animal.id, "X");
        assert_eq!(top[0].score, 40);
    }

    #[test]
    fn test_zero_k_returns_empty() {
        let herd = scenario();
        assert!(top_attention(&herd, 0, fixed_now()).is_empty());
    }
}
