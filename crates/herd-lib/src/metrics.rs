//! Derived herd metrics
//!
//! Every aggregate returns 0 for an empty herd instead of dividing by zero.
//! Temperatures and percentages are rounded to one decimal, activity to the
//! nearest integer.

use crate::models::Animal;

/// Round half away from zero to the given number of decimals
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Mean body temperature, one decimal
pub fn average_temperature(animals: &[Animal]) -> f64 {
    if animals.is_empty() {
        return 0.0;
    }
    let total: f64 = animals.iter().map(|a| a.vitals.temperature).sum();
    round_to(total / animals.len() as f64, 1)
}

/// Mean behaviour activity score, nearest integer
pub fn average_activity(animals: &[Animal]) -> u32 {
    if animals.is_empty() {
        return 0;
    }
    let total: u64 = animals.iter().map(|a| a.behavior.activity as u64).sum();
    (total as f64 / animals.len() as f64).round() as u32
}

/// Share of pregnant animals as a percentage, one decimal
pub fn pregnancy_rate(animals: &[Animal]) -> f64 {
    percentage(animals, |a| a.pregnancy.is_pregnant)
}

/// Share of healthy animals as a percentage, one decimal
pub fn health_rate(animals: &[Animal]) -> f64 {
    percentage(animals, |a| a.health_status.is_healthy())
}

fn percentage(animals: &[Animal], predicate: impl Fn(&Animal) -> bool) -> f64 {
    if animals.is_empty() {
        return 0.0;
    }
    let matching = animals.iter().filter(|a| predicate(a)).count();
    round_to(matching as f64 / animals.len() as f64 * 100.0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthStatus;
    use crate::test_support::animal;

    #[test]
    fn test_empty_herd_returns_zero() {
        assert_eq!(average_temperature(&[]), 0.0);
        assert_eq!(average_activity(&[]), 0);
        assert_eq!(pregnancy_rate(&[]), 0.0);
        assert_eq!(health_rate(&[]), 0.0);
    }

    #[test]
    fn test_rounding() {
        let mut a = animal("COW001");
        let mut b = animal("COW002");
        let mut c = animal("COW003");
        a.vitals.temperature = 38.4;
        b.vitals.temperature = 38.5;
        c.vitals.temperature = 39.2;
        a.behavior.activity = 40;
        b.behavior.activity = 41;
        c.behavior.activity = 41;
        let herd = vec![a, b, c];

        // 116.1 / 3 = 38.7
        assert_eq!(average_temperature(&herd), 38.7);
        // 122 / 3 = 40.67
        assert_eq!(average_activity(&herd), 41);
    }

    #[test]
    fn test_rates() {
        let mut herd: Vec<_> = (0..3).map(|i| animal(&format!("COW00{}", i + 1))).collect();
        herd[0].pregnancy.is_pregnant = true;
        herd[1].health_status = HealthStatus::Sick;

        assert_eq!(pregnancy_rate(&herd), 33.3);
        assert_eq!(health_rate(&herd), 66.7);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(-0.26, 1), -0.3);
        assert_eq!(round_to(7.0, 0), 7.0);
    }
}
