//! Fixtures shared by unit tests

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::{
    Animal, Behavior, Breed, HealthStatus, Location, PregnancyStatus, Vitals, Zone,
};

/// Fixed reference time for deterministic tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// A healthy, unremarkable, non-pregnant animal checked up an hour ago
pub fn animal(id: &str) -> Animal {
    let now = fixed_now();
    Animal {
        id: id.to_string(),
        name: Some(format!("Holstein-{}", id)),
        breed: Breed::Holstein,
        age_months: 48,
        weight_kg: 550,
        health_status: HealthStatus::Healthy,
        pregnancy: PregnancyStatus {
            is_pregnant: false,
            confidence: 20,
            days_in_cycle: 12,
            expected_due_date: None,
            breeding_date: None,
            gestation_days: None,
        },
        location: Location {
            x: 40,
            y: 30,
            zone: Zone::Resting,
        },
        last_activity: now - Duration::hours(2),
        last_checkup: now - Duration::hours(1),
        vitals: Vitals {
            temperature: 38.5,
            heart_rate: 70,
            rumination: 30,
            activity: 200,
        },
        behavior: Behavior {
            activity: 50,
            movement: 50,
            resting: 60,
            social: 40,
            feeding: 70,
            vocalization: 30,
            heat: 40,
        },
        alert_ids: Vec::new(),
    }
}
