//! Record validation
//!
//! Validators never fail: they return human-readable messages, an empty list
//! meaning the record is valid.

use std::collections::HashSet;

use chrono::Duration;
use serde::Serialize;

use crate::constants::{temperature, GESTATION_PERIOD_DAYS};
use crate::models::{Alert, Animal, Snapshot};

const MAX_AGE_MONTHS: u32 = 360;
const MIN_WEIGHT_KG: u32 = 200;
const MAX_WEIGHT_KG: u32 = 1000;
const MAX_CONFIDENCE: u8 = 100;

/// Domain-range checks for one animal
pub fn validate_animal(animal: &Animal) -> Vec<String> {
    let mut errors = Vec::new();

    if animal.id.is_empty() {
        errors.push("Cow ID is required".to_string());
    }
    if animal.age_months > MAX_AGE_MONTHS {
        errors.push("Invalid age".to_string());
    }
    if animal.weight_kg < MIN_WEIGHT_KG || animal.weight_kg > MAX_WEIGHT_KG {
        errors.push("Invalid weight".to_string());
    }
    let t = animal.vitals.temperature;
    if !(temperature::VALID.min..=temperature::VALID.max).contains(&t) {
        errors.push("Invalid temperature".to_string());
    }
    if animal.pregnancy.confidence > MAX_CONFIDENCE {
        errors.push("Invalid pregnancy confidence".to_string());
    }

    errors
}

/// Required-field checks for one alert
pub fn validate_alert(alert: &Alert) -> Vec<String> {
    let mut errors = Vec::new();

    if alert.id.is_empty() {
        errors.push("Alert ID is required".to_string());
    }
    if alert.cow_id.is_empty() {
        errors.push("Cow ID is required".to_string());
    }
    if alert.title.is_empty() {
        errors.push("Alert title is required".to_string());
    }

    errors
}

/// Validation failures of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssues {
    pub record_id: String,
    pub errors: Vec<String>,
}

/// Validate every record of a snapshot plus the cross-record invariants
pub fn validate_snapshot(snapshot: &Snapshot) -> Vec<RecordIssues> {
    let mut issues = Vec::new();
    let gestation = Duration::days(GESTATION_PERIOD_DAYS);
    let mut seen = HashSet::new();

    for animal in &snapshot.animals {
        let mut errors = validate_animal(animal);

        if !seen.insert(animal.id.as_str()) {
            errors.push("Duplicate cow ID".to_string());
        }

        let p = &animal.pregnancy;
        let expected_due = if p.is_pregnant {
            p.breeding_date.map(|bred| bred + gestation)
        } else {
            None
        };
        if p.expected_due_date != expected_due {
            errors.push("Expected due date inconsistent with breeding date".to_string());
        }

        if animal.last_activity > snapshot.generated_at
            || animal.last_checkup > snapshot.generated_at
        {
            errors.push("Timestamp after generation time".to_string());
        }

        if !errors.is_empty() {
            issues.push(RecordIssues {
                record_id: animal.id.clone(),
                errors,
            });
        }
    }

    for alert in &snapshot.alerts {
        let mut errors = validate_alert(alert);

        if !alert.cow_id.is_empty() && !seen.contains(alert.cow_id.as_str()) {
            errors.push(format!("Unknown cow {}", alert.cow_id));
        }
        match (alert.resolved, alert.resolved_at) {
            (true, Some(at)) if at < alert.timestamp => {
                errors.push("Resolved before it was raised".to_string());
            }
            (true, None) => errors.push("Resolved alert has no resolution time".to_string()),
            _ => {}
        }

        if !errors.is_empty() {
            issues.push(RecordIssues {
                record_id: alert.id.clone(),
                errors,
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::Generator;
    use crate::models::{AlertPriority, AlertType};
    use crate::test_support::{animal, fixed_now};

    fn alert(id: &str, cow_id: &str) -> Alert {
        Alert {
            id: id.to_string(),
            cow_id: cow_id.to_string(),
            alert_type: AlertType::Health,
            priority: AlertPriority::High,
            title: "High Temperature Detected".to_string(),
            description: String::new(),
            timestamp: fixed_now() - Duration::hours(3),
            resolved: false,
            resolved_by: None,
            resolved_at: None,
            action_required: true,
            estimated_resolution_minutes: Some(30),
        }
    }

    #[test]
    fn test_valid_animal() {
        assert!(validate_animal(&animal("COW001")).is_empty());
    }

    #[test]
    fn test_invalid_animal_collects_all_errors() {
        let mut cow = animal("");
        cow.age_months = 400;
        cow.weight_kg = 150;
        cow.vitals.temperature = 46.0;
        cow.pregnancy.confidence = 120;

        assert_eq!(
            validate_animal(&cow),
            vec![
                "Cow ID is required",
                "Invalid age",
                "Invalid weight",
                "Invalid temperature",
                "Invalid pregnancy confidence",
            ]
        );
    }

    #[test]
    fn test_temperature_bounds_are_inclusive() {
        let mut cow = animal("COW001");
        cow.vitals.temperature = 35.0;
        assert!(validate_animal(&cow).is_empty());
        cow.vitals.temperature = 45.0;
        assert!(validate_animal(&cow).is_empty());
        cow.vitals.temperature = 34.9;
        assert_eq!(validate_animal(&cow), vec!["Invalid temperature"]);
    }

    #[test]
    fn test_alert_required_fields() {
        assert!(validate_alert(&alert("ALERT001", "COW001")).is_empty());

        let mut bad = alert("", "");
        bad.title.clear();
        assert_eq!(
            validate_alert(&bad),
            vec![
                "Alert ID is required",
                "Cow ID is required",
                "Alert title is required"
            ]
        );
    }

    #[test]
    fn test_generated_snapshot_is_clean() {
        let config = GeneratorConfig::default()
            .with_seed(31)
            .with_now(fixed_now());
        let snapshot = Generator::new(config).unwrap().generate();
        assert_eq!(validate_snapshot(&snapshot), Vec::new());
    }

    #[test]
    fn test_snapshot_cross_record_checks() {
        let config = GeneratorConfig::default()
            .with_population(3)
            .with_day_window(1)
            .with_seed(5)
            .with_now(fixed_now());
        let mut snapshot = Generator::new(config).unwrap().generate();

        snapshot.animals[1].pregnancy.is_pregnant = false;
        snapshot.animals[1].pregnancy.expected_due_date = Some(fixed_now());

        let mut orphan = alert("ALERT999", "COW404");
        orphan.resolved = true;
        orphan.resolved_at = Some(orphan.timestamp - Duration::minutes(5));
        snapshot.alerts.push(orphan);

        let issues = validate_snapshot(&snapshot);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].record_id, "COW002");
        assert_eq!(issues[1].record_id, "ALERT999");
        assert_eq!(
            issues[1].errors,
            vec!["Unknown cow COW404", "Resolved before it was raised"]
        );
    }
}
