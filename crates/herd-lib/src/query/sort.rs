//! Stable sorting of animals, alerts and activity events

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ActivityEvent, Alert, Animal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Animal columns the herd table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimalSortKey {
    Id,
    Name,
    Breed,
    Age,
    Weight,
    HealthStatus,
    Temperature,
    Activity,
    Confidence,
    LastActivity,
    LastCheckup,
}

impl fmt::Display for AnimalSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimalSortKey::Id => write!(f, "id"),
            AnimalSortKey::Name => write!(f, "name"),
            AnimalSortKey::Breed => write!(f, "breed"),
            AnimalSortKey::Age => write!(f, "age"),
            AnimalSortKey::Weight => write!(f, "weight"),
            AnimalSortKey::HealthStatus => write!(f, "health-status"),
            AnimalSortKey::Temperature => write!(f, "temperature"),
            AnimalSortKey::Activity => write!(f, "activity"),
            AnimalSortKey::Confidence => write!(f, "confidence"),
            AnimalSortKey::LastActivity => write!(f, "last-activity"),
            AnimalSortKey::LastCheckup => write!(f, "last-checkup"),
        }
    }
}

fn compare_animals(a: &Animal, b: &Animal, key: AnimalSortKey) -> Ordering {
    match key {
        AnimalSortKey::Id => a.id.cmp(&b.id),
        AnimalSortKey::Name => a.display_name().cmp(b.display_name()),
        AnimalSortKey::Breed => a.breed.to_string().cmp(&b.breed.to_string()),
        AnimalSortKey::Age => a.age_months.cmp(&b.age_months),
        AnimalSortKey::Weight => a.weight_kg.cmp(&b.weight_kg),
        // Ascending puts the most severe first
        AnimalSortKey::HealthStatus => b.health_status.cmp(&a.health_status),
        AnimalSortKey::Temperature => a.vitals.temperature.total_cmp(&b.vitals.temperature),
        AnimalSortKey::Activity => a.behavior.activity.cmp(&b.behavior.activity),
        AnimalSortKey::Confidence => a.pregnancy.confidence.cmp(&b.pregnancy.confidence),
        AnimalSortKey::LastActivity => a.last_activity.cmp(&b.last_activity),
        AnimalSortKey::LastCheckup => a.last_checkup.cmp(&b.last_checkup),
    }
}

/// Sort in place; equal keys keep their relative order
pub fn sort_animals(animals: &mut [&Animal], key: AnimalSortKey, direction: SortDirection) {
    animals.sort_by(|a, b| direction.apply(compare_animals(a, b, key)));
}

/// Alerts by priority; ascending puts critical first
pub fn sort_alerts_by_priority(alerts: &mut [&Alert], direction: SortDirection) {
    alerts.sort_by(|a, b| direction.apply(b.priority.cmp(&a.priority)));
}

/// Alerts by urgency: priority first, newest first within a priority
pub fn sort_alerts_by_urgency(alerts: &mut [&Alert]) {
    alerts.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
}

pub fn sort_alerts_by_time(alerts: &mut [&Alert], direction: SortDirection) {
    alerts.sort_by(|a, b| direction.apply(a.timestamp.cmp(&b.timestamp)));
}

pub fn sort_activities_by_time(activities: &mut [&ActivityEvent], direction: SortDirection) {
    activities.sort_by(|a, b| direction.apply(a.timestamp.cmp(&b.timestamp)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertPriority, AlertType, HealthStatus};
    use crate::test_support::{animal, fixed_now};
    use chrono::Duration;

    fn ids(animals: &[&Animal]) -> Vec<String> {
        animals.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_sort_by_temperature() {
        let mut a = animal("COW001");
        a.vitals.temperature = 39.4;
        let mut b = animal("COW002");
        b.vitals.temperature = 38.1;
        let c = animal("COW003");
        let herd = [a, b, c];

        let mut view: Vec<&Animal> = herd.iter().collect();
        sort_animals(&mut view, AnimalSortKey::Temperature, SortDirection::Asc);
        assert_eq!(ids(&view), vec!["COW002", "COW003", "COW001"]);

        sort_animals(&mut view, AnimalSortKey::Temperature, SortDirection::Desc);
        assert_eq!(ids(&view), vec!["COW001", "COW003", "COW002"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut a = animal("COW001");
        a.health_status = HealthStatus::Sick;
        let b = animal("COW002");
        let c = animal("COW003");
        let herd = [a, b, c];

        let mut view: Vec<&Animal> = herd.iter().collect();
        sort_animals(&mut view, AnimalSortKey::HealthStatus, SortDirection::Asc);
        assert_eq!(ids(&view), vec!["COW001", "COW002", "COW003"]);

        sort_animals(&mut view, AnimalSortKey::HealthStatus, SortDirection::Desc);
        assert_eq!(ids(&view), vec!["COW002", "COW003", "COW001"]);
    }

    #[test]
    fn test_alert_urgency_order() {
        let base = Alert {
            id: "ALERT001".to_string(),
            cow_id: "COW001".to_string(),
            alert_type: AlertType::Behavior,
            priority: AlertPriority::Low,
            title: "Low Activity Level".to_string(),
            description: String::new(),
            timestamp: fixed_now() - Duration::hours(1),
            resolved: false,
            resolved_by: None,
            resolved_at: None,
            action_required: false,
            estimated_resolution_minutes: None,
        };
        let mut older_critical = base.clone();
        older_critical.id = "ALERT002".to_string();
        older_critical.priority = AlertPriority::Critical;
        older_critical.timestamp = fixed_now() - Duration::hours(5);
        let mut newer_critical = older_critical.clone();
        newer_critical.id = "ALERT003".to_string();
        newer_critical.timestamp = fixed_now() - Duration::hours(2);

        let alerts = [base, older_critical, newer_critical];
        let mut view: Vec<&Alert> = alerts.iter().collect();
        sort_alerts_by_urgency(&mut view);
        let order: Vec<&str> = view.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(order, vec!["ALERT003", "ALERT002", "ALERT001"]);

        sort_alerts_by_time(&mut view, SortDirection::Asc);
        assert_eq!(view[0].id, "ALERT002");

        sort_alerts_by_priority(&mut view, SortDirection::Desc);
        assert_eq!(view[0].id, "ALERT001");
    }
}
