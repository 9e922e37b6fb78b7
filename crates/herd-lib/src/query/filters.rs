//! Filters over animals, alerts and activity events
//!
//! An empty selection list means "no filter" and keeps every record.

use serde::{Deserialize, Serialize};

use super::TimeRange;
use crate::models::{
    ActivityEvent, ActivityType, Alert, AlertPriority, AlertType, Animal, Breed, HealthStatus,
    Zone,
};

/// Confidence band that counts as uncertain (exclusive)
const UNCERTAIN_MIN_CONFIDENCE: u8 = 30;
const UNCERTAIN_MAX_CONFIDENCE: u8 = 70;

/// Pregnancy bracket used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PregnancyFilter {
    Pregnant,
    NotPregnant,
    Uncertain,
}

impl PregnancyFilter {
    pub fn matches(self, animal: &Animal) -> bool {
        let p = &animal.pregnancy;
        match self {
            PregnancyFilter::Pregnant => p.is_pregnant,
            PregnancyFilter::NotPregnant => !p.is_pregnant,
            PregnancyFilter::Uncertain => {
                p.confidence > UNCERTAIN_MIN_CONFIDENCE && p.confidence < UNCERTAIN_MAX_CONFIDENCE
            }
        }
    }
}

/// Combined dashboard filter selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default)]
    pub breeds: Vec<Breed>,
    #[serde(default)]
    pub health_status: Vec<HealthStatus>,
    #[serde(default)]
    pub pregnancy_status: Vec<PregnancyFilter>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    /// Window on last activity; unbounded when absent
    #[serde(default)]
    pub date_range: Option<TimeRange>,
}

fn selected<T: PartialEq>(selection: &[T], value: &T) -> bool {
    selection.is_empty() || selection.contains(value)
}

pub fn filter_by_health_status<'a>(
    animals: &'a [Animal],
    statuses: &[HealthStatus],
) -> Vec<&'a Animal> {
    animals
        .iter()
        .filter(|a| selected(statuses, &a.health_status))
        .collect()
}

pub fn filter_by_breed<'a>(animals: &'a [Animal], breeds: &[Breed]) -> Vec<&'a Animal> {
    animals.iter().filter(|a| selected(breeds, &a.breed)).collect()
}

/// Keep animals matching any of the requested pregnancy brackets
pub fn filter_by_pregnancy<'a>(
    animals: &'a [Animal],
    brackets: &[PregnancyFilter],
) -> Vec<&'a Animal> {
    animals
        .iter()
        .filter(|a| brackets.is_empty() || brackets.iter().any(|b| b.matches(a)))
        .collect()
}

pub fn filter_by_zone<'a>(animals: &'a [Animal], zones: &[Zone]) -> Vec<&'a Animal> {
    animals
        .iter()
        .filter(|a| selected(zones, &a.location.zone))
        .collect()
}

/// Keep animals whose last activity falls inside the range
pub fn filter_by_date_range<'a>(animals: &'a [Animal], range: &TimeRange) -> Vec<&'a Animal> {
    animals
        .iter()
        .filter(|a| range.contains(a.last_activity))
        .collect()
}

impl FilterOptions {
    /// Whether one animal passes every active filter
    pub fn matches(&self, animal: &Animal) -> bool {
        selected(&self.breeds, &animal.breed)
            && selected(&self.health_status, &animal.health_status)
            && (self.pregnancy_status.is_empty()
                || self.pregnancy_status.iter().any(|b| b.matches(animal)))
            && selected(&self.zones, &animal.location.zone)
            && self
                .date_range
                .as_ref()
                .map(|r| r.contains(animal.last_activity))
                .unwrap_or(true)
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
            && self.health_status.is_empty()
            && self.pregnancy_status.is_empty()
            && self.zones.is_empty()
            && self.date_range.is_none()
    }
}

/// Apply every filter of the selection, keeping population order
pub fn apply_all_filters<'a>(animals: &'a [Animal], filters: &FilterOptions) -> Vec<&'a Animal> {
    animals.iter().filter(|a| filters.matches(a)).collect()
}

pub fn filter_alerts_by_priority<'a>(
    alerts: &'a [Alert],
    priorities: &[AlertPriority],
) -> Vec<&'a Alert> {
    alerts
        .iter()
        .filter(|a| selected(priorities, &a.priority))
        .collect()
}

pub fn filter_alerts_by_type<'a>(alerts: &'a [Alert], types: &[AlertType]) -> Vec<&'a Alert> {
    alerts
        .iter()
        .filter(|a| selected(types, &a.alert_type))
        .collect()
}

pub fn filter_alerts_by_resolution(alerts: &[Alert], resolved: bool) -> Vec<&Alert> {
    alerts.iter().filter(|a| a.resolved == resolved).collect()
}

pub fn filter_activities_by_type<'a>(
    activities: &'a [ActivityEvent],
    types: &[ActivityType],
) -> Vec<&'a ActivityEvent> {
    activities
        .iter()
        .filter(|a| selected(types, &a.activity_type))
        .collect()
}

pub fn filter_activities_by_date_range<'a>(
    activities: &'a [ActivityEvent],
    range: &TimeRange,
) -> Vec<&'a ActivityEvent> {
    activities
        .iter()
        .filter(|a| range.contains(a.timestamp))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{animal, fixed_now};
    use chrono::Duration;

    fn herd() -> Vec<Animal> {
        let mut a = animal("COW001");
        a.breed = Breed::Jersey;
        a.health_status = HealthStatus::Sick;
        a.pregnancy.is_pregnant = true;
        a.pregnancy.confidence = 85;
        a.location.zone = Zone::Milking;

        let mut b = animal("COW002");
        b.pregnancy.confidence = 50;
        b.last_activity = fixed_now() - Duration::days(3);

        let c = animal("COW003");
        vec![a, b, c]
    }

    fn ids(animals: &[&Animal]) -> Vec<String> {
        animals.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        let herd = herd();
        assert_eq!(filter_by_breed(&herd, &[]).len(), 3);
        assert_eq!(filter_by_health_status(&herd, &[]).len(), 3);
        assert_eq!(apply_all_filters(&herd, &FilterOptions::default()).len(), 3);
    }

    #[test]
    fn test_single_filters() {
        let herd = herd();
        assert_eq!(ids(&filter_by_breed(&herd, &[Breed::Jersey])), vec!["COW001"]);
        assert_eq!(
            ids(&filter_by_health_status(&herd, &[HealthStatus::Healthy])),
            vec!["COW002", "COW003"]
        );
        assert_eq!(ids(&filter_by_zone(&herd, &[Zone::Milking])), vec!["COW001"]);
    }

    #[test]
    fn test_pregnancy_brackets() {
        let herd = herd();
        assert_eq!(
            ids(&filter_by_pregnancy(&herd, &[PregnancyFilter::Pregnant])),
            vec!["COW001"]
        );
        assert_eq!(
            ids(&filter_by_pregnancy(&herd, &[PregnancyFilter::Uncertain])),
            vec!["COW002"]
        );
        // Uncertain overlaps the flag-based brackets
        assert_eq!(
            ids(&filter_by_pregnancy(
                &herd,
                &[PregnancyFilter::NotPregnant, PregnancyFilter::Uncertain]
            )),
            vec!["COW002", "COW003"]
        );
    }

    #[test]
    fn test_combined_filters() {
        let herd = herd();
        let filters = FilterOptions {
            health_status: vec![HealthStatus::Healthy],
            date_range: TimeRange::last_days(fixed_now(), 1),
            ..FilterOptions::default()
        };
        assert!(!filters.is_empty());
        assert_eq!(ids(&apply_all_filters(&herd, &filters)), vec!["COW003"]);
    }

    #[test]
    fn test_date_range_filter() {
        let herd = herd();
        let range = TimeRange::last_days(fixed_now(), 2).unwrap();
        assert_eq!(
            ids(&filter_by_date_range(&herd, &range)),
            vec!["COW001", "COW003"]
        );
    }
}
