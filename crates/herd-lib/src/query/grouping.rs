//! Bucketing of activity events and animals

use std::collections::BTreeMap;

use chrono::{NaiveDate, Timelike};

use crate::models::{ActivityEvent, ActivityType, Animal, Breed, Zone};

/// Events bucketed by hour of day (0-23)
pub fn group_activities_by_hour(
    activities: &[ActivityEvent],
) -> BTreeMap<u32, Vec<&ActivityEvent>> {
    let mut groups: BTreeMap<u32, Vec<&ActivityEvent>> = BTreeMap::new();
    for event in activities {
        groups.entry(event.timestamp.hour()).or_default().push(event);
    }
    groups
}

/// Events bucketed by UTC calendar day
pub fn group_activities_by_day(
    activities: &[ActivityEvent],
) -> BTreeMap<NaiveDate, Vec<&ActivityEvent>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&ActivityEvent>> = BTreeMap::new();
    for event in activities {
        groups
            .entry(event.timestamp.date_naive())
            .or_default()
            .push(event);
    }
    groups
}

/// Total minutes spent per activity type
pub fn minutes_by_activity_type<'a>(
    activities: impl IntoIterator<Item = &'a ActivityEvent>,
) -> BTreeMap<ActivityType, u32> {
    let mut totals = BTreeMap::new();
    for event in activities {
        *totals.entry(event.activity_type).or_insert(0) += event.duration_minutes;
    }
    totals
}

pub fn count_by_breed(animals: &[Animal]) -> BTreeMap<Breed, usize> {
    let mut counts = BTreeMap::new();
    for animal in animals {
        *counts.entry(animal.breed).or_insert(0) += 1;
    }
    counts
}

pub fn count_by_zone(animals: &[Animal]) -> BTreeMap<Zone, usize> {
    let mut counts = BTreeMap::new();
    for animal in animals {
        *counts.entry(animal.location.zone).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLocation;
    use crate::test_support::{animal, fixed_now};
    use chrono::Duration;

    fn event(id: &str, hours_ago: i64, activity_type: ActivityType, minutes: u32) -> ActivityEvent {
        ActivityEvent {
            id: id.to_string(),
            cow_id: "COW001".to_string(),
            timestamp: fixed_now() - Duration::hours(hours_ago),
            activity_type,
            duration_minutes: minutes,
            location: ActivityLocation {
                x: 40,
                y: 30,
                zone: Zone::Resting,
            },
            intensity: 50,
            heart_rate: None,
            temperature: None,
        }
    }

    #[test]
    fn test_group_by_hour_and_day() {
        let events = vec![
            event("ACT1", 0, ActivityType::Eating, 30),
            event("ACT2", 24, ActivityType::Eating, 20),
            event("ACT3", 1, ActivityType::Resting, 90),
        ];

        let by_hour = group_activities_by_hour(&events);
        assert_eq!(by_hour[&12].len(), 2);
        assert_eq!(by_hour[&11].len(), 1);

        let by_day = group_activities_by_day(&events);
        assert_eq!(by_day.len(), 2);
        let today = fixed_now().date_naive();
        assert_eq!(by_day[&today].len(), 2);
    }

    #[test]
    fn test_minutes_by_type() {
        let events = vec![
            event("ACT1", 0, ActivityType::Eating, 30),
            event("ACT2", 2, ActivityType::Eating, 20),
            event("ACT3", 1, ActivityType::Resting, 90),
        ];
        let totals = minutes_by_activity_type(&events);
        assert_eq!(totals[&ActivityType::Eating], 50);
        assert_eq!(totals[&ActivityType::Resting], 90);
        assert!(!totals.contains_key(&ActivityType::Walking));
    }

    #[test]
    fn test_counts() {
        let mut a = animal("COW001");
        a.breed = Breed::Angus;
        a.location.zone = Zone::Feeding;
        let herd = vec![a, animal("COW002"), animal("COW003")];

        let breeds = count_by_breed(&herd);
        assert_eq!(breeds[&Breed::Holstein], 2);
        assert_eq!(breeds[&Breed::Angus], 1);

        let zones = count_by_zone(&herd);
        assert_eq!(zones[&Zone::Resting], 2);
        assert_eq!(zones[&Zone::Feeding], 1);
    }
}
