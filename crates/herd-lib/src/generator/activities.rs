//! Stage 3: per-animal activity log

use chrono::{DateTime, Duration, Timelike, Utc};

use super::sampling::Sampler;
use crate::models::{ActivityEvent, ActivityLocation, ActivityType, Animal};

/// Max distance an event is placed from its owner's position
const LOCATION_JITTER: i64 = 5;

/// Exclusive upper bounds of the hour and minute draws
const LAST_HOUR: u32 = 23;
const LAST_MINUTE: u32 = 59;

pub fn generate_activities(
    sampler: &mut Sampler,
    animals: &[Animal],
    days: u32,
    now: DateTime<Utc>,
) -> Vec<ActivityEvent> {
    let mut activities = Vec::new();

    for animal in animals {
        for day in 0..days {
            let per_day = sampler.count(8, 15);
            for _ in 0..per_day {
                let timestamp = event_time(sampler, now, day);
                let activity = ActivityEvent {
                    id: format!("ACT{}", activities.len() + 1),
                    cow_id: animal.id.clone(),
                    timestamp,
                    activity_type: sampler.pick(&ActivityType::ALL),
                    duration_minutes: sampler.count(15, 120),
                    location: ActivityLocation {
                        x: animal.location.x
                            + sampler.int(-LOCATION_JITTER, LOCATION_JITTER) as i32,
                        y: animal.location.y
                            + sampler.int(-LOCATION_JITTER, LOCATION_JITTER) as i32,
                        zone: animal.location.zone,
                    },
                    intensity: sampler.score(20, 90),
                    heart_rate: Some(sampler.count(60, 85)),
                    temperature: Some(sampler.decimal(38.0, 39.5, 1)),
                };
                activities.push(activity);
            }
        }
    }

    // Stable sort, newest first
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities
}

/// Random clock time on the day `day` days before `now`, never after `now`
fn event_time(sampler: &mut Sampler, now: DateTime<Utc>, day: u32) -> DateTime<Utc> {
    let base = now - Duration::days(i64::from(day));

    // Today's events are drawn from the part of the day that has already passed
    let (hour, minute) = if day == 0 {
        let hour = sampler.count(0, (now.hour() + 1).min(LAST_HOUR));
        let minute_limit = if hour == now.hour() {
            (now.minute() + 1).min(LAST_MINUTE)
        } else {
            LAST_MINUTE
        };
        (hour, sampler.count(0, minute_limit))
    } else {
        (sampler.count(0, LAST_HOUR), sampler.count(0, LAST_MINUTE))
    };

    base.with_hour(hour)
        .and_then(|t| t.with_minute(minute))
        .unwrap_or(base)
}
