//! Stage 4: aggregates derived from the generated records

use chrono::{DateTime, Duration, Utc};

use super::sampling::Sampler;
use crate::constants::{BARN_DIMENSIONS, BREEDS};
use crate::metrics::{average_activity, average_temperature, health_rate, pregnancy_rate, round_to};
use crate::models::{
    ActivityType, Alert, Animal, BarnLayout, BarnSize, BarnZone, BehaviorCategory,
    BehaviorMetrics, BehavioralIndicator, DailyTrend, Equipment, EquipmentStatus, EquipmentType,
    FeedPriority, FeedStatus, KpiChanges, KpiMetrics, Point, PregnancyDistribution,
    RealTimeActivityItem, TrendMetrics, Zone,
};

/// Confidence above which a pregnant animal counts as confirmed
const CONFIRMED_PREGNANT_CONFIDENCE: u8 = 70;

/// Confidence below which a non-pregnant animal counts as confirmed open
const CONFIRMED_OPEN_CONFIDENCE: u8 = 30;

/// Share of feed entries still in progress
const FEED_ONGOING_RATE: f64 = 0.7;

/// Record count on the `u32` wire fields, saturating instead of wrapping
pub fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Hourly trend buckets for each of the last `days` days, newest first
pub fn generate_daily_trends(
    sampler: &mut Sampler,
    days: u32,
    total_cows: u32,
    now: DateTime<Utc>,
) -> Vec<DailyTrend> {
    let mut trends = Vec::with_capacity(days as usize * 24);

    for day in 0..days {
        let date = now - Duration::days(day as i64);
        for hour in 0..24 {
            trends.push(DailyTrend {
                date,
                hour,
                metrics: TrendMetrics {
                    average_activity: sampler.count(30, 80),
                    peak_activity: sampler.count(70, 100),
                    average_rumination: sampler.count(25, 40),
                    average_temperature: sampler.decimal(38.2, 39.3, 1),
                    peak_temperature: sampler.decimal(39.0, 40.0, 1),
                    cows_active: sampler.count(15, 45),
                    total_cows,
                },
            });
        }
    }

    trends.sort_by(|a, b| b.date.cmp(&a.date).then(b.hour.cmp(&a.hour)));
    trends
}

fn rectangle(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    vec![
        Point { x: x0, y: y0 },
        Point { x: x1, y: y0 },
        Point { x: x1, y: y1 },
        Point { x: x0, y: y1 },
    ]
}

/// Fixed barn floor plan with randomised occupancy and climate
pub fn generate_barn_layout(sampler: &mut Sampler) -> BarnLayout {
    let zones = vec![
        BarnZone {
            id: "feeding-1".to_string(),
            zone: Zone::Feeding,
            coordinates: rectangle(5, 5, 30, 15),
            capacity: 20,
            current_occupancy: sampler.count(8, 18),
            temperature: Some(sampler.decimal(15.0, 25.0, 1)),
            humidity: None,
        },
        BarnZone {
            id: "resting-1".to_string(),
            zone: Zone::Resting,
            coordinates: rectangle(35, 5, 70, 25),
            capacity: 30,
            current_occupancy: sampler.count(15, 28),
            temperature: Some(sampler.decimal(18.0, 22.0, 1)),
            humidity: None,
        },
        BarnZone {
            id: "milking-1".to_string(),
            zone: Zone::Milking,
            coordinates: rectangle(75, 5, 95, 20),
            capacity: 8,
            current_occupancy: sampler.count(2, 6),
            temperature: Some(sampler.decimal(16.0, 20.0, 1)),
            humidity: None,
        },
    ];

    let equipment = [
        ("camera-1", EquipmentType::Camera, 15, 45),
        ("camera-2", EquipmentType::Camera, 50, 45),
        ("camera-3", EquipmentType::Camera, 85, 45),
        ("feeder-1", EquipmentType::Feeder, 17, 10),
        ("feeder-2", EquipmentType::Feeder, 83, 30),
        ("water-1", EquipmentType::Water, 25, 35),
        ("water-2", EquipmentType::Water, 75, 35),
    ]
    .into_iter()
    .map(|(id, equipment_type, x, y)| Equipment {
        id: id.to_string(),
        equipment_type,
        position: Point { x, y },
        status: EquipmentStatus::Active,
    })
    .collect();

    BarnLayout {
        zones,
        dimensions: BarnSize {
            width: BARN_DIMENSIONS.width,
            height: BARN_DIMENSIONS.height,
            scale: BARN_DIMENSIONS.scale,
        },
        equipment,
    }
}

/// Pregnancy bracket counts for every breed, in breed order
pub fn pregnancy_distribution(animals: &[Animal]) -> Vec<PregnancyDistribution> {
    BREEDS
        .iter()
        .map(|&breed| {
            let group: Vec<&Animal> = animals.iter().filter(|a| a.breed == breed).collect();

            let pregnant = saturating_count(
                group
                    .iter()
                    .filter(|a| {
                        a.pregnancy.is_pregnant
                            && a.pregnancy.confidence > CONFIRMED_PREGNANT_CONFIDENCE
                    })
                    .count(),
            );
            let not_pregnant = saturating_count(
                group
                    .iter()
                    .filter(|a| {
                        !a.pregnancy.is_pregnant
                            && a.pregnancy.confidence < CONFIRMED_OPEN_CONFIDENCE
                    })
                    .count(),
            );
            let total = saturating_count(group.len());

            let average_confidence = if group.is_empty() {
                0.0
            } else {
                let sum: f64 = group.iter().map(|a| a.pregnancy.confidence as f64).sum();
                round_to(sum / group.len() as f64, 1)
            };

            PregnancyDistribution {
                breed,
                pregnant,
                not_pregnant,
                uncertain: total - pregnant - not_pregnant,
                total,
                average_confidence,
            }
        })
        .collect()
}

fn behavior_averages(group: &[&Animal]) -> BehaviorMetrics {
    if group.is_empty() {
        return BehaviorMetrics::default();
    }

    let n = group.len() as f64;
    let mean = |score: fn(&Animal) -> u8| -> u32 {
        let total: u64 = group.iter().map(|a| score(a) as u64).sum();
        (total as f64 / n).round() as u32
    };

    BehaviorMetrics {
        activity: mean(|a| a.behavior.activity),
        movement: mean(|a| a.behavior.movement),
        resting: mean(|a| a.behavior.resting),
        social: mean(|a| a.behavior.social),
        feeding: mean(|a| a.behavior.feeding),
    }
}

/// Behaviour averages for pregnant and non-pregnant animals
pub fn behavioral_indicators(animals: &[Animal]) -> Vec<BehavioralIndicator> {
    let (pregnant, open): (Vec<&Animal>, Vec<&Animal>) =
        animals.iter().partition(|a| a.pregnancy.is_pregnant);

    vec![
        BehavioralIndicator {
            category: BehaviorCategory::Pregnant,
            metrics: behavior_averages(&pregnant),
        },
        BehavioralIndicator {
            category: BehaviorCategory::NonPregnant,
            metrics: behavior_averages(&open),
        },
    ]
}

/// Headline metrics with cosmetic period-over-period deltas
pub fn generate_kpi_metrics(
    sampler: &mut Sampler,
    animals: &[Animal],
    alerts: &[Alert],
) -> KpiMetrics {
    let healthy_cows =
        saturating_count(animals.iter().filter(|a| a.health_status.is_healthy()).count());
    let pregnant_cows =
        saturating_count(animals.iter().filter(|a| a.pregnancy.is_pregnant).count());
    let active_alerts = saturating_count(alerts.iter().filter(|a| a.is_active()).count());

    let changes = KpiChanges {
        total_cows: sampler.int(-2, 3) as i32,
        healthy_cows: sampler.int(-3, 2) as i32,
        pregnant_cows: sampler.int(-1, 4) as i32,
        alerts_count: sampler.int(-5, 3) as i32,
        average_activity: sampler.int(-8, 12) as i32,
        pregnancy_rate: sampler.decimal(-2.5, 3.2, 1),
        health_rate: sampler.decimal(-1.5, 2.8, 1),
        average_temperature: sampler.decimal(-0.3, 0.4, 1),
    };

    KpiMetrics {
        total_cows: saturating_count(animals.len()),
        healthy_cows,
        pregnant_cows,
        alerts_count: active_alerts,
        average_activity: average_activity(animals),
        pregnancy_rate: pregnancy_rate(animals),
        health_rate: health_rate(animals),
        average_temperature: average_temperature(animals),
        changes,
    }
}

/// Live activity feed sampled from the herd, newest first
pub fn generate_real_time_activity(
    sampler: &mut Sampler,
    animals: &[Animal],
    count: usize,
    now: DateTime<Utc>,
) -> Vec<RealTimeActivityItem> {
    if animals.is_empty() {
        return Vec::new();
    }

    let mut feed: Vec<RealTimeActivityItem> = (0..count)
        .filter_map(|i| {
            let animal = &animals[sampler.index(animals.len())?];
            let activity_type = sampler.pick(&ActivityType::FEED);
            // Entries are staggered further into the past
            let stagger = i as i64 * sampler.int(1, 30);
            let timestamp = now - Duration::minutes(stagger);

            Some(RealTimeActivityItem {
                id: format!("ACTIVITY{}", i + 1),
                cow_id: animal.id.clone(),
                cow_name: animal.display_name().to_string(),
                activity_type,
                timestamp,
                duration: Some(sampler.count(5, 45)),
                location: Some(animal.location.zone),
                status: if sampler.chance(FEED_ONGOING_RATE) {
                    FeedStatus::Ongoing
                } else {
                    FeedStatus::Completed
                },
                priority: Some(if animal.health_status.is_healthy() {
                    FeedPriority::Normal
                } else {
                    FeedPriority::Attention
                }),
            })
        })
        .collect();

    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed
}
