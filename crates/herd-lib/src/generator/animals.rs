//! Stage 1: animal population

use chrono::{DateTime, Duration, Utc};

use super::sampling::Sampler;
use crate::constants::{
    BARN_DIMENSIONS, BREEDS, GESTATION_PERIOD_DAYS, HEALTH_STATUS_POOL, PLACEMENT_ZONES,
};
use crate::models::{animal_id, Animal, Behavior, Location, PregnancyStatus, Vitals};

/// Margin kept between generated positions and the barn walls
const WALL_MARGIN: i32 = 10;

pub fn generate_animals(
    sampler: &mut Sampler,
    count: usize,
    pregnancy_rate: f64,
    now: DateTime<Utc>,
) -> Vec<Animal> {
    (0..count)
        .map(|index| generate_animal(sampler, index, pregnancy_rate, now))
        .collect()
}

fn generate_animal(
    sampler: &mut Sampler,
    index: usize,
    pregnancy_rate: f64,
    now: DateTime<Utc>,
) -> Animal {
    let breed = sampler.pick(&BREEDS);
    let age_months = sampler.count(12, 120);
    let is_pregnant = sampler.chance(pregnancy_rate);
    let health_status = sampler.pick(&HEALTH_STATUS_POOL);

    let confidence = if is_pregnant {
        sampler.score(60, 95)
    } else {
        sampler.score(5, 40)
    };
    let days_in_cycle = sampler.count(1, GESTATION_PERIOD_DAYS as u32);
    let breeding_date = is_pregnant.then(|| sampler.date_within(now, days_in_cycle as f64));
    let expected_due_date = breeding_date.map(|date| date + Duration::days(GESTATION_PERIOD_DAYS));

    let weight_kg = sampler.count(400, 700);
    let location = Location {
        x: sampler.int(WALL_MARGIN as i64, (BARN_DIMENSIONS.width - WALL_MARGIN) as i64) as i32,
        y: sampler.int(WALL_MARGIN as i64, (BARN_DIMENSIONS.height - WALL_MARGIN) as i64) as i32,
        zone: sampler.pick(&PLACEMENT_ZONES),
    };
    let last_activity = sampler.date_within(now, 1.0);
    let last_checkup = sampler.date_within(now, 7.0);

    let vitals = Vitals {
        temperature: sampler.decimal(38.0, 39.8, 1),
        heart_rate: sampler.count(60, 80),
        rumination: sampler.count(20, 45),
        activity: sampler.count(100, 300),
    };

    let behavior = Behavior {
        activity: sampler.score(30, 90),
        movement: sampler.score(25, 85),
        resting: sampler.score(40, 80),
        social: sampler.score(20, 70),
        feeding: sampler.score(50, 90),
        vocalization: sampler.score(10, 60),
        heat: if is_pregnant {
            sampler.score(10, 30)
        } else {
            sampler.score(20, 80)
        },
    };

    Animal {
        id: animal_id(index),
        name: Some(format!("{}-{}", breed, index + 1)),
        breed,
        age_months,
        weight_kg,
        health_status,
        pregnancy: PregnancyStatus {
            is_pregnant,
            confidence,
            days_in_cycle,
            expected_due_date,
            breeding_date,
            gestation_days: is_pregnant.then_some(days_in_cycle),
        },
        location,
        last_activity,
        last_checkup,
        vitals,
        behavior,
        alert_ids: Vec::new(),
    }
}
