//! Pregnancy overview command

use anyhow::Result;
use colored::Colorize;
use herd_lib::constants::BREEDING_CYCLE_DAYS;
use herd_lib::{Animal, Snapshot};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{
    color_confidence, format_optional_time, print_json, print_table, print_title, OutputFormat,
};

const UPCOMING_DUE_LIMIT: usize = 10;
const UPCOMING_HEAT_LIMIT: usize = 10;

/// Row for the per-breed distribution
#[derive(Tabled)]
struct DistributionRow {
    #[tabled(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Pregnant")]
    pregnant: u32,
    #[tabled(rename = "Open")]
    not_pregnant: u32,
    #[tabled(rename = "Uncertain")]
    uncertain: u32,
    #[tabled(rename = "Total")]
    total: u32,
    #[tabled(rename = "Avg Confidence")]
    average_confidence: String,
}

/// Row for the behaviour comparison
#[derive(Tabled)]
struct BehaviorRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Activity")]
    activity: u32,
    #[tabled(rename = "Movement")]
    movement: u32,
    #[tabled(rename = "Resting")]
    resting: u32,
    #[tabled(rename = "Social")]
    social: u32,
    #[tabled(rename = "Feeding")]
    feeding: u32,
}

/// Row for the upcoming calvings
#[derive(Tabled)]
struct DueRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Bred")]
    breeding_date: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Gestation")]
    gestation: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

/// Row for the expected heats of open cows
#[derive(Tabled)]
struct HeatRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Cycle Day")]
    cycle_day: i64,
    #[tabled(rename = "Next Heat")]
    next_heat: String,
    #[tabled(rename = "Heat Score")]
    heat: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeatJson<'a> {
    cow_id: &'a str,
    days_to_next_heat: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PregnancyJson<'a> {
    distribution: &'a [herd_lib::PregnancyDistribution],
    behavioral_indicators: &'a [herd_lib::BehavioralIndicator],
    upcoming_due: Vec<&'a Animal>,
    upcoming_heat: Vec<HeatJson<'a>>,
}

/// Days until an open cow's next expected heat; `None` when pregnant
pub fn days_to_next_heat(animal: &Animal) -> Option<i64> {
    if animal.pregnancy.is_pregnant {
        return None;
    }
    let day = i64::from(animal.pregnancy.days_in_cycle);
    Some(BREEDING_CYCLE_DAYS - day % BREEDING_CYCLE_DAYS)
}

/// Open animals ordered by their next expected heat, soonest first
pub fn upcoming_heat(snapshot: &Snapshot, limit: usize) -> Vec<(&Animal, i64)> {
    let mut open: Vec<(&Animal, i64)> = snapshot
        .animals
        .iter()
        .filter_map(|a| days_to_next_heat(a).map(|days| (a, days)))
        .collect();
    open.sort_by_key(|(_, days)| *days);
    open.truncate(limit);
    open
}

/// Pregnant animals ordered by expected due date, soonest first
pub fn upcoming_due(snapshot: &Snapshot, limit: usize) -> Vec<&Animal> {
    let mut pregnant: Vec<&Animal> = snapshot
        .animals
        .iter()
        .filter(|a| a.pregnancy.is_pregnant)
        .collect();
    pregnant.sort_by_key(|a| a.pregnancy.expected_due_date);
    pregnant.truncate(limit);
    pregnant
}

/// Show the pregnancy distribution, behaviour comparison and next calvings
pub fn show_pregnancy(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    let due = upcoming_due(snapshot, UPCOMING_DUE_LIMIT);
    let heat = upcoming_heat(snapshot, UPCOMING_HEAT_LIMIT);

    match format {
        OutputFormat::Json => {
            print_json(&PregnancyJson {
                distribution: &snapshot.pregnancy_distribution,
                behavioral_indicators: &snapshot.behavioral_indicators,
                upcoming_due: due,
                upcoming_heat: heat
                    .iter()
                    .map(|(a, days)| HeatJson {
                        cow_id: &a.id,
                        days_to_next_heat: *days,
                    })
                    .collect(),
            })?;
        }
        OutputFormat::Table => {
            print_title("Pregnancy Distribution");
            let rows: Vec<DistributionRow> = snapshot
                .pregnancy_distribution
                .iter()
                .map(|d| DistributionRow {
                    breed: d.breed.to_string(),
                    pregnant: d.pregnant,
                    not_pregnant: d.not_pregnant,
                    uncertain: d.uncertain,
                    total: d.total,
                    average_confidence: format!("{:.1}%", d.average_confidence),
                })
                .collect();
            print_table(rows);

            println!("\n{}", "Behavioural indicators".bold());
            let rows: Vec<BehaviorRow> = snapshot
                .behavioral_indicators
                .iter()
                .map(|i| BehaviorRow {
                    group: i.category.to_string(),
                    activity: i.metrics.activity,
                    movement: i.metrics.movement,
                    resting: i.metrics.resting,
                    social: i.metrics.social,
                    feeding: i.metrics.feeding,
                })
                .collect();
            print_table(rows);

            println!("\n{}", "Upcoming calvings".bold());
            let rows: Vec<DueRow> = due
                .iter()
                .map(|a| DueRow {
                    id: a.id.clone(),
                    name: a.display_name().to_string(),
                    breeding_date: format_optional_time(a.pregnancy.breeding_date),
                    due: format_optional_time(a.pregnancy.expected_due_date),
                    gestation: a
                        .pregnancy
                        .gestation_days
                        .map(|d| format!("{} d", d))
                        .unwrap_or_else(|| "-".to_string()),
                    confidence: color_confidence(a.pregnancy.confidence),
                })
                .collect();
            print_table(rows);

            println!("\n{}", "Expected heats (open cows)".bold());
            let rows: Vec<HeatRow> = heat
                .iter()
                .map(|(a, days)| HeatRow {
                    id: a.id.clone(),
                    name: a.display_name().to_string(),
                    cycle_day: i64::from(a.pregnancy.days_in_cycle) % BREEDING_CYCLE_DAYS,
                    next_heat: format!("in {} d", days),
                    heat: a.behavior.heat,
                })
                .collect();
            print_table(rows);
        }
    }

    Ok(())
}
