//! Attention ranking command

use anyhow::Result;
use herd_lib::{
    AttentionRanker, HerdMetrics, RankedAnimal, ScoreBreakdown, Snapshot, StructuredLogger,
};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{
    color_activity, color_health, color_temperature, format_time_ago, print_info, print_json,
    print_table, print_title, OutputFormat, TemperatureUnit,
};

/// Row for the attention table
#[derive(Tabled)]
struct AttentionRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Health")]
    health: String,
    #[tabled(rename = "Temp")]
    temperature: String,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Last Checkup")]
    last_checkup: String,
    #[tabled(rename = "Alerts")]
    alerts: usize,
    #[tabled(rename = "Score")]
    score: u32,
}

/// Row for the per-signal breakdown table
#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Health")]
    health: u32,
    #[tabled(rename = "Temp")]
    temperature: u32,
    #[tabled(rename = "Activity")]
    activity: u32,
    #[tabled(rename = "Pregnancy")]
    pregnancy: u32,
    #[tabled(rename = "Checkup")]
    checkup: u32,
    #[tabled(rename = "Alerts")]
    alerts: u32,
    #[tabled(rename = "Total")]
    total: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedJson<'a> {
    rank: usize,
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
    cow: &'a herd_lib::Animal,
}

/// Show the top `k` animals needing attention
pub fn show_attention(
    snapshot: &Snapshot,
    k: usize,
    explain: bool,
    unit: TemperatureUnit,
    format: OutputFormat,
) -> Result<()> {
    let ranker = AttentionRanker::new(snapshot.generated_at);
    let ranked = ranker.top_attention(&snapshot.animals, k);

    let candidates = snapshot
        .animals
        .iter()
        .filter(|a| AttentionRanker::needs_attention(a))
        .count();
    HerdMetrics::new().set_attention_animals(candidates);
    StructuredLogger::new("herd-cli").log_attention(
        candidates,
        ranked.len(),
        ranked.first().map(|r| r.score),
    );

    match format {
        OutputFormat::Json => {
            let json: Vec<RankedJson> = ranked
                .iter()
                .enumerate()
                .map(|(i, r)| RankedJson {
                    rank: i + 1,
                    score: r.score,
                    breakdown: explain.then(|| ranker.breakdown(r.animal)),
                    cow: r.animal,
                })
                .collect();
            print_json(&json)?;
        }
        OutputFormat::Table => {
            print_title("Animals Needing Attention");
            if ranked.is_empty() {
                print_info("No animals need attention");
                return Ok(());
            }

            let rows: Vec<AttentionRow> = ranked
                .iter()
                .enumerate()
                .map(|(i, r)| attention_row(i + 1, r, snapshot, unit))
                .collect();
            print_table(rows);

            if explain {
                println!();
                let rows: Vec<BreakdownRow> = ranked
                    .iter()
                    .map(|r| {
                        let b = ranker.breakdown(r.animal);
                        BreakdownRow {
                            id: r.animal.id.clone(),
                            health: b.health,
                            temperature: b.temperature,
                            activity: b.activity,
                            pregnancy: b.pregnancy,
                            checkup: b.checkup,
                            alerts: b.alerts,
                            total: b.total(),
                        }
                    })
                    .collect();
                print_table(rows);
            }

            println!(
                "\nShowing {} of {} animals needing attention",
                ranked.len(),
                candidates
            );
        }
    }

    Ok(())
}

fn attention_row(
    rank: usize,
    ranked: &RankedAnimal<'_>,
    snapshot: &Snapshot,
    unit: TemperatureUnit,
) -> AttentionRow {
    let animal = ranked.animal;
    AttentionRow {
        rank,
        id: animal.id.clone(),
        name: animal.display_name().to_string(),
        health: color_health(animal.health_status),
        temperature: color_temperature(animal.vitals.temperature, unit),
        activity: color_activity(animal.behavior.activity),
        last_checkup: format_time_ago(animal.last_checkup, snapshot.generated_at),
        alerts: snapshot.alerts_for(&animal.id).filter(|a| a.is_active()).count(),
        score: ranked.score,
    }
}
