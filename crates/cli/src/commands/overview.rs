//! Dashboard overview command

use anyhow::Result;
use colored::Colorize;
use herd_lib::query::{count_by_breed, count_by_zone};
use herd_lib::{AttentionRanker, Snapshot};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{
    color_health, format_percentage_change, format_temperature, print_json, print_table,
    print_title, OutputFormat, TemperatureUnit,
};

const OVERVIEW_ATTENTION_LIMIT: usize = 3;

/// Row for the KPI table
#[derive(Tabled)]
struct KpiRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Change")]
    change: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverviewJson<'a> {
    generated_at: String,
    seed: u64,
    kpi_metrics: &'a herd_lib::KpiMetrics,
    attention: Vec<AttentionSummary<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AttentionSummary<'a> {
    id: &'a str,
    score: u32,
}

fn signed(change: i32) -> String {
    if change >= 0 {
        format!("+{}", change)
    } else {
        change.to_string()
    }
}

/// Show headline KPIs, herd composition and the most urgent animals
pub fn show_overview(
    snapshot: &Snapshot,
    unit: TemperatureUnit,
    format: OutputFormat,
) -> Result<()> {
    let kpi = &snapshot.kpi_metrics;
    let ranker = AttentionRanker::new(snapshot.generated_at);
    let ranked = ranker.top_attention(&snapshot.animals, OVERVIEW_ATTENTION_LIMIT);

    match format {
        OutputFormat::Json => {
            let json = OverviewJson {
                generated_at: snapshot.generated_at.to_rfc3339(),
                seed: snapshot.seed,
                kpi_metrics: kpi,
                attention: ranked
                    .iter()
                    .map(|r| AttentionSummary {
                        id: &r.animal.id,
                        score: r.score,
                    })
                    .collect(),
            };
            print_json(&json)?;
        }
        OutputFormat::Table => {
            print_title("Herd Overview");
            println!(
                "Generated:  {} (seed {})",
                snapshot.generated_at.format("%Y-%m-%d %H:%M UTC"),
                snapshot.seed
            );
            println!();

            let c = &kpi.changes;
            let rows = vec![
                KpiRow {
                    metric: "Total cows",
                    value: kpi.total_cows.to_string(),
                    change: signed(c.total_cows),
                },
                KpiRow {
                    metric: "Healthy cows",
                    value: kpi.healthy_cows.to_string(),
                    change: signed(c.healthy_cows),
                },
                KpiRow {
                    metric: "Pregnant cows",
                    value: kpi.pregnant_cows.to_string(),
                    change: signed(c.pregnant_cows),
                },
                KpiRow {
                    metric: "Active alerts",
                    value: kpi.alerts_count.to_string(),
                    change: signed(c.alerts_count),
                },
                KpiRow {
                    metric: "Average activity",
                    value: kpi.average_activity.to_string(),
                    change: signed(c.average_activity),
                },
                KpiRow {
                    metric: "Pregnancy rate",
                    value: format!("{:.1}%", kpi.pregnancy_rate),
                    change: format_percentage_change(c.pregnancy_rate),
                },
                KpiRow {
                    metric: "Health rate",
                    value: format!("{:.1}%", kpi.health_rate),
                    change: format_percentage_change(c.health_rate),
                },
                KpiRow {
                    metric: "Average temperature",
                    value: format_temperature(kpi.average_temperature, unit),
                    change: format!("{:+.1}", c.average_temperature),
                },
            ];
            print_table(rows);

            println!("\n{}", "Composition".bold());
            let breeds: Vec<String> = count_by_breed(&snapshot.animals)
                .iter()
                .map(|(breed, n)| format!("{} {}", breed, n))
                .collect();
            println!("  Breeds: {}", breeds.join(", "));
            let zones: Vec<String> = count_by_zone(&snapshot.animals)
                .iter()
                .map(|(zone, n)| format!("{} {}", zone.label(), n))
                .collect();
            println!("  Zones:  {}", zones.join(", "));

            println!("\n{}", "Needs attention".bold());
            if ranked.is_empty() {
                println!("  {}", "No animals need attention".green());
            }
            for r in &ranked {
                println!(
                    "  {} {:<14} {:>4}  {}",
                    r.animal.id,
                    r.animal.display_name(),
                    r.score,
                    color_health(r.animal.health_status)
                );
            }
        }
    }

    Ok(())
}
