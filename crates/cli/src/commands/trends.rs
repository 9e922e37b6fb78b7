//! Hourly trend command

use anyhow::{bail, Result};
use herd_lib::{DailyTrend, Snapshot};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{
    format_temperature, print_json, print_table, print_title, OutputFormat, TemperatureUnit,
};

const HOURS_PER_DAY: usize = 24;

/// Row for one hourly bucket
#[derive(Tabled)]
struct HourRow {
    #[tabled(rename = "Hour")]
    hour: String,
    #[tabled(rename = "Avg Activity")]
    average_activity: u32,
    #[tabled(rename = "Peak Activity")]
    peak_activity: u32,
    #[tabled(rename = "Rumination")]
    rumination: u32,
    #[tabled(rename = "Avg Temp")]
    average_temperature: String,
    #[tabled(rename = "Peak Temp")]
    peak_temperature: String,
    #[tabled(rename = "Active")]
    active: String,
}

/// Row for one day's summary
#[derive(Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
struct DayRow {
    #[tabled(rename = "Day")]
    day: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Avg Activity")]
    average_activity: u32,
    #[tabled(rename = "Peak Activity")]
    peak_activity: u32,
    #[tabled(rename = "Avg Temp")]
    average_temperature: String,
    #[tabled(rename = "Peak Active Cows")]
    peak_cows_active: u32,
}

/// Hourly buckets of one day; day 0 is the most recent
pub fn day_buckets(snapshot: &Snapshot, day: usize) -> Option<&[DailyTrend]> {
    snapshot.daily_trends.chunks(HOURS_PER_DAY).nth(day)
}

fn summarize(day: usize, buckets: &[DailyTrend], unit: TemperatureUnit) -> DayRow {
    let n = buckets.len().max(1) as f64;
    let activity: u32 = buckets.iter().map(|t| t.metrics.average_activity).sum();
    let temperature: f64 = buckets.iter().map(|t| t.metrics.average_temperature).sum();

    DayRow {
        day,
        date: buckets
            .first()
            .map(|t| t.date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        average_activity: (f64::from(activity) / n).round() as u32,
        peak_activity: buckets
            .iter()
            .map(|t| t.metrics.peak_activity)
            .max()
            .unwrap_or(0),
        average_temperature: format_temperature(temperature / n, unit),
        peak_cows_active: buckets
            .iter()
            .map(|t| t.metrics.cows_active)
            .max()
            .unwrap_or(0),
    }
}

/// Show daily summaries, or the hourly buckets of one day
pub fn show_trends(
    snapshot: &Snapshot,
    day: Option<usize>,
    unit: TemperatureUnit,
    format: OutputFormat,
) -> Result<()> {
    let days = snapshot.daily_trends.len() / HOURS_PER_DAY;

    match day {
        Some(day) => {
            let Some(buckets) = day_buckets(snapshot, day) else {
                bail!("Day {} is outside the {}-day window", day, days);
            };

            match format {
                OutputFormat::Json => print_json(buckets)?,
                OutputFormat::Table => {
                    print_title(&format!("Hourly Trends (day {})", day));
                    let rows: Vec<HourRow> = buckets
                        .iter()
                        .map(|t| HourRow {
                            hour: format!("{:02}:00", t.hour),
                            average_activity: t.metrics.average_activity,
                            peak_activity: t.metrics.peak_activity,
                            rumination: t.metrics.average_rumination,
                            average_temperature: format_temperature(
                                t.metrics.average_temperature,
                                unit,
                            ),
                            peak_temperature: format_temperature(t.metrics.peak_temperature, unit),
                            active: format!("{}/{}", t.metrics.cows_active, t.metrics.total_cows),
                        })
                        .collect();
                    print_table(rows);
                }
            }
        }
        None => {
            let rows: Vec<DayRow> = snapshot
                .daily_trends
                .chunks(HOURS_PER_DAY)
                .enumerate()
                .map(|(i, buckets)| summarize(i, buckets, unit))
                .collect();

            match format {
                OutputFormat::Json => print_json(&rows)?,
                OutputFormat::Table => {
                    print_title("Daily Trends");
                    print_table(rows);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use herd_lib::{Generator, GeneratorConfig};

    #[test]
    fn test_day_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let config = GeneratorConfig::default()
            .with_population(5)
            .with_day_window(3)
            .with_seed(1)
            .with_now(now);
        let snap = Generator::new(config).unwrap().generate();

        let yesterday = day_buckets(&snap, 1).unwrap();
        assert_eq!(yesterday.len(), 24);
        assert!(yesterday.iter().all(|t| t.date == now - Duration::days(1)));
        assert_eq!(yesterday[0].hour, 23);
        assert!(day_buckets(&snap, 3).is_none());
    }
}
