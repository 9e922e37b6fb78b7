//! Activity log and live feed commands

use anyhow::Result;
use colored::Colorize;
use herd_lib::query::{filter_activities_by_type, minutes_by_activity_type};
use herd_lib::{ActivityEvent, ActivityType, FeedPriority, FeedStatus, Snapshot};
use tabled::Tabled;

use crate::output::{
    format_duration, format_time_ago, print_json, print_table, print_title, OutputFormat,
};

/// Row for the activity log table
#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Cow")]
    cow_id: String,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Intensity")]
    intensity: u8,
}

/// Row for the live feed table
#[derive(Tabled)]
struct FeedRow {
    #[tabled(rename = "Cow")]
    cow: String,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Row for the per-type summary
#[derive(Tabled)]
struct MinutesRow {
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Total Time")]
    total: String,
}

/// Most recent log entries of the requested types
pub fn select<'a>(
    snapshot: &'a Snapshot,
    types: &[ActivityType],
    limit: usize,
) -> Vec<&'a ActivityEvent> {
    // The log is already newest first
    let mut events = filter_activities_by_type(&snapshot.activities, types);
    events.truncate(limit);
    events
}

/// Show the activity log
pub fn show_activity(
    snapshot: &Snapshot,
    types: &[ActivityType],
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let events = select(snapshot, types, limit);

    match format {
        OutputFormat::Json => print_json(&events)?,
        OutputFormat::Table => {
            print_title("Activity Log");
            let now = snapshot.generated_at;
            let rows: Vec<ActivityRow> = events
                .iter()
                .map(|e| ActivityRow {
                    id: e.id.clone(),
                    cow_id: e.cow_id.clone(),
                    activity: e.activity_type.label().to_string(),
                    when: format_time_ago(e.timestamp, now),
                    duration: format_duration(e.duration_minutes),
                    zone: e.location.zone.label().to_string(),
                    intensity: e.intensity,
                })
                .collect();
            print_table(rows);
            println!(
                "\nShowing {} of {} events",
                events.len(),
                snapshot.activities.len()
            );

            println!("\n{}", "Time by activity".bold());
            let filtered = filter_activities_by_type(&snapshot.activities, types);
            let rows: Vec<MinutesRow> = minutes_by_activity_type(filtered)
                .into_iter()
                .map(|(activity, minutes)| MinutesRow {
                    activity: activity.label().to_string(),
                    total: format_duration(minutes),
                })
                .collect();
            print_table(rows);
        }
    }

    Ok(())
}

/// Show the live activity feed
pub fn show_feed(snapshot: &Snapshot, limit: usize, format: OutputFormat) -> Result<()> {
    let feed: Vec<_> = snapshot.real_time_activity.iter().take(limit).collect();

    match format {
        OutputFormat::Json => print_json(&feed)?,
        OutputFormat::Table => {
            print_title("Live Activity");
            let now = snapshot.generated_at;
            let rows: Vec<FeedRow> = feed
                .iter()
                .map(|item| FeedRow {
                    cow: format!("{} ({})", item.cow_name, item.cow_id),
                    activity: item.activity_type.label().to_string(),
                    when: format_time_ago(item.timestamp, now),
                    duration: item
                        .duration
                        .map(format_duration)
                        .unwrap_or_else(|| "-".to_string()),
                    zone: item
                        .location
                        .map(|z| z.label().to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    status: match (item.status, item.priority) {
                        (FeedStatus::Ongoing, _) => "ongoing".green().to_string(),
                        (FeedStatus::Completed, Some(FeedPriority::Attention)) => {
                            "completed".yellow().to_string()
                        }
                        (FeedStatus::Completed, _) => "completed".to_string(),
                    },
                })
                .collect();
            print_table(rows);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use herd_lib::{Generator, GeneratorConfig};

    #[test]
    fn test_select_keeps_newest_of_type() {
        let config = GeneratorConfig::default()
            .with_population(5)
            .with_day_window(2)
            .with_seed(10)
            .with_now(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        let snap = Generator::new(config).unwrap().generate();

        let events = select(&snap, &[ActivityType::Eating], 5);
        assert!(events.len() <= 5);
        assert!(events.iter().all(|e| e.activity_type == ActivityType::Eating));
        assert!(events.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        let everything = select(&snap, &[], usize::MAX);
        assert_eq!(everything.len(), snap.activities.len());
    }
}
