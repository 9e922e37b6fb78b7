//! Alert listing command

use anyhow::Result;
use herd_lib::query::{filter_alerts_by_priority, sort_alerts_by_urgency};
use herd_lib::{Alert, AlertPriority, AlertType, Snapshot};
use tabled::Tabled;

use crate::output::{
    color_priority, format_duration, format_time_ago, print_json, print_table, print_title,
    print_warning, OutputFormat,
};

/// Row for the alerts table
#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Cow")]
    cow_id: String,
    #[tabled(rename = "Type")]
    alert_type: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Raised")]
    raised: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "ETA")]
    eta: String,
}

/// Alert listing options from the command line
#[derive(Debug, Default)]
pub struct AlertQuery {
    pub priorities: Vec<AlertPriority>,
    pub types: Vec<AlertType>,
    /// `Some(false)` for active only, `Some(true)` for resolved only
    pub resolved: Option<bool>,
}

/// Filter alerts and order them by urgency
pub fn select<'a>(snapshot: &'a Snapshot, query: &AlertQuery) -> Vec<&'a Alert> {
    let mut alerts = filter_alerts_by_priority(&snapshot.alerts, &query.priorities);
    if !query.types.is_empty() {
        alerts.retain(|a| query.types.contains(&a.alert_type));
    }
    if let Some(resolved) = query.resolved {
        alerts.retain(|a| a.resolved == resolved);
    }

    sort_alerts_by_urgency(&mut alerts);
    alerts
}

/// List alerts matching the query
pub fn list_alerts(snapshot: &Snapshot, query: &AlertQuery, format: OutputFormat) -> Result<()> {
    let alerts = select(snapshot, query);

    match format {
        OutputFormat::Json => print_json(&alerts)?,
        OutputFormat::Table => {
            print_title("Alerts");
            if alerts.is_empty() {
                print_warning("No alerts found");
                return Ok(());
            }

            let now = snapshot.generated_at;
            let rows: Vec<AlertRow> = alerts
                .iter()
                .map(|a| AlertRow {
                    id: a.id.clone(),
                    cow_id: a.cow_id.clone(),
                    alert_type: a.alert_type.to_string(),
                    priority: color_priority(a.priority),
                    title: a.title.clone(),
                    raised: format_time_ago(a.timestamp, now),
                    status: match (a.resolved, &a.resolved_by) {
                        (true, Some(by)) => format!("resolved by {}", by),
                        (true, None) => "resolved".to_string(),
                        (false, _) => "active".to_string(),
                    },
                    eta: a
                        .estimated_resolution_minutes
                        .map(format_duration)
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            print_table(rows);

            let active = alerts.iter().filter(|a| a.is_active()).count();
            println!("\nTotal: {} alerts ({} active)", alerts.len(), active);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use herd_lib::{Generator, GeneratorConfig};

    fn snapshot() -> Snapshot {
        let config = GeneratorConfig::default()
            .with_population(100)
            .with_day_window(1)
            .with_seed(4)
            .with_now(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        Generator::new(config).unwrap().generate()
    }

    #[test]
    fn test_select_orders_by_urgency() {
        let snap = snapshot();
        let alerts = select(&snap, &AlertQuery::default());
        assert_eq!(alerts.len(), snap.alerts.len());
        assert!(alerts.windows(2).all(|w| w[0].priority >= w[1].priority));
    }

    #[test]
    fn test_select_combines_filters() {
        let snap = snapshot();
        let query = AlertQuery {
            priorities: vec![AlertPriority::High, AlertPriority::Critical],
            types: Vec::new(),
            resolved: Some(false),
        };
        let alerts = select(&snap, &query);
        assert!(alerts
            .iter()
            .all(|a| a.priority >= AlertPriority::High && !a.resolved));

        let expected = snap
            .alerts
            .iter()
            .filter(|a| a.priority >= AlertPriority::High && !a.resolved)
            .count();
        assert_eq!(alerts.len(), expected);
    }
}
