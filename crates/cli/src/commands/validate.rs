//! Snapshot validation command

use anyhow::{bail, Result};
use herd_lib::{validate_snapshot, HerdMetrics, Snapshot, StructuredLogger};
use tabled::Tabled;

use crate::output::{print_json, print_success, print_table, print_title, OutputFormat};

/// Row for one validation message
#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Record")]
    record_id: String,
    #[tabled(rename = "Problem")]
    error: String,
}

/// Validate every record of the snapshot, failing when any record is invalid
pub fn run_validation(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    let issues = validate_snapshot(snapshot);
    let records = snapshot.animals.len() + snapshot.alerts.len();
    let error_count: usize = issues.iter().map(|i| i.errors.len()).sum();

    HerdMetrics::new().inc_validation_errors(error_count);
    StructuredLogger::new("herd-cli").log_validation(records, issues.len());

    match format {
        OutputFormat::Json => print_json(&issues)?,
        OutputFormat::Table => {
            print_title("Validation");
            if issues.is_empty() {
                print_success(&format!("All {} records are valid", records));
            } else {
                let rows: Vec<IssueRow> = issues
                    .iter()
                    .flat_map(|issue| {
                        issue.errors.iter().map(|error| IssueRow {
                            record_id: issue.record_id.clone(),
                            error: error.clone(),
                        })
                    })
                    .collect();
                print_table(rows);
            }
        }
    }

    if !issues.is_empty() {
        bail!(
            "{} of {} records failed validation ({} errors)",
            issues.len(),
            records,
            error_count
        );
    }

    Ok(())
}
