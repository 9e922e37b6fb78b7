//! Snapshot export command

use anyhow::{Context, Result};
use herd_lib::{Snapshot, StructuredLogger};
use std::path::Path;

use crate::output::print_success;

/// Write the full snapshot as JSON to a file, or stdout when no path is given
pub fn export_snapshot(snapshot: &Snapshot, output: Option<&Path>) -> Result<()> {
    let json = snapshot
        .to_json_pretty()
        .context("Failed to serialize snapshot")?;
    let logger = StructuredLogger::new("herd-cli");

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            logger.log_export(&path.display().to_string(), json.len());
            print_success(&format!(
                "Exported {} cows to {}",
                snapshot.animals.len(),
                path.display()
            ));
        }
        None => {
            logger.log_export("stdout", json.len());
            println!("{}", json);
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
    fn test_export_round_trips_through_file() {
        let config = GeneratorConfig::default()
            .with_population(4)
            .with_day_window(1)
            .with_seed(2)
            .with_now(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        let snap = Generator::new(config).unwrap().generate();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot.json");
        export_snapshot(&snap, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(Snapshot::from_json(&content).unwrap(), snap);
    }
}
