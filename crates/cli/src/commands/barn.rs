//! Barn layout command

use anyhow::Result;
use colored::Colorize;
use herd_lib::{EquipmentStatus, Snapshot};
use tabled::Tabled;

use crate::output::{print_json, print_table, print_title, OutputFormat};

/// Row for the zone table
#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "Zone")]
    id: String,
    #[tabled(rename = "Type")]
    zone: String,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
    #[tabled(rename = "Temp")]
    temperature: String,
    #[tabled(rename = "Humidity")]
    humidity: String,
}

/// Row for the equipment table
#[derive(Tabled)]
struct EquipmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    equipment_type: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn color_equipment_status(status: EquipmentStatus) -> String {
    let text = status.to_string();
    match status {
        EquipmentStatus::Active => text.green().to_string(),
        EquipmentStatus::Maintenance => text.yellow().to_string(),
        EquipmentStatus::Inactive => text.red().to_string(),
    }
}

/// Show barn zones and equipment
pub fn show_barn(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    let layout = &snapshot.barn_layout;

    match format {
        OutputFormat::Json => print_json(layout)?,
        OutputFormat::Table => {
            print_title("Barn Layout");
            println!(
                "Floor: {} x {} (scale {})\n",
                layout.dimensions.width, layout.dimensions.height, layout.dimensions.scale
            );

            let rows: Vec<ZoneRow> = layout
                .zones
                .iter()
                .map(|z| ZoneRow {
                    id: z.id.clone(),
                    zone: z.zone.label().to_string(),
                    occupancy: format!(
                        "{}/{} ({:.0}%)",
                        z.current_occupancy,
                        z.capacity,
                        z.occupancy_percent()
                    ),
                    temperature: z
                        .temperature
                        .map(|t| format!("{:.1}°C", t))
                        .unwrap_or_else(|| "-".to_string()),
                    humidity: z
                        .humidity
                        .map(|h| format!("{:.0}%", h))
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            print_table(rows);

            println!("\n{}", "Equipment".bold());
            let rows: Vec<EquipmentRow> = layout
                .equipment
                .iter()
                .map(|e| EquipmentRow {
                    id: e.id.clone(),
                    equipment_type: e.equipment_type.to_string(),
                    position: format!("({}, {})", e.position.x, e.position.y),
                    status: color_equipment_status(e.status),
                })
                .collect();
            print_table(rows);
        }
    }

    Ok(())
}
