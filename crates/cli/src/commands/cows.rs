//! Herd listing command

use anyhow::Result;
use herd_lib::query::{apply_all_filters, sort_animals, AnimalSortKey, FilterOptions, SortDirection};
use herd_lib::{Animal, Snapshot};
use tabled::Tabled;

use crate::output::{
    color_activity, color_confidence, color_health, color_temperature, format_optional_time,
    format_time_ago, print_json, print_table, print_title, print_warning, OutputFormat,
    TemperatureUnit,
};

/// Row for the herd table
#[derive(Tabled)]
struct CowRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Health")]
    health: String,
    #[tabled(rename = "Temp")]
    temperature: String,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Pregnant")]
    pregnant: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Last Seen")]
    last_activity: String,
}

/// Listing options from the command line
pub struct CowQuery {
    pub filters: FilterOptions,
    pub sort: AnimalSortKey,
    pub direction: SortDirection,
    pub limit: Option<usize>,
}

/// Apply filters, sort and limit, keeping borrowed records
pub fn select<'a>(snapshot: &'a Snapshot, query: &CowQuery) -> Vec<&'a Animal> {
    let mut cows = apply_all_filters(&snapshot.animals, &query.filters);
    sort_animals(&mut cows, query.sort, query.direction);
    if let Some(limit) = query.limit {
        cows.truncate(limit);
    }
    cows
}

/// List animals matching the query
pub fn list_cows(
    snapshot: &Snapshot,
    query: &CowQuery,
    unit: TemperatureUnit,
    format: OutputFormat,
) -> Result<()> {
    let cows = select(snapshot, query);

    match format {
        OutputFormat::Json => print_json(&cows)?,
        OutputFormat::Table => {
            print_title("Herd");
            if cows.is_empty() {
                print_warning("No cows match the given filters");
                return Ok(());
            }

            let now = snapshot.generated_at;
            let rows: Vec<CowRow> = cows
                .iter()
                .map(|cow| CowRow {
                    id: cow.id.clone(),
                    name: cow.display_name().to_string(),
                    breed: cow.breed.to_string(),
                    age: format!("{}y {}m", cow.age_months / 12, cow.age_months % 12),
                    weight: format!("{} kg", cow.weight_kg),
                    health: color_health(cow.health_status),
                    temperature: color_temperature(cow.vitals.temperature, unit),
                    activity: color_activity(cow.behavior.activity),
                    pregnant: if cow.pregnancy.is_pregnant { "yes" } else { "no" }.to_string(),
                    confidence: color_confidence(cow.pregnancy.confidence),
                    due: format_optional_time(cow.pregnancy.expected_due_date),
                    zone: cow.location.zone.label().to_string(),
                    last_activity: format_time_ago(cow.last_activity, now),
                })
                .collect();
            print_table(rows);
            println!(
                "\nTotal: {} of {} cows (sorted by {})",
                cows.len(),
                snapshot.animals.len(),
                query.sort
            );
        }
    }

    Ok(())
}
