//! Herd monitor CLI
//!
//! Generates a synthetic herd snapshot and inspects it: dashboard KPIs, the
//! attention list, herd and alert listings, activity, trends, pregnancy and
//! barn views, validation, JSON export and Prometheus metrics.

mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{
    activity, alerts, attention, barn, cows, export, metrics, overview, parse_wire, pregnancy,
    trends, validate,
};
use herd_lib::query::{AnimalSortKey, FilterOptions, PregnancyFilter, SortDirection, TimeRange};
use herd_lib::{
    ActivityType, AlertPriority, AlertType, Breed, Generator, HealthStatus, HerdMetrics,
    StructuredLogger, Zone,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Herd monitor CLI
#[derive(Parser)]
#[command(name = "herd")]
#[command(author, version)]
#[command(about = "Herd monitor for livestock health and attention", long_about = None)]
pub struct Cli {
    /// Number of animals to generate
    #[arg(long, short = 'n', global = true)]
    pub population: Option<usize>,

    /// Days of activity history and trends
    #[arg(long, short = 'd', global = true)]
    pub days: Option<u32>,

    /// Seed for a reproducible snapshot
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Configuration file (JSON or TOML); defaults to ~/.config/herd/config.json
    #[arg(long, env = "HERD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table", global = true)]
    pub format: output::OutputFormat,

    /// Temperature unit
    #[arg(long, default_value = "c", global = true)]
    pub unit: output::TemperatureUnit,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dashboard KPIs and the most urgent animals
    Overview,

    /// Rank animals needing attention
    Attention {
        /// Number of animals to show
        #[arg(short, long, default_value_t = 10)]
        k: usize,

        /// Show the per-signal score breakdown
        #[arg(long)]
        explain: bool,
    },

    /// List cows with filters and sorting
    Cows {
        /// Filter by breed (repeatable or comma separated)
        #[arg(long, value_parser = parse_wire::<Breed>, value_delimiter = ',')]
        breed: Vec<Breed>,

        /// Filter by health status (healthy, attention, sick, critical)
        #[arg(long, value_parser = parse_wire::<HealthStatus>, value_delimiter = ',')]
        health: Vec<HealthStatus>,

        /// Filter by pregnancy (pregnant, not-pregnant, uncertain)
        #[arg(long, value_parser = parse_wire::<PregnancyFilter>, value_delimiter = ',')]
        pregnancy: Vec<PregnancyFilter>,

        /// Filter by zone (feeding, resting, walkway, milking, medical)
        #[arg(long, value_parser = parse_wire::<Zone>, value_delimiter = ',')]
        zone: Vec<Zone>,

        /// Only cows active within this many days
        #[arg(long)]
        seen_within_days: Option<i64>,

        /// Sort column (id, name, breed, age, weight, health-status, temperature,
        /// activity, confidence, last-activity, last-checkup)
        #[arg(long, default_value = "id", value_parser = parse_wire::<AnimalSortKey>)]
        sort: AnimalSortKey,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Maximum number of cows to show
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// List alerts, most urgent first
    Alerts {
        /// Filter by priority (low, medium, high, critical)
        #[arg(long, value_parser = parse_wire::<AlertPriority>, value_delimiter = ',')]
        priority: Vec<AlertPriority>,

        /// Filter by alert type
        #[arg(long = "type", value_parser = parse_wire::<AlertType>, value_delimiter = ',')]
        alert_type: Vec<AlertType>,

        /// Only unresolved alerts
        #[arg(long, conflicts_with = "resolved")]
        active: bool,

        /// Only resolved alerts
        #[arg(long)]
        resolved: bool,
    },

    /// Show the activity log or the live feed
    Activity {
        /// Filter by activity type
        #[arg(long = "type", value_parser = parse_wire::<ActivityType>, value_delimiter = ',')]
        activity_type: Vec<ActivityType>,

        /// Maximum number of entries
        #[arg(long, short, default_value_t = 20)]
        limit: usize,

        /// Show the live activity feed instead of the log
        #[arg(long)]
        feed: bool,
    },

    /// Show activity and temperature trends
    Trends {
        /// Show hourly buckets of one day (0 = most recent)
        #[arg(long)]
        day: Option<usize>,
    },

    /// Show pregnancy distribution and upcoming calvings
    Pregnancy,

    /// Show barn zones and equipment
    Barn,

    /// Validate every record of the snapshot
    Validate,

    /// Export the full snapshot as JSON
    Export {
        /// Output file path (stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print herd metrics in the Prometheus text format
    Metrics,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let json = std::env::var("HERD_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        output::print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let overrides = config::Overrides {
        population: cli.population,
        days: cli.days,
        seed: cli.seed,
    };
    let generator_config = config::load(cli.config.as_deref(), &overrides)?;
    let generator = Generator::new(generator_config).context("Invalid generator configuration")?;

    let started = Instant::now();
    let snapshot = generator.generate();
    let elapsed = started.elapsed().as_secs_f64();

    let herd_metrics = HerdMetrics::new();
    herd_metrics.observe_generation_latency(elapsed);
    herd_metrics.record_snapshot(&snapshot);
    StructuredLogger::new("herd-cli").log_snapshot_generated(&snapshot, elapsed);

    let format = cli.format;
    let unit = cli.unit;

    match cli.command {
        Commands::Overview => overview::show_overview(&snapshot, unit, format)?,
        Commands::Attention { k, explain } => {
            attention::show_attention(&snapshot, k, explain, unit, format)?;
        }
        Commands::Cows {
            breed,
            health,
            pregnancy,
            zone,
            seen_within_days,
            sort,
            desc,
            limit,
        } => {
            let date_range = seen_within_days
                .map(|days| {
                    TimeRange::last_days(snapshot.generated_at, days)
                        .with_context(|| format!("--seen-within-days {} is out of range", days))
                })
                .transpose()?;
            let query = cows::CowQuery {
                filters: FilterOptions {
                    breeds: breed,
                    health_status: health,
                    pregnancy_status: pregnancy,
                    zones: zone,
                    date_range,
                },
                sort,
                direction: if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                },
                limit,
            };
            cows::list_cows(&snapshot, &query, unit, format)?;
        }
        Commands::Alerts {
            priority,
            alert_type,
            active,
            resolved,
        } => {
            let query = alerts::AlertQuery {
                priorities: priority,
                types: alert_type,
                resolved: match (active, resolved) {
                    (true, _) => Some(false),
                    (_, true) => Some(true),
                    _ => None,
                },
            };
            alerts::list_alerts(&snapshot, &query, format)?;
        }
        Commands::Activity {
            activity_type,
            limit,
            feed,
        } => {
            if feed {
                activity::show_feed(&snapshot, limit, format)?;
            } else {
                activity::show_activity(&snapshot, &activity_type, limit, format)?;
            }
        }
        Commands::Trends { day } => trends::show_trends(&snapshot, day, unit, format)?,
        Commands::Pregnancy => pregnancy::show_pregnancy(&snapshot, format)?,
        Commands::Barn => barn::show_barn(&snapshot, format)?,
        Commands::Validate => validate::run_validation(&snapshot, format)?,
        Commands::Export { output } => export::export_snapshot(&snapshot, output.as_deref())?,
        Commands::Metrics => metrics::show_metrics(&snapshot, &herd_metrics)?,
    }

    Ok(())
}
