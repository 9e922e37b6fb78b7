//! Output formatting utilities

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::Colorize;
use herd_lib::constants::{activity, temperature};
use herd_lib::{AlertPriority, HealthStatus};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Temperature display unit
#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum TemperatureUnit {
    #[default]
    #[value(name = "c")]
    Celsius,
    #[value(name = "f")]
    Fahrenheit,
}

/// Print a table from a list of rows
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "No items found".yellow());
        return;
    }
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a bold section title with an underline
pub fn print_title(title: &str) {
    println!("{}", title.bold());
    println!("{}", "=".repeat(50));
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format minutes as `45m`, `2h` or `1h 30m`
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}h", hours)
    }
}

/// Format a Celsius reading in the requested unit, one decimal
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => format!("{:.1}°C", celsius),
        TemperatureUnit::Fahrenheit => format!("{:.1}°F", celsius * 9.0 / 5.0 + 32.0),
    }
}

/// Signed percentage, e.g. `+1.5%`
pub fn format_percentage_change(change: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, change)
}

/// Relative age of a timestamp
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if minutes < 24 * 60 {
        format!("{}h {}m ago", minutes / 60, minutes % 60)
    } else {
        format!("{}d ago", minutes / (24 * 60))
    }
}

pub fn format_optional_time(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Color health status based on severity
pub fn color_health(status: HealthStatus) -> String {
    let text = status.to_string();
    match status {
        HealthStatus::Healthy => text.green().to_string(),
        HealthStatus::Attention => text.yellow().to_string(),
        HealthStatus::Sick => text.red().to_string(),
        HealthStatus::Critical => text.red().bold().to_string(),
    }
}

pub fn color_priority(priority: AlertPriority) -> String {
    let text = priority.to_string();
    match priority {
        AlertPriority::Low => text.normal().to_string(),
        AlertPriority::Medium => text.yellow().to_string(),
        AlertPriority::High => text.red().to_string(),
        AlertPriority::Critical => text.red().bold().to_string(),
    }
}

/// Color pregnancy confidence (0-100)
pub fn color_confidence(confidence: u8) -> String {
    let formatted = format!("{}%", confidence);
    if confidence >= 70 {
        formatted.green().to_string()
    } else if confidence > 30 {
        formatted.yellow().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// Color a temperature against the body temperature bands
pub fn color_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    let formatted = format_temperature(celsius, unit);
    if temperature::NORMAL.contains(celsius) {
        formatted.green().to_string()
    } else if temperature::FEVER.contains(celsius) {
        formatted.yellow().to_string()
    } else if celsius >= temperature::CRITICAL.min {
        formatted.red().bold().to_string()
    } else {
        formatted.blue().to_string()
    }
}

/// Color a behaviour activity score against the activity bands
pub fn color_activity(score: u8) -> String {
    let value = f64::from(score);
    let formatted = score.to_string();
    if activity::LOW.contains(value) {
        formatted.yellow().to_string()
    } else if activity::NORMAL.contains(value) {
        formatted.green().to_string()
    } else if value >= activity::HIGH.min {
        formatted.cyan().to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(0), "0m");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(38.54, TemperatureUnit::Celsius), "38.5°C");
        assert_eq!(format_temperature(38.5, TemperatureUnit::Fahrenheit), "101.3°F");
    }

    #[test]
    fn test_format_percentage_change() {
        assert_eq!(format_percentage_change(1.5), "+1.5%");
        assert_eq!(format_percentage_change(0.0), "+0.0%");
        assert_eq!(format_percentage_change(-2.24), "-2.2%");
    }

    #[test]
    fn test_format_time_ago() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_time_ago(now - Duration::seconds(20), now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(12), now), "12 min ago");
        assert_eq!(format_time_ago(now - Duration::minutes(135), now), "2h 15m ago");
        assert_eq!(format_time_ago(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn test_colors_keep_text() {
        colored::control::set_override(false);
        assert_eq!(color_health(HealthStatus::Sick), "sick");
        assert_eq!(color_priority(AlertPriority::Critical), "critical");
        assert_eq!(color_confidence(85), "85%");
        assert_eq!(color_temperature(39.8, TemperatureUnit::Celsius), "39.8°C");
        assert_eq!(color_activity(12), "12");
        assert_eq!(color_activity(85), "85");
        assert_eq!(color_activity(100), "100");
    }
}
