//! Animal records and their closed attribute sets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cattle breed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breed {
    Holstein,
    Jersey,
    Angus,
    Hereford,
    Simmental,
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Breed::Holstein => write!(f, "Holstein"),
            Breed::Jersey => write!(f, "Jersey"),
            Breed::Angus => write!(f, "Angus"),
            Breed::Hereford => write!(f, "Hereford"),
            Breed::Simmental => write!(f, "Simmental"),
        }
    }
}

/// Health status, ordered by severity (healthy lowest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthStatus {
    Healthy,
    Attention,
    Sick,
    Critical,
}

impl HealthStatus {
    /// Ordinal severity: 0 for healthy up to 3 for critical
    pub fn severity(self) -> u8 {
        match self {
            HealthStatus::Healthy => 0,
            HealthStatus::Attention => 1,
            HealthStatus::Sick => 2,
            HealthStatus::Critical => 3,
        }
    }

    pub fn is_healthy(self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Attention => write!(f, "attention"),
            HealthStatus::Sick => write!(f, "sick"),
            HealthStatus::Critical => write!(f, "critical"),
        }
    }
}

/// Named sub-area of the barn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Zone {
    Feeding,
    Resting,
    Walkway,
    Milking,
    Medical,
}

impl Zone {
    /// Human-readable area label
    pub fn label(self) -> &'static str {
        match self {
            Zone::Feeding => "Feeding Area",
            Zone::Resting => "Resting Area",
            Zone::Walkway => "Walkway",
            Zone::Milking => "Milking Station",
            Zone::Medical => "Medical Area",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Feeding => write!(f, "feeding"),
            Zone::Resting => write!(f, "resting"),
            Zone::Walkway => write!(f, "walkway"),
            Zone::Milking => write!(f, "milking"),
            Zone::Medical => write!(f, "medical"),
        }
    }
}

/// Pregnancy record for a single animal
///
/// `expected_due_date` is present only when the animal is pregnant and has a
/// breeding date, and then equals the breeding date plus the gestation period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyStatus {
    pub is_pregnant: bool,
    /// Confidence percentage, 0-100
    pub confidence: u8,
    pub days_in_cycle: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breeding_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gestation_days: Option<u32>,
}

/// Barn coordinates plus the zone they fall in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
    pub zone: Zone,
}

/// Sensor vitals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    /// Celsius
    pub temperature: f64,
    /// Beats per minute
    pub heart_rate: u32,
    /// Minutes per hour
    pub rumination: u32,
    /// Steps per hour
    pub activity: u32,
}

/// Behaviour profile, every score on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behavior {
    pub activity: u8,
    pub movement: u8,
    pub resting: u8,
    pub social: u8,
    pub feeding: u8,
    pub vocalization: u8,
    pub heat: u8,
}

/// A monitored animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub breed: Breed,
    /// Age in months
    #[serde(rename = "age")]
    pub age_months: u32,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: u32,
    pub health_status: HealthStatus,
    #[serde(rename = "pregnancyStatus")]
    pub pregnancy: PregnancyStatus,
    pub location: Location,
    pub last_activity: DateTime<Utc>,
    pub last_checkup: DateTime<Utc>,
    pub vitals: Vitals,
    pub behavior: Behavior,
    /// Ids of alerts raised against this animal; alerts own the relationship
    #[serde(rename = "alerts")]
    pub alert_ids: Vec<String>,
}

impl Animal {
    /// Name shown in lists, falling back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn has_alerts(&self) -> bool {
        !self.alert_ids.is_empty()
    }
}

/// Format the sequential animal id for a zero-based population index
pub fn animal_id(index: usize) -> String {
    format!("COW{:03}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_id_is_zero_padded() {
        assert_eq!(animal_id(0), "COW001");
        assert_eq!(animal_id(41), "COW042");
        assert_eq!(animal_id(999), "COW1000");
    }

    #[test]
    fn test_health_severity_ordering() {
        assert!(HealthStatus::Critical > HealthStatus::Sick);
        assert!(HealthStatus::Sick > HealthStatus::Attention);
        assert!(HealthStatus::Attention > HealthStatus::Healthy);
        assert_eq!(HealthStatus::Critical.severity(), 3);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Attention).unwrap(),
            "\"attention\""
        );
        assert_eq!(serde_json::to_string(&Zone::Milking).unwrap(), "\"milking\"");
        assert_eq!(serde_json::to_string(&Breed::Holstein).unwrap(), "\"Holstein\"");
    }
}
