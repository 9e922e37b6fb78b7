//! Aggregate records derived from the animal, alert and activity sets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Breed, Zone};

/// One hourly bucket of herd-wide trend metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrend {
    pub date: DateTime<Utc>,
    /// 0-23
    pub hour: u32,
    pub metrics: TrendMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendMetrics {
    pub average_activity: u32,
    pub peak_activity: u32,
    pub average_rumination: u32,
    pub average_temperature: f64,
    pub peak_temperature: f64,
    pub cows_active: u32,
    pub total_cows: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Polygonal barn zone with occupancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarnZone {
    pub id: String,
    #[serde(rename = "type")]
    pub zone: Zone,
    pub coordinates: Vec<Point>,
    pub capacity: u32,
    pub current_occupancy: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl BarnZone {
    /// Occupancy as a percentage of capacity, 0 for zero-capacity zones
    pub fn occupancy_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.current_occupancy as f64 / self.capacity as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarnSize {
    pub width: i32,
    pub height: i32,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentType {
    Feeder,
    Water,
    Camera,
    Sensor,
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquipmentType::Feeder => write!(f, "feeder"),
            EquipmentType::Water => write!(f, "water"),
            EquipmentType::Camera => write!(f, "camera"),
            EquipmentType::Sensor => write!(f, "sensor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentStatus {
    Active,
    Inactive,
    Maintenance,
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquipmentStatus::Active => write!(f, "active"),
            EquipmentStatus::Inactive => write!(f, "inactive"),
            EquipmentStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub position: Point,
    pub status: EquipmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarnLayout {
    pub zones: Vec<BarnZone>,
    pub dimensions: BarnSize,
    pub equipment: Vec<Equipment>,
}

/// Pregnancy bracket counts for one breed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyDistribution {
    pub breed: Breed,
    pub pregnant: u32,
    pub not_pregnant: u32,
    pub uncertain: u32,
    pub total: u32,
    pub average_confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BehaviorCategory {
    Pregnant,
    NonPregnant,
}

impl std::fmt::Display for BehaviorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BehaviorCategory::Pregnant => write!(f, "pregnant"),
            BehaviorCategory::NonPregnant => write!(f, "non-pregnant"),
        }
    }
}

/// Rounded behaviour score averages for one group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorMetrics {
    pub activity: u32,
    pub movement: u32,
    pub resting: u32,
    pub social: u32,
    pub feeding: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralIndicator {
    pub category: BehaviorCategory,
    pub metrics: BehaviorMetrics,
}

/// Headline dashboard metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetrics {
    pub total_cows: u32,
    pub healthy_cows: u32,
    pub pregnant_cows: u32,
    /// Unresolved alerts
    pub alerts_count: u32,
    pub average_activity: u32,
    pub pregnancy_rate: f64,
    pub health_rate: f64,
    pub average_temperature: f64,
    /// Period-over-period deltas; synthetic noise, not derived from history
    pub changes: KpiChanges,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiChanges {
    pub total_cows: i32,
    pub healthy_cows: i32,
    pub pregnant_cows: i32,
    pub alerts_count: i32,
    pub average_activity: i32,
    pub pregnancy_rate: f64,
    pub health_rate: f64,
    pub average_temperature: f64,
}
