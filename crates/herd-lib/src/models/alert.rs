//! Alerts raised against individual animals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertType {
    Health,
    Pregnancy,
    Behavior,
    Location,
    Feeding,
    Temperature,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::Health => write!(f, "health"),
            AlertType::Pregnancy => write!(f, "pregnancy"),
            AlertType::Behavior => write!(f, "behavior"),
            AlertType::Location => write!(f, "location"),
            AlertType::Feeding => write!(f, "feeding"),
            AlertType::Temperature => write!(f, "temperature"),
        }
    }
}

/// Alert priority levels, ordered low to critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertPriority {
    /// Whether an alert of this priority needs a human to act on it
    pub fn requires_action(self) -> bool {
        !matches!(self, AlertPriority::Low)
    }
}

impl std::fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertPriority::Low => write!(f, "low"),
            AlertPriority::Medium => write!(f, "medium"),
            AlertPriority::High => write!(f, "high"),
            AlertPriority::Critical => write!(f, "critical"),
        }
    }
}

/// Event tied to exactly one animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub cow_id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub priority: AlertPriority,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    /// Never earlier than `timestamp`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    pub action_required: bool,
    #[serde(
        rename = "estimatedResolutionTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_resolution_minutes: Option<u32>,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        !self.resolved
    }
}

/// Fixed alert shape the generator picks from
#[derive(Debug, Clone, Copy)]
pub struct AlertTemplate {
    pub alert_type: AlertType,
    pub priority: AlertPriority,
    pub title: &'static str,
}

pub const ALERT_TEMPLATES: [AlertTemplate; 5] = [
    AlertTemplate {
        alert_type: AlertType::Health,
        priority: AlertPriority::High,
        title: "High Temperature Detected",
    },
    AlertTemplate {
        alert_type: AlertType::Pregnancy,
        priority: AlertPriority::Medium,
        title: "Pregnancy Status Change",
    },
    AlertTemplate {
        alert_type: AlertType::Behavior,
        priority: AlertPriority::Low,
        title: "Abnormal Activity Pattern",
    },
    AlertTemplate {
        alert_type: AlertType::Feeding,
        priority: AlertPriority::Medium,
        title: "Low Feeding Activity",
    },
    AlertTemplate {
        alert_type: AlertType::Location,
        priority: AlertPriority::Low,
        title: "Extended Time in Medical Area",
    },
];

/// Format the sequential alert id for a zero-based index
pub fn alert_id(index: usize) -> String {
    format!("ALERT{:03}", index + 1)
}
