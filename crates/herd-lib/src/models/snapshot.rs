//! One complete, immutable generation of the herd

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    ActivityEvent, Alert, Animal, BarnLayout, BehavioralIndicator, DailyTrend, KpiMetrics,
    PregnancyDistribution, RealTimeActivityItem,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    /// Seed that reproduces this snapshot
    pub seed: u64,
    #[serde(rename = "cows")]
    pub animals: Vec<Animal>,
    pub alerts: Vec<Alert>,
    pub activities: Vec<ActivityEvent>,
    pub daily_trends: Vec<DailyTrend>,
    pub barn_layout: BarnLayout,
    pub pregnancy_distribution: Vec<PregnancyDistribution>,
    pub behavioral_indicators: Vec<BehavioralIndicator>,
    pub kpi_metrics: KpiMetrics,
    pub real_time_activity: Vec<RealTimeActivityItem>,
}

impl Snapshot {
    /// Look up an animal by id
    pub fn animal(&self, id: &str) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id == id)
    }

    /// Alerts raised against one animal
    pub fn alerts_for<'a>(&'a self, cow_id: &'a str) -> impl Iterator<Item = &'a Alert> + 'a {
        self.alerts.iter().filter(move |a| a.cow_id == cow_id)
    }

    pub fn active_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_active())
    }

    /// Pretty JSON export of the whole snapshot
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
