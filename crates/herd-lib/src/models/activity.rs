//! Activity log entries and the live activity feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Zone;

/// Kind of activity recorded for an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    Eating,
    Resting,
    Walking,
    Drinking,
    Socializing,
    Ruminating,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Eating,
        ActivityType::Resting,
        ActivityType::Walking,
        ActivityType::Drinking,
        ActivityType::Socializing,
        ActivityType::Ruminating,
    ];

    /// Activities shown on the live feed (rumination is only logged)
    pub const FEED: [ActivityType; 5] = [
        ActivityType::Eating,
        ActivityType::Walking,
        ActivityType::Resting,
        ActivityType::Drinking,
        ActivityType::Socializing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Eating => "Eating",
            ActivityType::Resting => "Resting",
            ActivityType::Walking => "Walking",
            ActivityType::Drinking => "Drinking",
            ActivityType::Socializing => "Socializing",
            ActivityType::Ruminating => "Ruminating",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Eating => write!(f, "eating"),
            ActivityType::Resting => write!(f, "resting"),
            ActivityType::Walking => write!(f, "walking"),
            ActivityType::Drinking => write!(f, "drinking"),
            ActivityType::Socializing => write!(f, "socializing"),
            ActivityType::Ruminating => write!(f, "ruminating"),
        }
    }
}

/// Immutable activity log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: String,
    pub cow_id: String,
    pub timestamp: DateTime<Utc>,
    pub activity_type: ActivityType,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Owner position with a small jitter
    pub location: ActivityLocation,
    /// 0-100
    pub intensity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityLocation {
    pub x: i32,
    pub y: i32,
    pub zone: Zone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedStatus {
    Ongoing,
    Completed,
}

impl std::fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedStatus::Ongoing => write!(f, "ongoing"),
            FeedStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedPriority {
    Normal,
    Attention,
}

/// Entry of the live activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeActivityItem {
    pub id: String,
    pub cow_id: String,
    pub cow_name: String,
    pub activity_type: ActivityType,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Zone>,
    pub status: FeedStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<FeedPriority>,
}
