//! Core data models for the herd monitor

mod activity;
mod aggregates;
mod alert;
mod animal;
mod snapshot;

pub use activity::{
    ActivityEvent, ActivityLocation, ActivityType, FeedPriority, FeedStatus, RealTimeActivityItem,
};
pub use aggregates::{
    BarnLayout, BarnSize, BarnZone, BehaviorCategory, BehaviorMetrics, BehavioralIndicator,
    DailyTrend, Equipment, EquipmentStatus, EquipmentType, KpiChanges, KpiMetrics, Point,
    PregnancyDistribution, TrendMetrics,
};
pub use alert::{alert_id, Alert, AlertPriority, AlertTemplate, AlertType, ALERT_TEMPLATES};
pub use animal::{
    animal_id, Animal, Behavior, Breed, HealthStatus, Location, PregnancyStatus, Vitals, Zone,
};
pub use snapshot::Snapshot;
