//! Read-only views over a snapshot
//!
//! - Filters: breed, health, pregnancy bracket, zone and date window
//! - Stable sorts with an explicit direction
//! - Groupings of the activity log and herd composition
//! - Preset time windows and their labels
//!
//! Every helper borrows its input and returns references, so views can be
//! chained without cloning records.

mod filters;
mod grouping;
mod sort;
mod time_range;

pub use filters::{
    apply_all_filters, filter_activities_by_date_range, filter_activities_by_type,
    filter_alerts_by_priority, filter_alerts_by_resolution, filter_alerts_by_type,
    filter_by_breed, filter_by_date_range, filter_by_health_status, filter_by_pregnancy,
    filter_by_zone, FilterOptions, PregnancyFilter,
};
pub use grouping::{
    count_by_breed, count_by_zone, group_activities_by_day, group_activities_by_hour,
    minutes_by_activity_type,
};
pub use sort::{
    sort_activities_by_time, sort_alerts_by_priority, sort_alerts_by_time,
    sort_alerts_by_urgency, sort_animals, AnimalSortKey, SortDirection,
};
pub use time_range::{date_ranges, time_range_label, Preset, TimeRange};
