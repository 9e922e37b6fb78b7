//! Labelled time windows

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive time window with a display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub label: String,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Range covering the `days` days up to `now`
    ///
    /// Returns `None` for a negative count or one reaching past the
    /// representable calendar.
    pub fn last_days(now: DateTime<Utc>, days: i64) -> Option<Self> {
        if days < 0 {
            return None;
        }
        let start = now.checked_sub_signed(Duration::try_days(days)?)?;
        Some(Self::new(start, now, time_range_label(start, now)))
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Preset windows offered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Today,
    Yesterday,
    Week,
    Month,
    Quarter,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Today,
        Preset::Yesterday,
        Preset::Week,
        Preset::Month,
        Preset::Quarter,
    ];

    /// Resolve the preset relative to `now` (UTC calendar days)
    pub fn range(self, now: DateTime<Utc>) -> TimeRange {
        let today = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc())
            .unwrap_or(now);
        let day = Duration::days(1);
        let tick = Duration::milliseconds(1);

        match self {
            Preset::Today => TimeRange::new(today, today + day - tick, "Today"),
            Preset::Yesterday => TimeRange::new(today - day, today - tick, "Yesterday"),
            Preset::Week => TimeRange::new(today - Duration::days(7), now, "Past 7 Days"),
            Preset::Month => TimeRange::new(today - Duration::days(30), now, "Past 30 Days"),
            Preset::Quarter => TimeRange::new(today - Duration::days(90), now, "Past 90 Days"),
        }
    }
}

/// Every preset window relative to `now`
pub fn date_ranges(now: DateTime<Utc>) -> Vec<(Preset, TimeRange)> {
    Preset::ALL.iter().map(|p| (*p, p.range(now))).collect()
}

/// Coarse label for the span between two instants
pub fn time_range_label(start: DateTime<Utc>, end: DateTime<Utc>) -> &'static str {
    match (end - start).num_days() {
        0 => "Today",
        1 => "Yesterday",
        d if d <= 7 => "Past Week",
        d if d <= 30 => "Past Month",
        d if d <= 90 => "Past Quarter",
        _ => "Custom Range",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixed_now;
    use chrono::TimeZone;

    #[test]
    fn test_labels() {
        let now = fixed_now();
        assert_eq!(time_range_label(now - Duration::hours(5), now), "Today");
        assert_eq!(time_range_label(now - Duration::days(1), now), "Yesterday");
        assert_eq!(time_range_label(now - Duration::days(7), now), "Past Week");
        assert_eq!(time_range_label(now - Duration::days(20), now), "Past Month");
        assert_eq!(time_range_label(now - Duration::days(90), now), "Past Quarter");
        assert_eq!(time_range_label(now - Duration::days(91), now), "Custom Range");
    }

    #[test]
    fn test_presets() {
        let now = fixed_now();
        let midnight = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

        let today = Preset::Today.range(now);
        assert_eq!(today.start, midnight);
        assert!(today.contains(now));
        assert!(!today.contains(midnight + Duration::days(1)));

        let yesterday = Preset::Yesterday.range(now);
        assert_eq!(yesterday.start, midnight - Duration::days(1));
        assert!(!yesterday.contains(midnight));

        let week = Preset::Week.range(now);
        assert_eq!(week.end, now);
        assert_eq!(week.label, "Past 7 Days");

        assert_eq!(date_ranges(now).len(), 5);
    }

    #[test]
    fn test_last_days() {
        let range = TimeRange::last_days(fixed_now(), 30).unwrap();
        assert_eq!(range.label, "Past Month");
        assert!(range.contains(fixed_now() - Duration::days(3)));
    }

    #[test]
    fn test_last_days_out_of_range() {
        assert!(TimeRange::last_days(fixed_now(), 10_000_000_000).is_none());
        assert!(TimeRange::last_days(fixed_now(), i64::MAX).is_none());
        assert!(TimeRange::last_days(fixed_now(), -1).is_none());

        let empty = TimeRange::last_days(fixed_now(), 0).unwrap();
        assert_eq!(empty.start, empty.end);
    }
}
