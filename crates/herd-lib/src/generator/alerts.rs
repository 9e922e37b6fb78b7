//! Stage 2: alerts for a prefix of the herd

use chrono::{DateTime, Duration, Utc};

use super::sampling::Sampler;
use crate::models::{alert_id, Alert, Animal, ALERT_TEMPLATES};

const RESOLVER: &str = "System";

/// Attach one alert to each of the first `coverage * N` animals
///
/// The alerted animals are a prefix of the population, not a random sample.
/// Each alert id is recorded on its owner's `alert_ids`.
pub fn generate_alerts(
    sampler: &mut Sampler,
    animals: &mut [Animal],
    coverage: f64,
    resolved_rate: f64,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let alert_count = ((animals.len() as f64 * coverage).floor() as usize).min(animals.len());

    animals[..alert_count]
        .iter_mut()
        .enumerate()
        .map(|(index, animal)| {
            let template = sampler.pick(&ALERT_TEMPLATES);
            let timestamp = sampler.date_within(now, 2.0);
            let resolved = sampler.chance(resolved_rate);
            let estimated_resolution_minutes = sampler.count(15, 120);

            let (resolved_by, resolved_at) = if resolved {
                let delay = Duration::minutes(sampler.int(30, 300));
                // Never resolved in the future nor before being raised
                let at = (timestamp + delay).min(now).max(timestamp);
                (Some(RESOLVER.to_string()), Some(at))
            } else {
                (None, None)
            };

            let alert = Alert {
                id: alert_id(index),
                cow_id: animal.id.clone(),
                alert_type: template.alert_type,
                priority: template.priority,
                title: template.title.to_string(),
                description: format!(
                    "{} for cow {} ({})",
                    template.title, animal.id, animal.breed
                ),
                timestamp,
                resolved,
                resolved_by,
                resolved_at,
                action_required: template.priority.requires_action(),
                estimated_resolution_minutes: Some(estimated_resolution_minutes),
            };

            animal.alert_ids.push(alert.id.clone());
            alert
        })
        .collect()
}
