//! CLI subcommand implementations

pub mod activity;
pub mod alerts;
pub mod attention;
pub mod barn;
pub mod cows;
pub mod export;
pub mod metrics;
pub mod overview;
pub mod pregnancy;
pub mod trends;
pub mod validate;

use serde::de::DeserializeOwned;

/// Parse a flag value through a type's JSON wire name
///
/// Accepts the wire name itself (`notPregnant`), lower case (`holstein`) or
/// kebab case (`not-pregnant`, `last-activity`).
pub fn parse_wire<T: DeserializeOwned>(input: &str) -> Result<T, String> {
    let camel = kebab_to_camel(input);
    let candidates = [
        input.to_string(),
        input.to_lowercase(),
        capitalize(&input.to_lowercase()),
        camel.clone(),
        capitalize(&camel),
    ];

    candidates
        .into_iter()
        .find_map(|candidate| serde_json::from_value(serde_json::Value::String(candidate)).ok())
        .ok_or_else(|| format!("unknown value '{}'", input))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn kebab_to_camel(s: &str) -> String {
    let mut parts = s.split('-');
    let head = parts.next().unwrap_or_default().to_lowercase();
    parts.fold(head, |mut acc, part| {
        acc.push_str(&capitalize(&part.to_lowercase()));
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use herd_lib::query::{AnimalSortKey, PregnancyFilter};
    use herd_lib::{AlertPriority, Breed, Zone};

    #[test]
    fn test_parse_wire_names() {
        assert_eq!(parse_wire::<Breed>("holstein"), Ok(Breed::Holstein));
        assert_eq!(parse_wire::<Breed>("Angus"), Ok(Breed::Angus));
        assert_eq!(parse_wire::<Zone>("Milking"), Ok(Zone::Milking));
        assert_eq!(parse_wire::<AlertPriority>("critical"), Ok(AlertPriority::Critical));
        assert_eq!(
            parse_wire::<PregnancyFilter>("not-pregnant"),
            Ok(PregnancyFilter::NotPregnant)
        );
        assert_eq!(
            parse_wire::<AnimalSortKey>("last-activity"),
            Ok(AnimalSortKey::LastActivity)
        );
    }

    #[test]
    fn test_parse_wire_rejects_unknown() {
        assert_eq!(
            parse_wire::<Breed>("wagyu"),
            Err("unknown value 'wagyu'".to_string())
        );
    }
}
