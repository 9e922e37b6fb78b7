//! Configuration management for the CLI
//!
//! Generator settings are layered, later sources winning:
//! 1. built-in defaults
//! 2. a JSON or TOML file (`--config`, or `~/.config/herd/config.json` when present)
//! 3. `HERD_*` environment variables (e.g. `HERD_POPULATION_SIZE=120`)
//! 4. command-line flags

use anyhow::{Context, Result};
use herd_lib::GeneratorConfig;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "HERD";

/// Values given directly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub population: Option<usize>,
    pub days: Option<u32>,
    pub seed: Option<u64>,
}

impl Overrides {
    fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(population) = self.population {
            config.population_size = population;
        }
        if let Some(days) = self.days {
            config.day_window = days;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

/// Default configuration file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|home| home.join(".config").join("herd").join("config.json"))
}

/// Load the generator configuration from every source
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<GeneratorConfig> {
    let file = match path {
        Some(p) => Some((p.to_path_buf(), true)),
        None => default_config_path().map(|p| (p, false)),
    };
    load_from(file, config::Environment::with_prefix(ENV_PREFIX), overrides)
}

/// Load from an optional `(path, required)` file and an environment source
fn load_from(
    file: Option<(PathBuf, bool)>,
    env: config::Environment,
    overrides: &Overrides,
) -> Result<GeneratorConfig> {
    let mut builder = config::Config::builder();
    if let Some((path, required)) = &file {
        builder = builder.add_source(config::File::from(path.as_path()).required(*required));
    }

    let settings = builder
        .add_source(env.try_parsing(true))
        .build()
        .with_context(|| match &file {
            Some((path, _)) => format!("Failed to read config file {}", path.display()),
            None => "Failed to read configuration".to_string(),
        })?;

    let mut generator: GeneratorConfig = settings
        .try_deserialize()
        .context("Invalid generator configuration")?;
    overrides.apply(&mut generator);

    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = load_from(None, env(&[]), &Overrides::default()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "herd.json",
            r#"{"population_size": 12, "pregnancy_rate": 0.5, "seed": 9}"#,
        );

        let config = load_from(Some((path, true)), env(&[]), &Overrides::default()).unwrap();
        assert_eq!(config.population_size, 12);
        assert_eq!(config.pregnancy_rate, 0.5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.day_window, 7);
    }

    #[test]
    fn test_toml_file_with_fixed_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "herd.toml",
            "day_window = 3\nnow = \"2024-06-15T12:00:00Z\"\n",
        );

        let config = load_from(Some((path, true)), env(&[]), &Overrides::default()).unwrap();
        assert_eq!(config.day_window, 3);
        assert_eq!(
            config.now.map(|t| t.to_rfc3339()),
            Some("2024-06-15T12:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_env_overrides_file_and_flags_override_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "herd.json", r#"{"population_size": 12, "day_window": 2}"#);
        let vars = [("HERD_POPULATION_SIZE", "30"), ("HERD_DAY_WINDOW", "5")];

        let config =
            load_from(Some((path.clone(), true)), env(&vars), &Overrides::default()).unwrap();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.day_window, 5);

        let overrides = Overrides {
            population: Some(4),
            ..Overrides::default()
        };
        let config = load_from(Some((path, true)), env(&vars), &overrides).unwrap();
        assert_eq!(config.population_size, 4);
        assert_eq!(config.day_window, 5);
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(load_from(Some((path.clone(), true)), env(&[]), &Overrides::default()).is_err());
        assert!(load_from(Some((path, false)), env(&[]), &Overrides::default()).is_ok());
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "herd.json", r#"{"population_size": "many"}"#);

        let err = load_from(Some((path, true)), env(&[]), &Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid generator configuration"));
    }
}
