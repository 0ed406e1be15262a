use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys that must be present in the configuration file, with the value
/// written when they are missing.
fn expected_keys() -> Vec<(&'static str, Value)> {
    let defaults = Config::default();
    vec![
        ("database", Value::String(defaults.database)),
        ("page_size", Value::Number(defaults.page_size.into())),
        ("default_branch", Value::String(defaults.default_branch)),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// List the configuration keys missing from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(*k))
        .map(|(k, _)| k)
        .collect())
}

/// Add every missing key with its default value.
///   Returns:
///   Ok(true)  → file rewritten
///   Ok(false) → nothing to do
pub fn run_config_migration(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        info(format!("No configuration file at {}", path.display()));
        return Ok(false);
    }

    let mut map = read_mapping(path)?;
    let mut changed = false;

    for (key, default) in expected_keys() {
        if !map.contains_key(key) {
            map.insert(Value::String(key.to_string()), default);
            info(format!("Added missing configuration key '{}'", key));
            changed = true;
        }
    }

    if changed {
        let yaml = serde_yaml::to_string(&Value::Mapping(map))
            .map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        success(format!("Configuration file updated: {}", path.display()));
    }

    Ok(changed)
}
