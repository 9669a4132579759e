use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of the default configuration that are absent from the file.
///
/// Returns an empty list when the file does not exist or is not a mapping.
pub fn missing_fields(conf_file: &Path) -> AppResult<Vec<String>> {
    let Some(map) = read_mapping(conf_file)? else {
        return Ok(Vec::new());
    };

    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !map.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing field to the configuration file with its default value.
/// Existing values are never touched, so running it twice is a no-op.
pub fn add_missing_fields(conf_file: &Path) -> AppResult<Vec<String>> {
    let Some(mut map) = read_mapping(conf_file)? else {
        info(format!(
            "No configuration file at {}, nothing to migrate.",
            conf_file.display()
        ));
        return Ok(Vec::new());
    };

    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults.iter() {
        // `database` has no meaningful default for an existing file
        if key.as_str() == Some("database") {
            continue;
        }
        if !map.contains_key(key) {
            map.insert(key.clone(), value.clone());
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map)).map_err(|e| {
        AppError::Config(format!(
            "Failed to serialize updated config {:?}: {}",
            conf_file, e
        ))
    })?;

    fs::write(conf_file, serialized)?;

    success(format!(
        "Configuration migrated: added {}.",
        added.join(", ")
    ));

    Ok(added)
}

fn read_mapping(conf_file: &Path) -> AppResult<Option<Mapping>> {
    if !conf_file.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(conf_file)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Failed to parse {:?}: {}", conf_file, e)))?;

    Ok(yaml.as_mapping().cloned())
}

fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(super::Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    value
        .as_mapping()
        .cloned()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))
}
