use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Top-level keys that a complete configuration file defines.
fn expected_keys() -> AppResult<Vec<String>> {
    let value = serde_yaml::to_value(Config::default())?;
    let Value::Mapping(map) = value else {
        return Err(AppError::Config("default configuration is not a mapping".into()));
    };

    Ok(map
        .keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Return the keys missing from the YAML document in `content`.
///
/// Missing keys are not an error at load time (every field has a default);
/// this only reports them so the user can complete the file.
pub fn missing_keys_in(content: &str) -> AppResult<Vec<String>> {
    let doc: Value = serde_yaml::from_str(content)?;
    let present = match &doc {
        Value::Mapping(map) => map
            .keys()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect::<Vec<_>>(),
        Value::Null => Vec::new(),
        _ => return Err(AppError::Config("configuration root must be a mapping".into())),
    };

    Ok(expected_keys()?
        .into_iter()
        .filter(|k| !present.contains(k))
        .collect())
}

pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    missing_keys_in(&content)
}
