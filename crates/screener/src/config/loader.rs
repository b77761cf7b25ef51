use std::path::Path;

use crate::config::schema::{Requirements, SearchMode};
use crate::error::ConfigError;

const SCHEMA_JSON: &str = include_str!("../../schema/requirements-v1.json");

pub fn load_requirements<P: AsRef<Path>>(path: P) -> Result<Requirements, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_requirements_from_str(&content)
}

pub fn load_requirements_from_str(content: &str) -> Result<Requirements, ConfigError> {
    let json_value: serde_json::Value = serde_json::from_str(content)?;
    load_requirements_from_value(json_value)
}

pub fn load_requirements_from_value(
    json_value: serde_json::Value,
) -> Result<Requirements, ConfigError> {
    validate_schema(&json_value)?;

    let requirements: Requirements = serde_json::from_value(json_value)?;

    validate_requirements(&requirements)?;

    Ok(requirements)
}

fn validate_schema(json_value: &serde_json::Value) -> Result<(), ConfigError> {
    let schema: serde_json::Value =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| ConfigError::Validation {
            message: format!("Invalid embedded schema JSON: {}", e),
        })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::Validation {
        message: format!("Failed to compile JSON schema: {}", e),
    })?;

    let error_messages: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| e.to_string())
        .collect();
    if !error_messages.is_empty() {
        return Err(ConfigError::SchemaValidation {
            errors: error_messages.join("; "),
        });
    }

    Ok(())
}

/// Semantic checks the schema cannot express: the keyword shape must agree
/// with `search_mode` and the threshold must sit inside the score range.
pub fn validate_requirements(requirements: &Requirements) -> Result<(), ConfigError> {
    let shape = requirements.requirements.mode();
    if shape != requirements.search_mode {
        return Err(ConfigError::Validation {
            message: format!(
                "search_mode '{}' does not match requirements given as {}",
                requirements.search_mode,
                match shape {
                    SearchMode::Flat => "a keyword list",
                    SearchMode::Section => "a section mapping",
                }
            ),
        });
    }

    if !requirements.threshold.is_finite() || !(0.0..=10.0).contains(&requirements.threshold) {
        return Err(ConfigError::Validation {
            message: format!(
                "threshold must be between 0 and 10, got {}",
                requirements.threshold
            ),
        });
    }

    Ok(())
}
