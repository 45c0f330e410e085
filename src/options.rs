// Declarative motion configuration.
//
// A bound element carries either a bare number (the vertical factor) or a JSON
// object with any of the keys `y`, `x`, `r` and `variable`. Both shapes resolve to
// a fully populated `MotionOptions`.

use crate::constants::{DEFAULT_HORIZONTAL_FACTOR, DEFAULT_ROTATION_FACTOR, DEFAULT_VERTICAL_FACTOR};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionOptions {
    pub vertical_factor: f64,
    pub horizontal_factor: f64,
    pub rotation_factor: f64,
    pub use_custom_property: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            vertical_factor: DEFAULT_VERTICAL_FACTOR,
            horizontal_factor: DEFAULT_HORIZONTAL_FACTOR,
            rotation_factor: DEFAULT_ROTATION_FACTOR,
            use_custom_property: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigParseError {
    #[error("parallax attribute is empty")]
    Empty,
    #[error("invalid parallax object: {source}")]
    InvalidObject {
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid parallax factor {value:?}")]
    InvalidNumber { value: String },
}

// Object form. Unknown keys are ignored and a repeated key keeps its last value,
// as `JSON.parse` does; a known key with the wrong type is still an error.
fn merge_object(
    object: &Map<String, Value>,
    base: MotionOptions,
) -> Result<MotionOptions, ConfigParseError> {
    Ok(MotionOptions {
        vertical_factor: field(object, "y")?.unwrap_or(base.vertical_factor),
        horizontal_factor: field(object, "x")?.unwrap_or(base.horizontal_factor),
        rotation_factor: field(object, "r")?.unwrap_or(base.rotation_factor),
        use_custom_property: field(object, "variable")?.unwrap_or(base.use_custom_property),
    })
}

fn field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, ConfigParseError> {
    match object.get(key) {
        None => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|source| ConfigParseError::InvalidObject { source }),
    }
}

/// Parse an attribute value into motion options.
pub fn parse_motion_options(raw: &str) -> Result<MotionOptions, ConfigParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigParseError::Empty);
    }
    if trimmed.starts_with('{') {
        let object: Map<String, Value> = serde_json::from_str(trimmed)
            .map_err(|source| ConfigParseError::InvalidObject { source })?;
        return merge_object(&object, MotionOptions::default());
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(MotionOptions {
            vertical_factor: v,
            ..MotionOptions::default()
        }),
        _ => Err(ConfigParseError::InvalidNumber {
            value: trimmed.to_string(),
        }),
    }
}

impl FromStr for MotionOptions {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_motion_options(s)
    }
}
