//! Effect options and the pure merge that builds them.
//!
//! Callers hand over a loose option object (from JS, a JSON value). It is
//! merged onto the defaults without touching either input, then decoded into
//! an immutable [`Config`]. Bad enum values or wrong types surface here, at
//! attach time, and never during a frame.

use crate::constants::{DEFAULT_CLASS_NAME, DEFAULT_POWER};
use crate::error::{ParallaxError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which displacement components are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Both,
}

impl Axis {
    #[inline]
    pub fn has_x(self) -> bool {
        matches!(self, Axis::X | Axis::Both)
    }

    #[inline]
    pub fn has_y(self) -> bool {
        matches!(self, Axis::Y | Axis::Both)
    }
}

/// Coordinate frame used as the centering reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Local,
}

/// Requested input origin. Mobile environments may override it, see
/// [`crate::input::resolve_input_mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controls {
    #[serde(alias = "mouse")]
    Pointer,
    Scroll,
    Orientation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub power: f32,
    pub axis: Axis,
    pub scope: Scope,
    pub controls: Controls,
    #[serde(rename = "className")]
    pub class_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            power: DEFAULT_POWER,
            axis: Axis::X,
            scope: Scope::Global,
            controls: Controls::Pointer,
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl Config {
    /// Merge `overrides` onto the defaults and decode the result.
    ///
    /// `null` means "no options". Any other non-object value is rejected.
    pub fn from_overrides(overrides: &Value) -> Result<Self> {
        let defaults = serde_json::to_value(Config::default())
            .map_err(|e| ParallaxError::Configuration(e.to_string()))?;
        let merged = match overrides {
            Value::Null => defaults,
            Value::Object(_) => merge_options(&defaults, overrides),
            other => {
                return Err(ParallaxError::Configuration(format!(
                    "options must be an object, got {other}"
                )))
            }
        };
        let config: Config = serde_json::from_value(merged)
            .map_err(|e| ParallaxError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.power.is_finite() {
            return Err(ParallaxError::Configuration(format!(
                "power must be finite, got {}",
                self.power
            )));
        }
        if self.class_name.trim().is_empty() {
            return Err(ParallaxError::Configuration(
                "className must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Deep merge returning a new value.
///
/// Objects in `overrides` merge key by key into the matching default (or into
/// an empty object when the default is not an object). Every other value,
/// arrays and `null` included, replaces the default wholesale.
pub fn merge_options(defaults: &Value, overrides: &Value) -> Value {
    let Value::Object(src) = overrides else {
        return overrides.clone();
    };
    let mut out = match defaults {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    for (key, value) in src {
        let merged = match value {
            Value::Object(_) => merge_options(out.get(key).unwrap_or(&Value::Null), value),
            _ => value.clone(),
        };
        out.insert(key.clone(), merged);
    }
    Value::Object(out)
}
