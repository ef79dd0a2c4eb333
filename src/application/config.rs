//! Tunable simulation parameters.
//!
//! Defaults reproduce the classic look: 5 px cells, a 25 px margin around
//! the surface, a 10 ms simulation tick and a 100 ms ornament tick.
//! Selected fields can be overridden through `SAND_*` environment variables.

use std::fmt;
use std::time::Duration;

pub const ENV_CELL_SIZE: &str = "SAND_CELL_SIZE";
pub const ENV_SURFACE_MARGIN: &str = "SAND_SURFACE_MARGIN";
pub const ENV_SIM_INTERVAL_MS: &str = "SAND_SIM_INTERVAL_MS";
pub const ENV_ORNAMENT_INTERVAL_MS: &str = "SAND_ORNAMENT_INTERVAL_MS";
pub const ENV_BRUSH_RADIUS: &str = "SAND_BRUSH_RADIUS";
pub const ENV_SPRAY_DENSITY: &str = "SAND_SPRAY_DENSITY";

/// All tunable parameters of a simulation instance
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Edge length of one grid square in pixels
    pub cell_size: u32,
    /// Pixels subtracted from each screen axis to get the surface size
    pub surface_margin: f32,
    pub sim_interval: Duration,
    pub ornament_interval: Duration,
    /// Degrees added to the ornament angle per ornament tick
    pub ornament_step: f32,
    /// Injection covers a (2r + 1) square around the pointer cell
    pub brush_radius: i32,
    /// Probability that an injected cell becomes sand
    pub spray_density: f64,
    /// Upper bound on runs of one task within a single frame
    pub max_catch_up: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size: 5,
            surface_margin: 25.0,
            sim_interval: Duration::from_millis(10),
            ornament_interval: Duration::from_millis(100),
            ornament_step: 0.5,
            brush_radius: 2,
            spray_density: 0.5,
            max_catch_up: 8,
        }
    }
}

/// A rejected configuration override
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The value could not be parsed as the expected type
    Malformed { key: &'static str, value: String },
    /// The value parsed but lies outside the accepted range
    OutOfRange { key: &'static str, value: String, expected: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Malformed { key, value } => {
                write!(f, "{key}: cannot parse {value:?}")
            }
            ConfigError::OutOfRange { key, value, expected } => {
                write!(f, "{key}: {value:?} out of range, expected {expected}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SimConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `SAND_*`
    /// key. Rejected values are logged and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let mut errors = Vec::new();

        override_with(&lookup, ENV_CELL_SIZE, &mut errors, |raw| {
            parse_positive::<u32>(ENV_CELL_SIZE, raw).map(|v| config.cell_size = v)
        });
        override_with(&lookup, ENV_SURFACE_MARGIN, &mut errors, |raw| {
            parse_in_range(ENV_SURFACE_MARGIN, raw, 0.0, f32::MAX, "a margin >= 0")
                .map(|v| config.surface_margin = v)
        });
        override_with(&lookup, ENV_SIM_INTERVAL_MS, &mut errors, |raw| {
            parse_positive::<u64>(ENV_SIM_INTERVAL_MS, raw)
                .map(|v| config.sim_interval = Duration::from_millis(v))
        });
        override_with(&lookup, ENV_ORNAMENT_INTERVAL_MS, &mut errors, |raw| {
            parse_positive::<u64>(ENV_ORNAMENT_INTERVAL_MS, raw)
                .map(|v| config.ornament_interval = Duration::from_millis(v))
        });
        override_with(&lookup, ENV_BRUSH_RADIUS, &mut errors, |raw| {
            parse_in_range(ENV_BRUSH_RADIUS, raw, 0, 64, "a radius in 0..=64")
                .map(|v| config.brush_radius = v)
        });
        override_with(&lookup, ENV_SPRAY_DENSITY, &mut errors, |raw| {
            parse_in_range(ENV_SPRAY_DENSITY, raw, 0.0, 1.0, "a probability in 0..=1")
                .map(|v| config.spray_density = v)
        });

        for error in &errors {
            log::warn!("ignoring configuration override: {error}");
        }
        config
    }
}

fn override_with(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    errors: &mut Vec<ConfigError>,
    apply: impl FnOnce(&str) -> Result<(), ConfigError>,
) {
    if let Some(raw) = lookup(key) {
        if let Err(error) = apply(raw.trim()) {
            errors.push(error);
        }
    }
}

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let value = raw.parse::<T>().map_err(|_| ConfigError::Malformed {
        key,
        value: raw.to_owned(),
    })?;
    if value > T::default() {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value: raw.to_owned(),
            expected: "a value > 0",
        })
    }
}

fn parse_in_range<T>(
    key: &'static str,
    raw: &str,
    min: T,
    max: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd,
{
    let value = raw.parse::<T>().map_err(|_| ConfigError::Malformed {
        key,
        value: raw.to_owned(),
    })?;
    // NaN fails both comparisons and is rejected here.
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value: raw.to_owned(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.cell_size, 5);
        assert_eq!(config.surface_margin, 25.0);
        assert_eq!(config.sim_interval, Duration::from_millis(10));
        assert_eq!(config.ornament_interval, Duration::from_millis(100));
        assert_eq!(config.ornament_step, 0.5);
        assert_eq!(config.brush_radius, 2);
        assert_eq!(config.spray_density, 0.5);
    }

    #[test]
    fn test_empty_lookup_keeps_defaults() {
        assert_eq!(SimConfig::from_lookup(|_| None), SimConfig::default());
    }

    #[test]
    fn test_valid_overrides_apply() {
        let config = SimConfig::from_lookup(lookup_from(&[
            (ENV_CELL_SIZE, "8"),
            (ENV_SURFACE_MARGIN, "0"),
            (ENV_SIM_INTERVAL_MS, " 16 "),
            (ENV_ORNAMENT_INTERVAL_MS, "50"),
            (ENV_BRUSH_RADIUS, "3"),
            (ENV_SPRAY_DENSITY, "0.25"),
        ]));
        assert_eq!(config.cell_size, 8);
        assert_eq!(config.surface_margin, 0.0);
        assert_eq!(config.sim_interval, Duration::from_millis(16));
        assert_eq!(config.ornament_interval, Duration::from_millis(50));
        assert_eq!(config.brush_radius, 3);
        assert_eq!(config.spray_density, 0.25);
    }

    #[test]
    fn test_invalid_overrides_keep_defaults() {
        let config = SimConfig::from_lookup(lookup_from(&[
            (ENV_CELL_SIZE, "0"),
            (ENV_SIM_INTERVAL_MS, "fast"),
            (ENV_BRUSH_RADIUS, "-1"),
            (ENV_SPRAY_DENSITY, "1.5"),
        ]));
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_positive::<u32>(ENV_CELL_SIZE, "abc"),
            Err(ConfigError::Malformed { key: ENV_CELL_SIZE, value: "abc".into() })
        );
        assert!(matches!(
            parse_in_range(ENV_SPRAY_DENSITY, "NaN", 0.0, 1.0, "p"),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_error_display_names_key() {
        let error = ConfigError::OutOfRange {
            key: ENV_SPRAY_DENSITY,
            value: "2".into(),
            expected: "a probability in 0..=1",
        };
        let text = error.to_string();
        assert!(text.starts_with(ENV_SPRAY_DENSITY));
        assert!(text.contains("0..=1"));
    }
}
