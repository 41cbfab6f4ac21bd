//! Sandbox settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::PhysicsParams;

/// Failure to load or validate settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Ranges used to randomize user-spawned bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    pub radius_min: f32,
    pub radius_max: f32,
    pub vx_min: f32,
    pub vx_max: f32,
    pub vy_min: f32,
    pub vy_max: f32,
    /// Delay before a held pointer starts repeating (seconds)
    pub hold_delay: f32,
    /// Interval between repeated spawns (seconds)
    pub hold_interval: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            radius_min: SPAWN_RADIUS_MIN,
            radius_max: SPAWN_RADIUS_MAX,
            vx_min: SPAWN_VX_MIN,
            vx_max: SPAWN_VX_MAX,
            vy_min: SPAWN_VY_MIN,
            vy_max: SPAWN_VY_MAX,
            hold_delay: HOLD_REPEAT_DELAY,
            hold_interval: HOLD_REPEAT_INTERVAL,
        }
    }
}

/// Sandbox settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsParams,
    /// Arena spans [-half_extent, half_extent] on both axes
    pub arena_half_extent: f32,
    pub spawn: SpawnSettings,
    /// Seed for spawn randomization
    pub seed: u64,
    /// Cap on fixed steps per frame (None = always catch up fully)
    pub max_substeps: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            arena_half_extent: ARENA_HALF_EXTENT,
            spawn: SpawnSettings::default(),
            seed: 0,
            max_substeps: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        let s = &self.spawn;

        let positive = [
            ("physics.dt", p.dt),
            ("arena_half_extent", self.arena_half_extent),
            ("spawn.radius_min", s.radius_min),
            ("spawn.hold_interval", s.hold_interval),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("physics.gravity", p.gravity),
            ("physics.wall_damping", p.wall_damping),
            ("physics.restitution", p.restitution),
            ("physics.explosion_radius", p.explosion_radius),
            ("physics.explosion_strength", p.explosion_strength),
            ("spawn.hold_delay", s.hold_delay),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }

        let ranges = [
            ("spawn.radius", s.radius_min, s.radius_max),
            ("spawn.vx", s.vx_min, s.vx_max),
            ("spawn.vy", s.vy_min, s.vy_max),
        ];
        for (name, lo, hi) in ranges {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(invalid(format!("{name} range is inverted: {lo}..{hi}")));
            }
        }

        if s.radius_max > self.arena_half_extent {
            return Err(invalid(format!(
                "spawn.radius_max {} exceeds the arena half extent {}",
                s.radius_max, self.arena_half_extent
            )));
        }
        if self.max_substeps == Some(0) {
            return Err(invalid("max_substeps must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.physics.gravity, 360.0);
        assert_eq!(settings.physics.dt, 1.0 / 60.0);
        assert_eq!(settings.physics.wall_damping, 0.9);
        assert_eq!(settings.physics.restitution, 0.9);
        assert_eq!(settings.physics.explosion_radius, 50.0);
        assert_eq!(settings.physics.explosion_strength, 200.0);
        assert_eq!(settings.arena_half_extent, 100.0);
        assert_eq!(settings.spawn.hold_delay, 0.3);
        assert_eq!(settings.spawn.hold_interval, 0.1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json_str(r#"{"physics": {"gravity": 100.0}, "seed": 7}"#)
            .unwrap();
        assert_eq!(settings.physics.gravity, 100.0);
        assert_eq!(settings.physics.restitution, RESTITUTION);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.spawn, SpawnSettings::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Settings::from_json_str("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.max_substeps = Some(8);
        settings.seed = 42;
        let back = Settings::from_json_str(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_failures() {
        for json in [
            r#"{"physics": {"dt": 0.0}}"#,
            r#"{"physics": {"restitution": -0.5}}"#,
            r#"{"arena_half_extent": -10.0}"#,
            r#"{"spawn": {"radius_min": 0.0}}"#,
            r#"{"spawn": {"vx_min": 10.0, "vx_max": -10.0}}"#,
            r#"{"spawn": {"radius_max": 500.0}}"#,
            r#"{"max_substeps": 0}"#,
        ] {
            assert!(
                matches!(Settings::from_json_str(json), Err(ConfigError::Invalid(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/ball-pit.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/ball-pit.json"));
    }
}
