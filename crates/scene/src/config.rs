use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lighting::LightingConfig;
use crate::presets::NetworkPreset;
use crate::starfield::StarfieldConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("bulge radius {bulge} must exceed marker radius {marker}")]
    FlatRoutes { bulge: f64, marker: f64 },
    #[error("routes need at least 2 samples, got {0}")]
    TooFewSamples(usize),
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

/// Tunables for the globe scene. Every field has a default, so partial
/// JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub network: NetworkPreset,
    pub sphere_radius: f64,
    pub sphere_segments: u32,
    pub sphere_opacity: f64,
    pub emissive_intensity: f64,
    /// Radius the markers are projected onto; slightly above the sphere.
    pub marker_radius: f64,
    pub marker_size: f64,
    pub ring_inner: f64,
    pub ring_outer: f64,
    pub bulge_radius: f64,
    pub route_samples: usize,
    /// Particle speed; each frame advances a route by `speed * 0.01`.
    pub route_speed: f64,
    pub particle_size: f64,
    pub fill_light_intensity: f64,
    pub lighting: LightingConfig,
    pub starfield: StarfieldConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            network: NetworkPreset::default(),
            sphere_radius: 2.0,
            sphere_segments: 64,
            sphere_opacity: 0.3,
            emissive_intensity: 0.2,
            marker_radius: 2.05,
            marker_size: 0.04,
            ring_inner: 0.03,
            ring_outer: 0.05,
            bulge_radius: 2.3,
            route_samples: 50,
            route_speed: 0.3,
            particle_size: 0.03,
            fill_light_intensity: 0.5,
            lighting: LightingConfig::default(),
            starfield: StarfieldConfig::default(),
        }
    }
}

impl GlobeConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn route_step(&self) -> f64 {
        self.route_speed * 0.01
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("sphere_radius", self.sphere_radius),
            ("marker_radius", self.marker_radius),
            ("marker_size", self.marker_size),
            ("bulge_radius", self.bulge_radius),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.bulge_radius <= self.marker_radius {
            return Err(ConfigError::FlatRoutes {
                bulge: self.bulge_radius,
                marker: self.marker_radius,
            });
        }
        if self.route_samples < 2 {
            return Err(ConfigError::TooFewSamples(self.route_samples));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GlobeConfig};
    use crate::lighting::DaylightCycle;
    use crate::presets::NetworkPreset;

    #[test]
    fn defaults_are_valid() {
        let cfg = GlobeConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.route_step() - 0.003).abs() < 1e-15);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GlobeConfig::from_json(
            r#"{ "network": "compact", "lighting": { "cycle": "sun_aligned" } }"#,
        )
        .expect("valid config");
        assert_eq!(cfg.network, NetworkPreset::Compact);
        assert_eq!(cfg.lighting.cycle, DaylightCycle::SunAligned);
        assert_eq!(cfg.lighting.orbit_radius, 6.0);
        assert_eq!(cfg.route_samples, 50);
    }

    #[test]
    fn rejects_flat_routes() {
        let cfg = GlobeConfig {
            bulge_radius: 2.0,
            ..GlobeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::FlatRoutes {
                bulge: 2.0,
                marker: 2.05
            })
        );
    }

    #[test]
    fn rejects_nan_radius() {
        let cfg = GlobeConfig {
            sphere_radius: f64::NAN,
            ..GlobeConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                field: "sphere_radius",
                ..
            })
        ));
    }

    #[test]
    fn rejects_too_few_samples() {
        let cfg = GlobeConfig {
            route_samples: 1,
            ..GlobeConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::TooFewSamples(1)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GlobeConfig::from_json("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}
