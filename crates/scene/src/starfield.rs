use std::f64::consts::{PI, TAU};

use foundation::math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    pub seed: u64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Spin about the vertical axis, radians per second.
    pub spin_rad_per_s: f64,
    pub point_size: f64,
    pub opacity: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 200,
            seed: 0x5eed_57a2,
            min_radius: 8.0,
            max_radius: 12.0,
            spin_rad_per_s: 0.05,
            point_size: 0.05,
            opacity: 0.6,
        }
    }
}

/// Background point cloud shown at night.
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    positions: Vec<Vec3>,
    spin_rad_per_s: f64,
}

impl Starfield {
    /// Scatter stars in a spherical shell. The same seed always produces the
    /// same field.
    pub fn generate(config: &StarfieldConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let (lo, hi) = if config.min_radius <= config.max_radius {
            (config.min_radius, config.max_radius)
        } else {
            (config.max_radius, config.min_radius)
        };

        let positions = (0..config.count)
            .map(|_| {
                let radius = lo + rng.random::<f64>() * (hi - lo);
                let theta = rng.random::<f64>() * TAU;
                let phi = rng.random::<f64>() * PI;
                Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                )
            })
            .collect();

        Self {
            positions,
            spin_rad_per_s: config.spin_rad_per_s,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn rotation_y(&self, elapsed_s: f64) -> f64 {
        elapsed_s * self.spin_rad_per_s
    }
}
