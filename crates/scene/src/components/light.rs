use serde::Serialize;

use crate::color::Rgb;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightKind {
    Ambient,
    Directional,
    /// Falls off to nothing at `distance`; zero means unbounded.
    Point { distance: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Light {
    pub kind: LightKind,
    pub color: Rgb,
    pub intensity: f64,
}

impl Light {
    pub fn ambient(intensity: f64) -> Self {
        Self {
            kind: LightKind::Ambient,
            color: Rgb::WHITE,
            intensity,
        }
    }

    pub fn directional(color: Rgb, intensity: f64) -> Self {
        Self {
            kind: LightKind::Directional,
            color,
            intensity,
        }
    }

    pub fn point(color: Rgb, intensity: f64, distance: f64) -> Self {
        Self {
            kind: LightKind::Point { distance },
            color,
            intensity,
        }
    }
}
