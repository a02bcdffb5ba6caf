use foundation::math::{LatLon, Vec3, lat_lon_to_sphere};
use serde::Serialize;

use crate::color::Rgb;

/// A named marker on the globe.
///
/// `position` is derived from the coordinate and radius at construction and
/// only changes through `at_radius`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub color: Rgb,
    pub radius: f64,
    pub position: Vec3,
}

impl Location {
    pub fn new(name: impl Into<String>, coord: LatLon, color: Rgb, radius: f64) -> Self {
        Self {
            name: name.into(),
            lat_deg: coord.lat_deg,
            lon_deg: coord.lon_deg,
            color,
            radius,
            position: lat_lon_to_sphere(coord, radius),
        }
    }

    pub fn coord(&self) -> LatLon {
        LatLon::new(self.lat_deg, self.lon_deg)
    }

    /// Same location projected onto a sphere of a different radius.
    pub fn at_radius(&self, radius: f64) -> Self {
        Self::new(self.name.clone(), self.coord(), self.color, radius)
    }
}
