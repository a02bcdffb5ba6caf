use foundation::math::{LatLon, Vec3};
use serde::Serialize;
use thiserror::Error;

use crate::color::Rgb;
use crate::location::Location;
use crate::presets::{NetworkPreset, Site};
use crate::route::RouteCurve;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("route {route} references location {index}, but only {count} exist")]
    UnknownLocation {
        route: usize,
        index: usize,
        count: usize,
    },
    #[error("route {route} starts and ends at location {index}")]
    DegenerateRoute { route: usize, index: usize },
}

/// A directed arc between two locations of the same network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub start: usize,
    pub end: usize,
    pub color: Rgb,
    pub curve: RouteCurve,
}

/// Locations plus the routes between them, with every route endpoint
/// checked against the location set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobeNetwork {
    locations: Vec<Location>,
    routes: Vec<Route>,
}

impl GlobeNetwork {
    /// Build from location records and index pairs. Each route's curve is
    /// computed once here and cached on the route.
    pub fn build(
        locations: Vec<Location>,
        pairs: &[(usize, usize)],
        bulge_radius: f64,
    ) -> Result<Self, NetworkError> {
        let count = locations.len();
        let mut routes = Vec::with_capacity(pairs.len());

        for (route, &(start, end)) in pairs.iter().enumerate() {
            for index in [start, end] {
                if index >= count {
                    return Err(NetworkError::UnknownLocation {
                        route,
                        index,
                        count,
                    });
                }
            }
            if start == end {
                return Err(NetworkError::DegenerateRoute { route, index: start });
            }

            let from = &locations[start];
            let to = &locations[end];
            routes.push(Route {
                start,
                end,
                color: from.color,
                curve: RouteCurve::arc(from.position, to.position, bulge_radius),
            });
        }

        tracing::debug!(
            locations = count,
            routes = routes.len(),
            bulge_radius,
            "globe network built"
        );

        Ok(Self { locations, routes })
    }

    pub fn from_sites(
        sites: &[Site],
        pairs: &[(usize, usize)],
        radius: f64,
        bulge_radius: f64,
    ) -> Result<Self, NetworkError> {
        let locations = sites
            .iter()
            .map(|s| Location::new(s.name, LatLon::new(s.lat_deg, s.lon_deg), s.color, radius))
            .collect();
        Self::build(locations, pairs, bulge_radius)
    }

    pub fn from_preset(
        preset: NetworkPreset,
        radius: f64,
        bulge_radius: f64,
    ) -> Result<Self, NetworkError> {
        Self::from_sites(preset.sites(), preset.routes(), radius, bulge_radius)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Sampled polyline for every route, in route order.
    pub fn polylines(&self, samples: usize) -> Vec<Vec<Vec3>> {
        self.routes.iter().map(|r| r.curve.sample(samples)).collect()
    }
}
