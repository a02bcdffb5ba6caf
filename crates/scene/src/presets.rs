//! Built-in site and route tables.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Static site entry: name, latitude, longitude (degrees) and marker color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Site {
    pub name: &'static str,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub color: Rgb,
}

const fn site(name: &'static str, lat_deg: f64, lon_deg: f64, color: u32) -> Site {
    Site {
        name,
        lat_deg,
        lon_deg,
        color: Rgb::from_hex(color),
    }
}

pub const WORLD_SITES: [Site; 24] = [
    site("New York", 40.7128, -74.0060, 0xfbbf24),
    site("London", 51.5074, -0.1278, 0x3b82f6),
    site("Tokyo", 35.6762, 139.6503, 0xef4444),
    site("Paris", 48.8566, 2.3522, 0x8b5cf6),
    site("Dubai", 25.2048, 55.2708, 0x10b981),
    site("Singapore", 1.3521, 103.8198, 0xf59e0b),
    site("Sydney", -33.8688, 151.2093, 0x06b6d4),
    site("Mumbai", 19.0760, 72.8777, 0xec4899),
    site("Toronto", 43.6532, -79.3832, 0xf43f5e),
    site("Los Angeles", 34.0522, -118.2437, 0xfacc15),
    site("Berlin", 52.5200, 13.4050, 0x14b8a6),
    site("Moscow", 55.7558, 37.6173, 0xf97316),
    site("São Paulo", -23.5505, -46.6333, 0x22c55e),
    site("Mexico City", 19.4326, -99.1332, 0xa855f7),
    site("Hong Kong", 22.3193, 114.1694, 0xfb923c),
    site("Seoul", 37.5665, 126.9780, 0xe11d48),
    site("Bangkok", 13.7563, 100.5018, 0x84cc16),
    site("Istanbul", 41.0082, 28.9784, 0x06b6d4),
    site("Melbourne", -37.8136, 144.9631, 0x8b5cf6),
    site("Vancouver", 49.2827, -123.1207, 0x10b981),
    site("Miami", 25.7617, -80.1918, 0xf59e0b),
    site("Delhi", 28.6139, 77.2090, 0xec4899),
    site("Beijing", 39.9042, 116.4074, 0xef4444),
    site("Shanghai", 31.2304, 121.4737, 0xfbbf24),
];

/// Directed routes as indices into `WORLD_SITES`. A route takes the color
/// of its first site.
pub const WORLD_ROUTES: [(usize, usize); 43] = [
    // North America
    (0, 1),
    (0, 8),
    (0, 9),
    (0, 20),
    (8, 19),
    (9, 2),
    (9, 13),
    (13, 12),
    // Europe
    (1, 3),
    (1, 10),
    (1, 17),
    (3, 4),
    (3, 10),
    (10, 11),
    (11, 22),
    // Middle East / Asia
    (4, 5),
    (4, 7),
    (4, 17),
    (5, 2),
    (5, 14),
    (5, 16),
    (7, 21),
    (7, 4),
    (14, 2),
    (14, 15),
    (14, 23),
    (15, 2),
    (16, 5),
    (22, 23),
    (23, 2),
    (21, 22),
    // Pacific / Australia
    (2, 6),
    (2, 15),
    (6, 18),
    (6, 5),
    (19, 2),
    (19, 9),
    // Cross-continental
    (12, 1),
    (12, 20),
    (20, 13),
    (0, 3),
    (9, 6),
    (17, 11),
];

/// The first eight world sites and the world routes that stay among them.
pub const COMPACT_ROUTES: [(usize, usize); 10] = [
    (0, 1),
    (1, 3),
    (3, 4),
    (4, 5),
    (4, 7),
    (5, 2),
    (7, 4),
    (2, 6),
    (6, 5),
    (0, 3),
];

/// Which built-in network the globe shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkPreset {
    /// 24 cities, 43 routes.
    #[default]
    World,
    /// 8 cities, 10 routes; lighter for small screens.
    Compact,
}

impl NetworkPreset {
    pub fn sites(self) -> &'static [Site] {
        match self {
            NetworkPreset::World => &WORLD_SITES,
            NetworkPreset::Compact => &WORLD_SITES[..8],
        }
    }

    pub fn routes(self) -> &'static [(usize, usize)] {
        match self {
            NetworkPreset::World => &WORLD_ROUTES,
            NetworkPreset::Compact => &COMPACT_ROUTES,
        }
    }
}
