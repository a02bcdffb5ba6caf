pub mod color;
pub mod components;
pub mod config;
pub mod entity;
pub mod frame_state;
pub mod lighting;
pub mod location;
pub mod network;
pub mod prefabs;
pub mod presets;
pub mod route;
pub mod starfield;
pub mod world;

pub use color::{ColorError, Rgb};
pub use config::{ConfigError, GlobeConfig};
pub use frame_state::*;
pub use lighting::{DaylightCycle, Lighting, LightingConfig};
pub use location::Location;
pub use network::{GlobeNetwork, NetworkError, Route};
pub use presets::NetworkPreset;
pub use route::{RouteAnimation, RouteCurve};
pub use world::*;
