//! Per-frame globe state.
//!
//! `derive_frame_state` is a pure function of scroll progress, elapsed time
//! and route positions. `GlobeScene` owns the mutable parts (route
//! animations) and calls it once per tick; the renderer applies the result
//! to its own objects.

use std::f64::consts::PI;

use foundation::math::Vec3;
use runtime::{Frame, clamp_progress};
use serde::Serialize;
use thiserror::Error;

use crate::World;
use crate::config::{ConfigError, GlobeConfig};
use crate::lighting::Lighting;
use crate::network::{GlobeNetwork, NetworkError};
use crate::prefabs::{GlobeNodes, spawn_globe};
use crate::route::RouteAnimation;
use crate::starfield::Starfield;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Network(#[from] NetworkError),
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct GlobeOrientation {
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl GlobeOrientation {
    /// Two full turns about Y over the page, with a gentle nod about X.
    pub fn at(progress: f64) -> Self {
        Self {
            rotation_x: (progress * PI).sin() * 0.2,
            rotation_y: progress * PI * 4.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct StarfieldFrame {
    pub rotation_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameState {
    pub scroll_progress: f64,
    pub elapsed_s: f64,
    pub globe: GlobeOrientation,
    pub lighting: Lighting,
    /// Uniform scale applied to every location marker.
    pub marker_scale: f64,
    pub route_opacity: f64,
    /// Traveling particle position per route, in route order.
    pub particles: Vec<Vec3>,
    /// `None` while it is daytime.
    pub stars: Option<StarfieldFrame>,
}

pub fn marker_pulse(elapsed_s: f64) -> f64 {
    (elapsed_s * 2.0).sin() * 0.2 + 1.0
}

pub fn route_opacity(elapsed_s: f64) -> f64 {
    0.3 + elapsed_s.sin() * 0.1
}

/// Compute everything that changes between frames.
///
/// `route_progress` holds one parameter per route; missing entries place the
/// particle at the route start.
pub fn derive_frame_state(
    scroll_progress: f64,
    elapsed_s: f64,
    network: &GlobeNetwork,
    route_progress: &[f64],
    starfield: &Starfield,
    config: &GlobeConfig,
) -> FrameState {
    let progress = clamp_progress(scroll_progress);
    let lighting = Lighting::at(progress, &config.lighting);

    let particles = network
        .routes()
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            let t = route_progress.get(idx).copied().unwrap_or(0.0);
            route.curve.point_at(t)
        })
        .collect();

    let stars = lighting.stars_visible().then(|| StarfieldFrame {
        rotation_y: starfield.rotation_y(elapsed_s),
    });

    FrameState {
        scroll_progress: progress,
        elapsed_s,
        globe: GlobeOrientation::at(progress),
        lighting,
        marker_scale: marker_pulse(elapsed_s),
        route_opacity: route_opacity(elapsed_s),
        particles,
        stars,
    }
}

/// The assembled globe: static network and scene graph plus per-route
/// animation state.
#[derive(Debug)]
pub struct GlobeScene {
    config: GlobeConfig,
    network: GlobeNetwork,
    starfield: Starfield,
    world: World,
    nodes: GlobeNodes,
    animations: Vec<RouteAnimation>,
}

impl GlobeScene {
    pub fn new(config: GlobeConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let network =
            GlobeNetwork::from_preset(config.network, config.marker_radius, config.bulge_radius)?;
        Ok(Self::with_network(config, network))
    }

    /// Build around a caller-supplied network. The config is trusted.
    pub fn with_network(config: GlobeConfig, network: GlobeNetwork) -> Self {
        let starfield = Starfield::generate(&config.starfield);
        let mut world = World::new();
        let nodes = spawn_globe(&mut world, &network, &starfield, &config);
        let animations = network
            .routes()
            .iter()
            .map(|_| RouteAnimation::new(config.route_step()))
            .collect();

        tracing::info!(
            preset = ?config.network,
            cycle = ?config.lighting.cycle,
            locations = network.locations().len(),
            routes = network.routes().len(),
            "globe scene ready"
        );

        Self {
            config,
            network,
            starfield,
            world,
            nodes,
            animations,
        }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn network(&self) -> &GlobeNetwork {
        &self.network
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn nodes(&self) -> &GlobeNodes {
        &self.nodes
    }

    pub fn route_progress(&self) -> Vec<f64> {
        self.animations.iter().map(RouteAnimation::progress).collect()
    }

    /// Advance every route by one step, then derive the frame.
    pub fn tick(&mut self, scroll_progress: f64, frame: Frame) -> FrameState {
        for anim in &mut self.animations {
            anim.advance();
        }
        let route_progress = self.route_progress();
        let state = derive_frame_state(
            scroll_progress,
            frame.time.seconds(),
            &self.network,
            &route_progress,
            &self.starfield,
            &self.config,
        );
        tracing::trace!(
            frame = frame.index,
            progress = state.scroll_progress,
            daytime = state.lighting.is_daytime,
            "globe frame"
        );
        state
    }
}
