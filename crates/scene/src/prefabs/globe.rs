use foundation::math::Vec3;

use crate::World;
use crate::color::Rgb;
use crate::components::{Drawable3D, Light, Material, Role, Transform, Visibility};
use crate::config::GlobeConfig;
use crate::entity::EntityId;
use crate::lighting::{Lighting, MOON_COLOR, SUN_COLOR};
use crate::network::GlobeNetwork;
use crate::starfield::Starfield;

const FILL_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
const RING_SCALE: Vec3 = Vec3::new(2.0, 2.0, 0.1);

/// Entity handles for everything the globe prefab spawns.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeNodes {
    pub globe: EntityId,
    pub markers: Vec<EntityId>,
    pub route_lines: Vec<EntityId>,
    pub particles: Vec<EntityId>,
    pub sun: EntityId,
    pub moon: EntityId,
    pub ambient: EntityId,
    pub fill: EntityId,
    pub stars: EntityId,
}

/// Populate `world` with the wireframe globe, one marker per location, a
/// line and a traveling particle per route, the lights, and the starfield.
///
/// Node state is initialised for scroll progress 0.
pub fn spawn_globe(
    world: &mut World,
    network: &GlobeNetwork,
    starfield: &Starfield,
    config: &GlobeConfig,
) -> GlobeNodes {
    let lighting = Lighting::at(0.0, &config.lighting);
    let palette = lighting.palette;

    let globe = world.spawn_node(Role::Globe, Transform::identity(), None);
    world.set_drawable_3d(
        globe,
        Drawable3D::sphere(
            config.sphere_radius,
            config.sphere_segments,
            Material {
                color: palette.globe_color,
                opacity: config.sphere_opacity,
                wireframe: true,
                double_sided: false,
                emissive: Some(palette.globe_emissive),
                emissive_intensity: config.emissive_intensity,
            },
        ),
    );

    let mut markers = Vec::with_capacity(network.locations().len());
    for (idx, location) in network.locations().iter().enumerate() {
        let marker = world.spawn_node(
            Role::Marker(idx),
            Transform::translate(location.position),
            None,
        );
        world.set_drawable_3d(
            marker,
            Drawable3D::sphere(config.marker_size, 16, Material::basic(location.color, 0.9)),
        );

        let ring = world.spawn_node(
            Role::MarkerRing(idx),
            Transform::identity().with_scale(RING_SCALE),
            Some(marker),
        );
        let mut ring_material = Material::basic(location.color, 0.4);
        ring_material.double_sided = true;
        world.set_drawable_3d(
            ring,
            Drawable3D::ring(config.ring_inner, config.ring_outer, ring_material),
        );
        markers.push(marker);
    }

    let mut route_lines = Vec::with_capacity(network.routes().len());
    let mut particles = Vec::with_capacity(network.routes().len());
    let polylines = network.polylines(config.route_samples);
    for (idx, (route, vertices)) in network.routes().iter().zip(polylines).enumerate() {
        let line = world.spawn_node(Role::RouteLine(idx), Transform::identity(), None);
        world.set_drawable_3d(
            line,
            Drawable3D::polyline(vertices, Material::basic(route.color, 0.4)),
        );
        route_lines.push(line);

        let particle = world.spawn_node(
            Role::RouteParticle(idx),
            Transform::translate(route.curve.start),
            None,
        );
        world.set_drawable_3d(
            particle,
            Drawable3D::sphere(config.particle_size, 16, Material::basic(route.color, 1.0)),
        );
        let glow = world.spawn_node(Role::ParticleGlow(idx), Transform::identity(), Some(particle));
        world.set_light(glow, Light::point(route.color, 0.5, 0.5));
        particles.push(particle);
    }

    let ambient = world.spawn_node(Role::Ambient, Transform::identity(), None);
    world.set_light(ambient, Light::ambient(palette.ambient_intensity));

    let sun = world.spawn_node(Role::Sun, Transform::translate(lighting.sun_position), None);
    world.set_light(sun, Light::directional(SUN_COLOR, lighting.sun_intensity));

    let moon = world.spawn_node(Role::Moon, Transform::translate(lighting.moon_position), None);
    world.set_light(moon, Light::directional(MOON_COLOR, lighting.moon_intensity));

    let fill = world.spawn_node(
        Role::FillLight,
        Transform::translate(FILL_LIGHT_POSITION),
        None,
    );
    world.set_light(
        fill,
        Light::point(palette.fill_color, config.fill_light_intensity, 0.0),
    );

    let stars = world.spawn_node(Role::Stars, Transform::identity(), None);
    world.set_drawable_3d(
        stars,
        Drawable3D::point_cloud(
            starfield.positions(),
            config.starfield.point_size,
            Material::basic(Rgb::WHITE, config.starfield.opacity),
        ),
    );
    world.set_visibility(stars, Visibility::when(lighting.stars_visible()));

    tracing::debug!(
        entities = world.len(),
        markers = markers.len(),
        routes = route_lines.len(),
        "globe scene spawned"
    );

    GlobeNodes {
        globe,
        markers,
        route_lines,
        particles,
        sun,
        moon,
        ambient,
        fill,
        stars,
    }
}
