use serde::Serialize;

/// What a scene node stands for, so per-frame state can be matched to the
/// renderer's objects without sharing entity ids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Role {
    Globe,
    Marker(usize),
    MarkerRing(usize),
    RouteLine(usize),
    RouteParticle(usize),
    ParticleGlow(usize),
    Sun,
    Moon,
    Ambient,
    FillLight,
    Stars,
}
