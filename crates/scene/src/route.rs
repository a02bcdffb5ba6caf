use foundation::math::Vec3;
use serde::Serialize;

/// Quadratic Bezier arc between two points on the globe.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RouteCurve {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl RouteCurve {
    pub fn quadratic(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Arc whose control point is the chord midpoint pushed out to
    /// `bulge_radius`, so the curve lifts off the sphere instead of cutting
    /// through it.
    ///
    /// Antipodal endpoints have no defined midpoint direction; the control
    /// point then collapses to the origin.
    pub fn arc(start: Vec3, end: Vec3, bulge_radius: f64) -> Self {
        let control = ((start + end) * 0.5).normalize() * bulge_radius;
        Self::quadratic(start, control, end)
    }

    /// Point at parameter `t`, clamped to `[0, 1]`. `t = 0` and `t = 1`
    /// return the endpoints exactly.
    pub fn point_at(&self, t: f64) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }

    /// `count` evenly spaced points from start to end, inclusive.
    pub fn sample(&self, count: usize) -> Vec<Vec3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.start],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| self.point_at(i as f64 / last))
                    .collect()
            }
        }
    }
}

/// Position of a traveling marker along a route, in `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RouteAnimation {
    progress: f64,
    step: f64,
}

impl RouteAnimation {
    pub fn new(step: f64) -> Self {
        Self {
            progress: 0.0,
            step,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Advance one frame and wrap. Returns the new progress.
    pub fn advance(&mut self) -> f64 {
        self.progress = (self.progress + self.step).rem_euclid(1.0);
        self.progress
    }
}
