use foundation::math::Vec3;
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn translate(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn with_scale(self, scale: Vec3) -> Self {
        Self { scale, ..self }
    }
}
