use foundation::math::{Vec3, pack_positions_f32};
use serde::Serialize;

use crate::color::Rgb;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape3D {
    Sphere { radius: f64, segments: u32 },
    /// Flat annulus facing +Z.
    Ring { inner_radius: f64, outer_radius: f64, segments: u32 },
    /// Open line strip through `vertices`.
    Polyline { vertices: Vec<Vec3> },
    /// `positions` is an interleaved `x, y, z` buffer.
    PointCloud { positions: Vec<f32>, point_size: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Material {
    pub color: Rgb,
    pub opacity: f64,
    pub wireframe: bool,
    pub double_sided: bool,
    pub emissive: Option<Rgb>,
    pub emissive_intensity: f64,
}

impl Material {
    pub fn basic(color: Rgb, opacity: f64) -> Self {
        Self {
            color,
            opacity,
            wireframe: false,
            double_sided: false,
            emissive: None,
            emissive_intensity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawable3D {
    pub shape: Shape3D,
    pub material: Material,
}

impl Drawable3D {
    pub fn sphere(radius: f64, segments: u32, material: Material) -> Self {
        Self {
            shape: Shape3D::Sphere { radius, segments },
            material,
        }
    }

    pub fn ring(inner_radius: f64, outer_radius: f64, material: Material) -> Self {
        Self {
            shape: Shape3D::Ring {
                inner_radius,
                outer_radius,
                segments: 32,
            },
            material,
        }
    }

    pub fn polyline(vertices: Vec<Vec3>, material: Material) -> Self {
        Self {
            shape: Shape3D::Polyline { vertices },
            material,
        }
    }

    pub fn point_cloud(points: &[Vec3], point_size: f64, material: Material) -> Self {
        Self {
            shape: Shape3D::PointCloud {
                positions: pack_positions_f32(points),
                point_size,
            },
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Drawable3D, Material, Shape3D};
    use crate::color::Rgb;
    use foundation::math::Vec3;

    #[test]
    fn create_sphere_drawable() {
        let drawable = Drawable3D::sphere(1.5, 16, Material::basic(Rgb::WHITE, 1.0));
        assert!(matches!(drawable.shape, Shape3D::Sphere { segments: 16, .. }));
        assert!(!drawable.material.wireframe);
    }

    #[test]
    fn shapes_serialize_with_kind_tag() {
        let drawable = Drawable3D::ring(0.03, 0.05, Material::basic(Rgb::WHITE, 0.4));
        let json = serde_json::to_value(&drawable).expect("serialize");
        assert_eq!(json["shape"]["kind"], "ring");
        assert_eq!(json["material"]["color"], "#ffffff");
    }

    #[test]
    fn point_cloud_packs_positions() {
        let drawable = Drawable3D::point_cloud(
            &[Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)],
            0.05,
            Material::basic(Rgb::WHITE, 0.6),
        );
        let Shape3D::PointCloud { positions, .. } = drawable.shape else {
            panic!("expected a point cloud");
        };
        assert_eq!(positions, vec![1.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
    }
}
