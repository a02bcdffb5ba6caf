//! Precision policies.
//!
//! Scene math runs in `f64`. Buffers handed to the renderer are `f32`,
//! flattened as `x, y, z` triples.

use super::Vec3;

#[inline]
pub fn to_f32(v: Vec3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}

/// Flatten points into an interleaved `f32` position buffer.
pub fn pack_positions_f32(points: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 3);
    for p in points {
        out.extend_from_slice(&to_f32(*p));
    }
    out
}
