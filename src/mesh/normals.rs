// normals.rs - Smoothed per-vertex normals
//
// Each triangle's unnormalized face normal is added to all three of its
// vertices, so larger faces weigh more. Sums are normalized at the end.

use glam::Vec3;
use tracing::{debug, warn};

/// Unnormalized normal of triangle (a, b, c); length is twice its area
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}

#[inline]
fn vertex(positions: &[f32], id: u32) -> Vec3 {
    let i = 3 * id as usize;
    Vec3::from_slice(&positions[i..i + 3])
}

/// Stride-3 unit normals parallel to `positions`.
///
/// A vertex whose contributions cancel to zero gets +Z instead of NaN.
pub fn smooth(positions: &[f32], triangles: &[u32]) -> Vec<f32> {
    let mut acc = vec![Vec3::ZERO; positions.len() / 3];

    for tri in triangles.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let n = face_normal(vertex(positions, a), vertex(positions, b), vertex(positions, c));
        acc[a as usize] += n;
        acc[b as usize] += n;
        acc[c as usize] += n;
    }

    let mut degenerate = 0usize;
    let mut out = vec![0.0; positions.len()];
    for (n, slot) in acc.iter().zip(out.chunks_exact_mut(3)) {
        let unit = n.try_normalize().unwrap_or_else(|| {
            degenerate += 1;
            Vec3::Z
        });
        unit.write_to_slice(slot);
    }

    if degenerate > 0 {
        warn!(degenerate, "zero-length vertex normals replaced with +Z");
    }
    debug!(normals = acc.len(), "normals computed");
    out
}
