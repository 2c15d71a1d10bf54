// edges.rs - Line-list indices for wireframe rendering
//
// Every triangle contributes its three edges in winding order. Edges shared
// by neighbouring triangles are emitted twice.

pub fn from_triangles(triangles: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(2 * triangles.len());
    for tri in triangles.chunks_exact(3) {
        out.extend_from_slice(&[tri[0], tri[1], tri[1], tri[2], tri[2], tri[0]]);
    }
    out
}
