// obj.rs - Wavefront OBJ writer
//
// Positions as `v`, normals as `vn`, faces as `f a//a b//b c//c`.
// OBJ indices are 1-based.

use std::io::{self, Write};

use terrain_engine::Terrain;

pub fn write_obj<W: Write>(terrain: &Terrain, mut out: W) -> io::Result<()> {
    let config = terrain.config();
    writeln!(
        out,
        "# diamond-square terrain: div {} over [{}, {}] x [{}, {}]",
        config.div, config.min_x, config.max_x, config.min_y, config.max_y
    )?;

    for v in terrain.positions().chunks_exact(3) {
        writeln!(out, "v {} {} {}", v[0], v[1], v[2])?;
    }
    for n in terrain.normals().chunks_exact(3) {
        writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for f in terrain.triangles().chunks_exact(3) {
        let (a, b, c) = (f[0] + 1, f[1] + 1, f[2] + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    out.flush()
}
