// heights.rs - Diamond-square height displacement
//
// Only the z slot of each vertex is written. Recursion is pre-order: a
// square's diamond and square steps finish before its quadrants run, and
// the quadrants read the edge midpoints their parent just wrote.

use rand::Rng;
use tracing::debug;

use super::Grid;
use crate::config::TerrainConfig;

/// A square region in grid index space (columns along X, rows along Y)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Square {
    min_col: u32,
    max_col: u32,
    min_row: u32,
    max_row: u32,
}

impl Square {
    /// Midpoint, rounded up on odd spans
    #[inline]
    fn mid(&self) -> (u32, u32) {
        ((self.min_row + self.max_row).div_ceil(2), (self.min_col + self.max_col).div_ceil(2))
    }

    /// Quadrants in visiting order: upper-right, upper-left, lower-right, lower-left
    fn quadrants(&self) -> [Square; 4] {
        let (mid_row, mid_col) = self.mid();
        let s = *self;
        [
            Square { min_col: mid_col, max_col: s.max_col, min_row: mid_row, max_row: s.max_row },
            Square { min_col: s.min_col, max_col: mid_col, min_row: mid_row, max_row: s.max_row },
            Square { min_col: mid_col, max_col: s.max_col, min_row: s.min_row, max_row: mid_row },
            Square { min_col: s.min_col, max_col: mid_col, min_row: s.min_row, max_row: mid_row },
        ]
    }
}

/// Height view over a stride-3 position buffer
struct HeightField<'a> {
    grid: &'a Grid,
    positions: &'a mut [f32],
}

impl HeightField<'_> {
    #[inline]
    fn get(&self, row: u32, col: u32) -> f32 {
        self.positions[3 * self.grid.id(row, col) as usize + 2]
    }

    #[inline]
    fn set(&mut self, row: u32, col: u32, z: f32) {
        self.positions[3 * self.grid.id(row, col) as usize + 2] = z;
    }
}

/// Displace the heights of `positions` in place.
///
/// Corners are seeded first, in the order (0,0), (div,div), (0,div), (div,0),
/// so a fixed seed always yields the same field.
pub fn diamond_square<R: Rng + ?Sized>(
    grid: &Grid,
    positions: &mut [f32],
    config: &TerrainConfig,
    rng: &mut R,
) {
    let d = grid.div();
    let mut field = HeightField { grid, positions };

    for (row, col) in [(0, 0), (d, d), (0, d), (d, 0)] {
        field.set(row, col, rng.random::<f32>() * config.corner_max);
    }

    let root = Square { min_col: 0, max_col: d, min_row: 0, max_row: d };
    let mut visited = 0usize;
    subdivide(&mut field, root, d, config.roughness, config, rng, &mut visited);
    debug!(squares = visited, "diamond-square done");
}

fn subdivide<R: Rng + ?Sized>(
    field: &mut HeightField<'_>,
    sq: Square,
    recur: u32,
    roughness: f32,
    config: &TerrainConfig,
    rng: &mut R,
    visited: &mut usize,
) {
    if recur <= 1 { return; }
    *visited += 1;

    let (mid_row, mid_col) = sq.mid();

    // One draw per square, shared by the diamond and all four square updates.
    let jitter = roughness * rng.random::<f32>() * config.jitter_scale;

    // Corners are re-read after every write: on unit spans the midpoint
    // coincides with a corner.
    let center = 0.25
        * (field.get(sq.min_row, sq.min_col)
            + field.get(sq.min_row, sq.max_col)
            + field.get(sq.max_row, sq.min_col)
            + field.get(sq.max_row, sq.max_col))
        + jitter;
    field.set(mid_row, mid_col, center);

    // bottom
    let z = edge_mean(field, (mid_row, mid_col), (sq.min_row, sq.min_col), (sq.min_row, sq.max_col));
    field.set(sq.min_row, mid_col, z + jitter);
    // left
    let z = edge_mean(field, (mid_row, mid_col), (sq.min_row, sq.min_col), (sq.max_row, sq.min_col));
    field.set(mid_row, sq.min_col, z + jitter);
    // top
    let z = edge_mean(field, (mid_row, mid_col), (sq.max_row, sq.min_col), (sq.max_row, sq.max_col));
    field.set(sq.max_row, mid_col, z + jitter);
    // right
    let z = edge_mean(field, (mid_row, mid_col), (sq.min_row, sq.max_col), (sq.max_row, sq.max_col));
    field.set(mid_row, sq.max_col, z + jitter);

    let recur = recur.div_ceil(2);
    let roughness = roughness * config.roughness_decay;
    for quad in sq.quadrants() {
        subdivide(field, quad, recur, roughness, config, rng, visited);
    }
}

#[inline]
fn edge_mean(field: &HeightField<'_>, a: (u32, u32), b: (u32, u32), c: (u32, u32)) -> f32 {
    (field.get(a.0, a.1) + field.get(b.0, b.1) + field.get(c.0, c.1)) / 3.0
}
