// grid.rs - Flat vertex lattice and triangle indices
//
// Vertices are row-major: row i runs along Y, column j along X.
// Vertex (i, j) has id i*(div+1)+j and its xyz lives at 3*id.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    div: u32,
    min: Vec2,
    step: Vec2,
}

impl Grid {
    pub fn new(div: u32, min: Vec2, max: Vec2) -> Self {
        Self { div, min, step: (max - min) / div as f32 }
    }

    pub fn div(&self) -> u32 { self.div }
    /// Vertices per row and per column
    pub fn side(&self) -> u32 { self.div + 1 }
    pub fn vertex_count(&self) -> usize { (self.side() * self.side()) as usize }
    pub fn triangle_count(&self) -> usize { 2 * (self.div * self.div) as usize }

    /// Whether (row, col) lies on the lattice
    #[inline]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row <= self.div && col <= self.div
    }

    #[inline]
    pub fn vertex_id(&self, row: u32, col: u32) -> Option<u32> {
        self.contains(row, col).then(|| self.id(row, col))
    }

    /// Offset of the vertex's x component in a stride-3 buffer
    #[inline]
    pub fn offset(&self, row: u32, col: u32) -> Option<usize> {
        self.vertex_id(row, col).map(|id| 3 * id as usize)
    }

    /// Offset of the vertex's z (height) component
    #[inline]
    pub fn height_offset(&self, row: u32, col: u32) -> Option<usize> {
        self.offset(row, col).map(|i| i + 2)
    }

    /// Unchecked id for loops already bounded by `div`
    #[inline]
    pub(crate) fn id(&self, row: u32, col: u32) -> u32 {
        row * self.side() + col
    }

    /// World-space XY of a vertex. Fixed for the lifetime of the grid.
    #[inline]
    pub fn world_xy(&self, row: u32, col: u32) -> Vec2 {
        Vec2::new(
            self.min.x + self.step.x * col as f32,
            self.min.y + self.step.y * row as f32,
        )
    }

    /// Flat xyz buffer with every height at 0
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(3 * self.vertex_count());
        for row in 0..self.side() {
            for col in 0..self.side() {
                let xy = self.world_xy(row, col);
                out.extend_from_slice(&[xy.x, xy.y, 0.0]);
            }
        }
        out
    }

    /// Two triangles per cell, split along the (i, j+1)-(i+1, j) diagonal.
    /// Both wind counter-clockwise seen from +Z.
    pub fn triangles(&self) -> Vec<u32> {
        let side = self.side();
        let mut out = Vec::with_capacity(3 * self.triangle_count());
        for row in 0..self.div {
            for col in 0..self.div {
                let vid = self.id(row, col);
                out.extend_from_slice(&[vid, vid + 1, vid + side]);
                out.extend_from_slice(&[vid + 1, vid + 1 + side, vid + side]);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_grid(div: u32) -> Grid {
        Grid::new(div, Vec2::ZERO, Vec2::splat(div as f32))
    }

    #[test]
    fn single_cell_triangles() {
        assert_eq!(unit_grid(1).triangles(), vec![0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn offsets_are_row_major() {
        let grid = unit_grid(4);
        assert_eq!(grid.vertex_id(0, 0), Some(0));
        assert_eq!(grid.vertex_id(0, 4), Some(4));
        assert_eq!(grid.vertex_id(1, 0), Some(5));
        assert_eq!(grid.offset(2, 3), Some(3 * 13));
        assert_eq!(grid.height_offset(4, 4), Some(3 * 24 + 2));
    }

    #[test]
    fn off_lattice_has_no_offset() {
        let grid = unit_grid(4);
        // (0, 5) would alias (1, 0) without the bounds check
        assert_eq!(grid.vertex_id(0, 5), None);
        assert_eq!(grid.vertex_id(5, 0), None);
        assert_eq!(grid.offset(5, 5), None);
        assert_eq!(grid.height_offset(u32::MAX, 0), None);
        assert!(grid.contains(4, 4));
        assert!(!grid.contains(4, 5));
    }

    #[test]
    fn positions_interpolate_extent() {
        let grid = Grid::new(2, Vec2::new(-1.0, 10.0), Vec2::new(1.0, 20.0));
        let pos = grid.positions();
        assert_eq!(pos.len(), 27);
        assert_eq!(&pos[0..3], &[-1.0, 10.0, 0.0]);
        assert_eq!(&pos[3..6], &[0.0, 10.0, 0.0]);
        assert_eq!(&pos[9..12], &[-1.0, 15.0, 0.0]);
        assert_eq!(&pos[24..27], &[1.0, 20.0, 0.0]);
    }

    #[test]
    fn counts() {
        let grid = unit_grid(7);
        assert_eq!(grid.vertex_count(), 64);
        assert_eq!(grid.triangle_count(), 98);
        assert_eq!(grid.triangles().len(), 6 * 49);
        assert!(grid.triangles().iter().all(|&i| i < 64));
    }
}
