// mesh/ - Procedural terrain mesh
//
// Pipeline: flat grid -> diamond-square heights -> smoothed normals,
// with triangle and edge indices derived once from the grid topology.
// All buffers are flat and stride-packed for direct GPU upload.

mod edges;
mod grid;
mod heights;
mod normals;

pub use grid::Grid;

use glam::Vec3;
use rand::Rng;
use tracing::{debug, info};

use crate::config::TerrainConfig;
use crate::error::Result;

/// A generated heightfield mesh.
///
/// Positions and normals are parallel stride-3 arrays of `(div+1)^2`
/// vertices. Triangles are stride-3 indices, edges stride-2. Only the z of
/// each position ever changes, and only through [`Terrain::regenerate`].
#[derive(Debug, Clone)]
pub struct Terrain {
    config: TerrainConfig,
    grid: Grid,
    positions: Vec<f32>,
    normals: Vec<f32>,
    triangles: Vec<u32>,
    edges: Vec<u32>,
}

impl Terrain {
    pub fn generate<R: Rng + ?Sized>(config: &TerrainConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let grid = Grid::new(config.div, config.min(), config.max());
        let triangles = grid.triangles();
        debug!(triangles = triangles.len() / 3, "triangles generated");
        let edges = edges::from_triangles(&triangles);
        debug!(edges = edges.len() / 2, "edges generated");

        let (positions, normals) = surface(&grid, &triangles, config, rng);

        let terrain = Self { config: config.clone(), grid, positions, normals, triangles, edges };
        let (lo, hi) = terrain.height_range();
        info!(div = config.div, vertices = grid.vertex_count(), lo, hi, "terrain generated");
        Ok(terrain)
    }

    /// Generate with the RNG described by `config.seed`.
    pub fn from_config(config: &TerrainConfig) -> Result<Self> {
        Self::generate(config, &mut config.rng())
    }

    /// Draw a new height field over the same grid.
    ///
    /// Positions and normals are rebuilt off to the side and swapped in
    /// together; indices and XY are untouched.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (positions, normals) = surface(&self.grid, &self.triangles, &self.config, rng);
        self.positions = positions;
        self.normals = normals;
        let (lo, hi) = self.height_range();
        info!(lo, hi, "terrain regenerated");
    }

    pub fn config(&self) -> &TerrainConfig { &self.config }
    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn positions(&self) -> &[f32] { &self.positions }
    pub fn normals(&self) -> &[f32] { &self.normals }
    pub fn triangles(&self) -> &[u32] { &self.triangles }
    pub fn edges(&self) -> &[u32] { &self.edges }

    pub fn vertex_count(&self) -> usize { self.positions.len() / 3 }
    pub fn triangle_count(&self) -> usize { self.triangles.len() / 3 }

    /// Position of vertex (row, col), or `None` off the lattice
    pub fn vertex(&self, row: u32, col: u32) -> Option<Vec3> {
        let i = self.grid.offset(row, col)?;
        Some(Vec3::from_slice(&self.positions[i..i + 3]))
    }

    pub fn normal(&self, row: u32, col: u32) -> Option<Vec3> {
        let i = self.grid.offset(row, col)?;
        Some(Vec3::from_slice(&self.normals[i..i + 3]))
    }

    pub fn height(&self, row: u32, col: u32) -> Option<f32> {
        self.grid.height_offset(row, col).map(|i| self.positions[i])
    }

    /// Lowest and highest z over all vertices
    pub fn height_range(&self) -> (f32, f32) {
        self.positions
            .chunks_exact(3)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v[2]), hi.max(v[2])))
    }
}

fn surface<R: Rng + ?Sized>(
    grid: &Grid,
    triangles: &[u32],
    config: &TerrainConfig,
    rng: &mut R,
) -> (Vec<f32>, Vec<f32>) {
    let mut positions = grid.positions();
    heights::diamond_square(grid, &mut positions, config, rng);
    let normals = normals::smooth(&positions, triangles);
    (positions, normals)
}
