// heightmap.rs - Grayscale heightmap export
//
// One pixel per vertex. Heights map linearly from the terrain's own
// range onto 0..=255. Image rows run top-down, grid rows along +Y, so
// grid row 0 is the bottom image row.

use std::path::Path;

use image::{GrayImage, ImageResult, Luma};
use terrain_engine::Terrain;

pub fn to_image(terrain: &Terrain) -> GrayImage {
    let side = terrain.grid().side();
    let (lo, hi) = terrain.height_range();
    let span = (hi - lo).max(f32::EPSILON);

    GrayImage::from_fn(side, side, |x, y| {
        let z = terrain.height(side - 1 - y, x).unwrap_or(lo);
        Luma([((z - lo) / span * 255.0).round().clamp(0.0, 255.0) as u8])
    })
}

pub fn write_png(terrain: &Terrain, path: &Path) -> ImageResult<()> {
    to_image(terrain).save(path)
}
