// error.rs - Terrain construction failures
//
// Everything here is a caller contract violation caught before generation
// starts. Generation itself cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("grid needs at least one division, got {0}")]
    InvalidDivisions(u32),

    #[error("{div} divisions exceed the 32-bit buffer range")]
    TooManyVertices { div: u32 },

    #[error("empty {axis} extent: min {min} must be finite and below max {max}")]
    EmptyExtent { axis: char, min: f32, max: f32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("invalid terrain config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
