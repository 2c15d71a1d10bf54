// config.rs - Terrain generation parameters
//
// Defaults match the flight demo: 200 divisions over [-5, 5] x [-5, 5],
// corners in [0, 0.5), roughness 0.5 decaying by 0.6 per level.

use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};

const DEFAULT_DIV: u32 = 200;
const DEFAULT_EXTENT: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Subdivisions along each axis; the grid has (div+1)^2 vertices
    pub div: u32,
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,

    /// Corner heights are drawn from [0, corner_max)
    pub corner_max: f32,
    /// Jitter magnitude at the top recursion level
    pub roughness: f32,
    /// Roughness multiplier applied per recursion level
    pub roughness_decay: f32,
    /// jitter = roughness * random() * jitter_scale
    pub jitter_scale: f32,

    /// Fixed seed for reproducible terrain; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            div: DEFAULT_DIV,
            min_x: -DEFAULT_EXTENT,
            max_x: DEFAULT_EXTENT,
            min_y: -DEFAULT_EXTENT,
            max_y: DEFAULT_EXTENT,
            corner_max: 0.5,
            roughness: 0.5,
            roughness_decay: 0.6,
            jitter_scale: 0.8,
            seed: None,
        }
    }
}

impl TerrainConfig {
    pub fn new(div: u32, min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self { div, min_x, max_x, min_y, max_y, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn min(&self) -> Vec2 { Vec2::new(self.min_x, self.min_y) }
    pub fn max(&self) -> Vec2 { Vec2::new(self.max_x, self.max_y) }

    pub fn validate(&self) -> Result<()> {
        if self.div == 0 {
            return Err(TerrainError::InvalidDivisions(self.div));
        }

        // Position buffer length must stay addressable with u32 indices
        // (and with a 32-bit usize on wasm).
        let side = u64::from(self.div) + 1;
        if side * side * 3 > u64::from(u32::MAX) {
            return Err(TerrainError::TooManyVertices { div: self.div });
        }

        check_extent('x', self.min_x, self.max_x)?;
        check_extent('y', self.min_y, self.max_y)?;

        check_param("corner_max", self.corner_max)?;
        check_param("roughness", self.roughness)?;
        check_param("roughness_decay", self.roughness_decay)?;
        check_param("jitter_scale", self.jitter_scale)?;
        Ok(())
    }

    /// RNG for one generation run: seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

fn check_extent(axis: char, min: f32, max: f32) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(TerrainError::EmptyExtent { axis, min, max });
    }
    Ok(())
}

fn check_param(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TerrainError::InvalidParameter { name, value });
    }
    Ok(())
}
