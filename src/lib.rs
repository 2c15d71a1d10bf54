use js_sys::{Float32Array, Object, Reflect, Uint32Array};
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

// ============================================================================
// TERRAIN ENGINE - Diamond-square heightfield meshes for WebGL flyovers
// ============================================================================
//
// The renderer owns all GPU state. This crate only produces buffers:
//   positions  f32 x3   (x, y fixed by the grid, z = height)
//   normals    f32 x3   (unit, smoothed across shared vertices)
//   triangles  u32 x3   (gl.TRIANGLES, needs OES_element_index_uint on WebGL1)
//   edges      u32 x2   (gl.LINES wireframe)

pub mod config;
pub mod error;
pub mod mesh;

pub use config::TerrainConfig;
pub use error::TerrainError;
pub use mesh::{Grid, Terrain};

#[wasm_bindgen]
pub struct TerrainWorld {
    terrain: Terrain,
    rng: StdRng,
}

#[wasm_bindgen]
impl TerrainWorld {
    /// `new TerrainWorld(div, minX, maxX, minY, maxY)` with demo defaults
    /// for everything else and an entropy-seeded RNG.
    #[wasm_bindgen(constructor)]
    pub fn new(div: u32, min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Result<TerrainWorld, JsError> {
        Ok(Self::build(TerrainConfig::new(div, min_x, max_x, min_y, max_y))?)
    }

    /// Build from a JSON `TerrainConfig`; missing fields take defaults.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<TerrainWorld, JsError> {
        Ok(Self::build(TerrainConfig::from_json(json)?)?)
    }

    /// New random heights over the same grid. Index buffers stay valid;
    /// position/normal pointers must be re-read.
    pub fn regenerate(&mut self) {
        self.terrain.regenerate(&mut self.rng);
    }

    /// Copy all four buffers out as `{ positions, normals, triangles, edges }`.
    pub fn buffers(&self) -> JsValue {
        let obj = Object::new();
        set_js(&obj, "positions", Float32Array::from(self.terrain.positions()).into());
        set_js(&obj, "normals", Float32Array::from(self.terrain.normals()).into());
        set_js(&obj, "triangles", Uint32Array::from(self.terrain.triangles()).into());
        set_js(&obj, "edges", Uint32Array::from(self.terrain.edges()).into());
        obj.into()
    }

    // Zero-copy views into WASM memory
    pub fn positions_ptr(&self) -> *const f32 { self.terrain.positions().as_ptr() }
    pub fn positions_len(&self) -> usize { self.terrain.positions().len() }
    pub fn normals_ptr(&self) -> *const f32 { self.terrain.normals().as_ptr() }
    pub fn normals_len(&self) -> usize { self.terrain.normals().len() }
    pub fn triangles_ptr(&self) -> *const u32 { self.terrain.triangles().as_ptr() }
    pub fn triangles_len(&self) -> usize { self.terrain.triangles().len() }
    pub fn edges_ptr(&self) -> *const u32 { self.terrain.edges().as_ptr() }
    pub fn edges_len(&self) -> usize { self.terrain.edges().len() }

    pub fn div(&self) -> u32 { self.terrain.grid().div() }
    pub fn vertex_count(&self) -> usize { self.terrain.vertex_count() }
    pub fn triangle_count(&self) -> usize { self.terrain.triangle_count() }
    pub fn min_height(&self) -> f32 { self.terrain.height_range().0 }
    pub fn max_height(&self) -> f32 { self.terrain.height_range().1 }
}

impl TerrainWorld {
    fn build(config: TerrainConfig) -> error::Result<Self> {
        #[cfg(target_arch = "wasm32")]
        install_panic_hook();

        let mut rng = config.rng();
        let terrain = Terrain::generate(&config, &mut rng)?;
        Ok(Self { terrain, rng })
    }

    pub fn terrain(&self) -> &Terrain { &self.terrain }
}

fn set_js(obj: &Object, key: &str, value: JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), &value);
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = JsValue::from_str(&format!("{info}"));
            let console = Reflect::get(&js_sys::global(), &"console".into());
            if let Ok(console) = console {
                if let Ok(error) = Reflect::get(&console, &"error".into()) {
                    if let Ok(f) = error.dyn_into::<js_sys::Function>() {
                        let _ = f.call1(&console, &msg);
                    }
                }
            }
        }));
    });
}
