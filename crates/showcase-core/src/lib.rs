pub mod constants;
pub mod easing;
pub mod mesh;
pub mod model;
pub mod orbit;
pub mod page;
pub mod sequencer;
pub mod state;
pub mod substitute;

pub use constants::*;
pub use mesh::{Mesh, Vertex};
pub use model::{decode_glb, loaded_model_transform, ModelError};
pub use orbit::OrbitCamera;
pub use sequencer::*;
pub use state::*;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
