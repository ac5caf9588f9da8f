pub mod animation;
pub mod camera;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod host;
pub mod materials;
pub mod math;
pub mod scene;
pub mod scenes;
pub mod tessellation;
pub mod traits;
pub mod types;
pub mod uniforms;

pub use catalog::SceneCatalog;
pub use error::{Result, SceneError};
pub use scene::SceneRecord;
pub use scenes::builtin_scenes;
pub use tessellation::{
    tessellate_concentric_shells, tessellate_lat_long, tessellate_torus, MeshTopology,
};
