use glam::Vec3;

use crate::camera::CameraState;
use crate::config::{ModelConfig, ModelSource};
use crate::traits::PrimitiveKind;
use crate::types::{LightState, MaterialParams, Transform};

pub const DEFAULT_HEIGHTMAP: &str = "/heightmaps/default.png";
pub const ROLLING_HEIGHTMAP: &str = "/heightmaps/newhieghtmap.png";
pub const WOOD_TEXTURE: &str = "/textures/wood.jpg";

/// Eye height camera looking down -Z at the scene center
pub fn eye_level_camera(distance: f32) -> CameraState {
    CameraState::new(Vec3::new(0.0, 1.8, distance), Vec3::new(0.0, 1.8, 0.0))
}

/// Light whose specular matches its diffuse color
pub fn point_light(id: &str, position: Vec3, color: Vec3) -> LightState {
    LightState::new(id, position, color, color)
}

pub fn primitive(
    name: &str,
    kind: PrimitiveKind,
    segments: u32,
    transform: Transform,
    material: MaterialParams,
) -> ModelConfig {
    ModelConfig::new(name, ModelSource::Primitive { kind, segments }, transform, material)
}
