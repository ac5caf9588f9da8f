use glam::{Vec3, Vec4};

use super::common::{eye_level_camera, primitive, ROLLING_HEIGHTMAP, WOOD_TEXTURE};
use crate::config::{GroundConfig, SceneConfig};
use crate::traits::PrimitiveKind;
use crate::types::{LightState, MaterialParams, Transform};

/// Wood-textured box and a distant yellow sphere on rolling green hills
pub fn create_textured_scene() -> SceneConfig {
    SceneConfig {
        name: "textured box".to_string(),
        background: Vec4::new(0.0, 0.5, 1.0, 0.15),
        ambient: Vec3::splat(0.2),
        camera: eye_level_camera(10.0),
        lights: vec![
            LightState::new("light0", Vec3::new(1.0, 1.0, 5.0), Vec3::ONE, Vec3::ONE),
            LightState::new("light1", Vec3::new(0.0, 3.0, 0.0), Vec3::X, Vec3::ONE),
        ],
        ground: GroundConfig::new(
            ROLLING_HEIGHTMAP,
            MaterialParams::matte(Vec3::new(0.10, 0.65, 0.15)),
        ),
        models: vec![
            primitive(
                "box",
                PrimitiveKind::Box,
                20,
                Transform::at(Vec3::new(1.0, 2.0, 3.0)),
                MaterialParams::new(Vec3::new(0.99, 0.01, 0.01), Vec3::splat(0.1), 20.0)
                    .with_texture(WOOD_TEXTURE),
            ),
            primitive(
                "sphere",
                PrimitiveKind::Sphere,
                10,
                Transform::at(Vec3::new(8.0, 5.0, -8.0)),
                MaterialParams::glossy(Vec3::new(1.0, 1.0, 0.0)),
            ),
        ],
        color_drive: false,
    }
}
