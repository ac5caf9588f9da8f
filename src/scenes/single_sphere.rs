use glam::{Vec3, Vec4};

use super::common::{eye_level_camera, point_light, primitive, DEFAULT_HEIGHTMAP};
use crate::config::{GroundConfig, SceneConfig};
use crate::traits::PrimitiveKind;
use crate::types::{MaterialParams, Transform};

/// Blue sphere over a flat white ground, cyan and red lights
pub fn create_single_sphere_scene() -> SceneConfig {
    SceneConfig {
        name: "single sphere".to_string(),
        background: Vec4::new(0.1, 0.1, 0.1, 1.0),
        ambient: Vec3::splat(0.2),
        camera: eye_level_camera(10.0),
        lights: vec![
            point_light("light0", Vec3::new(1.0, 1.0, 5.0), Vec3::new(0.1, 1.0, 1.0)),
            point_light("light1", Vec3::new(0.0, 3.0, 0.0), Vec3::new(1.0, 0.1, 0.1)),
        ],
        ground: GroundConfig::new(DEFAULT_HEIGHTMAP, MaterialParams::matte(Vec3::ONE)),
        models: vec![primitive(
            "sphere",
            PrimitiveKind::Sphere,
            10,
            Transform::at(Vec3::new(1.0, 0.5, 3.0)),
            MaterialParams::glossy(Vec3::new(0.10, 0.35, 0.88)),
        )],
        color_drive: false,
    }
}
