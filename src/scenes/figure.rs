use glam::{Vec3, Vec4};

use super::common::{eye_level_camera, point_light, primitive, ROLLING_HEIGHTMAP};
use crate::config::{GroundConfig, ModelConfig, SceneConfig};
use crate::traits::PrimitiveKind;
use crate::types::{MaterialParams, Transform};

const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);
const MAGENTA: Vec3 = Vec3::new(1.0, 0.0, 1.0);

fn part(name: &str, kind: PrimitiveKind, position: Vec3, scaling: Vec3, color: Vec3) -> ModelConfig {
    primitive(
        name,
        kind,
        20,
        Transform::at(position).scaled(scaling),
        MaterialParams::matte(color),
    )
}

/// Figure with a hat built from primitives, lit from four corners
pub fn create_figure_scene() -> SceneConfig {
    let head = primitive(
        "head",
        PrimitiveKind::Sphere,
        20,
        Transform::at(Vec3::new(0.0, 1.0, 3.0)).scaled(Vec3::splat(3.0)),
        MaterialParams::glossy(YELLOW),
    );

    SceneConfig {
        name: "figure".to_string(),
        background: Vec4::new(0.0, 0.5, 1.0, 0.15),
        ambient: Vec3::splat(0.2),
        camera: eye_level_camera(12.0),
        lights: vec![
            point_light("light0", Vec3::new(2.0, 1.0, 5.0), Vec3::X),
            point_light("light1", Vec3::new(-2.0, 1.0, 5.0), Vec3::Z),
            point_light("light2", Vec3::new(-2.0, 1.0, 0.0), Vec3::Y),
            point_light("light3", Vec3::new(2.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 1.0)),
        ],
        ground: GroundConfig::new(ROLLING_HEIGHTMAP, MaterialParams::matte(Vec3::Y)),
        models: vec![
            head,
            part("left_eye", PrimitiveKind::Sphere, Vec3::new(-0.5, 1.75, 4.0), Vec3::splat(0.5), Vec3::ZERO),
            part("right_eye", PrimitiveKind::Sphere, Vec3::new(0.5, 1.75, 4.0), Vec3::splat(0.5), Vec3::ZERO),
            part("hat_brim", PrimitiveKind::Cylinder, Vec3::new(0.0, 2.2, 3.0), Vec3::new(3.0, 0.1, 3.0), MAGENTA),
            part("hat_top", PrimitiveKind::Cylinder, Vec3::new(0.0, 3.0, 3.0), Vec3::new(1.8, 1.0, 1.8), MAGENTA),
            part("arms", PrimitiveKind::Box, Vec3::new(0.0, 1.2, 3.0), Vec3::new(5.0, 0.5, 0.5), YELLOW),
            part("left_leg", PrimitiveKind::Box, Vec3::new(-0.5, 0.5, 3.0), Vec3::new(0.5, 4.0, 0.5), YELLOW),
            part("right_leg", PrimitiveKind::Box, Vec3::new(0.5, 0.5, 3.0), Vec3::new(0.5, 4.0, 0.5), YELLOW),
            part("mouth", PrimitiveKind::Box, Vec3::new(0.0, 0.5, 4.4), Vec3::new(2.0, 0.2, 0.2), Vec3::X),
        ],
        color_drive: false,
    }
}
