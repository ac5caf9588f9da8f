use glam::{Vec3, Vec4};

use super::common::{eye_level_camera, point_light, DEFAULT_HEIGHTMAP};
use crate::config::{GroundConfig, ModelConfig, ModelSource, SceneConfig};
use crate::math::hsv_to_rgb;
use crate::types::{MaterialParams, Transform};

const LIGHT_COUNT: usize = 4;

/// Ringed planet, moon and torus from the surface tessellator, with lights
/// cycling through colors over time
pub fn create_planets_scene() -> SceneConfig {
    let lights = (0..LIGHT_COUNT)
        .map(|i| {
            let angle = i as f32 / LIGHT_COUNT as f32 * std::f32::consts::TAU;
            let color = Vec3::from_array(hsv_to_rgb(i as f32 / LIGHT_COUNT as f32, 0.8, 1.0));
            point_light(
                &format!("light{i}"),
                Vec3::new(angle.cos() * 4.0, 3.0, 2.0 + angle.sin() * 4.0),
                color,
            )
        })
        .collect();

    let models = vec![
        ModelConfig::new(
            "planet",
            ModelSource::Shells {
                inner_radius: 1.0,
                outer_radius: 1.6,
                thickness: 0.05,
                segments: 32,
            },
            Transform::at(Vec3::new(0.0, 2.5, 2.0)),
            MaterialParams::glossy(Vec3::new(0.85, 0.7, 0.45)),
        ),
        ModelConfig::new(
            "moon",
            ModelSource::LatLong {
                radius: 0.4,
                lat_segments: 16,
                lon_segments: 32,
            },
            Transform::at(Vec3::new(-3.0, 3.5, 0.0)),
            MaterialParams::new(Vec3::splat(0.75), Vec3::splat(0.3), 8.0),
        ),
        ModelConfig::new(
            "torus",
            ModelSource::Torus {
                ring_radius: 1.5,
                tube_radius: 0.3,
                radial_segments: 50,
                tubular_segments: 50,
            },
            Transform::at(Vec3::new(3.0, 2.0, 0.0)),
            MaterialParams::glossy(Vec3::new(0.9, 0.2, 0.5)),
        ),
    ];

    SceneConfig {
        name: "planets".to_string(),
        background: Vec4::new(0.02, 0.02, 0.08, 1.0),
        ambient: Vec3::splat(0.1),
        camera: eye_level_camera(14.0),
        lights,
        ground: GroundConfig::new(DEFAULT_HEIGHTMAP, MaterialParams::matte(Vec3::splat(0.4))),
        models,
        color_drive: true,
    }
}
