use std::path::Path;

use anyhow::{Context, Result};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::camera::CameraState;
use crate::traits::PrimitiveKind;
use crate::types::{LightState, MaterialParams, Transform};

/// Everything needed to assemble one scene record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    #[serde(default = "default_background")]
    pub background: Vec4,
    #[serde(default = "default_ambient")]
    pub ambient: Vec3,
    pub camera: CameraState,
    pub lights: Vec<LightState>,
    pub ground: GroundConfig,
    #[serde(default)]
    pub models: Vec<ModelConfig>,
    /// Drive every light's diffuse color from elapsed time
    #[serde(default)]
    pub color_drive: bool,
}

fn default_background() -> Vec4 {
    Vec4::new(0.1, 0.1, 0.1, 1.0)
}

fn default_ambient() -> Vec3 {
    Vec3::splat(0.2)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    #[serde(default = "default_subdivisions")]
    pub subdivisions: [u32; 2],
    #[serde(default = "default_ground_scaling")]
    pub scaling: Vec3,
    pub heightmap: String,
    #[serde(default = "default_height_scale")]
    pub height_scale: f32,
    pub material: MaterialParams,
}

fn default_subdivisions() -> [u32; 2] {
    [50, 50]
}

fn default_ground_scaling() -> Vec3 {
    Vec3::new(20.0, 1.0, 20.0)
}

fn default_height_scale() -> f32 {
    1.0
}

impl GroundConfig {
    pub fn new(heightmap: impl Into<String>, material: MaterialParams) -> Self {
        Self {
            subdivisions: default_subdivisions(),
            scaling: default_ground_scaling(),
            heightmap: heightmap.into(),
            height_scale: default_height_scale(),
            material,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    #[serde(default)]
    pub transform: Transform,
    pub material: MaterialParams,
    pub source: ModelSource,
}

impl ModelConfig {
    pub fn new(name: impl Into<String>, source: ModelSource, transform: Transform, material: MaterialParams) -> Self {
        Self {
            name: name.into(),
            transform,
            material,
            source,
        }
    }
}

/// Where a model's geometry comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelSource {
    /// Built by the host's primitive builder
    Primitive { kind: PrimitiveKind, segments: u32 },
    LatLong {
        radius: f32,
        lat_segments: u32,
        lon_segments: u32,
    },
    Torus {
        ring_radius: f32,
        tube_radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Shells {
        inner_radius: f32,
        outer_radius: f32,
        thickness: f32,
        segments: u32,
    },
}

pub fn parse_scenes(json: &str) -> Result<Vec<SceneConfig>> {
    serde_json::from_str(json).context("Failed to parse scene configuration")
}

/// Loads a JSON array of scene configurations
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<Vec<SceneConfig>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {:?}", path))?;
    parse_scenes(&json).with_context(|| format!("Invalid scene file: {:?}", path))
}
