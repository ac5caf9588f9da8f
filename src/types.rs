use std::sync::Arc;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::tessellation::MeshTopology;

/// Upper bound on lights packed into a [`SceneUniformBlock`]
pub const MAX_LIGHTS: usize = 8;

/// Texture reference understood by the host; a 1x1 white texture by default
pub const WHITE_TEXTURE: &str = "builtin:white";

/// Point light of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    pub id: String,
    pub position: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl LightState {
    pub fn new(id: impl Into<String>, position: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            diffuse,
            specular,
        }
    }
}

/// Surface parameters read by the shading programs; never baked into geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    pub base_color: Vec3,
    #[serde(default = "default_texture")]
    pub texture: String,
    pub specular: Vec3,
    pub shininess: f32,
    #[serde(default = "default_uv_scale")]
    pub uv_scale: Vec2,
}

fn default_texture() -> String {
    WHITE_TEXTURE.to_string()
}

fn default_uv_scale() -> Vec2 {
    Vec2::ONE
}

impl MaterialParams {
    pub fn new(base_color: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            base_color,
            texture: default_texture(),
            specular,
            shininess,
            uv_scale: default_uv_scale(),
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = texture.into();
        self
    }

    /// Flat matte surface used for grounds and painted parts
    pub fn matte(base_color: Vec3) -> Self {
        Self::new(base_color, Vec3::ZERO, 100.0)
    }

    /// Glossy surface with a bright highlight
    pub fn glossy(base_color: Vec3) -> Self {
        Self::new(base_color, Vec3::splat(0.8), 16.0)
    }
}

/// Position plus non-uniform scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    #[serde(default = "default_scaling")]
    pub scaling: Vec3,
}

fn default_scaling() -> Vec3 {
    Vec3::ONE
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scaling: Vec3::ONE,
        }
    }

    pub fn scaled(mut self, scaling: Vec3) -> Self {
        self.scaling = scaling;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Which program of a scene's material library a mesh currently draws with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialBinding {
    pub key: String,
    pub(crate) slot: usize,
}

impl MaterialBinding {
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Shaded model placed in a scene
#[derive(Debug, Clone)]
pub struct ModelState {
    pub id: String,
    pub transform: Transform,
    pub material: MaterialParams,
    pub mesh: Arc<MeshTopology>,
    pub binding: MaterialBinding,
}

/// Height-mapped ground plane of a scene
#[derive(Debug, Clone)]
pub struct GroundState {
    pub mesh: Arc<MeshTopology>,
    pub scaling: Vec3,
    pub material: MaterialParams,
    pub height_scale: f32,
    /// Opaque path handed through to the host's texture loader
    pub heightmap: String,
    pub binding: MaterialBinding,
}

/// Camera uniforms packed for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    pub aspect: f32,
}

/// Lighting uniforms packed for GPU upload (std140-compatible padding)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniformBlock {
    pub camera_position: [f32; 3],
    pub num_lights: i32,
    pub ambient: [f32; 3],
    pub _pad0: f32,
    pub light_positions: [[f32; 4]; MAX_LIGHTS],
    pub light_colors: [[f32; 4]; MAX_LIGHTS],
}
