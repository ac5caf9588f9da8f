use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::CameraUniform;

/// Default vertical field of view used by the demonstration scenes (35 degrees)
pub const DEFAULT_FOV: f32 = 35.0 * std::f32::consts::PI / 180.0;

/// Fixed camera of one scene; hosts may attach their own orbit controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
    /// Vertical field of view in radians
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

fn default_fov() -> f32 {
    DEFAULT_FOV
}

fn default_near() -> f32 {
    0.1
}

fn default_far() -> f32 {
    100.0
}

impl CameraState {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: default_up(),
            fov: default_fov(),
            near: default_near(),
            far: default_far(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Right-handed view matrix, matching the scenes' coordinate system
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Pack the camera for a viewport of the given width / height ratio
    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        let view_proj = self.projection_matrix(aspect) * self.view_matrix();
        let forward = self.forward();
        let right = self.right();

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            position: self.position.to_array(),
            _pad1: 0.0,
            forward: forward.to_array(),
            _pad2: 0.0,
            right: right.to_array(),
            _pad3: 0.0,
            up: right.cross(forward).to_array(),
            aspect,
        }
    }
}
