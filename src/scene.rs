use glam::{Vec3, Vec4};

use crate::animation::{LightAnimator, VelocityState};
use crate::camera::CameraState;
use crate::error::{Result, SceneError};
use crate::frame::FrameInfo;
use crate::materials::MaterialLibrary;
use crate::traits::ShadingProgram;
use crate::types::{GroundState, LightState, MaterialBinding, ModelState};
use crate::uniforms::{self, ShadingUniforms};

/// One fully assembled demonstration scene
///
/// The light list is fixed at construction; only positions and colors change
/// afterwards.
#[derive(Debug)]
pub struct SceneRecord<P> {
    pub index: usize,
    pub name: String,
    pub background: Vec4,
    pub ambient: Vec3,
    pub camera: CameraState,
    pub ground: GroundState,
    pub models: Vec<ModelState>,
    lights: Vec<LightState>,
    active_light: usize,
    shading_algorithm: String,
    materials: MaterialLibrary<P>,
    animator: LightAnimator,
}

/// Parts of a record gathered during catalog construction
pub(crate) struct SceneParts<P> {
    pub index: usize,
    pub name: String,
    pub background: Vec4,
    pub ambient: Vec3,
    pub camera: CameraState,
    pub ground: GroundState,
    pub models: Vec<ModelState>,
    pub lights: Vec<LightState>,
    pub shading_algorithm: String,
    pub materials: MaterialLibrary<P>,
    pub animator: LightAnimator,
}

impl<P> SceneRecord<P> {
    pub(crate) fn from_parts(parts: SceneParts<P>) -> Self {
        Self {
            index: parts.index,
            name: parts.name,
            background: parts.background,
            ambient: parts.ambient,
            camera: parts.camera,
            ground: parts.ground,
            models: parts.models,
            lights: parts.lights,
            active_light: 0,
            shading_algorithm: parts.shading_algorithm,
            materials: parts.materials,
            animator: parts.animator,
        }
    }

    pub fn lights(&self) -> &[LightState] {
        &self.lights
    }

    /// Slice access so callers can recolor or move lights but never resize
    pub fn lights_mut(&mut self) -> &mut [LightState] {
        &mut self.lights
    }

    pub fn active_light(&self) -> usize {
        self.active_light
    }

    pub fn set_active_light(&mut self, index: usize) -> Result<()> {
        if index >= self.lights.len() {
            return Err(SceneError::OutOfRangeLightIndex {
                scene: self.index,
                index,
                count: self.lights.len(),
            });
        }
        self.active_light = index;
        Ok(())
    }

    pub fn shading_algorithm(&self) -> &str {
        &self.shading_algorithm
    }

    pub fn height_scale(&self) -> f32 {
        self.ground.height_scale
    }

    pub fn materials(&self) -> &MaterialLibrary<P> {
        &self.materials
    }

    pub fn animator(&self) -> &LightAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut LightAnimator {
        &mut self.animator
    }

    /// Swap the ground and every model over to already-resolved bindings
    pub(crate) fn rebind(&mut self, algorithm: &str, ground: MaterialBinding, illum: MaterialBinding) {
        self.ground.binding = ground;
        for model in &mut self.models {
            model.binding = illum.clone();
        }
        self.shading_algorithm = algorithm.to_string();
    }

    /// Distinct program slots currently bound by the ground or any model
    pub fn bound_slots(&self) -> Vec<usize> {
        let mut slots = vec![self.ground.binding.slot()];
        for model in &self.models {
            if !slots.contains(&model.binding.slot()) {
                slots.push(model.binding.slot());
            }
        }
        slots
    }

    /// Integrate this frame's light motion; `steer` is `None` for scenes
    /// that are not under manual control
    pub fn animate(&mut self, velocity: Option<&VelocityState>, frame: &FrameInfo) {
        let steer = velocity.map(|v| (self.active_light, v));
        self.animator.animate(&mut self.lights, steer, frame);
    }
}

impl<P: ShadingProgram> SceneRecord<P> {
    /// Push this frame's lighting state into every bound program
    pub fn publish_uniforms(&mut self) -> ShadingUniforms {
        let snapshot = ShadingUniforms::snapshot(self);
        let slots = self.bound_slots();
        uniforms::publish(&snapshot, self.materials.programs_mut(&slots));
        snapshot
    }

    /// The per-scene before-render hook: animate, then publish
    pub fn before_render(&mut self, velocity: Option<&VelocityState>, frame: &FrameInfo) -> ShadingUniforms {
        self.animate(velocity, frame);
        self.publish_uniforms()
    }
}
