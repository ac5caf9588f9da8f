use glam::Vec3;

use crate::frame::{FrameInfo, REFERENCE_RATE};
use crate::math::oscillating_color;
use crate::traits::Key;
use crate::types::LightState;

/// Speed of a manually steered light, in units per second
pub const LIGHT_SPEED: f32 = 5.0;

/// Per-axis light velocity driven by discrete key events
///
/// Each axis remembers the key that last set it; only that key's release
/// returns the axis to idle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityState {
    velocity: [f32; 3],
    owner: [Option<Key>; 3],
}

impl VelocityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        let (axis, sign) = key.axis();
        self.velocity[axis] = sign * LIGHT_SPEED;
        self.owner[axis] = Some(key);
    }

    pub fn release(&mut self, key: Key) {
        let (axis, _) = key.axis();
        if self.owner[axis] == Some(key) {
            self.velocity[axis] = 0.0;
            self.owner[axis] = None;
        }
    }

    pub fn velocity(&self) -> Vec3 {
        Vec3::from_array(self.velocity)
    }

    pub fn is_idle(&self) -> bool {
        self.owner.iter().all(Option::is_none)
    }
}

/// Moves the active light and drives optional color oscillation for one scene
#[derive(Debug, Clone, Default)]
pub struct LightAnimator {
    color_drive: bool,
    elapsed_ms: f32,
}

impl LightAnimator {
    pub fn new(color_drive: bool) -> Self {
        Self {
            color_drive,
            elapsed_ms: 0.0,
        }
    }

    pub fn color_drive(&self) -> bool {
        self.color_drive
    }

    pub fn set_color_drive(&mut self, enabled: bool) {
        self.color_drive = enabled;
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Advance the scene's lights by one frame
    ///
    /// `steer` names the light under manual control and the shared velocity;
    /// `None` leaves every position untouched.
    pub fn animate(&mut self, lights: &mut [LightState], steer: Option<(usize, &VelocityState)>, frame: &FrameInfo) {
        if let Some((index, velocity)) = steer {
            if let Some(light) = lights.get_mut(index) {
                let step = frame.animation_ratio() / REFERENCE_RATE;
                light.position += velocity.velocity() * step;
            }
        }

        if self.color_drive {
            self.elapsed_ms += frame.delta * 1000.0;
            let count = lights.len();
            for (i, light) in lights.iter_mut().enumerate() {
                light.diffuse = oscillating_color(self.elapsed_ms, i, count);
            }
        }
    }
}
