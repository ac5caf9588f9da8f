use glam::Vec3;
use log::trace;

use crate::scene::SceneRecord;
use crate::traits::ShadingProgram;
use crate::types::{SceneUniformBlock, MAX_LIGHTS};

pub const CAMERA_POSITION: &str = "camera_position";
pub const AMBIENT: &str = "ambient";
pub const NUM_LIGHTS: &str = "num_lights";
pub const LIGHT_POSITIONS: &str = "light_positions";
pub const LIGHT_COLORS: &str = "light_colors";

/// Lighting state of one scene captured after animation for a frame
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingUniforms {
    pub camera_position: Vec3,
    pub ambient: Vec3,
    pub num_lights: i32,
    /// Three scalars per light, scene order
    pub light_positions: Vec<f32>,
    /// Diffuse color per light, scene order
    pub light_colors: Vec<Vec3>,
}

impl ShadingUniforms {
    pub fn snapshot<P>(record: &SceneRecord<P>) -> Self {
        let lights = record.lights();
        Self {
            camera_position: record.camera.position,
            ambient: record.ambient,
            num_lights: lights.len() as i32,
            light_positions: lights.iter().flat_map(|l| l.position.to_array()).collect(),
            light_colors: lights.iter().map(|l| l.diffuse).collect(),
        }
    }

    pub fn apply<S: ShadingProgram + ?Sized>(&self, program: &mut S) {
        program.set_vector3(CAMERA_POSITION, self.camera_position);
        program.set_color3(AMBIENT, self.ambient);
        program.set_int(NUM_LIGHTS, self.num_lights);
        program.set_array3(LIGHT_POSITIONS, &self.light_positions);
        program.set_color3_array(LIGHT_COLORS, &self.light_colors);
    }

    /// Pack into the fixed-size GPU block; lights beyond [`MAX_LIGHTS`] are dropped
    pub fn to_block(&self) -> SceneUniformBlock {
        let mut block: SceneUniformBlock = bytemuck::Zeroable::zeroed();
        block.camera_position = self.camera_position.to_array();
        block.ambient = self.ambient.to_array();

        let count = (self.num_lights.max(0) as usize).min(MAX_LIGHTS);
        block.num_lights = count as i32;
        for (i, position) in self.light_positions.chunks_exact(3).take(count).enumerate() {
            block.light_positions[i] = [position[0], position[1], position[2], 1.0];
        }
        for (i, color) in self.light_colors.iter().take(count).enumerate() {
            block.light_colors[i] = color.extend(1.0).to_array();
        }
        block
    }
}

/// Write one frame's uniforms into each target program
pub fn publish<'a, P, I>(uniforms: &ShadingUniforms, targets: I)
where
    P: ShadingProgram + 'a,
    I: IntoIterator<Item = &'a mut P>,
{
    let mut written = 0;
    for program in targets {
        uniforms.apply(program);
        written += 1;
    }
    trace!(
        "published {} lights to {} programs (camera {:?})",
        uniforms.num_lights,
        written,
        uniforms.camera_position
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{UniformStore, UniformValue};

    fn uniforms(lights: usize) -> ShadingUniforms {
        ShadingUniforms {
            camera_position: Vec3::new(0.0, 1.8, 10.0),
            ambient: Vec3::splat(0.2),
            num_lights: lights as i32,
            light_positions: (0..lights * 3).map(|i| i as f32).collect(),
            light_colors: (0..lights).map(|i| Vec3::splat(i as f32)).collect(),
        }
    }

    #[test]
    fn publish_writes_every_target() {
        let mut a = UniformStore::new("ground_phong");
        let mut b = UniformStore::new("illum_phong");
        publish(&uniforms(2), [&mut a, &mut b]);

        for store in [&a, &b] {
            assert_eq!(store.get(NUM_LIGHTS), Some(&UniformValue::Int(2)));
            assert_eq!(
                store.get(LIGHT_POSITIONS),
                Some(&UniformValue::Array3(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]))
            );
            assert_eq!(
                store.get(CAMERA_POSITION),
                Some(&UniformValue::Vector3(Vec3::new(0.0, 1.8, 10.0)))
            );
        }
    }

    #[test]
    fn block_pads_positions_and_colors() {
        let block = uniforms(2).to_block();
        assert_eq!(block.num_lights, 2);
        assert_eq!(block.light_positions[1], [3.0, 4.0, 5.0, 1.0]);
        assert_eq!(block.light_colors[1], [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(block.light_positions[2], [0.0; 4]);
    }

    #[test]
    fn block_truncates_extra_lights() {
        let block = uniforms(MAX_LIGHTS + 3).to_block();
        assert_eq!(block.num_lights, MAX_LIGHTS as i32);
        assert_eq!(bytemuck::bytes_of(&block).len(), std::mem::size_of::<SceneUniformBlock>());
    }
}
