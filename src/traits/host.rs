use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tessellation::MeshTopology;

/// Shading program exposed by the host's material system
///
/// Setters overwrite the named uniform; they never fail, since a program that
/// does not declare a uniform simply ignores it.
pub trait ShadingProgram {
    fn set_vector3(&mut self, name: &str, value: Vec3);

    fn set_color3(&mut self, name: &str, value: Vec3);

    fn set_int(&mut self, name: &str, value: i32);

    /// Flat float array, three scalars per element
    fn set_array3(&mut self, name: &str, values: &[f32]);

    fn set_color3_array(&mut self, name: &str, values: &[Vec3]);
}

/// Builds the shading programs of one scene
///
/// Keys follow the `{ground|illum}_{algorithm}` convention, e.g. `ground_phong`.
pub trait MaterialFactory {
    type Program: ShadingProgram;

    fn create_materials(&mut self, scene_index: usize) -> HashMap<String, Self::Program>;
}

/// Produces the subdivided plane every scene's ground is displaced from
pub trait GroundMeshFactory {
    fn create_ground(&mut self, subdivisions: [u32; 2]) -> Result<MeshTopology>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Sphere,
    Box,
    Cylinder,
}

/// Unit-sized primitive meshes, scaled by the model transform
pub trait PrimitiveBuilder {
    fn build(&mut self, kind: PrimitiveKind, segments: u32) -> Result<MeshTopology>;
}
