//! In-memory collaborators for headless runs and tests.
//!
//! A windowed host would back these traits with real GPU programs and a
//! texture loader; here programs only record the uniforms written to them.

mod primitives;
mod program;

use std::collections::HashMap;

use log::debug;

use crate::error::Result;
use crate::materials::{ground_key, illum_key};
use crate::tessellation::MeshTopology;
use crate::traits::{GroundMeshFactory, MaterialFactory, PrimitiveBuilder, PrimitiveKind};

pub use primitives::{subdivided_plane, unit_box, unit_cylinder, unit_sphere};
pub use program::{UniformStore, UniformValue};

/// Shading algorithms the reference host compiles for every scene
pub const SHADING_ALGORITHMS: [&str; 2] = ["gouraud", "phong"];

#[derive(Debug, Clone)]
pub struct MemoryHost {
    algorithms: Vec<String>,
    primitives_built: usize,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::with_algorithms(&SHADING_ALGORITHMS)
    }

    pub fn with_algorithms(algorithms: &[&str]) -> Self {
        Self {
            algorithms: algorithms.iter().map(|a| a.to_string()).collect(),
            primitives_built: 0,
        }
    }

    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// Number of primitive meshes generated so far
    pub fn primitives_built(&self) -> usize {
        self.primitives_built
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialFactory for MemoryHost {
    type Program = UniformStore;

    fn create_materials(&mut self, scene_index: usize) -> HashMap<String, UniformStore> {
        debug!("compiling {} shading algorithms for scene {}", self.algorithms.len(), scene_index);
        self.algorithms
            .iter()
            .flat_map(|alg| [ground_key(alg), illum_key(alg)])
            .map(|key| (key.clone(), UniformStore::new(key)))
            .collect()
    }
}

impl GroundMeshFactory for MemoryHost {
    fn create_ground(&mut self, subdivisions: [u32; 2]) -> Result<MeshTopology> {
        subdivided_plane(subdivisions)
    }
}

impl PrimitiveBuilder for MemoryHost {
    fn build(&mut self, kind: PrimitiveKind, segments: u32) -> Result<MeshTopology> {
        self.primitives_built += 1;
        match kind {
            PrimitiveKind::Sphere => unit_sphere(segments),
            PrimitiveKind::Box => Ok(unit_box()),
            PrimitiveKind::Cylinder => unit_cylinder(segments),
        }
    }
}
