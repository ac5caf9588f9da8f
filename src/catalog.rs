use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};

use crate::animation::LightAnimator;
use crate::config::{ModelSource, SceneConfig};
use crate::core::LightController;
use crate::error::{Result, SceneError};
use crate::frame::FrameInfo;
use crate::materials::{ground_key, illum_key, MaterialLibrary};
use crate::scene::{SceneParts, SceneRecord};
use crate::tessellation::{
    tessellate_concentric_shells, tessellate_lat_long, tessellate_torus, MeshTopology,
};
use crate::traits::{
    Controller, GroundMeshFactory, KeyEvent, MaterialFactory, PrimitiveBuilder, PrimitiveKind,
    ShadingProgram,
};
use crate::types::{GroundState, ModelState};
use crate::uniforms::ShadingUniforms;

/// Ordered set of independent scenes plus the catalog-wide switches
///
/// Every scene ticks each frame; only the active scene's active light follows
/// the keyboard.
#[derive(Debug)]
pub struct SceneCatalog<P> {
    scenes: Vec<SceneRecord<P>>,
    active_scene: usize,
    shading_algorithm: String,
    controller: LightController,
}

impl<P: ShadingProgram> SceneCatalog<P> {
    /// Assemble one record per config, in order
    ///
    /// Fails on the first scene that cannot be built; nothing is kept.
    pub fn construct<H>(configs: &[SceneConfig], shading_algorithm: &str, host: &mut H) -> Result<Self>
    where
        H: MaterialFactory<Program = P> + GroundMeshFactory + PrimitiveBuilder,
    {
        if configs.is_empty() {
            return Err(SceneError::InvalidScene {
                scene: 0,
                reason: "catalog needs at least one scene".to_string(),
            });
        }

        let mut primitive_cache = HashMap::new();
        let scenes = configs
            .iter()
            .enumerate()
            .map(|(index, config)| build_scene(index, config, shading_algorithm, host, &mut primitive_cache))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            scenes,
            active_scene: 0,
            shading_algorithm: shading_algorithm.to_string(),
            controller: LightController::new(),
        })
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn scenes(&self) -> &[SceneRecord<P>] {
        &self.scenes
    }

    pub fn scene(&self, index: usize) -> Option<&SceneRecord<P>> {
        self.scenes.get(index)
    }

    pub fn scene_mut(&mut self, index: usize) -> Option<&mut SceneRecord<P>> {
        self.scenes.get_mut(index)
    }

    pub fn shading_algorithm(&self) -> &str {
        &self.shading_algorithm
    }

    pub fn controller(&self) -> &LightController {
        &self.controller
    }

    /// Render target of the currently displayed scene
    pub fn active_scene(&self) -> &SceneRecord<P> {
        &self.scenes[self.active_scene]
    }

    pub fn active_scene_index(&self) -> usize {
        self.active_scene
    }

    pub fn set_active_scene(&mut self, index: usize) -> Result<()> {
        if index >= self.scenes.len() {
            return Err(SceneError::OutOfRangeScene {
                index,
                count: self.scenes.len(),
            });
        }
        debug!("active scene {} -> {}", self.active_scene, index);
        self.active_scene = index;
        Ok(())
    }

    /// Pick the light of the active scene that follows the keyboard
    pub fn set_active_light(&mut self, index: usize) -> Result<()> {
        let scene = &mut self.scenes[self.active_scene];
        scene.set_active_light(index)?;
        debug!("scene {}: active light {}", scene.index, index);
        Ok(())
    }

    /// Rebind every ground and model in every scene to `algorithm`
    ///
    /// All keys are resolved before anything changes, so a missing key leaves
    /// every scene on its previous binding.
    pub fn set_shading_algorithm(&mut self, algorithm: &str) -> Result<()> {
        let ground = ground_key(algorithm);
        let illum = illum_key(algorithm);

        let bindings = self
            .scenes
            .iter()
            .map(|scene| Ok((scene.materials().bind(&ground)?, scene.materials().bind(&illum)?)))
            .collect::<Result<Vec<_>>>()?;

        for (scene, (ground, illum)) in self.scenes.iter_mut().zip(bindings) {
            scene.rebind(algorithm, ground, illum);
        }
        info!("shading algorithm {} -> {}", self.shading_algorithm, algorithm);
        self.shading_algorithm = algorithm.to_string();
        Ok(())
    }

    /// Applies to every scene's ground, displayed or not
    pub fn set_height_scale(&mut self, value: f32) {
        for scene in &mut self.scenes {
            scene.ground.height_scale = value;
        }
        debug!("height scale -> {}", value);
    }

    /// Buffer a key transition; lights move on the next tick
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.controller.handle_key(event);
    }

    /// Before-render hook of one scene: animate its lights, then publish
    pub fn before_render(&mut self, index: usize, frame: &FrameInfo) -> Result<ShadingUniforms> {
        let count = self.scenes.len();
        let steer = (index == self.active_scene).then(|| self.controller.velocity());
        let scene = self
            .scenes
            .get_mut(index)
            .ok_or(SceneError::OutOfRangeScene { index, count })?;
        Ok(scene.before_render(steer, frame))
    }

    /// Run every scene's before-render hook in catalog order
    pub fn tick(&mut self, frame: &FrameInfo) {
        let active = self.active_scene;
        let velocity = self.controller.velocity();
        for scene in &mut self.scenes {
            let steer = (scene.index == active).then_some(velocity);
            scene.before_render(steer, frame);
        }
    }
}

fn build_scene<H>(
    index: usize,
    config: &SceneConfig,
    shading_algorithm: &str,
    host: &mut H,
    primitive_cache: &mut HashMap<(PrimitiveKind, u32), Arc<MeshTopology>>,
) -> Result<SceneRecord<H::Program>>
where
    H: MaterialFactory + GroundMeshFactory + PrimitiveBuilder,
{
    if config.lights.is_empty() {
        return Err(SceneError::InvalidScene {
            scene: index,
            reason: "a scene needs at least one light".to_string(),
        });
    }

    let materials = MaterialLibrary::new(index, host.create_materials(index));
    let ground_binding = materials.bind(&ground_key(shading_algorithm))?;
    let illum_binding = materials.bind(&illum_key(shading_algorithm))?;

    let ground = GroundState {
        mesh: Arc::new(host.create_ground(config.ground.subdivisions)?),
        scaling: config.ground.scaling,
        material: config.ground.material.clone(),
        height_scale: config.ground.height_scale,
        heightmap: config.ground.heightmap.clone(),
        binding: ground_binding,
    };

    let models = config
        .models
        .iter()
        .map(|model| {
            Ok(ModelState {
                id: model.name.clone(),
                transform: model.transform,
                material: model.material.clone(),
                mesh: model_mesh(model.source, host, primitive_cache)?,
                binding: illum_binding.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "scene {} '{}': {} lights, {} models, ground {}x{}",
        index,
        config.name,
        config.lights.len(),
        models.len(),
        config.ground.subdivisions[0],
        config.ground.subdivisions[1]
    );

    Ok(SceneRecord::from_parts(SceneParts {
        index,
        name: config.name.clone(),
        background: config.background,
        ambient: config.ambient,
        camera: config.camera,
        ground,
        models,
        lights: config.lights.clone(),
        shading_algorithm: shading_algorithm.to_string(),
        materials,
        animator: LightAnimator::new(config.color_drive),
    }))
}

/// Host primitives are shared between models with the same kind and segment
/// count; tessellated surfaces are generated per model
fn model_mesh<B: PrimitiveBuilder>(
    source: ModelSource,
    builder: &mut B,
    cache: &mut HashMap<(PrimitiveKind, u32), Arc<MeshTopology>>,
) -> Result<Arc<MeshTopology>> {
    let mesh = match source {
        ModelSource::Primitive { kind, segments } => {
            if let Some(mesh) = cache.get(&(kind, segments)) {
                return Ok(Arc::clone(mesh));
            }
            let mesh = Arc::new(builder.build(kind, segments)?);
            cache.insert((kind, segments), Arc::clone(&mesh));
            return Ok(mesh);
        }
        ModelSource::LatLong {
            radius,
            lat_segments,
            lon_segments,
        } => tessellate_lat_long(radius, lat_segments, lon_segments)?,
        ModelSource::Torus {
            ring_radius,
            tube_radius,
            radial_segments,
            tubular_segments,
        } => tessellate_torus(ring_radius, tube_radius, radial_segments, tubular_segments)?,
        ModelSource::Shells {
            inner_radius,
            outer_radius,
            thickness,
            segments,
        } => tessellate_concentric_shells(inner_radius, outer_radius, thickness, segments)?,
    };
    Ok(Arc::new(mesh))
}
