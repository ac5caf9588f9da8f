use std::collections::HashMap;

use glam::Vec3;
use shading_lab::config::{GroundConfig, ModelConfig, ModelSource, SceneConfig};
use shading_lab::frame::{FixedFrames, FrameInfo};
use shading_lab::host::{MemoryHost, UniformStore, UniformValue};
use shading_lab::math::oscillating_color;
use shading_lab::scenes::{create_planets_scene, eye_level_camera, point_light};
use shading_lab::traits::{
    GroundMeshFactory, Key, KeyEvent, MaterialFactory, PrimitiveBuilder, PrimitiveKind,
};
use shading_lab::types::{MaterialParams, Transform};
use shading_lab::uniforms::{AMBIENT, CAMERA_POSITION, LIGHT_COLORS, LIGHT_POSITIONS, NUM_LIGHTS};
use shading_lab::{builtin_scenes, MeshTopology, SceneCatalog, SceneError};

fn catalog() -> SceneCatalog<UniformStore> {
    SceneCatalog::construct(&builtin_scenes(), "gouraud", &mut MemoryHost::new()).unwrap()
}

/// Host whose material library for one scene lacks `illum_phong`
struct PartialPhongHost {
    inner: MemoryHost,
    scene_without_phong: usize,
}

impl MaterialFactory for PartialPhongHost {
    type Program = UniformStore;

    fn create_materials(&mut self, scene_index: usize) -> HashMap<String, UniformStore> {
        let mut materials = self.inner.create_materials(scene_index);
        if scene_index == self.scene_without_phong {
            materials.remove("illum_phong");
        }
        materials
    }
}

impl GroundMeshFactory for PartialPhongHost {
    fn create_ground(&mut self, subdivisions: [u32; 2]) -> shading_lab::Result<MeshTopology> {
        self.inner.create_ground(subdivisions)
    }
}

impl PrimitiveBuilder for PartialPhongHost {
    fn build(&mut self, kind: PrimitiveKind, segments: u32) -> shading_lab::Result<MeshTopology> {
        self.inner.build(kind, segments)
    }
}

fn one_second() -> FrameInfo {
    FrameInfo::fixed(0, 1.0)
}

#[cfg(test)]
mod light_control_tests {
    use super::*;

    #[test]
    fn test_negative_x_key_moves_light_by_five() {
        let mut catalog = catalog();
        let start = catalog.active_scene().lights()[0].position;

        catalog.handle_key(KeyEvent::down(Key::A));
        catalog.tick(&one_second());
        let moved = catalog.active_scene().lights()[0].position;
        assert_eq!(moved.x, start.x - 5.0);
        assert_eq!(moved.y, start.y);
        assert_eq!(moved.z, start.z);

        catalog.handle_key(KeyEvent::up(Key::A));
        catalog.tick(&one_second());
        assert_eq!(catalog.active_scene().lights()[0].position, moved);
    }

    #[test]
    fn test_key_events_do_not_move_lights_until_tick() {
        let mut catalog = catalog();
        let start = catalog.active_scene().lights()[0].position;

        catalog.handle_key(KeyEvent::down(Key::R));
        catalog.handle_key(KeyEvent::down(Key::S));
        assert_eq!(catalog.active_scene().lights()[0].position, start);
    }

    #[test]
    fn test_only_active_light_moves() {
        let mut catalog = catalog();
        catalog.set_active_scene(2).unwrap();
        catalog.set_active_light(3).unwrap();
        let before: Vec<Vec3> = catalog.active_scene().lights().iter().map(|l| l.position).collect();

        catalog.handle_key(KeyEvent::down(Key::F));
        catalog.tick(&one_second());

        for (i, light) in catalog.active_scene().lights().iter().enumerate() {
            if i == 3 {
                assert_eq!(light.position, before[i] - Vec3::new(0.0, 5.0, 0.0));
            } else {
                assert_eq!(light.position, before[i]);
            }
        }
    }

    #[test]
    fn test_velocity_is_read_not_consumed() {
        let mut catalog = catalog();
        let start = catalog.active_scene().lights()[0].position;

        catalog.handle_key(KeyEvent::down(Key::D));
        for frame in FixedFrames::new(0.5).take(4) {
            catalog.tick(&frame);
        }
        assert_eq!(catalog.active_scene().lights()[0].position.x, start.x + 10.0);
    }

    #[test]
    fn test_switching_scene_moves_control() {
        let mut catalog = catalog();
        catalog.handle_key(KeyEvent::down(Key::W));
        catalog.tick(&one_second());
        catalog.set_active_scene(1).unwrap();
        let scene0 = catalog.scenes()[0].lights()[0].position;
        let scene1 = catalog.scenes()[1].lights()[0].position;

        catalog.tick(&one_second());

        assert_eq!(catalog.scenes()[0].lights()[0].position, scene0);
        assert_eq!(catalog.scenes()[1].lights()[0].position, scene1 - Vec3::new(0.0, 0.0, 5.0));
    }
}

#[cfg(test)]
mod switch_tests {
    use super::*;

    #[test]
    fn test_shading_algorithm_broadcast() {
        let mut catalog = catalog();
        catalog.set_shading_algorithm("phong").unwrap();

        for scene in catalog.scenes() {
            assert_eq!(scene.ground.binding.key, "ground_phong");
            assert_eq!(scene.materials().program(&scene.ground.binding).key, "ground_phong");
            for model in &scene.models {
                assert_eq!(model.binding.key, "illum_phong");
                assert_eq!(scene.materials().program(&model.binding).key, "illum_phong");
            }
        }
    }

    #[test]
    fn test_shading_algorithm_missing_key() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.set_shading_algorithm("flat"),
            Err(SceneError::MissingMaterialKey {
                scene: 0,
                key: "ground_flat".to_string()
            })
        );
        assert!(catalog
            .scenes()
            .iter()
            .all(|s| s.ground.binding.key == "ground_gouraud"));
    }

    #[test]
    fn test_key_missing_in_later_scene_changes_nothing() {
        let mut host = PartialPhongHost {
            inner: MemoryHost::new(),
            scene_without_phong: 2,
        };
        let mut catalog = SceneCatalog::construct(&builtin_scenes(), "gouraud", &mut host).unwrap();

        assert_eq!(
            catalog.set_shading_algorithm("phong"),
            Err(SceneError::MissingMaterialKey {
                scene: 2,
                key: "illum_phong".to_string()
            })
        );
        assert_eq!(catalog.shading_algorithm(), "gouraud");
        for scene in catalog.scenes() {
            assert_eq!(scene.shading_algorithm(), "gouraud");
            assert_eq!(scene.ground.binding.key, "ground_gouraud");
            assert_eq!(scene.materials().program(&scene.ground.binding).key, "ground_gouraud");
            for model in &scene.models {
                assert_eq!(model.binding.key, "illum_gouraud");
            }
        }
    }

    #[test]
    fn test_shading_swap_keeps_geometry() {
        let mut catalog = catalog();
        let meshes: Vec<_> = catalog.scenes()[3].models.iter().map(|m| m.mesh.clone()).collect();

        catalog.set_shading_algorithm("phong").unwrap();

        for (model, mesh) in catalog.scenes()[3].models.iter().zip(&meshes) {
            assert!(std::sync::Arc::ptr_eq(&model.mesh, mesh));
        }
    }

    #[test]
    fn test_active_scene_round_trip() {
        let mut catalog = catalog();
        for i in 0..catalog.scene_count() {
            catalog.set_active_scene(i).unwrap();
            assert_eq!(catalog.active_scene().index, i);
            assert_eq!(catalog.active_scene().name, builtin_scenes()[i].name);
        }

        let count = catalog.scene_count();
        assert_eq!(
            catalog.set_active_scene(count),
            Err(SceneError::OutOfRangeScene { index: count, count })
        );
        assert_eq!(catalog.active_scene_index(), count - 1);
    }

    #[test]
    fn test_height_scale_includes_inactive_scenes() {
        let mut catalog = catalog();
        catalog.set_active_scene(2).unwrap();
        catalog.set_height_scale(0.25);
        for scene in catalog.scenes() {
            assert_eq!(scene.ground.height_scale, 0.25);
        }
    }
}

#[cfg(test)]
mod uniform_tests {
    use super::*;

    #[test]
    fn test_tick_publishes_to_ground_and_illum() {
        let mut catalog = catalog();
        catalog.tick(&FrameInfo::fixed(0, 1.0 / 60.0));

        let scene = catalog.active_scene();
        let ground = scene.materials().program(&scene.ground.binding);
        let illum = scene.materials().program(&scene.models[0].binding);

        for program in [ground, illum] {
            assert_eq!(
                program.get(CAMERA_POSITION),
                Some(&UniformValue::Vector3(scene.camera.position))
            );
            assert_eq!(program.get(AMBIENT), Some(&UniformValue::Color3(scene.ambient)));
            assert_eq!(program.get(NUM_LIGHTS), Some(&UniformValue::Int(2)));
            assert_eq!(
                program.get(LIGHT_COLORS),
                Some(&UniformValue::Color3Array(
                    scene.lights().iter().map(|l| l.diffuse).collect()
                ))
            );
        }
    }

    #[test]
    fn test_light_positions_flattened_in_scene_order() {
        let mut catalog = catalog();
        catalog.set_active_scene(2).unwrap();
        catalog.tick(&FrameInfo::fixed(0, 1.0 / 60.0));

        let scene = catalog.active_scene();
        let expected: Vec<f32> = scene
            .lights()
            .iter()
            .flat_map(|l| l.position.to_array())
            .collect();
        let ground = scene.materials().program(&scene.ground.binding);
        assert_eq!(ground.get(LIGHT_POSITIONS), Some(&UniformValue::Array3(expected)));
    }

    #[test]
    fn test_unbound_programs_untouched() {
        let mut catalog = catalog();
        catalog.tick(&FrameInfo::fixed(0, 1.0 / 60.0));

        let phong = catalog.active_scene().materials().get("illum_phong").unwrap();
        assert_eq!(phong.writes(), 0);
    }

    #[test]
    fn test_inactive_scenes_keep_ticking() {
        let mut catalog = catalog();
        catalog.tick(&FrameInfo::fixed(0, 0.25));

        let planets = &catalog.scenes()[3];
        assert_eq!(planets.animator().elapsed_ms(), 250.0);
        let count = planets.lights().len();
        for (i, light) in planets.lights().iter().enumerate() {
            assert_eq!(light.diffuse, oscillating_color(250.0, i, count));
        }
        let ground = planets.materials().program(&planets.ground.binding);
        assert!(ground.writes() > 0);
    }

    #[test]
    fn test_color_drive_overrides_external_diffuse() {
        let mut catalog = catalog();
        catalog.scene_mut(3).unwrap().lights_mut()[0].diffuse = Vec3::new(9.0, 9.0, 9.0);
        catalog.before_render(3, &FrameInfo::fixed(0, 0.1)).unwrap();

        let light = &catalog.scenes()[3].lights()[0];
        assert_ne!(light.diffuse, Vec3::new(9.0, 9.0, 9.0));
    }
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    fn tessellated_scene(source: ModelSource) -> SceneConfig {
        SceneConfig {
            name: "sampler".to_string(),
            background: glam::Vec4::ONE,
            ambient: Vec3::splat(0.2),
            camera: eye_level_camera(10.0),
            lights: vec![point_light("light0", Vec3::ONE, Vec3::ONE)],
            ground: GroundConfig::new("/heightmaps/default.png", MaterialParams::matte(Vec3::ONE)),
            models: vec![ModelConfig::new(
                "sampler",
                source,
                Transform::default(),
                MaterialParams::glossy(Vec3::ONE),
            )],
            color_drive: false,
        }
    }

    #[test]
    fn test_tessellated_model_counts() {
        let config = tessellated_scene(ModelSource::Torus {
            ring_radius: 1.5,
            tube_radius: 0.3,
            radial_segments: 50,
            tubular_segments: 50,
        });
        let catalog = SceneCatalog::construct(&[config], "phong", &mut MemoryHost::new()).unwrap();

        let model = &catalog.scenes()[0].models[0];
        assert_eq!(model.mesh.vertex_count(), 2601);
        assert_eq!(model.binding.key, "illum_phong");
    }

    #[test]
    fn test_degenerate_model_aborts_construction() {
        let good = create_planets_scene();
        let bad = tessellated_scene(ModelSource::LatLong {
            radius: 1.0,
            lat_segments: 0,
            lon_segments: 8,
        });
        let result = SceneCatalog::construct(&[good, bad], "gouraud", &mut MemoryHost::new());
        assert!(matches!(result, Err(SceneError::DegenerateTopology { .. })));
    }

    #[test]
    fn test_degenerate_ground_aborts_construction() {
        let mut config = create_planets_scene();
        config.ground.subdivisions = [0, 50];
        let result = SceneCatalog::construct(&[config], "gouraud", &mut MemoryHost::new());
        assert!(matches!(result, Err(SceneError::DegenerateTopology { .. })));
    }

    #[test]
    fn test_ground_metadata_attached() {
        let catalog = catalog();
        let scene = &catalog.scenes()[1];
        assert_eq!(scene.ground.heightmap, "/heightmaps/newhieghtmap.png");
        assert_eq!(scene.ground.scaling, Vec3::new(20.0, 1.0, 20.0));
        assert_eq!(scene.ground.mesh.vertex_count(), 51 * 51);
        assert_eq!(scene.height_scale(), 1.0);
    }
}
