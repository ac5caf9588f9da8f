mod common;
mod figure;
mod planets;
mod single_sphere;
mod textured;

use crate::config::SceneConfig;

pub use common::{eye_level_camera, point_light, primitive};
pub use figure::create_figure_scene;
pub use planets::create_planets_scene;
pub use single_sphere::create_single_sphere_scene;
pub use textured::create_textured_scene;

pub type SceneBuilder = fn() -> SceneConfig;

/// Built-in scenes, indexed by position
pub const SCENE_BUILDERS: [SceneBuilder; 4] = [
    create_single_sphere_scene,
    create_textured_scene,
    create_figure_scene,
    create_planets_scene,
];

pub fn builtin_scenes() -> Vec<SceneConfig> {
    SCENE_BUILDERS.iter().map(|build| build()).collect()
}
