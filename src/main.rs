use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use shading_lab::cli::Cli;
use shading_lab::config::load_scene_file;
use shading_lab::frame::FixedFrames;
use shading_lab::host::{MemoryHost, UniformStore};
use shading_lab::materials::DEFAULT_SHADING_ALGORITHM;
use shading_lab::traits::Controller;
use shading_lab::uniforms::ShadingUniforms;
use shading_lab::{builtin_scenes, SceneCatalog};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let configs = match &cli.scene_file {
        Some(path) => load_scene_file(path)?,
        None => builtin_scenes(),
    };

    let mut host = MemoryHost::new();
    let mut catalog = SceneCatalog::construct(&configs, DEFAULT_SHADING_ALGORITHM, &mut host)
        .context("Failed to build scene catalog")?;
    info!("catalog ready: {} scenes, {} primitive meshes", catalog.scene_count(), host.primitives_built());

    catalog.set_active_scene(cli.scene)?;
    catalog.set_active_light(cli.light)?;
    if cli.shading != catalog.shading_algorithm() {
        catalog.set_shading_algorithm(&cli.shading)?;
    }
    if let Some(scale) = cli.height_scale {
        catalog.set_height_scale(scale);
    }

    let mut script = cli.keys.events().iter().peekable();
    for frame in FixedFrames::new(1.0 / cli.fps).take(cli.frames as usize) {
        while let Some(scripted) = script.next_if(|s| s.frame <= frame.number) {
            catalog.handle_key(scripted.event);
        }
        catalog.tick(&frame);
    }

    if !cli.no_ui {
        report(&catalog, cli.aspect);
    }
    Ok(())
}

fn report(catalog: &SceneCatalog<UniformStore>, aspect: f32) {
    let scene = catalog.active_scene();
    let uniforms = ShadingUniforms::snapshot(scene);

    println!(
        "Scene {} '{}' - shading: {}, height scale: {}",
        scene.index,
        scene.name,
        scene.shading_algorithm(),
        scene.height_scale()
    );
    for (i, light) in scene.lights().iter().enumerate() {
        let marker = if i == scene.active_light() { "*" } else { " " };
        println!(
            " {} {}: position {:?}, diffuse {:?}",
            marker, light.id, light.position, light.diffuse
        );
    }
    for model in &scene.models {
        println!(
            "   {}: {} vertices, {} triangles, material {}",
            model.id,
            model.mesh.vertex_count(),
            model.mesh.triangle_count(),
            model.binding.key
        );
    }
    println!("Held keys: {:?}", catalog.controller().get_down_keys());
    let camera = scene.camera.to_uniform(aspect);
    println!(
        "Camera uniform: position {:?}, forward {:?}, {} bytes",
        camera.position,
        camera.forward,
        std::mem::size_of_val(&camera)
    );
    println!(
        "Uniform block: {} lights, {} bytes",
        uniforms.to_block().num_lights,
        std::mem::size_of_val(&uniforms.to_block())
    );
}
