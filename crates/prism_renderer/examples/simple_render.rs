//! Simple ray tracer example.
//!
//! Builds a small scene in code (floor, mirror sphere, glass-like sphere,
//! cube) and saves it to PNG.

use prism_core::{CameraParams, Color, Light, Material, Scene, SceneSettings, SurfaceDesc};
use prism_renderer::{render_scene, RenderConfig, Vec3};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("PRISM Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene();
    println!(
        "Created {} surfaces, {} materials, {} lights",
        scene.surfaces.len(),
        scene.materials.len(),
        scene.lights.len()
    );

    let config = RenderConfig::default().with_resolution(640, 480).with_seed(1);

    let start = std::time::Instant::now();
    let image = render_scene(&scene, &config).expect("Failed to render scene");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let camera = CameraParams::new(
        Vec3::new(0.0, 2.0, -8.0), // position
        Vec3::new(0.0, 0.5, 0.0),  // look_at
        Vec3::new(0.0, 1.0, 0.0),  // up
        1.5,
        1.6,
    );
    let settings = SceneSettings {
        background_color: Color::new(0.6, 0.7, 0.9),
        shadow_ray_grid_size: 4,
        max_recursion_depth: 4,
    };
    let mut scene = Scene::new("simple", camera, settings);

    let floor = scene.add_material(
        Material::diffuse(Color::new(0.5, 0.5, 0.5)).with_reflection(Color::splat(0.1)),
    );
    let mirror = scene.add_material(
        Material::diffuse(Color::new(0.05, 0.05, 0.05))
            .with_specular(Color::ONE, 50.0)
            .with_reflection(Color::splat(0.8)),
    );
    let glass = scene.add_material(
        Material::diffuse(Color::new(0.2, 0.5, 0.9))
            .with_specular(Color::ONE, 80.0)
            .with_transparency(0.6),
    );
    let clay = scene.add_material(
        Material::diffuse(Color::new(0.8, 0.3, 0.2)).with_specular(Color::splat(0.3), 10.0),
    );

    scene.add_surface(SurfaceDesc::Plane { normal: Vec3::Y, offset: 0.0, material_index: floor });
    scene.add_surface(SurfaceDesc::Sphere {
        center: Vec3::new(-1.5, 1.0, 0.0),
        radius: 1.0,
        material_index: mirror,
    });
    scene.add_surface(SurfaceDesc::Sphere {
        center: Vec3::new(1.2, 0.8, -1.0),
        radius: 0.8,
        material_index: glass,
    });
    scene.add_surface(SurfaceDesc::Cube {
        center: Vec3::new(0.5, 0.5, 2.5),
        scale: 1.0,
        material_index: clay,
    });

    scene.add_light(
        Light::new(Vec3::new(-3.0, 6.0, -4.0), Color::new(1.0, 0.95, 0.9))
            .with_shadow(0.8, 1.5),
    );
    scene.add_light(
        Light::new(Vec3::new(4.0, 4.0, -2.0), Color::new(0.3, 0.3, 0.4))
            .with_specular_intensity(0.5)
            .with_shadow(0.5, 0.5),
    );

    scene
}
