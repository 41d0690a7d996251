//! Core recursive ray tracer.
//!
//! Implements Whitted-style shading with:
//! - Lambert diffuse and Phong specular per light
//! - Hard or soft shadows via [`light_visibility`]
//! - Mirror reflection and straight-through transparency, bounded by depth
//! - Row-parallel frame rendering on rayon

use std::time::Instant;

use crate::{closest_hit, light_visibility, FrameBuffer, RenderError, RenderResult, RenderScene};
use log::info;
use prism_core::{Color, Scene};
use prism_math::{Ray, Vec3};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Offset applied to secondary ray origins to step off the surface they leave.
pub const SURFACE_BIAS: f64 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Fixed seed for soft shadow jitter; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Worker count for a dedicated pool; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            seed: None,
            threads: None,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Make soft shadows reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Render on a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Compute the color seen by a ray.
///
/// `depth` counts bounces since the primary ray. Past the scene's maximum
/// depth the background is returned without tracing.
pub fn shade(ray: &Ray, scene: &RenderScene, depth: u32, rng: &mut dyn RngCore) -> Color {
    let settings = scene.settings();
    if depth > settings.max_recursion_depth {
        return settings.background_color;
    }

    let Some(hit) = closest_hit(scene.surfaces(), ray) else {
        return settings.background_color;
    };

    let surface = &scene.surfaces()[hit.surface];
    let material = scene.material_of(surface);
    let hit_point = ray.at(hit.t);
    let normal = surface.normal_at(hit_point);

    // Highlights are evaluated against the origin of this segment, not the eye
    let view_dir = (ray.origin() - hit_point).normalize_or_zero();

    let mut diffuse = Color::ZERO;
    let mut specular = Color::ZERO;

    for light in scene.lights() {
        let light_dir = (light.position - hit_point).normalize_or_zero();
        let visibility = light_visibility(
            hit.surface,
            hit_point,
            light,
            light_dir,
            scene.surfaces(),
            settings.shadow_ray_grid_size,
            rng,
        );

        let n_dot_l = normal.dot(light_dir);
        diffuse += material.diffuse_color * light.color * (n_dot_l.max(0.0) * visibility);

        let reflect_dir = (2.0 * n_dot_l * normal - light_dir).normalize_or_zero();
        let highlight = reflect_dir.dot(view_dir).max(0.0).powf(material.shininess);
        specular += material.specular_color
            * light.color
            * (highlight * visibility * light.specular_intensity);
    }

    let reflection = if material.is_reflective() {
        let reflected = Ray::new(
            hit_point + SURFACE_BIAS * normal,
            reflect(ray.direction(), normal).normalize(),
        );
        shade(&reflected, scene, depth + 1, rng) * material.reflection_color
    } else {
        Color::ZERO
    };

    let transmitted = if material.is_transparent() {
        let through = Ray::new(hit_point + SURFACE_BIAS * ray.direction(), ray.direction());
        shade(&through, scene, depth + 1, rng)
    } else {
        Color::ZERO
    };

    let surface_color = (diffuse + specular) * (1.0 - material.transparency);
    transmitted * material.transparency + surface_color + reflection
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Render a single pixel center.
pub fn render_pixel(
    scene: &RenderScene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = scene
        .camera()
        .ray_for_pixel(x, y, config.width, config.height);
    shade(&ray, scene, 0, rng)
}

/// Jitter source for one row. Seeded runs give every row its own stream.
fn row_rng(seed: Option<u64>, y: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(y as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Fill `pixels` row by row in parallel; each task owns one disjoint row.
fn render_rows(scene: &RenderScene, config: &RenderConfig, pixels: &mut [Color]) {
    pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let mut rng = row_rng(config.seed, y);
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(scene, x as u32, y as u32, config, &mut rng);
            }
        });
}

/// Render the entire scene to a frame buffer.
pub fn render(scene: &RenderScene, config: &RenderConfig) -> RenderResult<FrameBuffer> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::InvalidResolution {
            width: config.width,
            height: config.height,
        });
    }

    info!(
        "Rendering {}x{}: {} surfaces, {} lights, shadow grid {}, max depth {}",
        config.width,
        config.height,
        scene.surfaces().len(),
        scene.lights().len(),
        scene.settings().shadow_ray_grid_size,
        scene.settings().max_recursion_depth
    );

    let start = Instant::now();
    let mut frame = FrameBuffer::new(config.width, config.height);

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| render_rows(scene, config, &mut frame.pixels));
        }
        None => render_rows(scene, config, &mut frame.pixels),
    }

    info!("Rendered in {:?}", start.elapsed());
    Ok(frame)
}

/// Validate a parsed scene and render it at the given resolution.
pub fn render_scene(scene: &Scene, config: &RenderConfig) -> RenderResult<FrameBuffer> {
    let render_scene = RenderScene::from_scene(scene)?;
    render(&render_scene, config)
}
