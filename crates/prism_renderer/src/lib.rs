//! PRISM Renderer - recursive ray casting for static scenes.
//!
//! One primary ray per pixel center is shaded with Lambert diffuse and Phong
//! specular terms, attenuated by hard or jittered soft shadows, and extended
//! by mirror reflection and straight-through transparency up to the scene's
//! maximum recursion depth. Rows are rendered in parallel with rayon.

mod camera;
mod cube;
mod error;
mod frame;
mod plane;
mod renderer;
mod scene;
mod shadow;
mod sphere;
mod surface;

pub use camera::Camera;
pub use cube::Cube;
pub use error::{RenderError, RenderResult};
pub use frame::{color_to_rgb, quantize_channel, FrameBuffer};
pub use plane::InfinitePlane;
pub use renderer::{render, render_pixel, render_scene, shade, RenderConfig, SURFACE_BIAS};
pub use scene::RenderScene;
pub use shadow::light_visibility;
pub use sphere::Sphere;
pub use surface::{closest_hit, Hit, Surface};

/// Re-export scene records and math types used in the public API
pub use prism_core::{Color, Light, Material, SceneSettings};
pub use prism_math::{Ray, Vec3};

use rand::{Rng, RngCore};

/// Uniform sample in [0, 1) from a type-erased generator.
#[inline]
pub(crate) fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}
