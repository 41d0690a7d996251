//! PRISM Core - Scene description records and scene file loading.
//!
//! This crate provides:
//!
//! - **Scene records**: `Scene`, `CameraParams`, `SceneSettings`, `Light`,
//!   `Material`, `SurfaceDesc`
//! - **Scene files**: parsing of the line-oriented `.txt` scene format
//!
//! Records are plain data. Cross-reference validation (material indices,
//! camera degeneracy) happens when the renderer builds its scene.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scenes/spheres.txt")?;
//! println!("Loaded {} surfaces, {} lights",
//!     scene.surfaces.len(),
//!     scene.lights.len());
//! ```

pub mod parser;
pub mod scene;

// Re-export commonly used types
pub use parser::{load_scene, parse_scene_str, SceneError, SceneResult};
pub use scene::{CameraParams, Color, Light, Material, Scene, SceneSettings, SurfaceDesc};
