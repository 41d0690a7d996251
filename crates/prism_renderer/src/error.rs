//! Errors raised while building a render scene or writing its output.

use thiserror::Error;

/// Configuration and output errors. Numerical misses during tracing are not
/// errors; they simply produce no intersection.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("Screen width must be positive and finite, got {0}")]
    InvalidScreenWidth(f64),

    #[error("Screen distance must be positive and finite, got {0}")]
    InvalidScreenDistance(f64),

    #[error("Shadow ray grid size must be at least 1")]
    InvalidShadowGridSize,

    #[error("Surface {surface} ({kind}) refers to material {index}, but only {count} materials exist")]
    MaterialIndexOutOfRange {
        surface: usize,
        kind: &'static str,
        index: usize,
        count: usize,
    },

    #[error("Plane normal of surface {0} has zero length")]
    DegeneratePlaneNormal(usize),

    #[error("Sphere radius of surface {id} must be positive and finite, got {radius}")]
    InvalidSphereRadius { id: usize, radius: f64 },

    #[error("Cube scale of surface {id} must be positive and finite, got {scale}")]
    InvalidCubeScale { id: usize, scale: f64 },

    #[error("Invalid image resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
