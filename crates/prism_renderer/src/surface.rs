//! Closed set of ray-intersectable surfaces and nearest-hit search.

use crate::{Cube, InfinitePlane, RenderError, RenderResult, Sphere};
use prism_core::SurfaceDesc;
use prism_math::{Ray, Vec3};

/// Any primitive the renderer can intersect.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Sphere(Sphere),
    Plane(InfinitePlane),
    Cube(Cube),
}

impl Surface {
    /// Build a surface from its scene record. `id` is only used for error messages.
    ///
    /// Non-positive or non-finite sphere radii and cube scales are rejected.
    pub fn from_desc(id: usize, desc: &SurfaceDesc) -> RenderResult<Self> {
        Ok(match *desc {
            SurfaceDesc::Sphere { center, radius, material_index } => {
                if !is_positive(radius) {
                    return Err(RenderError::InvalidSphereRadius { id, radius });
                }
                Surface::Sphere(Sphere::new(center, radius, material_index))
            }
            SurfaceDesc::Plane { normal, offset, material_index } => Surface::Plane(
                InfinitePlane::new(normal, offset, material_index)
                    .ok_or(RenderError::DegeneratePlaneNormal(id))?,
            ),
            SurfaceDesc::Cube { center, scale, material_index } => {
                if !is_positive(scale) {
                    return Err(RenderError::InvalidCubeScale { id, scale });
                }
                Surface::Cube(Cube::new(center, scale, material_index))
            }
        })
    }

    /// Smallest non-negative distance at which a unit-length ray meets the surface.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Surface::Sphere(sphere) => sphere.intersect(ray),
            Surface::Plane(plane) => plane.intersect(ray),
            Surface::Cube(cube) => cube.intersect(ray),
        }
    }

    /// Unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Surface::Sphere(sphere) => sphere.normal_at(point),
            Surface::Plane(plane) => plane.normal_at(point),
            Surface::Cube(cube) => cube.normal_at(point),
        }
    }

    /// 1-based index into the scene's material list.
    pub fn material_index(&self) -> usize {
        match self {
            Surface::Sphere(sphere) => sphere.material_index(),
            Surface::Plane(plane) => plane.material_index(),
            Surface::Cube(cube) => cube.material_index(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Surface::Sphere(_) => "sphere",
            Surface::Plane(_) => "plane",
            Surface::Cube(_) => "cube",
        }
    }
}

fn is_positive(size: f64) -> bool {
    size.is_finite() && size > 0.0
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<InfinitePlane> for Surface {
    fn from(plane: InfinitePlane) -> Self {
        Surface::Plane(plane)
    }
}

impl From<Cube> for Surface {
    fn from(cube: Cube) -> Self {
        Surface::Cube(cube)
    }
}

/// Record of the nearest ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray
    pub t: f64,
    /// Index of the surface that was hit
    pub surface: usize,
}

/// Scan every surface and keep the closest hit.
pub fn closest_hit(surfaces: &[Surface], ray: &Ray) -> Option<Hit> {
    let mut closest: Option<Hit> = None;

    for (index, surface) in surfaces.iter().enumerate() {
        if let Some(t) = surface.intersect(ray) {
            if closest.map_or(true, |hit| t < hit.t) {
                closest = Some(Hit { t, surface: index });
            }
        }
    }

    closest
}
