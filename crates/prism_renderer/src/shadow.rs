//! Light visibility estimation with hard or jittered soft shadows.

use crate::{gen_f64, Surface};
use prism_core::Light;
use prism_math::{Ray, Vec3, EPSILON};
use rand::RngCore;

/// Fraction of `light` reaching `point`, in `[1 - shadow_intensity, 1]`.
///
/// `hit_surface` is the index of the surface `point` lies on; it never
/// shadows itself. `grid_size == 1` casts a single ray towards the light,
/// larger values sample an N x N jittered grid over the light's square area.
pub fn light_visibility(
    hit_surface: usize,
    point: Vec3,
    light: &Light,
    light_direction: Vec3,
    surfaces: &[Surface],
    grid_size: u32,
    rng: &mut dyn RngCore,
) -> f64 {
    if grid_size <= 1 {
        let shadow_ray = Ray::new(point, light_direction);
        if is_blocked(hit_surface, &shadow_ray, surfaces, f64::INFINITY) {
            1.0 - light.shadow_intensity
        } else {
            1.0
        }
    } else {
        let lit = soft_shadow_samples(hit_surface, point, light, light_direction, surfaces, grid_size, rng);
        let fraction = lit as f64 / sample_count(grid_size);
        (1.0 - light.shadow_intensity) + light.shadow_intensity * fraction
    }
}

/// True if any surface other than `skip` meets the ray at `0 < t < max_t`.
fn is_blocked(skip: usize, ray: &Ray, surfaces: &[Surface], max_t: f64) -> bool {
    surfaces
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != skip)
        .filter_map(|(_, surface)| surface.intersect(ray))
        .any(|t| t > 0.0 && t < max_t)
}

/// Number of rays in an N x N grid, without overflowing for large N.
fn sample_count(grid_size: u32) -> f64 {
    (grid_size as f64).powi(2)
}

/// Orthonormal pair spanning the plane perpendicular to `direction`.
fn light_plane_basis(direction: Vec3) -> (Vec3, Vec3) {
    // A nearly vertical light direction would make the cross product with Y degenerate
    let seed = if direction.y.abs() >= 0.9 { Vec3::X } else { Vec3::Y };
    let right = direction.cross(seed).normalize();
    let up = right.cross(direction).normalize();
    (right, up)
}

/// Count the unoccluded jittered samples on the light's area.
fn soft_shadow_samples(
    hit_surface: usize,
    point: Vec3,
    light: &Light,
    light_direction: Vec3,
    surfaces: &[Surface],
    grid_size: u32,
    rng: &mut dyn RngCore,
) -> u64 {
    let (right, up) = light_plane_basis(light_direction);
    let cell = light.radius / grid_size as f64;
    let half = light.radius / 2.0;

    let mut lit = 0u64;
    for i in 0..grid_size {
        for j in 0..grid_size {
            let u = -half + (i as f64 + gen_f64(rng)) * cell;
            let v = -half + (j as f64 + gen_f64(rng)) * cell;
            let sample = light.position + u * right + v * up;

            let to_point = point - sample;
            let distance = to_point.length();
            if distance < EPSILON {
                lit += 1;
                continue;
            }

            let sample_ray = Ray::new(sample, to_point / distance);
            if !is_blocked(hit_surface, &sample_ray, surfaces, distance) {
                lit += 1;
            }
        }
    }
    lit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cube, InfinitePlane, Sphere};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn light_above(shadow_intensity: f64, radius: f64) -> Light {
        Light::new(Vec3::new(0.0, 4.0, 0.0), Vec3::ONE).with_shadow(shadow_intensity, radius)
    }

    fn ground() -> Surface {
        InfinitePlane::new(Vec3::Y, 0.0, 1).unwrap().into()
    }

    fn direction_to(light: &Light, point: Vec3) -> Vec3 {
        (light.position - point).normalize()
    }

    #[test]
    fn test_hard_shadow_fully_occluded() {
        let surfaces = vec![ground(), Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5, 1).into()];
        let light = light_above(0.7, 0.0);
        let point = Vec3::ZERO;
        let mut rng = StdRng::seed_from_u64(1);

        let visibility =
            light_visibility(0, point, &light, direction_to(&light, point), &surfaces, 1, &mut rng);
        assert_eq!(visibility, 1.0 - 0.7);
    }

    #[test]
    fn test_hard_shadow_unoccluded() {
        let surfaces = vec![ground(), Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5, 1).into()];
        let light = light_above(0.7, 0.0);
        let point = Vec3::new(5.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(1);

        let visibility =
            light_visibility(0, point, &light, direction_to(&light, point), &surfaces, 1, &mut rng);
        assert_eq!(visibility, 1.0);
    }

    #[test]
    fn test_hit_surface_does_not_shadow_itself() {
        // The receiving sphere lies between its own far side and the light
        let surfaces = vec![Sphere::new(Vec3::new(0.0, 2.0, 0.0), 1.0, 1).into()];
        let light = light_above(1.0, 0.0);
        let point = Vec3::new(0.0, 1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(1);

        let visibility =
            light_visibility(0, point, &light, direction_to(&light, point), &surfaces, 1, &mut rng);
        assert_eq!(visibility, 1.0);
    }

    #[test]
    fn test_soft_shadow_fully_occluded() {
        let surfaces = vec![ground(), Cube::new(Vec3::new(0.0, 2.0, 0.0), 3.0, 1).into()];
        let light = light_above(0.6, 1.0);
        let point = Vec3::ZERO;
        let mut rng = StdRng::seed_from_u64(7);

        let visibility =
            light_visibility(0, point, &light, direction_to(&light, point), &surfaces, 4, &mut rng);
        assert!((visibility - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_soft_shadow_unoccluded() {
        let surfaces = vec![ground()];
        let light = light_above(0.6, 1.0);
        let point = Vec3::new(1.0, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(7);

        let visibility =
            light_visibility(0, point, &light, direction_to(&light, point), &surfaces, 4, &mut rng);
        assert!((visibility - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_soft_shadow_partial_occlusion() {
        // Blocks only samples on the far +x side of the light square
        let surfaces = vec![ground(), Cube::new(Vec3::new(1.5, 2.0, 0.0), 2.0, 1).into()];
        let light = light_above(1.0, 2.0);
        let point = Vec3::ZERO;
        let mut rng = StdRng::seed_from_u64(11);

        let visibility =
            light_visibility(0, point, &light, direction_to(&light, point), &surfaces, 8, &mut rng);
        assert!(visibility > 0.0 && visibility < 1.0, "visibility = {visibility}");
    }

    #[test]
    fn test_soft_shadow_reproducible_with_seed() {
        let surfaces = vec![ground(), Cube::new(Vec3::new(1.5, 2.0, 0.0), 2.0, 1).into()];
        let light = light_above(0.8, 2.0);
        let point = Vec3::ZERO;
        let direction = direction_to(&light, point);

        let first = light_visibility(0, point, &light, direction, &surfaces, 6, &mut StdRng::seed_from_u64(3));
        let second = light_visibility(0, point, &light, direction, &surfaces, 6, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_count_handles_large_grids() {
        assert_eq!(sample_count(1), 1.0);
        assert_eq!(sample_count(5), 25.0);
        assert_eq!(sample_count(65_536), 4_294_967_296.0);
    }

    #[test]
    fn test_light_plane_basis_is_orthonormal() {
        for direction in [Vec3::Y, -Vec3::Y, Vec3::X, Vec3::new(1.0, 2.0, 3.0).normalize()] {
            let (right, up) = light_plane_basis(direction);
            assert!(right.dot(direction).abs() < 1e-12);
            assert!(up.dot(direction).abs() < 1e-12);
            assert!(right.dot(up).abs() < 1e-12);
            assert!((right.length() - 1.0).abs() < 1e-12);
            assert!((up.length() - 1.0).abs() < 1e-12);
        }
    }
}
