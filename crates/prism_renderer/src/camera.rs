//! Pinhole camera with a virtual screen for primary ray generation.

use crate::{RenderError, RenderResult};
use log::debug;
use prism_core::CameraParams;
use prism_math::{Ray, Vec3, EPSILON};

/// Camera for generating rays into the scene.
///
/// The basis `{forward, right, true_up}` is derived once at construction and
/// is orthonormal; the up hint only seeds the orthogonalization.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    screen_width: f64,

    // Cached basis
    forward: Vec3,
    right: Vec3,
    true_up: Vec3,
    screen_center: Vec3,
}

impl Camera {
    /// Build a camera, rejecting inputs that leave the view basis undefined.
    pub fn new(
        position: Vec3,
        look_at: Vec3,
        up_hint: Vec3,
        screen_distance: f64,
        screen_width: f64,
    ) -> RenderResult<Self> {
        if !(screen_width.is_finite() && screen_width > 0.0) {
            return Err(RenderError::InvalidScreenWidth(screen_width));
        }
        if !(screen_distance.is_finite() && screen_distance > 0.0) {
            return Err(RenderError::InvalidScreenDistance(screen_distance));
        }

        let view = look_at - position;
        if view.length() < EPSILON {
            return Err(RenderError::DegenerateCamera("look-at point equals camera position"));
        }
        let forward = view.normalize();

        let side = forward.cross(up_hint);
        if side.length() < EPSILON {
            return Err(RenderError::DegenerateCamera("up vector is parallel to the view direction"));
        }
        let right = side.normalize();
        let true_up = right.cross(forward).normalize();
        let screen_center = position + forward * screen_distance;

        debug!(
            "Camera basis: forward={:?} right={:?} up={:?}",
            forward, right, true_up
        );

        Ok(Self {
            position,
            screen_width,
            forward,
            right,
            true_up,
            screen_center,
        })
    }

    /// Build a camera from a scene file `cam` record.
    pub fn from_params(params: &CameraParams) -> RenderResult<Self> {
        Self::new(
            params.position,
            params.look_at,
            params.up_hint,
            params.screen_distance,
            params.screen_width,
        )
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Row 0 is the top of the image, so increasing `y` moves against `true_up`.
    pub fn ray_for_pixel(&self, x: u32, y: u32, image_width: u32, image_height: u32) -> Ray {
        let width = image_width as f64;
        let height = image_height as f64;

        let aspect = width / height;
        let screen_height = self.screen_width / aspect;

        let cx = (x as f64 + 0.5) - width / 2.0;
        let cy = (y as f64 + 0.5) - height / 2.0;

        let sx = self.screen_width / width;
        let sy = screen_height / height;

        let pixel_point = self.screen_center + cx * sx * self.right - cy * sy * self.true_up;
        Ray::towards(self.position, pixel_point)
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn true_up(&self) -> Vec3 {
        self.true_up
    }

    pub fn screen_center(&self) -> Vec3 {
        self.screen_center
    }
}
