//! Render-ready scene: validated camera, surfaces, materials, and lights.

use crate::{Camera, RenderError, RenderResult, Surface};
use log::{debug, warn};
use prism_core::{Light, Material, Scene, SceneSettings};

/// Everything the shading evaluator reads. Immutable once built, so it can be
/// shared by reference across render workers.
#[derive(Debug, Clone)]
pub struct RenderScene {
    camera: Camera,
    settings: SceneSettings,
    lights: Vec<Light>,
    materials: Vec<Material>,
    surfaces: Vec<Surface>,
}

impl RenderScene {
    /// Assemble a scene, validating every cross reference up front.
    pub fn new(
        camera: Camera,
        settings: SceneSettings,
        lights: Vec<Light>,
        materials: Vec<Material>,
        surfaces: Vec<Surface>,
    ) -> RenderResult<Self> {
        if settings.shadow_ray_grid_size == 0 {
            return Err(RenderError::InvalidShadowGridSize);
        }

        for (id, surface) in surfaces.iter().enumerate() {
            let index = surface.material_index();
            if index == 0 || index > materials.len() {
                return Err(RenderError::MaterialIndexOutOfRange {
                    surface: id,
                    kind: surface.kind(),
                    index,
                    count: materials.len(),
                });
            }
        }

        if lights.is_empty() && !surfaces.is_empty() {
            warn!("Scene has surfaces but no lights; only reflections of the background will show");
        }
        if settings.shadow_ray_grid_size > 1 && lights.iter().any(|light| light.radius <= 0.0) {
            warn!("Soft shadows requested but some lights have zero radius; those shadows stay hard");
        }

        debug!(
            "Render scene: {} surfaces, {} materials, {} lights",
            surfaces.len(),
            materials.len(),
            lights.len()
        );

        Ok(Self {
            camera,
            settings,
            lights,
            materials,
            surfaces,
        })
    }

    /// Build from a parsed scene description.
    pub fn from_scene(scene: &Scene) -> RenderResult<Self> {
        let camera = Camera::from_params(&scene.camera)?;
        let surfaces = scene
            .surfaces
            .iter()
            .enumerate()
            .map(|(id, desc)| Surface::from_desc(id, desc))
            .collect::<RenderResult<Vec<_>>>()?;

        Self::new(
            camera,
            scene.settings.clone(),
            scene.lights.clone(),
            scene.materials.clone(),
            surfaces,
        )
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Material of a surface. Indices were range-checked in [`RenderScene::new`].
    #[inline]
    pub fn material_of(&self, surface: &Surface) -> &Material {
        &self.materials[surface.material_index() - 1]
    }
}
