//! Scene description records.
//!
//! These types mirror the records of a scene file one to one. They carry no
//! derived state; the renderer turns them into its own render-ready types.

use prism_math::Vec3;

/// Color type alias (RGB reflectance, usually 0-1 but not clamped)
pub type Color = Vec3;

/// Raw camera parameters, as written in a `cam` record.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraParams {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Seed for the camera's up axis; need not be orthogonal to the view
    pub up_hint: Vec3,
    /// Distance from the camera to the virtual screen along the view axis
    pub screen_distance: f64,
    /// Width of the virtual screen in world units
    pub screen_width: f64,
}

impl CameraParams {
    pub fn new(
        position: Vec3,
        look_at: Vec3,
        up_hint: Vec3,
        screen_distance: f64,
        screen_width: f64,
    ) -> Self {
        Self {
            position,
            look_at,
            up_hint,
            screen_distance,
            screen_width,
        }
    }
}

/// Global render settings from the `set` record.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSettings {
    /// Color returned by rays that escape the scene
    pub background_color: Color,
    /// N for the N x N soft shadow grid; 1 gives hard shadows
    pub shadow_ray_grid_size: u32,
    /// Maximum number of reflection/transparency bounces
    pub max_recursion_depth: u32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            background_color: Color::ZERO,
            shadow_ray_grid_size: 1,
            max_recursion_depth: 3,
        }
    }
}

/// A point light with an optional area extent for soft shadows.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    /// Scale of the specular highlight produced by this light (0-1)
    pub specular_intensity: f64,
    /// How dark a fully occluded point becomes (0 = no shadow, 1 = black)
    pub shadow_intensity: f64,
    /// Side length of the square area sampled for soft shadows
    pub radius: f64,
}

impl Light {
    /// Create a hard point light with full specular and shadow intensity.
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position,
            color,
            specular_intensity: 1.0,
            shadow_intensity: 1.0,
            radius: 0.0,
        }
    }

    pub fn with_specular_intensity(mut self, specular_intensity: f64) -> Self {
        self.specular_intensity = specular_intensity;
        self
    }

    /// Set shadow darkness and area-light extent.
    pub fn with_shadow(mut self, shadow_intensity: f64, radius: f64) -> Self {
        self.shadow_intensity = shadow_intensity;
        self.radius = radius;
        self
    }
}

/// A Phong-style material with mirror reflection and straight-through transparency.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse_color: Color,
    pub specular_color: Color,
    /// Per-channel mirror reflectance; all zero disables reflection rays
    pub reflection_color: Color,
    /// Phong exponent
    pub shininess: f64,
    /// 0 = opaque, 1 = fully transparent
    pub transparency: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Color::splat(0.5), // Grey default
            specular_color: Color::ZERO,
            reflection_color: Color::ZERO,
            shininess: 1.0,
            transparency: 0.0,
        }
    }
}

impl Material {
    /// Create a purely diffuse material.
    pub fn diffuse(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }

    pub fn with_specular(mut self, specular_color: Color, shininess: f64) -> Self {
        self.specular_color = specular_color;
        self.shininess = shininess;
        self
    }

    pub fn with_reflection(mut self, reflection_color: Color) -> Self {
        self.reflection_color = reflection_color;
        self
    }

    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }

    /// Check if this material spawns reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.reflection_color != Color::ZERO
    }

    /// Check if this material spawns transmission rays.
    pub fn is_transparent(&self) -> bool {
        self.transparency > 0.0
    }
}

/// A surface record. `material_index` is 1-based into `Scene::materials`.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceDesc {
    Sphere {
        center: Vec3,
        radius: f64,
        material_index: usize,
    },
    /// The set of points P with `normal · P = offset`
    Plane {
        normal: Vec3,
        offset: f64,
        material_index: usize,
    },
    /// Axis-aligned cube with edge length `scale`
    Cube {
        center: Vec3,
        scale: f64,
        material_index: usize,
    },
}

impl SurfaceDesc {
    /// The 1-based material index this surface refers to.
    pub fn material_index(&self) -> usize {
        match self {
            SurfaceDesc::Sphere { material_index, .. }
            | SurfaceDesc::Plane { material_index, .. }
            | SurfaceDesc::Cube { material_index, .. } => *material_index,
        }
    }

    /// Short record keyword, for log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SurfaceDesc::Sphere { .. } => "sphere",
            SurfaceDesc::Plane { .. } => "plane",
            SurfaceDesc::Cube { .. } => "cube",
        }
    }
}

/// A complete scene: camera, settings, and the lists the surfaces refer into.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,
    pub camera: CameraParams,
    pub settings: SceneSettings,
    pub lights: Vec<Light>,
    /// Ordered; a surface's `material_index` of 1 means `materials[0]`
    pub materials: Vec<Material>,
    pub surfaces: Vec<SurfaceDesc>,
}

impl Scene {
    /// Create an empty scene with the given camera and settings.
    pub fn new(name: impl Into<String>, camera: CameraParams, settings: SceneSettings) -> Self {
        Self {
            name: name.into(),
            camera,
            settings,
            lights: Vec::new(),
            materials: Vec::new(),
            surfaces: Vec::new(),
        }
    }

    /// Add a material and return its 1-based index.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len()
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_surface(&mut self, surface: SurfaceDesc) {
        self.surfaces.push(surface);
    }

    /// Get a material by its 1-based index.
    pub fn material(&self, index: usize) -> Option<&Material> {
        index.checked_sub(1).and_then(|i| self.materials.get(i))
    }
}
