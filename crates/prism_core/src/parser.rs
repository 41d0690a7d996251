//! Scene file parser.
//!
//! The format is line oriented: one record per line, a keyword followed by
//! whitespace-separated numbers. Blank lines and `#` comments are skipped.
//!
//! # Records
//!
//! - `cam px py pz lx ly lz ux uy uz screen_distance screen_width`
//! - `set bgr bgg bgb shadow_rays max_recursion`
//! - `mtl dr dg db sr sg sb rr rg rb shininess transparency`
//! - `sph cx cy cz radius material`
//! - `pln nx ny nz offset material`
//! - `box cx cy cz scale material`
//! - `lgt px py pz r g b specular_intensity shadow_intensity radius`
//!
//! Materials are numbered from 1 in file order.

use std::path::Path;

use log::{debug, info};
use prism_math::Vec3;
use thiserror::Error;

use crate::scene::{CameraParams, Light, Material, Scene, SceneSettings, SurfaceDesc};

/// Errors that can occur while reading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown record type '{keyword}' at line {line}")]
    UnknownRecord { line: usize, keyword: String },

    #[error("Record '{keyword}' at line {line} expects {expected} parameters, found {found}")]
    ParameterCount {
        line: usize,
        keyword: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number '{token}' at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Expected a non-negative integer at line {line}, found '{token}'")]
    InvalidInteger { line: usize, token: String },

    #[error("Duplicate '{keyword}' record at line {line}")]
    Duplicate { line: usize, keyword: &'static str },

    #[error("Scene has no camera ('cam') record")]
    MissingCamera,

    #[error("Scene has no settings ('set') record")]
    MissingSettings,
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// One tokenized line of a scene file.
struct Record<'a> {
    line: usize,
    keyword: &'a str,
    params: Vec<&'a str>,
}

impl<'a> Record<'a> {
    fn tokenize(line: usize, text: &'a str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let mut tokens = trimmed.split_whitespace();
        let keyword = tokens.next()?;
        Some(Self {
            line,
            keyword,
            params: tokens.collect(),
        })
    }

    /// Parse every parameter as a number, checking the count first.
    fn numbers(&self, keyword: &'static str, expected: usize) -> SceneResult<Vec<f64>> {
        if self.params.len() != expected {
            return Err(SceneError::ParameterCount {
                line: self.line,
                keyword,
                expected,
                found: self.params.len(),
            });
        }
        self.params
            .iter()
            .map(|token| {
                token.parse::<f64>().map_err(|_| SceneError::InvalidNumber {
                    line: self.line,
                    token: token.to_string(),
                })
            })
            .collect()
    }

    /// Interpret an already-parsed parameter as a count or index.
    fn integer(&self, value: f64, position: usize) -> SceneResult<usize> {
        if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            Ok(value as usize)
        } else {
            Err(SceneError::InvalidInteger {
                line: self.line,
                token: self.params[position].to_string(),
            })
        }
    }
}

fn vec3(values: &[f64]) -> Vec3 {
    Vec3::new(values[0], values[1], values[2])
}

/// Incremental scene builder fed one record at a time.
#[derive(Default)]
struct SceneParser {
    camera: Option<CameraParams>,
    settings: Option<SceneSettings>,
    lights: Vec<Light>,
    materials: Vec<Material>,
    surfaces: Vec<SurfaceDesc>,
}

impl SceneParser {
    fn parse_record(&mut self, record: &Record) -> SceneResult<()> {
        match record.keyword {
            "cam" => {
                if self.camera.is_some() {
                    return Err(SceneError::Duplicate { line: record.line, keyword: "cam" });
                }
                let v = record.numbers("cam", 11)?;
                self.camera = Some(CameraParams::new(
                    vec3(&v[0..3]),
                    vec3(&v[3..6]),
                    vec3(&v[6..9]),
                    v[9],
                    v[10],
                ));
            }
            "set" => {
                if self.settings.is_some() {
                    return Err(SceneError::Duplicate { line: record.line, keyword: "set" });
                }
                let v = record.numbers("set", 5)?;
                self.settings = Some(SceneSettings {
                    background_color: vec3(&v[0..3]),
                    shadow_ray_grid_size: record.integer(v[3], 3)? as u32,
                    max_recursion_depth: record.integer(v[4], 4)? as u32,
                });
            }
            "mtl" => {
                let v = record.numbers("mtl", 11)?;
                self.materials.push(Material {
                    diffuse_color: vec3(&v[0..3]),
                    specular_color: vec3(&v[3..6]),
                    reflection_color: vec3(&v[6..9]),
                    shininess: v[9],
                    transparency: v[10],
                });
            }
            "sph" => {
                let v = record.numbers("sph", 5)?;
                self.surfaces.push(SurfaceDesc::Sphere {
                    center: vec3(&v[0..3]),
                    radius: v[3],
                    material_index: record.integer(v[4], 4)?,
                });
            }
            "pln" => {
                let v = record.numbers("pln", 5)?;
                self.surfaces.push(SurfaceDesc::Plane {
                    normal: vec3(&v[0..3]),
                    offset: v[3],
                    material_index: record.integer(v[4], 4)?,
                });
            }
            "box" => {
                let v = record.numbers("box", 5)?;
                self.surfaces.push(SurfaceDesc::Cube {
                    center: vec3(&v[0..3]),
                    scale: v[3],
                    material_index: record.integer(v[4], 4)?,
                });
            }
            "lgt" => {
                let v = record.numbers("lgt", 9)?;
                self.lights.push(Light {
                    position: vec3(&v[0..3]),
                    color: vec3(&v[3..6]),
                    specular_intensity: v[6],
                    shadow_intensity: v[7],
                    radius: v[8],
                });
            }
            other => {
                return Err(SceneError::UnknownRecord {
                    line: record.line,
                    keyword: other.to_string(),
                });
            }
        }
        Ok(())
    }

    fn finish(self, name: &str) -> SceneResult<Scene> {
        let camera = self.camera.ok_or(SceneError::MissingCamera)?;
        let settings = self.settings.ok_or(SceneError::MissingSettings)?;

        debug!(
            "Parsed scene '{}': {} materials, {} surfaces, {} lights",
            name,
            self.materials.len(),
            self.surfaces.len(),
            self.lights.len()
        );

        Ok(Scene {
            name: name.to_string(),
            camera,
            settings,
            lights: self.lights,
            materials: self.materials,
            surfaces: self.surfaces,
        })
    }
}

/// Parse scene file contents.
pub fn parse_scene_str(content: &str) -> SceneResult<Scene> {
    parse_named(content, "unnamed")
}

fn parse_named(content: &str, name: &str) -> SceneResult<Scene> {
    let mut parser = SceneParser::default();
    for (index, text) in content.lines().enumerate() {
        if let Some(record) = Record::tokenize(index + 1, text) {
            parser.parse_record(&record)?;
        }
    }
    parser.finish(name)
}

/// Load a scene file from disk. The scene is named after the file stem.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let content = std::fs::read_to_string(path)?;
    let scene = parse_named(&content, name)?;

    info!(
        "Loaded scene {} ({} surfaces, {} lights)",
        path.display(),
        scene.surfaces.len(),
        scene.lights.len()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: &str = "
# Camera: position, look-at, up, screen distance, screen width
cam 0 10 -2   0 -100 -4   0 1 0   1.4 1
set 1 1 1 5 10

mtl 0.95 0.07 0.07  1 1 1  0.2 0.1 0.1  30 0
mtl 0.1 0.1 0.1     1 1 1  0.1 0.2 0.1  30 0.5

pln 0 1 0 -1 1
sph -0.8 -0.5 -3 0.5 2
box 0 -0.5 -5 1 1

lgt 0 3 0  0.8 0.8 0.8  0.5 0.9 1
";

    #[test]
    fn test_parse_full_scene() {
        let _ = env_logger::builder().is_test(true).try_init();
        let scene = parse_scene_str(POOL).expect("scene should parse");

        assert_eq!(scene.camera.position, Vec3::new(0.0, 10.0, -2.0));
        assert_eq!(scene.camera.up_hint, Vec3::Y);
        assert_eq!(scene.camera.screen_distance, 1.4);
        assert_eq!(scene.settings.background_color, Vec3::ONE);
        assert_eq!(scene.settings.shadow_ray_grid_size, 5);
        assert_eq!(scene.settings.max_recursion_depth, 10);

        assert_eq!(scene.materials.len(), 2);
        assert_eq!(scene.materials[1].transparency, 0.5);
        assert_eq!(scene.materials[0].shininess, 30.0);

        assert_eq!(scene.surfaces.len(), 3);
        assert_eq!(
            scene.surfaces[0],
            SurfaceDesc::Plane { normal: Vec3::Y, offset: -1.0, material_index: 1 }
        );
        assert_eq!(scene.surfaces[1].material_index(), 2);
        assert_eq!(scene.surfaces[2].kind(), "cube");

        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.lights[0].shadow_intensity, 0.9);
        assert_eq!(scene.lights[0].radius, 1.0);
    }

    #[test]
    fn test_materials_numbered_in_file_order() {
        let content = "
cam 0 0 -5 0 0 0 0 1 0 1 1
mtl 1 0 0 0 0 0 0 0 0 1 0
sph 0 0 0 1 2
set 0 0 0 1 1
mtl 0 1 0 0 0 0 0 0 0 1 0
";
        let scene = parse_scene_str(content).expect("scene should parse");
        let index = scene.surfaces[0].material_index();
        assert_eq!(
            scene.material(index).map(|m| m.diffuse_color),
            Some(Vec3::new(0.0, 1.0, 0.0))
        );
    }

    #[test]
    fn test_unknown_record() {
        let err = parse_scene_str("cam 0 0 0 0 0 1 0 1 0 1 1\ntri 0 0 0").unwrap_err();
        match err {
            SceneError::UnknownRecord { line, keyword } => {
                assert_eq!(line, 2);
                assert_eq!(keyword, "tri");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_parameter_count() {
        let err = parse_scene_str("sph 0 0 0 1").unwrap_err();
        assert!(matches!(
            err,
            SceneError::ParameterCount { keyword: "sph", expected: 5, found: 4, .. }
        ));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_scene_str("sph 0 zero 0 1 1").unwrap_err();
        assert!(matches!(err, SceneError::InvalidNumber { line: 1, ref token } if token == "zero"));
    }

    #[test]
    fn test_fractional_material_index_rejected() {
        let err = parse_scene_str("box 0 0 0 1 1.5").unwrap_err();
        assert!(matches!(err, SceneError::InvalidInteger { .. }));

        let err = parse_scene_str("set 0 0 0 -1 3").unwrap_err();
        assert!(matches!(err, SceneError::InvalidInteger { .. }));
    }

    #[test]
    fn test_missing_and_duplicate_records() {
        assert!(matches!(
            parse_scene_str("set 0 0 0 1 1"),
            Err(SceneError::MissingCamera)
        ));
        assert!(matches!(
            parse_scene_str("cam 0 0 -5 0 0 0 0 1 0 1 1"),
            Err(SceneError::MissingSettings)
        ));
        assert!(matches!(
            parse_scene_str("set 0 0 0 1 1\nset 0 0 0 1 1"),
            Err(SceneError::Duplicate { line: 2, keyword: "set" })
        ));
    }

    #[test]
    fn test_load_scene_missing_file() {
        let err = load_scene("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
