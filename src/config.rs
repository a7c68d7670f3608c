//! YAML scene descriptions.
//!
//! ```yaml
//! eye_distance: 2000
//! max_bounces: 10
//! room:
//!   back: 1500
//!   color: [200, 200, 200]
//!   specular: 1000
//! spheres:
//!   - center: [0, 0, 500]
//!     radius: 100
//!     color: [0, 0, 255]
//!     specular: 1000
//!     reflectivity: 0.5
//! lights:
//!   - type: ambient
//!     intensity: 0.2
//!   - type: point
//!     position: [0, -300, 20]
//!     intensity: 0.6
//!   - type: directional
//!     direction: [1, 5, -1]
//!     intensity: 0.8
//! ```

use crate::error::{RenderError, Result};
use crate::objects::{Light, Sphere};
use crate::room::Room;
use crate::scene::Scene;
use crate::vec3::Vec3;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default)]
    pub eye_distance: Option<f64>,
    #[serde(default)]
    pub max_bounces: Option<u32>,
    #[serde(default)]
    pub room: RoomConfig,
    pub spheres: Vec<SphereConfig>,
    pub lights: Vec<LightConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomConfig {
    pub back: Option<f64>,
    pub color: Option<[f64; 3]>,
    pub specular: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    pub center: [f64; 3],
    pub radius: f64,
    pub color: [f64; 3],
    #[serde(default)]
    pub specular: Option<f64>,
    #[serde(default)]
    pub reflectivity: f64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightConfig {
    Ambient { intensity: f64 },
    Point { position: [f64; 3], intensity: f64 },
    Directional { direction: [f64; 3], intensity: f64 },
}

fn vec3([x, y, z]: [f64; 3]) -> Vec3 {
    Vec3::new(x, y, z)
}

impl From<&SphereConfig> for Sphere {
    fn from(c: &SphereConfig) -> Self {
        Sphere::new(
            vec3(c.center),
            c.radius,
            vec3(c.color),
            c.specular,
            c.reflectivity,
        )
    }
}

impl From<&LightConfig> for Light {
    fn from(c: &LightConfig) -> Self {
        match *c {
            LightConfig::Ambient { intensity } => Light::Ambient { intensity },
            LightConfig::Point {
                position,
                intensity,
            } => Light::Point {
                position: vec3(position),
                intensity,
            },
            LightConfig::Directional {
                direction,
                intensity,
            } => Light::Directional {
                direction: vec3(direction),
                intensity,
            },
        }
    }
}

impl SceneFile {
    pub fn into_scene(self, width: u32, height: u32) -> Result<Scene> {
        let mut room = Room::for_viewport(width, height);
        if let Some(back) = self.room.back {
            room.back = back;
        }
        if let Some(color) = self.room.color {
            room.color = vec3(color);
        }
        if let Some(specular) = self.room.specular {
            room.specular = specular;
        }

        let spheres = self.spheres.iter().map(Sphere::from).collect();
        let lights = self.lights.iter().map(Light::from).collect();
        let mut scene = Scene::new(spheres, lights, room)?;
        if let Some(eye_distance) = self.eye_distance {
            scene = scene.with_eye_distance(eye_distance)?;
        }
        if let Some(max_bounces) = self.max_bounces {
            scene = scene.with_max_bounces(max_bounces);
        }
        Ok(scene)
    }
}

pub fn parse_scene(content: &str, width: u32, height: u32) -> Result<Scene> {
    let file: SceneFile = serde_yaml::from_str(content)?;
    file.into_scene(width, height)
}

/// Load and validate a scene from a YAML file
pub fn load_scene<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Scene> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RenderError::SceneNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_scene(&content, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
eye_distance: 1500
max_bounces: 3
room:
  back: 900
  color: [10, 20, 30]
spheres:
  - center: [0, 0, 500]
    radius: 100
    color: [0, 0, 255]
    specular: 1000
    reflectivity: 0.5
  - center: [300, 0, 300]
    radius: 50
    color: [255, 0, 0]
lights:
  - type: ambient
    intensity: 0.2
  - type: point
    position: [0, -300, 20]
    intensity: 0.6
  - type: directional
    direction: [1, 5, -1]
    intensity: 0.8
"#;

    #[test]
    fn parses_full_scene() {
        let scene = parse_scene(FULL, 800, 600).unwrap();
        assert_eq!(scene.eye_distance, 1500.0);
        assert_eq!(scene.max_bounces, 3);
        assert_eq!(scene.room.back, 900.0);
        assert_eq!(scene.room.left, -400.0);
        assert_eq!(scene.room.color, Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[0].specular, Some(1000.0));
        assert_eq!(scene.spheres[1].specular, None);
        assert_eq!(scene.spheres[1].reflectivity, 0.0);
        assert_eq!(
            scene.lights[2],
            Light::Directional {
                direction: Vec3::new(1.0, 5.0, -1.0),
                intensity: 0.8
            }
        );
    }

    #[test]
    fn unknown_light_type_fails_at_load() {
        let content = r#"
spheres: []
lights:
  - type: spot
    intensity: 1.0
"#;
        let err = parse_scene(content, 800, 600).unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)));
    }

    #[test]
    fn invalid_sphere_fails_validation() {
        let content = r#"
spheres:
  - center: [0, 0, 500]
    radius: -3
    color: [0, 0, 255]
lights: []
"#;
        let err = parse_scene(content, 800, 600).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSphere { index: 0, .. }));
    }

    #[test]
    fn invalid_room_overrides_fail_validation() {
        let bad_fields = [
            "back: .nan",
            "back: -10",
            "specular: -5",
            "color: [.inf, 0, 0]",
        ];
        for field in bad_fields {
            let content = format!("room:\n  {field}\nspheres: []\nlights: []\n");
            let err = parse_scene(&content, 800, 600).unwrap_err();
            assert!(matches!(err, RenderError::InvalidRoom(_)), "{field}");
        }
    }

    #[test]
    fn missing_file() {
        let err = load_scene("/nonexistent/scene.yaml", 800, 600).unwrap_err();
        assert!(matches!(err, RenderError::SceneNotFound(_)));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join("roomtracer_test_scene.yaml");
        std::fs::write(&path, FULL).unwrap();
        let scene = load_scene(&path, 640, 480).unwrap();
        assert_eq!(scene.room.floor, 240.0);
        let _ = std::fs::remove_file(&path);
    }
}
