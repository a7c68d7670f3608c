use crate::constants::{EYE_DISTANCE, MAX_BOUNCES};
use crate::error::{RenderError, Result};
use crate::objects::{Light, Sphere, SphereHit};
use crate::room::Room;
use crate::vec3::{Color, Vec3};
use log::debug;

/// Everything a render reads. Built and validated once, then only borrowed.
#[derive(Clone, Debug)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub room: Room,
    pub eye_distance: f64,
    pub max_bounces: u32,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, room: Room) -> Result<Self> {
        for (index, sphere) in spheres.iter().enumerate() {
            validate_sphere(index, sphere)?;
        }
        for (index, light) in lights.iter().enumerate() {
            validate_light(index, light)?;
        }
        validate_room(&room)?;
        debug!(
            "Scene with {} spheres and {} lights",
            spheres.len(),
            lights.len()
        );
        Ok(Self {
            spheres,
            lights,
            room,
            eye_distance: EYE_DISTANCE,
            max_bounces: MAX_BOUNCES,
        })
    }

    pub fn with_eye_distance(mut self, eye_distance: f64) -> Result<Self> {
        if !(eye_distance > 0.0 && eye_distance.is_finite()) {
            return Err(RenderError::InvalidEyeDistance(eye_distance));
        }
        self.eye_distance = eye_distance;
        Ok(self)
    }

    pub fn with_max_bounces(mut self, max_bounces: u32) -> Self {
        self.max_bounces = max_bounces;
        self
    }

    /// Three spheres in a room sized to the screen, lit by an ambient term, a
    /// point light on the ceiling and a directional light.
    pub fn showcase(width: u32, height: u32) -> Result<Self> {
        let spheres = vec![
            Sphere::new(
                Vec3::new(-500.0, -50.0, 300.0),
                100.0,
                Color::new(0.0, 255.0, 0.0),
                Some(500.0),
                0.0,
            ),
            Sphere::new(
                Vec3::new(300.0, 0.0, 300.0),
                100.0,
                Color::new(255.0, 0.0, 0.0),
                Some(500.0),
                0.1,
            ),
            Sphere::new(
                Vec3::new(0.0, 0.0, 500.0),
                100.0,
                Color::new(0.0, 0.0, 255.0),
                Some(1000.0),
                0.5,
            ),
        ];
        let lights = vec![
            Light::Point {
                position: Vec3::new(0.0, -(height as f64) / 2.0, 20.0),
                intensity: 0.6,
            },
            Light::Ambient { intensity: 0.2 },
            Light::Directional {
                direction: Vec3::new(1.0, 5.0, -1.0),
                intensity: 0.8,
            },
        ];
        Scene::new(spheres, lights, Room::for_viewport(width, height))
    }

    /// Nearest sphere along the ray. Only a strictly smaller `t` replaces the
    /// current best, so the earlier sphere wins a tie.
    pub fn closest_sphere(&self, origin: Vec3, direction: Vec3) -> Option<SphereHit<'_>> {
        let mut closest: Option<SphereHit<'_>> = None;
        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some(t) = sphere.intersect(origin, direction)
                && closest.is_none_or(|c| t < c.t)
            {
                closest = Some(SphereHit { t, index, sphere });
            }
        }
        closest
    }

    /// True when any sphere other than `exclude` lies along `(origin, toward)`.
    pub fn is_shadowed(&self, origin: Vec3, toward: Vec3, exclude: Option<usize>) -> bool {
        self.spheres
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != exclude)
            .any(|(_, sphere)| sphere.intersect(origin, toward).is_some())
    }
}

fn validate_sphere(index: usize, sphere: &Sphere) -> Result<()> {
    let invalid = |reason: String| Err(RenderError::InvalidSphere { index, reason });
    if !sphere.center.is_finite() || !sphere.color.is_finite() {
        return invalid("center and color must be finite".to_string());
    }
    if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
        return invalid(format!("radius must be positive, got {}", sphere.radius));
    }
    if !(0.0..=1.0).contains(&sphere.reflectivity) {
        return invalid(format!(
            "reflectivity must be within [0, 1], got {}",
            sphere.reflectivity
        ));
    }
    if let Some(specular) = sphere.specular
        && !(specular >= 0.0 && specular.is_finite())
    {
        return invalid(format!("specular exponent must be >= 0, got {specular}"));
    }
    Ok(())
}

fn validate_room(room: &Room) -> Result<()> {
    let offsets = [room.left, room.right, room.floor, room.ceiling];
    if !offsets.iter().all(|o| o.is_finite()) {
        return Err(RenderError::InvalidRoom(
            "wall offsets must be finite".to_string(),
        ));
    }
    if !(room.back > 0.0 && room.back.is_finite()) {
        return Err(RenderError::InvalidRoom(format!(
            "back wall must sit at a positive depth, got {}",
            room.back
        )));
    }
    if !room.color.is_finite() {
        return Err(RenderError::InvalidRoom(
            "wall color must be finite".to_string(),
        ));
    }
    if !(room.specular >= 0.0 && room.specular.is_finite()) {
        return Err(RenderError::InvalidRoom(format!(
            "wall specular exponent must be >= 0, got {}",
            room.specular
        )));
    }
    Ok(())
}

fn validate_light(index: usize, light: &Light) -> Result<()> {
    let invalid = |reason: &str| {
        Err(RenderError::InvalidLight {
            index,
            reason: reason.to_string(),
        })
    };
    if !light.intensity().is_finite() {
        return invalid("intensity must be finite");
    }
    match *light {
        Light::Ambient { .. } => Ok(()),
        Light::Point { position, .. } if !position.is_finite() => {
            invalid("position must be finite")
        }
        Light::Directional { direction, .. } if direction.dot(direction) == 0.0 => {
            invalid("direction must be non-zero")
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(center: Vec3, radius: f64) -> Sphere {
        Sphere::new(center, radius, Color::new(255.0, 255.0, 255.0), None, 0.0)
    }

    fn scene(spheres: Vec<Sphere>) -> Scene {
        Scene::new(spheres, vec![], Room::for_viewport(800, 600)).unwrap()
    }

    #[test]
    fn showcase_is_valid() {
        let scene = Scene::showcase(800, 600).unwrap();
        assert_eq!(scene.spheres.len(), 3);
        assert_eq!(scene.lights.len(), 3);
        assert_eq!(scene.max_bounces, MAX_BOUNCES);
        assert_eq!(scene.eye_distance, EYE_DISTANCE);
    }

    #[test]
    fn closest_sphere_picks_nearest() {
        let scene = scene(vec![
            plain(Vec3::new(0.0, 0.0, 600.0), 100.0),
            plain(Vec3::new(0.0, 0.0, 300.0), 100.0),
        ]);
        let hit = scene
            .closest_sphere(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0))
            .unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.t, 200.0);
    }

    #[test]
    fn closest_sphere_tie_keeps_first() {
        let a = plain(Vec3::new(0.0, 0.0, 300.0), 100.0);
        let scene = scene(vec![a, a]);
        let hit = scene
            .closest_sphere(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0))
            .unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn closest_sphere_none_on_miss() {
        let scene = scene(vec![plain(Vec3::new(0.0, 0.0, 300.0), 100.0)]);
        assert!(
            scene
                .closest_sphere(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0))
                .is_none()
        );
    }

    #[test]
    fn shadow_ignores_excluded_sphere() {
        let scene = scene(vec![plain(Vec3::new(0.0, 0.0, 300.0), 100.0)]);
        let up = Vec3::new(0.0, 0.0, 1.0);
        assert!(scene.is_shadowed(Vec3::ZERO, up, None));
        assert!(!scene.is_shadowed(Vec3::ZERO, up, Some(0)));
    }

    #[test]
    fn rejects_bad_spheres() {
        let room = Room::for_viewport(10, 10);
        let mut bad = plain(Vec3::ZERO, -1.0);
        let err = Scene::new(vec![bad], vec![], room).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSphere { index: 0, .. }));

        bad.radius = 1.0;
        bad.reflectivity = 1.5;
        assert!(Scene::new(vec![bad], vec![], room).is_err());

        bad.reflectivity = 0.5;
        bad.specular = Some(-2.0);
        assert!(Scene::new(vec![bad], vec![], room).is_err());
    }

    #[test]
    fn rejects_bad_lights() {
        let room = Room::for_viewport(10, 10);
        let lights = vec![
            Light::Ambient { intensity: 0.1 },
            Light::Directional {
                direction: Vec3::ZERO,
                intensity: 1.0,
            },
        ];
        let err = Scene::new(vec![], lights, room).unwrap_err();
        assert!(matches!(err, RenderError::InvalidLight { index: 1, .. }));

        let lights = vec![Light::Ambient {
            intensity: f64::NAN,
        }];
        assert!(Scene::new(vec![], lights, room).is_err());
    }

    #[test]
    fn rejects_bad_rooms() {
        let good = Room::for_viewport(10, 10);
        let cases = [
            Room { back: f64::NAN, ..good },
            Room { back: -5.0, ..good },
            Room { color: Color::new(f64::INFINITY, 0.0, 0.0), ..good },
            Room { specular: -5.0, ..good },
            Room { left: f64::NEG_INFINITY, ..good },
        ];
        for room in cases {
            let err = Scene::new(vec![], vec![], room).unwrap_err();
            assert!(matches!(err, RenderError::InvalidRoom(_)), "{room:?}");
        }
    }

    #[test]
    fn eye_distance_must_be_positive() {
        let scene = scene(vec![]);
        assert!(scene.clone().with_eye_distance(0.0).is_err());
        assert_eq!(scene.with_eye_distance(500.0).unwrap().eye_distance, 500.0);
    }
}
