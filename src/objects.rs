use crate::vec3::{Color, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub color: Color,
    /// Phong exponent, `None` disables the specular highlight.
    pub specular: Option<f64>,
    /// Mirror blend factor, 0 is fully diffuse.
    pub reflectivity: f64,
}

impl Sphere {
    pub fn new(
        center: Vec3,
        radius: f64,
        color: Color,
        specular: Option<f64>,
        reflectivity: f64,
    ) -> Self {
        Self {
            center,
            radius,
            color,
            specular,
            reflectivity,
        }
    }

    /// Nearest accepted root of |O + tD - C|^2 = r^2.
    ///
    /// `t1` is tried first and `t2` only when `t1` is not positive; tangent
    /// rays (zero discriminant) count as a miss. `direction` need not be unit
    /// length.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        let oc = origin - self.center;
        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let t1 = (-b - sqrt_d) / (2.0 * a);
        let t2 = (-b + sqrt_d) / (2.0 * a);
        if t1 > 0.0 && t1 < f64::INFINITY {
            Some(t1)
        } else if t2 > 0.0 && t2 < f64::INFINITY {
            Some(t2)
        } else {
            None
        }
    }
}

/// Result of the closest-sphere search. `index` is the sphere's position in
/// the scene and serves as its identity.
#[derive(Clone, Copy, Debug)]
pub struct SphereHit<'a> {
    pub t: f64,
    pub index: usize,
    pub sphere: &'a Sphere,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient { intensity: f64 },
    Point { position: Vec3, intensity: f64 },
    /// `direction` points from the surface toward the light and is used as
    /// given, without normalization.
    Directional { direction: Vec3, intensity: f64 },
}

impl Light {
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sphere_at(center: Vec3, radius: f64) -> Sphere {
        Sphere::new(center, radius, Color::new(255.0, 0.0, 0.0), None, 0.0)
    }

    #[test]
    fn head_on_ray_reports_entry_point() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 300.0), 100.0);
        let t = sphere.intersect(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(t, Some(200.0));
    }

    #[test]
    fn unnormalized_direction_scales_t() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 300.0), 100.0);
        let t = sphere.intersect(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0)).unwrap();
        assert_abs_diff_eq!(t, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn origin_inside_sphere_returns_exit_root() {
        let sphere = sphere_at(Vec3::ZERO, 10.0);
        let t = sphere.intersect(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(t, Some(10.0));
    }

    #[test]
    fn sphere_behind_origin_is_missed() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -300.0), 100.0);
        assert_eq!(sphere.intersect(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)), None);
    }

    #[test]
    fn tangent_ray_is_a_miss() {
        let sphere = sphere_at(Vec3::new(0.0, 100.0, 300.0), 100.0);
        assert_eq!(sphere.intersect(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)), None);
    }

    #[test]
    fn ray_outside_silhouette_misses() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 300.0), 100.0);
        let t = sphere.intersect(Vec3::new(150.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(t, None);
    }

    #[test]
    fn light_intensity_for_every_kind() {
        let lights = [
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                position: Vec3::ZERO,
                intensity: 0.6,
            },
            Light::Directional {
                direction: Vec3::new(1.0, 5.0, -1.0),
                intensity: 0.8,
            },
        ];
        let total: f64 = lights.iter().map(Light::intensity).sum();
        assert_abs_diff_eq!(total, 1.6, epsilon = 1e-12);
    }
}
