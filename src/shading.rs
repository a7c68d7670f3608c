use crate::objects::Light;
use crate::scene::Scene;
use crate::vec3::Vec3;

/// Unclamped light reaching `point`, summed over every light in the scene.
///
/// Dot products are divided by the magnitudes of their operands instead of
/// relying on unit inputs; brightness depends on it. `exclude` is the sphere
/// being shaded, which never shadows itself.
pub fn luminance(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    to_camera: Vec3,
    specular: Option<f64>,
    exclude: Option<usize>,
) -> f64 {
    let mut lum = 0.0;
    for light in &scene.lights {
        let (l, intensity) = match *light {
            Light::Ambient { intensity } => {
                lum += intensity;
                continue;
            }
            Light::Point {
                position,
                intensity,
            } => (position - point, intensity),
            Light::Directional {
                direction,
                intensity,
            } => (direction, intensity),
        };

        if scene.is_shadowed(point, l, exclude) {
            continue;
        }

        let n_dot_l = normal.dot(l);
        if n_dot_l > 0.0 {
            lum += intensity * n_dot_l / (normal.magnitude() * l.magnitude());
        }

        if let Some(exponent) = specular {
            let r = 2.0 * n_dot_l * normal - l;
            let r_dot_v = r.dot(to_camera);
            if r_dot_v > 0.0 {
                let cos = r_dot_v / (r.magnitude() * to_camera.magnitude());
                lum += intensity * cos.powf(exponent);
            }
        }
    }
    lum
}
