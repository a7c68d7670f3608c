use crate::constants::BACKGROUND;
use crate::error::Result;
use crate::objects::SphereHit;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::luminance;
use crate::vec3::{Color, Vec3};

/// Color seen along `(point, direction)`, following mirror reflections for at
/// most `remaining_bounces` more hops.
///
/// `origin_sphere` is the sphere a reflected ray leaves from. If the nearest
/// hit is that same sphere the ray is treated as a miss and falls through to
/// the room.
pub fn trace(
    scene: &Scene,
    point: Vec3,
    direction: Vec3,
    remaining_bounces: u32,
    origin_sphere: Option<usize>,
) -> Result<Color> {
    match scene.closest_sphere(point, direction) {
        Some(hit) if Some(hit.index) != origin_sphere => {
            shade_sphere(scene, hit, point, direction, remaining_bounces)
        }
        _ => Ok(room_color(scene, point, direction)),
    }
}

/// Traces a primary ray with the scene's full bounce budget and stores the
/// outcome on the ray.
pub fn cast(scene: &Scene, ray: &mut Ray) -> Result<()> {
    match scene.closest_sphere(ray.origin, ray.direction) {
        Some(hit) => {
            ray.hit = true;
            ray.distance = Some(hit.t);
            ray.color = shade_sphere(scene, hit, ray.origin, ray.direction, scene.max_bounces)?;
        }
        None => {
            ray.hit = false;
            ray.distance = None;
            ray.color = room_color(scene, ray.origin, ray.direction);
        }
    }
    Ok(())
}

/// Walls are shaded like a glossy surface and never excluded from shadowing.
pub fn room_color(scene: &Scene, point: Vec3, direction: Vec3) -> Color {
    let room = &scene.room;
    match room.resolve(point, direction) {
        Some(hit) => {
            let lum = luminance(
                scene,
                hit.point,
                hit.normal,
                -direction,
                Some(room.specular),
                None,
            );
            room.color * lum
        }
        None => BACKGROUND,
    }
}

fn shade_sphere(
    scene: &Scene,
    hit: SphereHit<'_>,
    origin: Vec3,
    direction: Vec3,
    remaining_bounces: u32,
) -> Result<Color> {
    let sphere = hit.sphere;
    let point = origin + hit.t * direction;
    let normal = (point - sphere.center).normalize()?;
    let to_camera = -direction;

    let lum = luminance(
        scene,
        point,
        normal,
        to_camera,
        sphere.specular,
        Some(hit.index),
    );
    let local = sphere.color * lum;

    let r = sphere.reflectivity;
    if r <= 0.0 || remaining_bounces == 0 {
        return Ok(local);
    }

    let mirror = 2.0 * to_camera.dot(normal) * normal - to_camera;
    let reflected = trace(scene, point, mirror, remaining_bounces - 1, Some(hit.index))?;
    Ok((1.0 - r) * local + r * reflected)
}
