use crate::error::Result;
use crate::vec3::{Color, Vec3};

/// A ray plus the result of tracing it. The direction is normalized once here
/// and left alone afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub hit: bool,
    /// Distance to the nearest sphere, `None` if no sphere was hit.
    pub distance: Option<f64>,
    pub color: Color,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self> {
        Ok(Self {
            origin,
            direction: direction.normalize()?,
            hit: false,
            distance: None,
            color: Color::ZERO,
        })
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }
}
