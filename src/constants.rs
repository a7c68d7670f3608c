use crate::vec3::Color;

pub const WINDOW_WIDTH: usize = 1280;
pub const WINDOW_HEIGHT: usize = 720;

/// Distance from the eye to the screen plane at z = 0.
pub const EYE_DISTANCE: f64 = 2000.0;
pub const MAX_BOUNCES: u32 = 10;

pub const BACK_WALL_Z: f64 = 1500.0;
pub const WALL_COLOR: Color = Color::new(200.0, 200.0, 200.0);
pub const WALL_SPECULAR: f64 = 1000.0;

pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0);
