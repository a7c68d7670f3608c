pub mod config;
pub mod constants;
pub mod error;
pub mod objects;
pub mod output;
pub mod ray;
pub mod render;
pub mod room;
pub mod scene;
pub mod shading;
pub mod trace;
pub mod vec3;

pub use error::{RenderError, Result};
pub use render::{PixelSink, RenderOptions, render, render_frame, render_with};
pub use scene::Scene;
pub use vec3::{Color, Vec3};
