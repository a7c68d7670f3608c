use crate::error::{RenderError, Result};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace::cast;
use crate::vec3::{Color, Vec3};
use log::{info, trace};
use rayon::prelude::*;
use std::time::Instant;

/// Receives finished pixels. Colors arrive unclamped; turning them into
/// display values is up to the sink.
pub trait PixelSink {
    fn write_pixel(&mut self, x: u32, y: u32, color: Color);
}

impl<F> PixelSink for F
where
    F: FnMut(u32, u32, f64, f64, f64),
{
    fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        self(x, y, color.x, color.y, color.z)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Trace one pixel per `stride x stride` block and repeat its color over
    /// the block. 1 traces every pixel.
    pub stride: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { stride: 1 }
    }
}

/// Ray from the screen pixel `(x, y)` away from an eye sitting
/// `eye_distance` behind the screen center.
pub fn primary_ray(x: u32, y: u32, width: u32, height: u32, eye_distance: f64) -> Result<Ray> {
    let sx = x as f64 - width as f64 / 2.0;
    let sy = y as f64 - height as f64 / 2.0;
    Ray::new(Vec3::new(sx, sy, 0.0), Vec3::new(sx, sy, eye_distance))
}

pub fn pixel_color(scene: &Scene, x: u32, y: u32, width: u32, height: u32) -> Result<Color> {
    let mut ray = primary_ray(x, y, width, height, scene.eye_distance)?;
    cast(scene, &mut ray)?;
    Ok(ray.color)
}

/// Renders every pixel in row-major order into `sink`. The scene's room must
/// be at least as large as the viewport, see [`Room::for_viewport`].
///
/// [`Room::for_viewport`]: crate::room::Room::for_viewport
pub fn render<S: PixelSink>(scene: &Scene, width: u32, height: u32, sink: &mut S) -> Result<()> {
    render_with(scene, width, height, &RenderOptions::default(), sink)
}

pub fn render_with<S: PixelSink>(
    scene: &Scene,
    width: u32,
    height: u32,
    options: &RenderOptions,
    sink: &mut S,
) -> Result<()> {
    check_viewport(scene, width, height, options)?;
    let start = Instant::now();
    let stride = options.stride;

    for y in (0..height).step_by(stride as usize) {
        for x in (0..width).step_by(stride as usize) {
            let color = pixel_color(scene, x, y, width, height)?;
            for by in y..(y + stride).min(height) {
                for bx in x..(x + stride).min(width) {
                    sink.write_pixel(bx, by, color);
                }
            }
        }
        trace!("Row {y} done");
    }

    info!("Rendered {width}x{height} in {:.2?}", start.elapsed());
    Ok(())
}

/// Parallel render into a row-major buffer of `width * height` colors.
///
/// Bands of `stride` rows are handed to rayon workers; each worker only
/// writes its own band and the scene is shared read-only.
pub fn render_frame(
    scene: &Scene,
    width: u32,
    height: u32,
    options: &RenderOptions,
    buffer: &mut [Color],
) -> Result<()> {
    check_viewport(scene, width, height, options)?;
    let expected = width as usize * height as usize;
    if buffer.len() != expected {
        return Err(RenderError::InvalidViewport {
            width,
            height,
            reason: format!("buffer holds {} pixels, expected {expected}", buffer.len()),
        });
    }

    let start = Instant::now();
    let row_len = width as usize;
    let stride = options.stride as usize;

    buffer
        .par_chunks_mut(row_len * stride)
        .enumerate()
        .try_for_each(|(band, pixels)| -> Result<()> {
            let y = (band * stride) as u32;
            let rows = pixels.len() / row_len;
            for x in (0..row_len).step_by(stride) {
                let color = pixel_color(scene, x as u32, y, width, height)?;
                for row in 0..rows {
                    let line = &mut pixels[row * row_len..(row + 1) * row_len];
                    let end = (x + stride).min(row_len);
                    line[x..end].fill(color);
                }
            }
            trace!("Band {band} done");
            Ok(())
        })?;

    info!(
        "Rendered {width}x{height} on {} threads in {:.2?}",
        rayon::current_num_threads(),
        start.elapsed()
    );
    Ok(())
}

/// Primary rays start on the screen plane, which has to fit inside the room's
/// side walls, floor and ceiling.
fn check_viewport(scene: &Scene, width: u32, height: u32, options: &RenderOptions) -> Result<()> {
    let (half_w, half_h) = (width as f64 / 2.0, height as f64 / 2.0);
    let room = &scene.room;
    let reason = if width == 0 || height == 0 {
        "dimensions must be non-zero".to_string()
    } else if options.stride == 0 {
        "stride must be at least 1".to_string()
    } else if room.left > -half_w
        || room.right < half_w
        || room.ceiling > -half_h
        || room.floor < half_h
    {
        format!(
            "screen does not fit the room (x {}..{}, y {}..{})",
            room.left, room.right, room.ceiling, room.floor
        )
    } else {
        return Ok(());
    };
    Err(RenderError::InvalidViewport {
        width,
        height,
        reason,
    })
}
