use crate::error::{RenderError, Result};
use crate::vec3::Color;
use image::{ImageBuffer, Rgb};
use log::info;
use std::path::Path;

fn channel(value: f64) -> u8 {
    // NaN casts to 0.
    value.clamp(0.0, 255.0).round() as u8
}

pub fn to_rgb8(color: Color) -> [u8; 3] {
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// `0x00RRGGBB`, the layout minifb expects.
pub fn pack_rgb(color: Color) -> u32 {
    let [r, g, b] = to_rgb8(color);
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub fn save_png<P: AsRef<Path>>(path: P, width: u32, height: u32, pixels: &[Color]) -> Result<()> {
    let path = path.as_ref();
    let raw: Vec<u8> = pixels.iter().flat_map(|&c| to_rgb8(c)).collect();
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, raw).ok_or_else(|| RenderError::InvalidViewport {
            width,
            height,
            reason: format!("{} pixels do not fill the image", pixels.len()),
        })?;
    image.save(path)?;
    info!("Saved {}", path.display());
    Ok(())
}
