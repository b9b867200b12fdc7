use crate::core::color::Pixel;
use crate::core::config::MAX_EXPORT_SCALE;
use crate::core::error::{CoreError, Result};
use crate::core::grid::GridGeometry;
use image::{ImageFormat, Rgba, RgbaImage};
use rust_i18n::t;
use std::io::Cursor;

/// Longest output edge, in pixels.
pub const MAX_EXPORT_DIM: u32 = 16384;

/// Paints each composite cell as a `scale`-sized block. Empty cells and
/// tokens that do not parse come out fully transparent.
pub fn rasterize(composite: &[Pixel], grid: GridGeometry, scale: u32) -> Result<RgbaImage> {
    if scale == 0 || scale > MAX_EXPORT_SCALE {
        return Err(CoreError::Export(t!("error.export_scale").to_string()));
    }
    if composite.len() != grid.len() {
        return Err(CoreError::InvalidDimensions { width: grid.width, height: grid.height });
    }
    let out_w = grid.width.checked_mul(scale).filter(|&w| w <= MAX_EXPORT_DIM);
    let out_h = grid.height.checked_mul(scale).filter(|&h| h <= MAX_EXPORT_DIM);
    let (Some(out_w), Some(out_h)) = (out_w, out_h) else {
        return Err(CoreError::Export(t!("error.export_scale").to_string()));
    };

    let mut img = RgbaImage::new(out_w, out_h);
    for (idx, pixel) in composite.iter().enumerate() {
        let rgba = pixel.as_ref().and_then(|c| c.to_rgba()).unwrap_or([0, 0, 0, 0]);
        if rgba[3] == 0 {
            continue;
        }
        let (x, y) = grid.index_to_coords(idx);
        let (bx, by) = (x as u32 * scale, y as u32 * scale);
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(bx + dx, by + dy, Rgba(rgba));
            }
        }
    }
    Ok(img)
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

pub fn export_png(composite: &[Pixel], grid: GridGeometry, scale: u32) -> Result<Vec<u8>> {
    let img = rasterize(composite, grid, scale)?;
    encode_png(&img)
}
