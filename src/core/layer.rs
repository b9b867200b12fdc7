use super::color::{is_painted, Pixel};
use super::grid::GridGeometry;

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub pixels: Vec<Pixel>,
    pub visible: bool,
}

impl Layer {
    pub fn new(id: String, name: String, grid: GridGeometry) -> Self {
        Self {
            id,
            name,
            pixels: vec![None; grid.len()],
            visible: true,
        }
    }

    pub fn get_pixel(&self, index: usize) -> Option<&Pixel> {
        self.pixels.get(index)
    }

    /// No cell holds any value, not even the transparent swatch.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(Option::is_none)
    }

    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|p| is_painted(p)).count()
    }

    pub fn clear(&mut self) -> bool {
        if self.is_blank() {
            return false;
        }
        self.pixels.iter_mut().for_each(|p| *p = None);
        true
    }

    pub fn resize(&mut self, old: GridGeometry, new: GridGeometry) {
        self.pixels = resize_pixels(&self.pixels, old, new);
    }
}

/// Crop/extend anchored at the top-left corner. Never scales.
pub fn resize_pixels(pixels: &[Pixel], old: GridGeometry, new: GridGeometry) -> Vec<Pixel> {
    let mut out = vec![None; new.len()];
    let copy_w = old.width.min(new.width) as i32;
    let copy_h = old.height.min(new.height) as i32;
    for y in 0..copy_h {
        for x in 0..copy_w {
            let src = old.coords_to_index(x, y);
            if let Some(pixel) = pixels.get(src) {
                out[new.coords_to_index(x, y)] = pixel.clone();
            }
        }
    }
    out
}
