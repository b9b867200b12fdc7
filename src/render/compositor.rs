use crate::core::color::{is_painted, Pixel};
use crate::core::grid::GridGeometry;
use crate::core::layer::Layer;
use crate::core::store::PixelStore;
use rayon::prelude::*;

pub struct Compositor;

impl Compositor {
    /// First painted value scanning visible layers from the top down.
    /// `layers` is bottom-first, as stored.
    #[inline]
    pub fn composite_cell(layers: &[&Layer], index: usize) -> Pixel {
        layers
            .iter()
            .rev()
            .filter_map(|l| l.pixels.get(index))
            .find(|p| is_painted(p))
            .cloned()
            .flatten()
    }

    pub fn flatten(layers: &[Layer], grid: GridGeometry) -> Vec<Pixel> {
        let visible: Vec<&Layer> = layers.iter().filter(|l| l.visible).collect();
        (0..grid.len())
            .into_par_iter()
            .map(|idx| Self::composite_cell(&visible, idx))
            .collect()
    }

    /// Recomputes the composite cache, optionally limited to `(x, y, w, h)`.
    pub fn update_composite(store: &mut PixelStore, rect: Option<(u32, u32, u32, u32)>) {
        let grid = store.grid;
        let canvas_w = grid.width;
        let canvas_h = grid.height;
        if store.composite.len() != grid.len() {
            store.composite = vec![None; grid.len()];
        }

        let (rx, ry, rw, rh) = rect.unwrap_or((0, 0, canvas_w, canvas_h));
        let x_start = rx.min(canvas_w);
        let x_end = rx.saturating_add(rw).min(canvas_w);
        let y_start = ry.min(canvas_h);
        let y_end = ry.saturating_add(rh).min(canvas_h);
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        let visible: Vec<&Layer> = store.layers.iter().filter(|l| l.visible).collect();
        let stride = canvas_w as usize;
        let range = (y_start as usize * stride)..(y_end as usize * stride);

        store.composite[range]
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y_offset, row)| {
                let row_base = (y_start as usize + y_offset) * stride;
                for x in x_start as usize..x_end as usize {
                    row[x] = Self::composite_cell(&visible, row_base + x);
                }
            });
        store.revision = store.revision.wrapping_add(1);
    }
}
