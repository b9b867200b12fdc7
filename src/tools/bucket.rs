use super::tool_trait::{PointerOutcome, Tool};
use crate::app::context::{PreviewContext, ToolContext};
use crate::app::events::PointerInput;
use crate::app::state::{Preview, REGION_OPACITY};
use crate::core::color::Pixel;
use crate::core::error::Result;
use crate::core::grid::GridGeometry;
use crate::core::store::PixelStore;

/// 4-connected cells reachable from `start` through cells equal to it.
pub fn flood_region(grid: GridGeometry, pixels: &[Pixel], start: usize) -> Vec<usize> {
    let Some(target) = pixels.get(start) else { return Vec::new() };
    let mut visited = vec![false; pixels.len()];
    let mut stack: Vec<usize> = Vec::with_capacity(256);
    let mut region = Vec::new();
    stack.push(start);

    while let Some(idx) = stack.pop() {
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        if &pixels[idx] != target {
            continue;
        }
        region.push(idx);

        let (x, y) = grid.index_to_coords(idx);
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if let Some(n) = grid.checked_index(nx, ny) {
                if !visited[n] {
                    stack.push(n);
                }
            }
        }
    }
    region
}

/// Fills the region under `start` on the active layer. Returns whether any
/// cell changed.
pub fn flood_fill(store: &mut PixelStore, start: usize, value: &Pixel) -> Result<bool> {
    let grid = store.grid;
    let region = {
        let pixels = store.active_pixels()?;
        match pixels.get(start) {
            Some(current) if current != value => flood_region(grid, pixels, start),
            _ => return Ok(false),
        }
    };
    store.paint_cells(&region, value)
}

pub struct BucketTool;

impl BucketTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BucketTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for BucketTool {
    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<PointerOutcome> {
        let Some(cell) = input.cell else { return Ok(PointerOutcome::Finished) };
        let value = ctx.settings.draw_value(input);
        ctx.begin_action();
        let filled = flood_fill(ctx.store, cell, &value);
        ctx.finalize_action();
        filled?;
        Ok(PointerOutcome::Finished)
    }

    fn preview(&self, ctx: &PreviewContext) -> Option<Preview> {
        if !ctx.settings.preview_enabled {
            return None;
        }
        let cell = ctx.session.hover_cell?;
        let pixels = ctx.store.active_pixels().ok()?;
        Some(Preview {
            cells: flood_region(ctx.store.grid, pixels, cell),
            opacity: REGION_OPACITY,
            value: Some(ctx.settings.color.clone()),
        })
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
