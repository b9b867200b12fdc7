use crate::core::config::BrushShape;
use crate::core::grid::GridGeometry;
use std::collections::HashSet;

/// Cells covered by one brush stamp centered on `center`. Even sizes lean
/// toward the top-left. The circle brush is a diamond of Manhattan radius 1
/// whatever the size.
pub fn compute_brush_indices(grid: GridGeometry, center: usize, size: u32, shape: BrushShape) -> Vec<usize> {
    if !grid.contains_index(center) {
        return Vec::new();
    }
    let size = size.max(1) as i32;
    let lo = -(size / 2);
    let hi = (size + 1) / 2 - 1;
    let (cx, cy) = grid.index_to_coords(center);

    let mut cells = Vec::with_capacity((size * size) as usize);
    for dy in lo..=hi {
        for dx in lo..=hi {
            if shape == BrushShape::Circle && dx.abs() + dy.abs() > 1 {
                continue;
            }
            if let Some(idx) = grid.checked_index(cx + dx, cy + dy) {
                cells.push(idx);
            }
        }
    }
    cells
}

/// Union of the footprints stamped at every cell of `path`, first-seen order.
pub fn stamp_along(grid: GridGeometry, path: &[usize], size: u32, shape: BrushShape) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut cells = Vec::new();
    for &center in path {
        for idx in compute_brush_indices(grid, center, size, shape) {
            if seen.insert(idx) {
                cells.push(idx);
            }
        }
    }
    cells
}
