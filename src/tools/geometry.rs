use crate::core::grid::GridGeometry;

pub struct Geometry;

impl Geometry {
    pub fn bresenham_line<F>(mut x1: i32, mut y1: i32, x2: i32, y2: i32, mut callback: F)
    where
        F: FnMut(i32, i32),
    {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            callback(x1, y1);
            if x1 == x2 && y1 == y2 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x1 += sx; }
            if e2 <= dx { err += dx; y1 += sy; }
        }
    }

    /// Cells visited walking from `start` to `end`, both included.
    /// The walk is always rasterized from the lower index so that swapping
    /// the endpoints yields the same cells in reverse order.
    pub fn compute_line_indices(grid: GridGeometry, start: usize, end: usize) -> Vec<usize> {
        if start > end {
            let mut cells = Self::compute_line_indices(grid, end, start);
            cells.reverse();
            return cells;
        }
        let (x1, y1) = grid.index_to_coords(start);
        let (x2, y2) = grid.index_to_coords(end);
        let mut cells = Vec::with_capacity(((x2 - x1).abs().max((y2 - y1).abs()) + 1) as usize);
        Self::bresenham_line(x1, y1, x2, y2, |x, y| {
            if let Some(idx) = grid.checked_index(x, y) {
                cells.push(idx);
            }
        });
        cells
    }
}
