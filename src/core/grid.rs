/// Linear-index <-> (x, y) mapping for a `width x height` cell grid.
/// Coordinates are signed so callers can express off-canvas positions and
/// filter them with `is_in_bounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub width: u32,
    pub height: u32,
}

impl GridGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn index_to_coords(&self, index: usize) -> (i32, i32) {
        let w = self.width as usize;
        ((index % w) as i32, (index / w) as i32)
    }

    #[inline]
    pub fn coords_to_index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_in_bounds(x, y) { Some(self.coords_to_index(x, y)) } else { None }
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Cell under a world-space point measured in cell units.
    pub fn cell_at(&self, world_x: f64, world_y: f64) -> Option<usize> {
        if !world_x.is_finite() || !world_y.is_finite() {
            return None;
        }
        self.checked_index(world_x.floor() as i32, world_y.floor() as i32)
    }

    pub fn cell_center(&self, index: usize) -> (f64, f64) {
        let (x, y) = self.index_to_coords(index);
        (x as f64 + 0.5, y as f64 + 0.5)
    }
}
