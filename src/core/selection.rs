use super::color::{Color, Pixel};
use super::grid::GridGeometry;

/// Grid-aligned rectangle. `x`/`y` are signed because a committed move may
/// leave part of the rectangle off-canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl SelectionRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width as i32 && y < self.y + self.height as i32
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// In-bounds cells covered by the rectangle, row-major.
    pub fn cells(&self, grid: GridGeometry) -> Vec<usize> {
        let mut cells = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in self.y..self.y + self.height as i32 {
            for x in self.x..self.x + self.width as i32 {
                if let Some(idx) = grid.checked_index(x, y) {
                    cells.push(idx);
                }
            }
        }
        cells
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPixel {
    pub rel_x: u32,
    pub rel_y: u32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    Apply,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub rect: SelectionRect,
    pub offset: (i32, i32),
    pub pixels: Vec<SelectedPixel>,
    pub is_floating: bool,
}

impl Selection {
    pub fn new(rect: SelectionRect, pixels: Vec<SelectedPixel>) -> Self {
        Self { rect, offset: (0, 0), pixels, is_floating: false }
    }

    /// Rectangle at its current on-screen position.
    pub fn moved_rect(&self) -> SelectionRect {
        self.rect.translated(self.offset.0, self.offset.1)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.moved_rect().contains(x, y)
    }

    /// Keeps at least one cell of the moved rectangle on the canvas.
    pub fn clamp_offset(&self, grid: GridGeometry, dx: i32, dy: i32) -> (i32, i32) {
        let r = &self.rect;
        let min_dx = -(r.x + r.width as i32 - 1);
        let max_dx = grid.width as i32 - 1 - r.x;
        let min_dy = -(r.y + r.height as i32 - 1);
        let max_dy = grid.height as i32 - 1 - r.y;
        (dx.clamp(min_dx, max_dx), dy.clamp(min_dy, max_dy))
    }

    /// Folds the offset into the rectangle. Captured cells that landed
    /// off-canvas are dropped.
    pub fn commit_offset(&mut self, grid: GridGeometry) {
        let moved = self.moved_rect();
        self.pixels.retain(|p| grid.is_in_bounds(moved.x + p.rel_x as i32, moved.y + p.rel_y as i32));
        self.rect = moved;
        self.offset = (0, 0);
        self.is_floating = false;
    }
}

/// Rectangle spanned by two corners, both clamped to the grid first.
pub fn normalize_selection_rect(grid: GridGeometry, a: (i32, i32), b: (i32, i32)) -> SelectionRect {
    let max_x = grid.width as i32 - 1;
    let max_y = grid.height as i32 - 1;
    let (ax, ay) = (a.0.clamp(0, max_x), a.1.clamp(0, max_y));
    let (bx, by) = (b.0.clamp(0, max_x), b.1.clamp(0, max_y));
    let x = ax.min(bx);
    let y = ay.min(by);
    SelectionRect {
        x,
        y,
        width: (ax.max(bx) - x + 1) as u32,
        height: (ay.max(by) - y + 1) as u32,
    }
}

pub fn capture_selection_pixels(grid: GridGeometry, layer: &[Pixel], rect: SelectionRect) -> Vec<SelectedPixel> {
    let mut captured = Vec::new();
    for rel_y in 0..rect.height {
        for rel_x in 0..rect.width {
            let Some(idx) = grid.checked_index(rect.x + rel_x as i32, rect.y + rel_y as i32) else { continue };
            if let Some(Some(color)) = layer.get(idx) {
                captured.push(SelectedPixel { rel_x, rel_y, color: color.clone() });
            }
        }
    }
    captured
}

/// `Apply` stamps the captured colors at `rect + offset`; `Clear` erases the
/// captured footprint at `rect + offset`. Returns whether any cell changed.
pub fn apply_selection_to_layer(
    grid: GridGeometry,
    layer: &mut [Pixel],
    selection: &Selection,
    offset: (i32, i32),
    mode: ApplyMode,
) -> bool {
    let mut changed = false;
    for p in &selection.pixels {
        let x = selection.rect.x + p.rel_x as i32 + offset.0;
        let y = selection.rect.y + p.rel_y as i32 + offset.1;
        let Some(idx) = grid.checked_index(x, y) else { continue };
        let value = match mode {
            ApplyMode::Apply => Some(p.color.clone()),
            ApplyMode::Clear => None,
        };
        if layer[idx] != value {
            layer[idx] = value;
            changed = true;
        }
    }
    changed
}

pub fn entire_canvas_rect(grid: GridGeometry) -> SelectionRect {
    SelectionRect::new(0, 0, grid.width, grid.height)
}
