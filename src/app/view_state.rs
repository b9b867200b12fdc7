pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 64.0;

/// Zoom level plus the cell the host should scroll to. Viewport math stays
/// with the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub zoom_level: f64,
    pub recenter_on: Option<usize>,
}

impl ViewState {
    pub fn new() -> Self {
        Self { zoom_level: MIN_ZOOM, recenter_on: None }
    }

    /// Doubles or halves the zoom. Returns whether the level changed.
    pub fn step_zoom(&mut self, zoom_in: bool) -> bool {
        let next = if zoom_in { self.zoom_level * 2.0 } else { self.zoom_level / 2.0 };
        let next = next.clamp(MIN_ZOOM, MAX_ZOOM);
        if next == self.zoom_level {
            return false;
        }
        self.zoom_level = next;
        true
    }

    pub fn request_recenter(&mut self, cell: Option<usize>) {
        if cell.is_some() {
            self.recenter_on = cell;
        }
    }

    pub fn take_recenter(&mut self) -> Option<usize> {
        self.recenter_on.take()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
