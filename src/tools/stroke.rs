use super::geometry::Geometry;
use crate::core::grid::GridGeometry;
use tracing::trace;

/// Resampling distance along a segment, in cells.
pub const STROKE_STEP: f64 = 0.5;
/// Upper bound on samples per segment; long jumps are sampled more coarsely.
pub const MAX_TRACE_STEPS: usize = 256;

/// Turns a sequence of sub-cell pointer positions into a gap-free run of
/// cells.
#[derive(Debug, Clone)]
pub struct StrokeTracer {
    last_point: (f64, f64),
    last_cell: Option<usize>,
}

impl StrokeTracer {
    pub fn new(grid: GridGeometry, start: (f64, f64)) -> Self {
        Self { last_point: start, last_cell: grid.cell_at(start.0, start.1) }
    }

    pub fn last_cell(&self) -> Option<usize> {
        self.last_cell
    }

    /// Cells newly crossed moving to `point`. The cell the previous segment
    /// ended on is not repeated. Samples that fall off the canvas break the
    /// run instead of being joined along the edge.
    pub fn trace_to(&mut self, grid: GridGeometry, point: (f64, f64)) -> Vec<usize> {
        let (x0, y0) = self.last_point;
        let (x1, y1) = point;
        if !x1.is_finite() || !y1.is_finite() {
            return Vec::new();
        }
        let distance = (x1 - x0).hypot(y1 - y0);
        let mut steps = (distance / STROKE_STEP).ceil() as usize;
        if steps > MAX_TRACE_STEPS {
            trace!(distance, "stroke segment capped at {} steps", MAX_TRACE_STEPS);
            steps = MAX_TRACE_STEPS;
        }
        let steps = steps.max(1);

        let mut cells = Vec::new();
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let sample = grid.cell_at(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
            match (self.last_cell, sample) {
                (Some(prev), Some(cell)) if prev != cell => {
                    cells.extend(Geometry::compute_line_indices(grid, prev, cell).into_iter().skip(1));
                }
                (None, Some(cell)) => cells.push(cell),
                _ => {}
            }
            self.last_cell = sample;
        }
        self.last_point = point;
        cells
    }
}
