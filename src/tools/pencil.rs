use super::brush::{compute_brush_indices, stamp_along};
use super::geometry::Geometry;
use super::stroke::StrokeTracer;
use super::tool_trait::{PointerOutcome, Tool};
use crate::app::context::{PreviewContext, ToolContext};
use crate::app::events::PointerInput;
use crate::app::state::{Preview, HOVER_OPACITY, STROKE_OPACITY};
use crate::core::color::Pixel;
use crate::core::error::Result;
use std::collections::HashSet;

struct Stroke {
    value: Pixel,
    tracer: StrokeTracer,
    /// Union of all footprints applied so far, for the live preview.
    touched: Vec<usize>,
    seen: HashSet<usize>,
}

impl Stroke {
    fn record(&mut self, cells: &[usize]) {
        for &c in cells {
            if self.seen.insert(c) {
                self.touched.push(c);
            }
        }
    }
}

/// Freehand pencil; with `is_eraser` every stamp writes an empty cell.
pub struct PencilTool {
    pub is_eraser: bool,
    stroke: Option<Stroke>,
}

impl PencilTool {
    pub fn new(is_eraser: bool) -> Self {
        Self { is_eraser, stroke: None }
    }

    fn value_for(&self, input: &PointerInput, ctx: &ToolContext) -> Pixel {
        if self.is_eraser {
            None
        } else {
            ctx.settings.draw_value(input)
        }
    }

    fn apply(&mut self, path: &[usize], ctx: &mut ToolContext) -> Result<()> {
        let Some(stroke) = self.stroke.as_mut() else { return Ok(()) };
        if path.is_empty() {
            return Ok(());
        }
        let cells = stamp_along(ctx.store.grid, path, ctx.settings.brush_size, ctx.settings.brush_shape);
        ctx.store.paint_cells(&cells, &stroke.value)?;
        if ctx.settings.preview_enabled {
            stroke.record(&cells);
        }
        Ok(())
    }

    fn finish(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        if self.stroke.is_none() {
            return Ok(());
        }
        let traced = match (input.world_point(ctx.store.grid), self.stroke.as_mut()) {
            (Some(point), Some(stroke)) => stroke.tracer.trace_to(ctx.store.grid, point),
            _ => Vec::new(),
        };
        let result = self.apply(&traced, ctx);
        if let Some(stroke) = self.stroke.take() {
            if let Some(cell) = stroke.tracer.last_cell() {
                ctx.session.last_pointed_cell = Some(cell);
            }
        }
        ctx.finalize_action();
        result
    }
}

impl Tool for PencilTool {
    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<PointerOutcome> {
        let Some(cell) = input.cell else { return Ok(PointerOutcome::Finished) };
        let grid = ctx.store.grid;
        let value = self.value_for(input, ctx);
        ctx.begin_action();

        if input.modifiers.shift {
            if let Some(last) = ctx.session.last_pointed_cell.filter(|&c| grid.contains_index(c)) {
                let path = Geometry::compute_line_indices(grid, last, cell);
                let cells = stamp_along(grid, &path, ctx.settings.brush_size, ctx.settings.brush_shape);
                let result = ctx.store.paint_cells(&cells, &value);
                ctx.session.last_pointed_cell = Some(cell);
                ctx.finalize_action();
                result?;
                return Ok(PointerOutcome::Finished);
            }
        }

        let start = input.world_point(grid).unwrap_or_else(|| grid.cell_center(cell));
        self.stroke = Some(Stroke {
            value,
            tracer: StrokeTracer::new(grid, start),
            touched: Vec::new(),
            seen: HashSet::new(),
        });
        if let Err(e) = self.apply(&[cell], ctx) {
            self.stroke = None;
            ctx.finalize_action();
            return Err(e);
        }
        Ok(PointerOutcome::Captured)
    }

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        let grid = ctx.store.grid;
        let Some(point) = input.world_point(grid) else { return Ok(()) };
        let Some(stroke) = self.stroke.as_mut() else { return Ok(()) };
        let traced = stroke.tracer.trace_to(grid, point);
        self.apply(&traced, ctx)
    }

    fn on_pointer_up(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        self.finish(input, ctx)
    }

    fn on_cancel(&mut self, ctx: &mut ToolContext) -> Result<()> {
        self.finish(&PointerInput::detached(), ctx)
    }

    fn reset(&mut self) {
        self.stroke = None;
    }

    fn preview(&self, ctx: &PreviewContext) -> Option<Preview> {
        if !ctx.settings.preview_enabled {
            return None;
        }
        let value = if self.is_eraser { None } else { Some(ctx.settings.color.clone()) };
        if let Some(stroke) = &self.stroke {
            return Some(Preview { cells: stroke.touched.clone(), opacity: STROKE_OPACITY, value: stroke.value.clone() });
        }

        let grid = ctx.store.grid;
        let hover = ctx.session.hover_cell?;
        let (size, shape) = (ctx.settings.brush_size, ctx.settings.brush_shape);
        let cells = match ctx.session.last_pointed_cell {
            Some(last) if ctx.session.modifiers.shift && grid.contains_index(last) => {
                stamp_along(grid, &Geometry::compute_line_indices(grid, last, hover), size, shape)
            }
            _ => compute_brush_indices(grid, hover, size, shape),
        };
        Some(Preview { cells, opacity: HOVER_OPACITY, value })
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
