use super::brush::{compute_brush_indices, stamp_along};
use super::geometry::Geometry;
use super::tool_trait::{PointerOutcome, Tool};
use crate::app::context::{PreviewContext, ToolContext};
use crate::app::events::PointerInput;
use crate::app::state::{Preview, ToolSettings, HOVER_OPACITY, STROKE_OPACITY};
use crate::core::color::Pixel;
use crate::core::error::Result;
use crate::core::grid::GridGeometry;

#[derive(Debug, Clone)]
struct LineDrag {
    anchor: usize,
    current: usize,
    value: Pixel,
}

/// Straight line from the press cell to the release cell, stamped with the
/// current brush. Nothing touches the layer until release.
pub struct LineTool {
    drag: Option<LineDrag>,
}

impl LineTool {
    pub fn new() -> Self {
        Self { drag: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn cells(grid: GridGeometry, settings: &ToolSettings, anchor: usize, current: usize) -> Vec<usize> {
        let path = Geometry::compute_line_indices(grid, anchor, current);
        stamp_along(grid, &path, settings.brush_size, settings.brush_shape)
    }
}

impl Default for LineTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for LineTool {
    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<PointerOutcome> {
        let Some(cell) = input.cell else { return Ok(PointerOutcome::Finished) };
        ctx.begin_action();
        self.drag = Some(LineDrag { anchor: cell, current: cell, value: ctx.settings.draw_value(input) });
        Ok(PointerOutcome::Captured)
    }

    fn on_pointer_move(&mut self, input: &PointerInput, _ctx: &mut ToolContext) -> Result<()> {
        if let (Some(drag), Some(cell)) = (self.drag.as_mut(), input.cell) {
            drag.current = cell;
        }
        Ok(())
    }

    fn on_pointer_up(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        let Some(mut drag) = self.drag.take() else { return Ok(()) };
        if let Some(cell) = input.cell {
            drag.current = cell;
        }
        let cells = Self::cells(ctx.store.grid, ctx.settings, drag.anchor, drag.current);
        let result = ctx.store.paint_cells(&cells, &drag.value);
        ctx.session.last_pointed_cell = Some(drag.current);
        ctx.finalize_action();
        result.map(|_| ())
    }

    fn on_capture_lost(&mut self, _input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        self.on_cancel(ctx)
    }

    fn on_cancel(&mut self, ctx: &mut ToolContext) -> Result<()> {
        if self.drag.take().is_some() {
            ctx.finalize_action();
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.drag = None;
    }

    fn preview(&self, ctx: &PreviewContext) -> Option<Preview> {
        let grid = ctx.store.grid;
        if let Some(drag) = &self.drag {
            return Some(Preview {
                cells: Self::cells(grid, ctx.settings, drag.anchor, drag.current),
                opacity: STROKE_OPACITY,
                value: drag.value.clone(),
            });
        }
        if !ctx.settings.preview_enabled {
            return None;
        }
        let hover = ctx.session.hover_cell?;
        Some(Preview {
            cells: compute_brush_indices(grid, hover, ctx.settings.brush_size, ctx.settings.brush_shape),
            opacity: HOVER_OPACITY,
            value: Some(ctx.settings.color.clone()),
        })
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
