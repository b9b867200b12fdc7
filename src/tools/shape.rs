use super::shapes::compute_shape_cells;
use super::tool_trait::{PointerOutcome, Tool};
use crate::app::context::{PreviewContext, ToolContext};
use crate::app::events::PointerInput;
use crate::app::state::{Preview, STROKE_OPACITY};
use crate::core::color::Pixel;
use crate::core::error::Result;

#[derive(Debug, Clone)]
struct ShapeDrag {
    anchor: usize,
    current: usize,
    value: Pixel,
}

/// Square, circle or triangle spanned by the drag, written as raw cells on
/// release.
pub struct ShapeTool {
    drag: Option<ShapeDrag>,
}

impl ShapeTool {
    pub fn new() -> Self {
        Self { drag: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for ShapeTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ShapeTool {
    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<PointerOutcome> {
        let Some(cell) = input.cell else { return Ok(PointerOutcome::Finished) };
        ctx.begin_action();
        self.drag = Some(ShapeDrag { anchor: cell, current: cell, value: ctx.settings.draw_value(input) });
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
        let s = &ctx.settings;
        let cells = compute_shape_cells(ctx.store.grid, drag.anchor, drag.current, s.shape_kind, s.shape_filled);
        let result = ctx.store.paint_cells(&cells, &drag.value);
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
        let drag = self.drag.as_ref()?;
        let s = ctx.settings;
        Some(Preview {
            cells: compute_shape_cells(ctx.store.grid, drag.anchor, drag.current, s.shape_kind, s.shape_filled),
            opacity: STROKE_OPACITY,
            value: drag.value.clone(),
        })
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
