use super::tool_trait::{PointerOutcome, Tool};
use crate::app::context::{PreviewContext, ToolContext};
use crate::app::events::PointerInput;
use crate::app::state::{Preview, STROKE_OPACITY};
use crate::core::error::Result;
use crate::core::grid::GridGeometry;
use crate::core::selection::{normalize_selection_rect, SelectionRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectGesture {
    /// Rubber-banding a new rectangle.
    Draft { anchor: (i32, i32), current: (i32, i32), moved: bool },
    /// Dragging the live selection's content.
    Move { start: (i32, i32), start_offset: (i32, i32) },
}

/// Rectangle selection: press outside the selection to draft a new one,
/// press inside to float and drag it.
pub struct RectSelectTool {
    gesture: Option<SelectGesture>,
}

impl RectSelectTool {
    pub fn new() -> Self {
        Self { gesture: None }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.gesture, Some(SelectGesture::Move { .. }))
    }

    /// Rectangle being drafted, for the overlay.
    pub fn draft_rect(&self, grid: GridGeometry) -> Option<SelectionRect> {
        match self.gesture {
            Some(SelectGesture::Draft { anchor, current, .. }) => Some(normalize_selection_rect(grid, anchor, current)),
            _ => None,
        }
    }
}

impl Default for RectSelectTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RectSelectTool {
    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<PointerOutcome> {
        let grid = ctx.store.grid;
        let Some(point) = input.grid_point(grid) else { return Ok(PointerOutcome::Finished) };
        let hit = ctx.store.selection.as_ref().filter(|sel| sel.contains(point.0, point.1)).map(|sel| sel.offset);

        ctx.begin_action();
        let started = match hit {
            Some(start_offset) => ctx.store.lift_selection().map(|_| SelectGesture::Move { start: point, start_offset }),
            None if input.cell.is_some() => ctx
                .store
                .cancel_selection()
                .map(|_| SelectGesture::Draft { anchor: point, current: point, moved: false }),
            None => {
                ctx.finalize_action();
                return Ok(PointerOutcome::Finished);
            }
        };
        match started {
            Ok(gesture) => {
                self.gesture = Some(gesture);
                Ok(PointerOutcome::Captured)
            }
            Err(e) => {
                ctx.finalize_action();
                Err(e)
            }
        }
    }

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        let Some(point) = input.grid_point(ctx.store.grid) else { return Ok(()) };
        match self.gesture.as_mut() {
            Some(SelectGesture::Draft { anchor, current, moved }) => {
                *current = point;
                *moved |= point != *anchor;
            }
            Some(SelectGesture::Move { start, start_offset }) => {
                let dx = start_offset.0 + point.0 - start.0;
                let dy = start_offset.1 + point.1 - start.1;
                ctx.store.move_selection(dx, dy);
            }
            None => {}
        }
        Ok(())
    }

    fn on_pointer_up(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        if input.grid_point(ctx.store.grid).is_some() {
            self.on_pointer_move(input, ctx)?;
        }
        let Some(gesture) = self.gesture.take() else { return Ok(()) };
        let result = match gesture {
            SelectGesture::Draft { anchor, current, moved: true } => {
                let rect = normalize_selection_rect(ctx.store.grid, anchor, current);
                ctx.store.define_selection(rect)
            }
            // A click without a drag only deselects, which happened on press.
            SelectGesture::Draft { .. } => Ok(()),
            SelectGesture::Move { .. } => ctx.store.drop_selection().map(|_| ()),
        };
        ctx.finalize_action();
        result
    }

    fn on_cancel(&mut self, ctx: &mut ToolContext) -> Result<()> {
        let Some(gesture) = self.gesture.take() else { return Ok(()) };
        let result = match gesture {
            SelectGesture::Draft { .. } => Ok(()),
            SelectGesture::Move { .. } => ctx.store.cancel_selection().map(|_| ()),
        };
        ctx.finalize_action();
        result
    }

    fn reset(&mut self) {
        self.gesture = None;
    }

    fn preview(&self, ctx: &PreviewContext) -> Option<Preview> {
        let rect = self.draft_rect(ctx.store.grid)?;
        Some(Preview { cells: rect.cells(ctx.store.grid), opacity: STROKE_OPACITY, value: None })
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
