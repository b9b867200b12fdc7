use crate::app::context::{PreviewContext, ToolContext};
use crate::app::events::PointerInput;
use crate::app::state::{Preview, ToolType};
use crate::core::error::Result;
use crate::tools::bucket::BucketTool;
use crate::tools::eyedropper::EyedropperTool;
use crate::tools::line::LineTool;
use crate::tools::magnifier::MagnifierTool;
use crate::tools::pencil::PencilTool;
use crate::tools::rect_select::RectSelectTool;
use crate::tools::shape::ShapeTool;
use crate::tools::tool_trait::{PointerOutcome, Tool};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Routes pointer events to the active tool and owns the capture: once a
/// drag starts only the pointer that started it can drive or end it, and
/// the gesture ends exactly once.
pub struct ToolManager {
    pub active_type: ToolType,
    pub tools: HashMap<ToolType, Box<dyn Tool>>,
    pub is_drawing: bool,
    captured_pointer: Option<u32>,
}

impl ToolManager {
    pub fn new() -> Self {
        let mut tools: HashMap<ToolType, Box<dyn Tool>> = HashMap::new();
        tools.insert(ToolType::Pencil, Box::new(PencilTool::new(false)));
        tools.insert(ToolType::Eraser, Box::new(PencilTool::new(true)));
        tools.insert(ToolType::Eyedropper, Box::new(EyedropperTool::new()));
        tools.insert(ToolType::Bucket, Box::new(BucketTool::new()));
        tools.insert(ToolType::Line, Box::new(LineTool::new()));
        tools.insert(ToolType::Shape, Box::new(ShapeTool::new()));
        tools.insert(ToolType::Magnifier, Box::new(MagnifierTool::new()));
        tools.insert(ToolType::RectSelect, Box::new(RectSelectTool::new()));

        Self {
            active_type: ToolType::Pencil,
            tools,
            is_drawing: false,
            captured_pointer: None,
        }
    }

    pub fn captured_pointer(&self) -> Option<u32> {
        self.captured_pointer
    }

    pub fn active_tool(&self) -> Option<&dyn Tool> {
        self.tools.get(&self.active_type).map(|t| t.as_ref())
    }

    pub fn tool_as<T: Tool>(&self, tool_type: ToolType) -> Option<&T> {
        self.tools.get(&tool_type)?.as_any().downcast_ref::<T>()
    }

    /// Switches tools, first aborting any drag in progress and dropping the
    /// live selection back where it came from.
    pub fn set_tool(&mut self, tool_type: ToolType, ctx: &mut ToolContext) -> Result<bool> {
        if self.active_type == tool_type {
            return Ok(false);
        }
        let aborted = self.abort_gesture(ctx);
        let cancelled = if ctx.store.selection.is_some() {
            ctx.begin_action();
            let r = ctx.store.cancel_selection();
            ctx.finalize_action();
            r.map(|_| ())
        } else {
            Ok(())
        };
        debug!(from = ?self.active_type, to = ?tool_type, "tool switched");
        self.active_type = tool_type;
        aborted.and(cancelled).map(|_| true)
    }

    pub fn handle_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        if self.is_drawing {
            if self.captured_pointer != Some(input.pointer_id) {
                warn!(pointer = input.pointer_id, captured = ?self.captured_pointer, "ignoring pointer-down from second pointer");
            }
            return Ok(());
        }
        trace!(tool = ?self.active_type, cell = ?input.cell, "pointer down");
        let Some(tool) = self.tools.get_mut(&self.active_type) else { return Ok(()) };
        match tool.on_pointer_down(input, ctx) {
            Ok(PointerOutcome::Captured) => {
                self.is_drawing = true;
                self.captured_pointer = Some(input.pointer_id);
                Ok(())
            }
            Ok(PointerOutcome::Finished) => Ok(()),
            Err(e) => {
                self.recover(ctx);
                Err(e)
            }
        }
    }

    pub fn handle_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        if !self.owns(input) {
            return Ok(());
        }
        let Some(tool) = self.tools.get_mut(&self.active_type) else { return Ok(()) };
        let result = tool.on_pointer_move(input, ctx);
        if result.is_err() {
            self.recover(ctx);
        }
        result
    }

    pub fn handle_pointer_up(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        if !self.owns(input) {
            return Ok(());
        }
        trace!(tool = ?self.active_type, cell = ?input.cell, "pointer up");
        self.release();
        let Some(tool) = self.tools.get_mut(&self.active_type) else { return Ok(()) };
        let result = tool.on_pointer_up(input, ctx);
        if result.is_err() {
            self.recover(ctx);
        }
        result
    }

    pub fn handle_capture_lost(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        if !self.owns(input) {
            return Ok(());
        }
        debug!(tool = ?self.active_type, "pointer capture lost");
        self.release();
        let Some(tool) = self.tools.get_mut(&self.active_type) else { return Ok(()) };
        let result = tool.on_capture_lost(input, ctx);
        if result.is_err() {
            self.recover(ctx);
        }
        result
    }

    /// Escape / tool switch: the tool decides whether its drag is kept or
    /// thrown away.
    pub fn abort_gesture(&mut self, ctx: &mut ToolContext) -> Result<()> {
        if !self.is_drawing {
            return Ok(());
        }
        debug!(tool = ?self.active_type, "gesture aborted");
        self.release();
        let Some(tool) = self.tools.get_mut(&self.active_type) else { return Ok(()) };
        let result = tool.on_cancel(ctx);
        if result.is_err() {
            self.recover(ctx);
        }
        result
    }

    /// Drops gesture state without touching the canvas or history.
    pub fn reset_gesture(&mut self) {
        self.release();
        for tool in self.tools.values_mut() {
            tool.reset();
        }
    }

    pub fn preview(&self, ctx: &PreviewContext) -> Option<Preview> {
        self.active_tool()?.preview(ctx)
    }

    fn owns(&self, input: &PointerInput) -> bool {
        if !self.is_drawing {
            return false;
        }
        if self.captured_pointer.is_some_and(|id| id != input.pointer_id) {
            warn!(pointer = input.pointer_id, captured = ?self.captured_pointer, "ignoring event from non-capturing pointer");
            return false;
        }
        true
    }

    fn release(&mut self) {
        self.is_drawing = false;
        self.captured_pointer = None;
    }

    /// After a tool error: nothing stays captured and no action stays open.
    fn recover(&mut self, ctx: &mut ToolContext) {
        self.release();
        if let Some(tool) = self.tools.get_mut(&self.active_type) {
            tool.reset();
        }
        ctx.finalize_action();
    }
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}
