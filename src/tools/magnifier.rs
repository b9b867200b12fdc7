use super::tool_trait::{PointerOutcome, Tool};
use crate::app::context::ToolContext;
use crate::app::events::{PointerButton, PointerInput};
use crate::core::error::Result;

/// One zoom step per click; right button or Alt flips the direction.
pub struct MagnifierTool;

impl MagnifierTool {
    pub fn new() -> Self { Self }
}

impl Default for MagnifierTool {
    fn default() -> Self { Self::new() }
}

impl Tool for MagnifierTool {
    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<PointerOutcome> {
        let reverse = input.button == PointerButton::Secondary || input.modifiers.alt;
        let zoom_in = ctx.settings.zoom_in_on_click != reverse;
        ctx.view.step_zoom(zoom_in);
        ctx.view.request_recenter(input.cell);
        Ok(PointerOutcome::Finished)
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
