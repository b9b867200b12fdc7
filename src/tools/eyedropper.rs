use super::tool_trait::{PointerOutcome, Tool};
use crate::app::context::ToolContext;
use crate::app::events::PointerInput;
use crate::core::color::Color;
use crate::core::error::Result;

/// Picks the visible (composite) color under the pointer.
pub struct EyedropperTool;

impl EyedropperTool {
    pub fn new() -> Self { Self }
}

impl Default for EyedropperTool {
    fn default() -> Self { Self::new() }
}

impl Tool for EyedropperTool {
    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<PointerOutcome> {
        if let Some(cell) = input.cell {
            ctx.settings.color = ctx.store.composite_pixel(cell).unwrap_or_else(Color::transparent);
        }
        Ok(PointerOutcome::Finished)
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
