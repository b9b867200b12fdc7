use crate::app::context::{PreviewContext, ToolContext};
use crate::app::events::PointerInput;
use crate::app::state::Preview;
use crate::core::error::Result;
use std::any::Any;

/// What a pointer-down turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// A drag started; the tool wants the rest of this pointer's events.
    Captured,
    /// Nothing further to track.
    Finished,
}

pub trait Tool: Any {
    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<PointerOutcome>;
    fn on_pointer_move(&mut self, _input: &PointerInput, _ctx: &mut ToolContext) -> Result<()> {
        Ok(())
    }
    fn on_pointer_up(&mut self, _input: &PointerInput, _ctx: &mut ToolContext) -> Result<()> {
        Ok(())
    }
    /// The host dropped pointer capture mid-drag.
    fn on_capture_lost(&mut self, input: &PointerInput, ctx: &mut ToolContext) -> Result<()> {
        self.on_pointer_up(input, ctx)
    }
    /// Escape or tool switch during a drag.
    fn on_cancel(&mut self, _ctx: &mut ToolContext) -> Result<()> {
        Ok(())
    }
    /// Forgets gesture state without touching the canvas.
    fn reset(&mut self) {}
    fn preview(&self, _ctx: &PreviewContext) -> Option<Preview> {
        None
    }
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
