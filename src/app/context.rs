use crate::app::state::{GestureSession, ToolSettings};
use crate::app::view_state::ViewState;
use crate::core::store::PixelStore;
use crate::history::manager::HistoryManager;

pub struct CanvasContext<'a> {
    pub store: &'a mut PixelStore,
    pub history: &'a mut HistoryManager,
}

/// Everything a tool may touch while handling one pointer event.
pub struct ToolContext<'a> {
    pub store: &'a mut PixelStore,
    pub history: &'a mut HistoryManager,
    pub settings: &'a mut ToolSettings,
    pub view: &'a mut ViewState,
    pub session: &'a mut GestureSession,
}

impl<'a> ToolContext<'a> {
    pub fn begin_action(&mut self) {
        self.history.begin_action(self.store);
    }

    pub fn finalize_action(&mut self) {
        self.history.finalize_action(self.store);
    }
}

/// Read-only view handed to `Tool::preview`.
pub struct PreviewContext<'a> {
    pub store: &'a PixelStore,
    pub settings: &'a ToolSettings,
    pub session: &'a GestureSession,
}
