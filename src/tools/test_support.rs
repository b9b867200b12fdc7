use crate::app::context::{PreviewContext, ToolContext};
use crate::app::events::PointerInput;
use crate::app::state::{GestureSession, ToolSettings};
use crate::app::view_state::ViewState;
use crate::core::color::Color;
use crate::core::store::PixelStore;
use crate::history::manager::HistoryManager;

pub struct Bench {
    pub store: PixelStore,
    pub history: HistoryManager,
    pub settings: ToolSettings,
    pub view: ViewState,
    pub session: GestureSession,
}

impl Bench {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            store: PixelStore::new(width, height),
            history: HistoryManager::new(15),
            settings: ToolSettings { color: Color::new("#ff0000"), ..ToolSettings::default() },
            view: ViewState::new(),
            session: GestureSession::default(),
        }
    }

    pub fn ctx(&mut self) -> ToolContext<'_> {
        ToolContext {
            store: &mut self.store,
            history: &mut self.history,
            settings: &mut self.settings,
            view: &mut self.view,
            session: &mut self.session,
        }
    }

    pub fn preview_ctx(&self) -> PreviewContext<'_> {
        PreviewContext { store: &self.store, settings: &self.settings, session: &self.session }
    }

    pub fn at(&self, x: i32, y: i32) -> PointerInput {
        PointerInput::at_cell(self.store.grid, x, y)
    }

    pub fn idx(&self, x: i32, y: i32) -> usize {
        self.store.grid.coords_to_index(x, y)
    }

    pub fn painted(&self) -> usize {
        self.store.active_layer().map(|l| l.painted_count()).unwrap_or(0)
    }
}
