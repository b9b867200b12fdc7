use crate::app::commands::EditorCommand;
use crate::app::context::{CanvasContext, PreviewContext, ToolContext};
use crate::app::events::{EngineEffect, InputEvent, PointerInput};
use crate::app::layer_service::LayerService;
use crate::app::shortcut_manager::ShortcutManager;
use crate::app::state::{GestureSession, Preview, ToolSettings, ToolType};
use crate::app::tool_manager::ToolManager;
use crate::app::view_state::ViewState;
use crate::core::color::{Color, Pixel};
use crate::core::config::{validate_dimensions, BrushShape, EditorConfig, ShapeKind, MAX_BRUSH_SIZE};
use crate::core::error::Result;
use crate::core::grid::GridGeometry;
use crate::core::layer::Layer;
use crate::core::palette::Palette;
use crate::core::selection::{Selection, SelectionRect};
use crate::core::store::PixelStore;
use crate::history::manager::HistoryManager;
use crate::render::export;
use crate::tools::rect_select::RectSelectTool;
use tracing::{debug, warn};

/// Owns the whole editing state and is the only entry point hosts talk to.
pub struct EditorEngine {
    store: PixelStore,
    history: HistoryManager,
    tool_manager: ToolManager,
    settings: ToolSettings,
    view: ViewState,
    session: GestureSession,
    config: EditorConfig,
    shortcuts: ShortcutManager,
}

impl EditorEngine {
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::build(EditorConfig::from_json(json)?))
    }

    fn build(config: EditorConfig) -> Self {
        Self {
            store: PixelStore::new(config.width, config.height),
            history: HistoryManager::new(config.history_limit),
            tool_manager: ToolManager::new(),
            settings: ToolSettings::from_config(&config),
            view: ViewState::new(),
            session: GestureSession::default(),
            shortcuts: ShortcutManager::new(),
            config,
        }
    }

    pub fn store(&self) -> &PixelStore { &self.store }
    pub fn history(&self) -> &HistoryManager { &self.history }
    pub fn tool_manager(&self) -> &ToolManager { &self.tool_manager }
    pub fn settings(&self) -> &ToolSettings { &self.settings }
    pub fn view(&self) -> &ViewState { &self.view }
    pub fn session(&self) -> &GestureSession { &self.session }
    pub fn config(&self) -> &EditorConfig { &self.config }
    pub fn palette(&self) -> &Palette { &self.config.palette }
    pub fn shortcuts_mut(&mut self) -> &mut ShortcutManager { &mut self.shortcuts }

    pub fn grid(&self) -> GridGeometry { self.store.grid }
    pub fn layers(&self) -> &[Layer] { &self.store.layers }
    pub fn composite(&self) -> &[Pixel] { &self.store.composite }
    pub fn active_layer_id(&self) -> &str { &self.store.active_layer_id }
    pub fn selection(&self) -> Option<&Selection> { self.store.selection.as_ref() }
    pub fn hover_cell(&self) -> Option<usize> { self.session.hover_cell }
    pub fn active_tool(&self) -> ToolType { self.tool_manager.active_type }
    pub fn is_gesture_active(&self) -> bool { self.tool_manager.is_drawing }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo() && !self.history.is_in_progress()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo() && !self.history.is_in_progress()
    }

    /// Cells the active tool wants highlighted right now.
    pub fn preview(&self) -> Option<Preview> {
        let ctx = PreviewContext { store: &self.store, settings: &self.settings, session: &self.session };
        self.tool_manager.preview(&ctx)
    }

    /// Rectangle being rubber-banded by the selection tool.
    pub fn draft_selection(&self) -> Option<SelectionRect> {
        self.tool_manager
            .tool_as::<RectSelectTool>(ToolType::RectSelect)?
            .draft_rect(self.store.grid)
    }

    /// Cell the magnifier asked the host to scroll to, consumed once.
    pub fn take_recenter(&mut self) -> Option<usize> {
        self.view.take_recenter()
    }

    fn parts(&mut self) -> (&mut ToolManager, ToolContext<'_>) {
        (
            &mut self.tool_manager,
            ToolContext {
                store: &mut self.store,
                history: &mut self.history,
                settings: &mut self.settings,
                view: &mut self.view,
                session: &mut self.session,
            },
        )
    }

    fn canvas(&mut self) -> CanvasContext<'_> {
        CanvasContext { store: &mut self.store, history: &mut self.history }
    }

    /// Ends whatever drag is running before a structural edit.
    fn settle_gesture(&mut self) -> Result<()> {
        let (tools, mut ctx) = self.parts();
        tools.abort_gesture(&mut ctx)
    }

    // --- input ---

    pub fn handle_input(&mut self, event: InputEvent) -> EngineEffect {
        let revision = self.store.revision;
        let zoom = self.view.zoom_level;
        let result = match event {
            InputEvent::PointerDown(p) => {
                self.session.track(&p);
                let (tools, mut ctx) = self.parts();
                tools.handle_pointer_down(&p, &mut ctx).map(|_| EngineEffect::RedrawOverlay)
            }
            InputEvent::PointerMove(p) | InputEvent::PointerEnter(p) => {
                self.session.track(&p);
                let (tools, mut ctx) = self.parts();
                tools.handle_pointer_move(&p, &mut ctx).map(|_| EngineEffect::RedrawOverlay)
            }
            InputEvent::PointerUp(p) => {
                self.session.track(&p);
                let (tools, mut ctx) = self.parts();
                tools.handle_pointer_up(&p, &mut ctx).map(|_| EngineEffect::RedrawOverlay)
            }
            InputEvent::PointerLeave(p) => {
                self.session.hover_cell = None;
                self.session.modifiers = p.modifiers;
                Ok(EngineEffect::RedrawOverlay)
            }
            InputEvent::PointerCancel(p) => {
                let (tools, mut ctx) = self.parts();
                tools.handle_capture_lost(&p, &mut ctx).map(|_| EngineEffect::RedrawOverlay)
            }
            InputEvent::Key { key, modifiers } => {
                self.session.modifiers = modifiers;
                match self.shortcuts.resolve(&key, modifiers) {
                    Some(cmd) => return self.execute(cmd),
                    None => Ok(EngineEffect::RedrawOverlay),
                }
            }
            InputEvent::Command(cmd) => return self.execute(cmd),
        };
        self.effect(result, revision, zoom)
    }

    pub fn pointer_down(&mut self, input: PointerInput) -> EngineEffect {
        self.handle_input(InputEvent::PointerDown(input))
    }

    pub fn pointer_move(&mut self, input: PointerInput) -> EngineEffect {
        self.handle_input(InputEvent::PointerMove(input))
    }

    pub fn pointer_up(&mut self, input: PointerInput) -> EngineEffect {
        self.handle_input(InputEvent::PointerUp(input))
    }

    pub fn pointer_enter(&mut self, input: PointerInput) -> EngineEffect {
        self.handle_input(InputEvent::PointerEnter(input))
    }

    pub fn pointer_leave(&mut self, input: PointerInput) -> EngineEffect {
        self.handle_input(InputEvent::PointerLeave(input))
    }

    pub fn pointer_cancel(&mut self, input: PointerInput) -> EngineEffect {
        self.handle_input(InputEvent::PointerCancel(input))
    }

    pub fn execute(&mut self, cmd: EditorCommand) -> EngineEffect {
        let revision = self.store.revision;
        let zoom = self.view.zoom_level;
        let changed = |flag: bool| if flag { EngineEffect::RedrawCanvas } else { EngineEffect::None };
        let overlay = |flag: bool| if flag { EngineEffect::RedrawOverlay } else { EngineEffect::None };

        let result = match cmd {
            EditorCommand::Undo => Ok(changed(self.undo())),
            EditorCommand::Redo => Ok(changed(self.redo())),
            EditorCommand::Reset => self.reset().map(changed),
            EditorCommand::SelectTool(tool) => self.set_tool(tool).map(overlay),
            EditorCommand::Cancel => self.cancel().map(overlay),
            EditorCommand::DeleteSelection => self.delete_selection().map(overlay),
            EditorCommand::SelectAll => self.select_entire_canvas().map(|_| EngineEffect::RedrawOverlay),
            EditorCommand::ChangeBrushSize(delta) => Ok(overlay(self.change_brush_size(delta))),
            EditorCommand::SetBrushSize(size) => Ok(overlay(self.set_brush_size(size))),
            EditorCommand::SetBrushShape(shape) => Ok(overlay(self.set_brush_shape(shape))),
            EditorCommand::SetShapeKind(kind) => Ok(overlay(self.set_shape_kind(kind))),
            EditorCommand::SetShapeFilled(filled) => Ok(overlay(self.set_shape_filled(filled))),
            EditorCommand::SetPreviewEnabled(enabled) => Ok(overlay(self.set_preview_enabled(enabled))),
            EditorCommand::SetColor(color) => Ok(overlay(self.set_color(color))),
            EditorCommand::AddColorToPalette(color) => Ok(overlay(self.add_palette_color(color))),
            EditorCommand::RemovePaletteColor(index) => Ok(overlay(self.remove_palette_color(index))),
            EditorCommand::SetPalette(palette) => {
                self.set_palette(palette);
                Ok(EngineEffect::RedrawOverlay)
            }
            EditorCommand::AddLayer => self.add_layer().map(|_| EngineEffect::RedrawCanvas),
            EditorCommand::DeleteLayer(id) => self.delete_layer(&id).map(changed),
            EditorCommand::SetActiveLayer(id) => self.set_active_layer(&id).map(changed),
            EditorCommand::ToggleLayerVisibility(id) => self.toggle_layer_visibility(&id).map(changed),
            EditorCommand::ReorderLayer(from, to) => self.reorder_layer(from, to).map(changed),
            EditorCommand::RenameLayer(id, name) => self.rename_layer(&id, &name).map(changed),
            EditorCommand::DuplicateLayer(id) => self.duplicate_layer(&id).map(|copy| changed(copy.is_some())),
            EditorCommand::ResizeGrid(width, height) => self.resize_grid(width, height).map(changed),
            EditorCommand::ZoomIn => Ok(overlay(self.view.step_zoom(true))),
            EditorCommand::ZoomOut => Ok(overlay(self.view.step_zoom(false))),
        };
        self.effect(result, revision, zoom)
    }

    fn effect(&self, result: Result<EngineEffect>, revision: u64, zoom: f64) -> EngineEffect {
        let mut effect = match result {
            Ok(effect) => effect,
            Err(e) => {
                warn!(error = %e, "operation degraded to a no-op");
                return EngineEffect::Error(e);
            }
        };
        if self.view.zoom_level != zoom || self.view.recenter_on.is_some() {
            effect = effect.merge(EngineEffect::ViewChanged);
        }
        if self.store.revision != revision {
            effect = effect.merge(EngineEffect::RedrawCanvas);
        }
        effect
    }

    // --- history ---

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.store)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.store)
    }

    /// Clears every layer as one undo step; no-op on an empty canvas.
    pub fn reset(&mut self) -> Result<bool> {
        self.settle_gesture()?;
        let cleared = LayerService::clear_all(self.canvas())?;
        if cleared {
            debug!("canvas reset");
        }
        Ok(cleared)
    }

    // --- tools & selection ---

    pub fn set_tool(&mut self, tool: ToolType) -> Result<bool> {
        let (tools, mut ctx) = self.parts();
        tools.set_tool(tool, &mut ctx)
    }

    /// Escape: aborts the running drag, otherwise drops the selection.
    pub fn cancel(&mut self) -> Result<bool> {
        if self.tool_manager.is_drawing {
            self.settle_gesture()?;
            return Ok(true);
        }
        if self.store.selection.is_none() {
            return Ok(false);
        }
        self.history.begin_action(&self.store);
        let result = self.store.cancel_selection();
        self.history.finalize_action(&self.store);
        result
    }

    pub fn delete_selection(&mut self) -> Result<bool> {
        if self.store.selection.is_none() {
            return Ok(false);
        }
        let moving = self.tool_manager.is_drawing
            && self
                .tool_manager
                .tool_as::<RectSelectTool>(ToolType::RectSelect)
                .is_some_and(|t| t.is_moving());
        if moving {
            // The press already opened the history action; the floating
            // content is simply discarded.
            self.tool_manager.reset_gesture();
        } else {
            self.settle_gesture()?;
        }
        self.history.begin_action(&self.store);
        let result = self.store.delete_selection();
        self.history.finalize_action(&self.store);
        result
    }

    pub fn select_entire_canvas(&mut self) -> Result<()> {
        self.settle_gesture()?;
        self.history.begin_action(&self.store);
        let result = self.store.cancel_selection().and_then(|_| self.store.select_entire_canvas());
        self.history.finalize_action(&self.store);
        result
    }

    // --- layers ---

    pub fn add_layer(&mut self) -> Result<String> {
        self.settle_gesture()?;
        LayerService::add_new_layer(self.canvas())
    }

    pub fn delete_layer(&mut self, layer_id: &str) -> Result<bool> {
        self.settle_gesture()?;
        LayerService::delete_layer(self.canvas(), layer_id)
    }

    pub fn set_active_layer(&mut self, layer_id: &str) -> Result<bool> {
        self.settle_gesture()?;
        LayerService::set_active_layer(self.canvas(), layer_id)
    }

    pub fn toggle_layer_visibility(&mut self, layer_id: &str) -> Result<bool> {
        self.settle_gesture()?;
        LayerService::toggle_visibility(self.canvas(), layer_id)
    }

    pub fn reorder_layer(&mut self, from: usize, to: usize) -> Result<bool> {
        self.settle_gesture()?;
        LayerService::reorder_layer(self.canvas(), from, to)
    }

    pub fn rename_layer(&mut self, layer_id: &str, name: &str) -> Result<bool> {
        LayerService::rename_layer(self.canvas(), layer_id, name)
    }

    pub fn duplicate_layer(&mut self, layer_id: &str) -> Result<Option<String>> {
        self.settle_gesture()?;
        LayerService::duplicate_layer(self.canvas(), layer_id)
    }

    /// Crops or extends every layer. History does not survive a resize.
    pub fn resize_grid(&mut self, width: u32, height: u32) -> Result<bool> {
        validate_dimensions(width, height)?;
        if self.store.grid == GridGeometry::new(width, height) {
            return Ok(false);
        }
        // Floating content goes back to where it was lifted from first.
        let restored = self.store.cancel_selection();
        self.tool_manager.reset_gesture();
        self.history.clear();
        self.session.clear();
        self.config.width = width;
        self.config.height = height;
        restored?;
        self.store.resize_grid(width, height)
    }

    // --- settings ---

    pub fn set_color(&mut self, color: Color) -> bool {
        if self.settings.color == color {
            return false;
        }
        self.settings.color = color;
        true
    }

    pub fn set_brush_size(&mut self, size: u32) -> bool {
        let size = size.clamp(1, MAX_BRUSH_SIZE);
        if self.settings.brush_size == size {
            return false;
        }
        self.settings.brush_size = size;
        self.config.brush_size = size;
        true
    }

    pub fn change_brush_size(&mut self, delta: i32) -> bool {
        let next = (self.settings.brush_size as i64 + delta as i64).clamp(1, MAX_BRUSH_SIZE as i64);
        self.set_brush_size(next as u32)
    }

    pub fn set_brush_shape(&mut self, shape: BrushShape) -> bool {
        let changed = self.settings.brush_shape != shape;
        self.settings.brush_shape = shape;
        self.config.brush_shape = shape;
        changed
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) -> bool {
        let changed = self.settings.shape_kind != kind;
        self.settings.shape_kind = kind;
        self.config.shape_kind = kind;
        changed
    }

    pub fn set_shape_filled(&mut self, filled: bool) -> bool {
        let changed = self.settings.shape_filled != filled;
        self.settings.shape_filled = filled;
        self.config.shape_filled = filled;
        changed
    }

    pub fn set_preview_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.settings.preview_enabled != enabled;
        self.settings.preview_enabled = enabled;
        self.config.preview_enabled = enabled;
        changed
    }

    /// Trims the oldest entries when shrinking.
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history.set_max_steps(limit);
        self.config.history_limit = self.history.max_steps;
    }

    pub fn add_palette_color(&mut self, color: Color) -> bool {
        let before = self.config.palette.colors.len();
        self.config.palette.add_color(color);
        self.config.palette.colors.len() != before
    }

    pub fn remove_palette_color(&mut self, index: usize) -> bool {
        let before = self.config.palette.colors.len();
        self.config.palette.remove_color(index);
        self.config.palette.colors.len() != before
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.config.palette = palette;
    }

    // --- export ---

    /// PNG bytes of the composite at the configured export scale. Writing
    /// them to `config().export_filename` is up to the host.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        export::export_png(&self.store.composite, self.store.grid, self.config.export_scale)
    }
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::build(EditorConfig::default())
    }
}
