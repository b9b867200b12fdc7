use crate::app::state::ToolType;
use crate::core::color::Color;
use crate::core::config::{BrushShape, ShapeKind};
use crate::core::palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    Undo,
    Redo,
    Reset,
    SelectTool(ToolType),
    /// Escape: abort the drag in progress, else drop the selection.
    Cancel,
    DeleteSelection,
    SelectAll,
    ChangeBrushSize(i32),
    SetBrushSize(u32),
    SetBrushShape(BrushShape),
    SetShapeKind(ShapeKind),
    SetShapeFilled(bool),
    SetPreviewEnabled(bool),
    SetColor(Color),
    AddColorToPalette(Color),
    RemovePaletteColor(usize),
    SetPalette(Palette),
    AddLayer,
    DeleteLayer(String),
    SetActiveLayer(String),
    ToggleLayerVisibility(String),
    ReorderLayer(usize, usize),
    RenameLayer(String, String),
    DuplicateLayer(String),
    ResizeGrid(u32, u32),
    ZoomIn,
    ZoomOut,
}
