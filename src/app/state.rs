use crate::app::events::{Modifiers, PointerInput};
use crate::core::color::{Color, Pixel};
use crate::core::config::{BrushShape, EditorConfig, ShapeKind, MAX_BRUSH_SIZE};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ToolType {
    Pencil,
    Eraser,
    Eyedropper,
    Bucket,
    Line,
    Shape,
    Magnifier,
    RectSelect,
}

impl ToolType {
    pub const ALL: [ToolType; 8] = [
        ToolType::Pencil,
        ToolType::Eraser,
        ToolType::Eyedropper,
        ToolType::Bucket,
        ToolType::Line,
        ToolType::Shape,
        ToolType::Magnifier,
        ToolType::RectSelect,
    ];
}

/// Runtime drawing settings; seeded from `EditorConfig`, changed through the
/// engine setters.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    pub color: Color,
    pub brush_size: u32,
    pub brush_shape: BrushShape,
    pub shape_kind: ShapeKind,
    pub shape_filled: bool,
    pub preview_enabled: bool,
    pub zoom_in_on_click: bool,
}

impl ToolSettings {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            color: config.initial_color(),
            brush_size: config.brush_size.clamp(1, MAX_BRUSH_SIZE),
            brush_shape: config.brush_shape,
            shape_kind: config.shape_kind,
            shape_filled: config.shape_filled,
            preview_enabled: config.preview_enabled,
            zoom_in_on_click: config.zoom_in_on_click,
        }
    }

    /// What a paint gesture writes: nothing when erasing, the active color
    /// otherwise.
    pub fn draw_value(&self, input: &PointerInput) -> Pixel {
        if input.wants_erase() {
            None
        } else {
            Some(self.color.clone())
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

/// Cells the renderer should highlight, with an opacity hint.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub cells: Vec<usize>,
    pub opacity: f32,
    pub value: Pixel,
}

pub const HOVER_OPACITY: f32 = 0.5;
pub const STROKE_OPACITY: f32 = 1.0;
pub const REGION_OPACITY: f32 = 0.35;

/// Pointer state shared by all tools and kept across gestures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureSession {
    pub hover_cell: Option<usize>,
    /// End of the last paint gesture; anchor for shift-click lines.
    pub last_pointed_cell: Option<usize>,
    pub modifiers: Modifiers,
}

impl GestureSession {
    pub fn track(&mut self, input: &PointerInput) {
        self.hover_cell = input.cell;
        self.modifiers = input.modifiers;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
