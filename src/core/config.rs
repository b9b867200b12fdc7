use crate::core::color::Color;
use crate::core::error::{CoreError, Result};
use crate::core::palette::Palette;
use serde::{Deserialize, Serialize};

pub const MAX_GRID_DIM: u32 = 1024;
pub const MAX_BRUSH_SIZE: u32 = 16;
pub const MAX_EXPORT_SCALE: u32 = 32;
pub const DEFAULT_GRID_DIM: u32 = 32;
pub const DEFAULT_HISTORY_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushShape {
    #[default]
    Square,
    /// Diamond footprint: Manhattan distance <= 1 from the center.
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Square,
    Circle,
    Triangle,
}

/// Values owned by the host's settings layer and consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub width: u32,
    pub height: u32,
    pub preview_enabled: bool,
    pub brush_size: u32,
    pub brush_shape: BrushShape,
    pub shape_kind: ShapeKind,
    pub shape_filled: bool,
    pub palette: Palette,
    pub active_color: Option<Color>,
    pub history_limit: usize,
    pub export_scale: u32,
    pub export_filename: String,
    pub zoom_in_on_click: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_DIM,
            height: DEFAULT_GRID_DIM,
            preview_enabled: true,
            brush_size: 1,
            brush_shape: BrushShape::Square,
            shape_kind: ShapeKind::Square,
            shape_filled: false,
            palette: Palette::default_pico8(),
            active_color: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            export_scale: 1,
            export_filename: "pixel-art.png".to_string(),
            zoom_in_on_click: true,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        if self.brush_size == 0 || self.brush_size > MAX_BRUSH_SIZE {
            return Err(CoreError::InvalidConfig(format!("brushSize {} not in 1..={}", self.brush_size, MAX_BRUSH_SIZE)));
        }
        if self.history_limit == 0 {
            return Err(CoreError::InvalidConfig("historyLimit must be at least 1".into()));
        }
        if self.export_scale == 0 || self.export_scale > MAX_EXPORT_SCALE {
            return Err(CoreError::InvalidConfig(format!("exportScale {} not in 1..={}", self.export_scale, MAX_EXPORT_SCALE)));
        }
        Ok(())
    }

    /// Explicit active color, else the first palette entry, else black.
    pub fn initial_color(&self) -> Color {
        self.active_color
            .clone()
            .or_else(|| self.palette.colors.first().cloned())
            .unwrap_or_else(|| Color::new("#000000"))
    }
}

pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_GRID_DIM || height > MAX_GRID_DIM {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    Ok(())
}
