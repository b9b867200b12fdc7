use crate::app::commands::EditorCommand;
use crate::core::error::CoreError;
use crate::core::grid::GridGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// One pointer sample, already resolved against the grid by the host.
/// `world` is the sub-cell position in cell units; `cell` is `None` when the
/// pointer is off-canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub pointer_id: u32,
    pub cell: Option<usize>,
    pub world: Option<(f64, f64)>,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// Sample at the center of cell `(x, y)`.
    pub fn at_cell(grid: GridGeometry, x: i32, y: i32) -> Self {
        Self {
            pointer_id: 1,
            cell: grid.checked_index(x, y),
            world: Some((x as f64 + 0.5, y as f64 + 0.5)),
            button: PointerButton::Primary,
            modifiers: Modifiers::none(),
        }
    }

    pub fn at_world(grid: GridGeometry, world_x: f64, world_y: f64) -> Self {
        Self {
            pointer_id: 1,
            cell: grid.cell_at(world_x, world_y),
            world: Some((world_x, world_y)),
            button: PointerButton::Primary,
            modifiers: Modifiers::none(),
        }
    }

    /// A sample carrying no position, e.g. a window-level pointer-up.
    pub fn detached() -> Self {
        Self {
            pointer_id: 1,
            cell: None,
            world: None,
            button: PointerButton::Primary,
            modifiers: Modifiers::none(),
        }
    }

    pub fn with_pointer_id(mut self, pointer_id: u32) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Right button, or Ctrl/Cmd/Alt held.
    pub fn wants_erase(&self) -> bool {
        self.button == PointerButton::Secondary || self.modifiers.command() || self.modifiers.alt
    }

    pub fn world_point(&self, grid: GridGeometry) -> Option<(f64, f64)> {
        self.world.or_else(|| self.cell.map(|idx| grid.cell_center(idx)))
    }

    /// Integer cell coordinates, possibly outside the grid.
    pub fn grid_point(&self, grid: GridGeometry) -> Option<(i32, i32)> {
        match (self.cell, self.world) {
            (Some(idx), _) => Some(grid.index_to_coords(idx)),
            (None, Some((wx, wy))) if wx.is_finite() && wy.is_finite() => {
                Some((wx.floor() as i32, wy.floor() as i32))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp(PointerInput),
    PointerEnter(PointerInput),
    PointerLeave(PointerInput),
    /// The host lost pointer capture.
    PointerCancel(PointerInput),
    Key { key: String, modifiers: Modifiers },
    Command(EditorCommand),
}

#[derive(Debug, PartialEq)]
pub enum EngineEffect {
    None,
    /// Hover, preview or selection overlay changed; pixels did not.
    RedrawOverlay,
    RedrawCanvas,
    ViewChanged,
    Error(CoreError),
}

impl EngineEffect {
    fn rank(&self) -> u8 {
        match self {
            EngineEffect::None => 0,
            EngineEffect::RedrawOverlay => 1,
            EngineEffect::ViewChanged => 2,
            EngineEffect::RedrawCanvas => 3,
            EngineEffect::Error(_) => 4,
        }
    }

    pub fn merge(self, other: EngineEffect) -> EngineEffect {
        match (self, other) {
            (EngineEffect::ViewChanged, EngineEffect::RedrawCanvas)
            | (EngineEffect::RedrawCanvas, EngineEffect::ViewChanged) => EngineEffect::RedrawCanvas,
            (a, b) => {
                if b.rank() > a.rank() {
                    b
                } else {
                    a
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
