use super::color::Pixel;
use super::error::{CoreError, Result};
use super::grid::GridGeometry;
use super::id_gen;
use super::layer::Layer;
use super::selection::{
    apply_selection_to_layer, capture_selection_pixels, entire_canvas_rect, ApplyMode, Selection, SelectionRect,
};
use crate::core::config::validate_dimensions;
use crate::render::compositor::Compositor;
use rust_i18n::t;
use tracing::debug;

/// Layer stack, active layer, derived composite and the live selection.
/// Index 0 of `layers` is the bottom of the stack.
pub struct PixelStore {
    pub grid: GridGeometry,
    pub layers: Vec<Layer>,
    pub active_layer_id: String,
    pub composite: Vec<Pixel>,
    pub selection: Option<Selection>,
    /// Bumped every time the composite is recomputed.
    pub revision: u64,
}

impl PixelStore {
    pub fn new(width: u32, height: u32) -> Self {
        let grid = GridGeometry::new(width, height);
        let first = Layer::new(id_gen::gen_layer_id(), t!("layer.default_name", num = 1).to_string(), grid);
        let mut store = Self {
            grid,
            active_layer_id: first.id.clone(),
            layers: vec![first],
            composite: vec![None; grid.len()],
            selection: None,
            revision: 0,
        };
        store.refresh_composite();
        store
    }

    pub fn refresh_composite(&mut self) {
        Compositor::update_composite(self, None);
    }

    /// Lowest `Layer N` not already taken.
    pub fn next_layer_name(&self) -> String {
        (1..)
            .map(|n: usize| t!("layer.default_name", num = n).to_string())
            .find(|name| !self.layers.iter().any(|l| &l.name == name))
            .unwrap_or_default()
    }

    pub fn create_layer(&self, name: Option<String>) -> Layer {
        let name = name.unwrap_or_else(|| self.next_layer_name());
        Layer::new(id_gen::gen_layer_id(), name, self.grid)
    }

    /// Pushes on top of the stack and makes it active.
    pub fn add_layer(&mut self, layer: Layer) {
        self.active_layer_id = layer.id.clone();
        self.layers.push(layer);
        self.refresh_composite();
    }

    pub fn add_layer_at(&mut self, layer: Layer, index: usize) {
        let idx = index.min(self.layers.len());
        self.active_layer_id = layer.id.clone();
        self.layers.insert(idx, layer);
        self.refresh_composite();
    }

    /// Refuses to remove the last layer. A removed active layer hands over to
    /// the new topmost layer.
    pub fn remove_layer_by_id(&mut self, id: &str) -> Option<(Layer, usize)> {
        if self.layers.len() <= 1 {
            return None;
        }
        let index = self.layer_index(id)?;
        let removed = self.layers.remove(index);
        if self.active_layer_id == id {
            if let Some(top) = self.layers.last() {
                self.active_layer_id = top.id.clone();
            }
        }
        self.refresh_composite();
        Some((removed, index))
    }

    pub fn layer_index(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    pub fn get_layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn get_layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    pub fn active_layer(&self) -> Result<&Layer> {
        self.get_layer(&self.active_layer_id)
            .ok_or_else(|| CoreError::LayerNotFound(self.active_layer_id.clone()))
    }

    pub fn active_pixels(&self) -> Result<&[Pixel]> {
        Ok(&self.active_layer()?.pixels)
    }

    pub fn set_active_layer(&mut self, id: &str) -> bool {
        if self.active_layer_id == id || self.get_layer(id).is_none() {
            return false;
        }
        self.active_layer_id = id.to_string();
        true
    }

    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        let Some(layer) = self.get_layer_mut(id) else { return false };
        layer.visible = !layer.visible;
        self.refresh_composite();
        true
    }

    pub fn reorder_layer(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.layers.len() || to >= self.layers.len() {
            return false;
        }
        let layer = self.layers.remove(from);
        self.layers.insert(to, layer);
        self.refresh_composite();
        true
    }

    pub fn rename_layer(&mut self, id: &str, name: &str) -> bool {
        match self.get_layer_mut(id) {
            Some(layer) if layer.name != name => {
                layer.name = name.to_string();
                true
            }
            _ => false,
        }
    }

    /// Copy goes directly above the source and becomes active.
    pub fn duplicate_layer(&mut self, id: &str) -> Option<String> {
        let index = self.layer_index(id)?;
        let mut copy = self.layers[index].clone();
        copy.id = id_gen::gen_layer_id();
        copy.name = t!("layer.copy_name", name = copy.name).to_string();
        let new_id = copy.id.clone();
        self.add_layer_at(copy, index + 1);
        Some(new_id)
    }

    /// The only path that mutates layer content. `mutate` works on a copy of
    /// the active layer; an element-wise identical result changes nothing.
    pub fn write_active_pixels<F>(&mut self, mutate: F) -> Result<bool>
    where
        F: FnOnce(GridGeometry, &mut Vec<Pixel>),
    {
        let grid = self.grid;
        let active_id = self.active_layer_id.clone();
        let layer = self.get_layer_mut(&active_id).ok_or(CoreError::LayerNotFound(active_id))?;
        let mut next = layer.pixels.clone();
        mutate(grid, &mut next);
        if next.len() != grid.len() {
            return Err(CoreError::InvalidDimensions { width: grid.width, height: grid.height });
        }

        let mut dirty: Option<(i32, i32, i32, i32)> = None;
        for (idx, (old, new)) in layer.pixels.iter().zip(next.iter()).enumerate() {
            if old != new {
                let (x, y) = grid.index_to_coords(idx);
                dirty = Some(match dirty {
                    None => (x, y, x, y),
                    Some((x1, y1, x2, y2)) => (x1.min(x), y1.min(y), x2.max(x), y2.max(y)),
                });
            }
        }
        let Some((x1, y1, x2, y2)) = dirty else { return Ok(false) };

        layer.pixels = next;
        let rect = (x1 as u32, y1 as u32, (x2 - x1 + 1) as u32, (y2 - y1 + 1) as u32);
        Compositor::update_composite(self, Some(rect));
        Ok(true)
    }

    pub fn replace_active_pixels(&mut self, pixels: Vec<Pixel>) -> Result<bool> {
        self.write_active_pixels(move |_, current| *current = pixels)
    }

    /// Writes one value into every listed cell of the active layer.
    pub fn paint_cells(&mut self, cells: &[usize], value: &Pixel) -> Result<bool> {
        self.write_active_pixels(|_, pixels| {
            for &idx in cells {
                if let Some(slot) = pixels.get_mut(idx) {
                    *slot = value.clone();
                }
            }
        })
    }

    pub fn composite_pixel(&self, index: usize) -> Pixel {
        self.composite.get(index).cloned().flatten()
    }

    /// Crop/extend every layer; the live selection does not survive.
    pub fn resize_grid(&mut self, width: u32, height: u32) -> Result<bool> {
        validate_dimensions(width, height)?;
        let old = self.grid;
        let new = GridGeometry::new(width, height);
        if old == new {
            return Ok(false);
        }
        debug!(from = ?(old.width, old.height), to = ?(width, height), "resizing grid");
        for layer in &mut self.layers {
            layer.resize(old, new);
        }
        self.grid = new;
        self.selection = None;
        self.composite = vec![None; new.len()];
        self.refresh_composite();
        Ok(true)
    }

    pub fn clear_all_layers(&mut self) -> bool {
        let mut changed = false;
        for layer in &mut self.layers {
            changed |= layer.clear();
        }
        changed |= self.selection.take().is_some();
        if changed {
            self.refresh_composite();
        }
        changed
    }

    // --- selection ---

    pub fn define_selection(&mut self, rect: SelectionRect) -> Result<()> {
        let pixels = capture_selection_pixels(self.grid, self.active_pixels()?, rect);
        self.selection = Some(Selection::new(rect, pixels));
        Ok(())
    }

    pub fn select_entire_canvas(&mut self) -> Result<()> {
        self.define_selection(entire_canvas_rect(self.grid))
    }

    /// Lifts the selected content out of the layer so it can be dragged.
    pub fn lift_selection(&mut self) -> Result<bool> {
        let Some(selection) = self.selection.clone() else { return Ok(false) };
        if selection.is_floating {
            return Ok(false);
        }
        self.write_active_pixels(|grid, pixels| {
            apply_selection_to_layer(grid, pixels, &selection, selection.offset, ApplyMode::Clear);
        })?;
        if let Some(sel) = self.selection.as_mut() {
            sel.is_floating = true;
        }
        Ok(true)
    }

    pub fn move_selection(&mut self, dx: i32, dy: i32) -> bool {
        let grid = self.grid;
        let Some(sel) = self.selection.as_mut() else { return false };
        let clamped = sel.clamp_offset(grid, dx, dy);
        if sel.offset == clamped {
            return false;
        }
        sel.offset = clamped;
        true
    }

    /// Drops a floating selection into the layer at its current offset.
    pub fn drop_selection(&mut self) -> Result<bool> {
        let Some(selection) = self.selection.clone() else { return Ok(false) };
        if !selection.is_floating {
            return Ok(false);
        }
        self.write_active_pixels(|grid, pixels| {
            apply_selection_to_layer(grid, pixels, &selection, selection.offset, ApplyMode::Apply);
        })?;
        let grid = self.grid;
        if let Some(sel) = self.selection.as_mut() {
            sel.commit_offset(grid);
        }
        Ok(true)
    }

    /// Puts floating content back where it was lifted from and discards the
    /// selection.
    pub fn cancel_selection(&mut self) -> Result<bool> {
        let Some(selection) = self.selection.take() else { return Ok(false) };
        if selection.is_floating {
            self.write_active_pixels(|grid, pixels| {
                apply_selection_to_layer(grid, pixels, &selection, (0, 0), ApplyMode::Apply);
            })?;
        }
        Ok(true)
    }

    /// Removes the selected content. Floating content is already out of the
    /// layer and is simply dropped.
    pub fn delete_selection(&mut self) -> Result<bool> {
        let Some(selection) = self.selection.take() else { return Ok(false) };
        if !selection.is_floating {
            self.write_active_pixels(|grid, pixels| {
                apply_selection_to_layer(grid, pixels, &selection, selection.offset, ApplyMode::Clear);
            })?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
