use crate::app::context::CanvasContext;
use crate::core::error::Result;
use crate::core::store::PixelStore;
use tracing::debug;

/// Layer-stack edits, each recorded as one undo step.
pub struct LayerService;

impl LayerService {
    fn record<T>(ctx: CanvasContext, edit: impl FnOnce(&mut PixelStore) -> Result<T>) -> Result<T> {
        ctx.history.begin_action(ctx.store);
        let result = edit(&mut *ctx.store);
        ctx.history.finalize_action(ctx.store);
        result
    }

    /// A selection belongs to the layer it was captured from; it is put back
    /// before another layer becomes active.
    fn release_selection(store: &mut PixelStore, next_active: Option<&str>) -> Result<()> {
        let switching = match next_active {
            Some(id) => store.active_layer_id != id && store.get_layer(id).is_some(),
            None => true,
        };
        if switching {
            store.cancel_selection()?;
        }
        Ok(())
    }

    pub fn add_new_layer(ctx: CanvasContext) -> Result<String> {
        Self::record(ctx, |store| {
            Self::release_selection(store, None)?;
            let layer = store.create_layer(None);
            let id = layer.id.clone();
            debug!(id = %id, name = %layer.name, "layer added");
            store.add_layer(layer);
            Ok(id)
        })
    }

    /// No-op for the last remaining layer or an unknown id.
    pub fn delete_layer(ctx: CanvasContext, layer_id: &str) -> Result<bool> {
        Self::record(ctx, |store| {
            if store.layers.len() > 1 && store.active_layer_id == layer_id {
                store.cancel_selection()?;
            }
            let removed = store.remove_layer_by_id(layer_id).is_some();
            if removed {
                debug!(id = layer_id, active = %store.active_layer_id, "layer deleted");
            }
            Ok(removed)
        })
    }

    pub fn set_active_layer(ctx: CanvasContext, layer_id: &str) -> Result<bool> {
        Self::record(ctx, |store| {
            Self::release_selection(store, Some(layer_id))?;
            Ok(store.set_active_layer(layer_id))
        })
    }

    pub fn toggle_visibility(ctx: CanvasContext, layer_id: &str) -> Result<bool> {
        Self::record(ctx, |store| Ok(store.toggle_visibility(layer_id)))
    }

    pub fn reorder_layer(ctx: CanvasContext, from: usize, to: usize) -> Result<bool> {
        Self::record(ctx, |store| {
            let moved = store.reorder_layer(from, to);
            if moved {
                debug!(from, to, "layer reordered");
            }
            Ok(moved)
        })
    }

    pub fn rename_layer(ctx: CanvasContext, layer_id: &str, name: &str) -> Result<bool> {
        Self::record(ctx, |store| Ok(store.rename_layer(layer_id, name)))
    }

    pub fn duplicate_layer(ctx: CanvasContext, layer_id: &str) -> Result<Option<String>> {
        Self::record(ctx, |store| {
            if store.get_layer(layer_id).is_some() {
                Self::release_selection(store, None)?;
            }
            Ok(store.duplicate_layer(layer_id))
        })
    }

    /// Empties every layer and drops the selection.
    pub fn clear_all(ctx: CanvasContext) -> Result<bool> {
        Self::record(ctx, |store| Ok(store.clear_all_layers()))
    }
}
