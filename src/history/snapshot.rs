use crate::core::grid::GridGeometry;
use crate::core::layer::Layer;
use crate::core::selection::Selection;
use crate::core::store::PixelStore;

/// Deep copy of everything a gesture can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid: GridGeometry,
    pub layers: Vec<Layer>,
    pub active_layer_id: String,
    pub selection: Option<Selection>,
}

impl Snapshot {
    pub fn capture(store: &PixelStore) -> Self {
        Self {
            grid: store.grid,
            layers: store.layers.clone(),
            active_layer_id: store.active_layer_id.clone(),
            selection: store.selection.clone(),
        }
    }

    /// Same editable state as `store`. Layers are compared element-wise.
    pub fn matches(&self, store: &PixelStore) -> bool {
        self.grid == store.grid
            && self.active_layer_id == store.active_layer_id
            && self.selection == store.selection
            && self.layers == store.layers
    }

    /// Writes the snapshot back into the store. A snapshot taken at other
    /// grid dimensions is cropped/extended to the current ones and loses its
    /// selection.
    pub fn restore(self, store: &mut PixelStore) {
        let current = store.grid;
        let Snapshot { grid, mut layers, active_layer_id, mut selection } = self;
        if grid != current {
            for layer in &mut layers {
                layer.resize(grid, current);
            }
            selection = None;
        }

        let active = if layers.iter().any(|l| l.id == active_layer_id) {
            active_layer_id
        } else {
            layers.last().map(|l| l.id.clone()).unwrap_or_default()
        };

        store.layers = layers;
        store.active_layer_id = active;
        store.selection = selection;
        store.refresh_composite();
    }
}
