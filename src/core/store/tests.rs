use crate::core::color::Color;
use super::*;
use crate::core::selection::SelectionRect;

fn c(token: &str) -> Color { Color::new(token) }

#[test]
fn test_store_defaults() {
    let s = PixelStore::new(10, 10);
    assert_eq!(s.layers.len(), 1);
    assert_eq!(s.active_layer_id, s.layers[0].id);
    assert_eq!(s.composite.len(), 100);
    assert!(s.selection.is_none());
}

#[test]
fn test_store_next_layer_name_fills_gaps() {
    let mut s = PixelStore::new(4, 4);
    let l2 = s.create_layer(None);
    s.add_layer(l2);
    let l3 = s.create_layer(None);
    s.add_layer(l3);
    let names: Vec<_> = s.layers.iter().map(|l| l.name.clone()).collect();
    assert_eq!(names, vec!["Layer 1", "Layer 2", "Layer 3"]);

    let id2 = s.layers[1].id.clone();
    s.remove_layer_by_id(&id2);
    assert_eq!(s.next_layer_name(), "Layer 2");
}

#[test]
fn test_store_add_layer_becomes_active_on_top() {
    let mut s = PixelStore::new(4, 4);
    let l = s.create_layer(Some("Top".into()));
    let id = l.id.clone();
    s.add_layer(l);
    assert_eq!(s.layers.last().unwrap().id, id);
    assert_eq!(s.active_layer_id, id);
}

#[test]
fn test_store_remove_last_refused() {
    let mut s = PixelStore::new(4, 4);
    let id = s.layers[0].id.clone();
    assert!(s.remove_layer_by_id(&id).is_none());
    assert_eq!(s.layers.len(), 1);
}

#[test]
fn test_store_remove_active_falls_back_to_top() {
    let mut s = PixelStore::new(4, 4);
    let bottom = s.layers[0].id.clone();
    let mid = s.create_layer(None);
    let mid_id = mid.id.clone();
    s.add_layer(mid);
    let top = s.create_layer(None);
    let top_id = top.id.clone();
    s.add_layer(top);

    assert!(s.set_active_layer(&mid_id));
    s.remove_layer_by_id(&mid_id);
    assert_eq!(s.active_layer_id, top_id);

    s.remove_layer_by_id(&top_id);
    assert_eq!(s.active_layer_id, bottom);
}

#[test]
fn test_store_unknown_ids_are_noops() {
    let mut s = PixelStore::new(4, 4);
    assert!(!s.set_active_layer("nope"));
    assert!(!s.toggle_visibility("nope"));
    assert!(!s.rename_layer("nope", "x"));
    assert!(s.duplicate_layer("nope").is_none());
    assert!(s.remove_layer_by_id("nope").is_none());
}

#[test]
fn test_store_write_short_circuits_identical() {
    let mut s = PixelStore::new(4, 4);
    assert!(s.paint_cells(&[5], &Some(c("#f00"))).unwrap());
    let rev = s.revision;
    assert!(!s.paint_cells(&[5], &Some(c("#f00"))).unwrap());
    assert_eq!(s.revision, rev);
    assert_eq!(s.composite_pixel(5), Some(c("#f00")));
}

#[test]
fn test_store_replace_rejects_wrong_length() {
    let mut s = PixelStore::new(4, 4);
    assert!(s.replace_active_pixels(vec![None; 3]).is_err());
    assert!(s.active_layer().unwrap().is_blank());
}

#[test]
fn test_store_reorder_changes_composite() {
    let mut s = PixelStore::new(2, 1);
    s.paint_cells(&[0], &Some(c("#111"))).unwrap();
    let top = s.create_layer(None);
    s.add_layer(top);
    s.paint_cells(&[0], &Some(c("#222"))).unwrap();
    assert_eq!(s.composite_pixel(0), Some(c("#222")));

    assert!(s.reorder_layer(1, 0));
    assert_eq!(s.composite_pixel(0), Some(c("#111")));
    assert!(!s.reorder_layer(0, 5));
}

#[test]
fn test_store_visibility_affects_composite() {
    let mut s = PixelStore::new(2, 1);
    s.paint_cells(&[1], &Some(c("#abc"))).unwrap();
    let id = s.active_layer_id.clone();
    s.toggle_visibility(&id);
    assert_eq!(s.composite_pixel(1), None);
    s.toggle_visibility(&id);
    assert_eq!(s.composite_pixel(1), Some(c("#abc")));
}

#[test]
fn test_store_duplicate_layer() {
    let mut s = PixelStore::new(3, 3);
    s.paint_cells(&[4], &Some(c("#0f0"))).unwrap();
    let src = s.active_layer_id.clone();
    let copy = s.duplicate_layer(&src).unwrap();
    assert_eq!(s.layers.len(), 2);
    assert_eq!(s.active_layer_id, copy);
    assert_eq!(s.layers[1].name, "Layer 1 copy");
    assert_eq!(s.layers[1].pixels, s.layers[0].pixels);
}

#[test]
fn test_store_resize_drops_selection() {
    let mut s = PixelStore::new(8, 8);
    let idx = s.grid.coords_to_index(1, 1);
    s.paint_cells(&[idx], &Some(c("#f00"))).unwrap();
    s.select_entire_canvas().unwrap();
    assert!(s.resize_grid(4, 4).unwrap());
    assert!(s.selection.is_none());
    assert_eq!(s.composite.len(), 16);
    let idx = s.grid.coords_to_index(1, 1);
    assert_eq!(s.composite_pixel(idx), Some(c("#f00")));
    assert!(!s.resize_grid(4, 4).unwrap());
    assert!(s.resize_grid(0, 4).is_err());
}

#[test]
fn test_store_selection_lift_move_drop() {
    let mut s = PixelStore::new(6, 6);
    let g = s.grid;
    s.paint_cells(&[g.coords_to_index(1, 1)], &Some(c("#f00"))).unwrap();
    s.define_selection(SelectionRect::new(0, 0, 3, 3)).unwrap();

    assert!(s.lift_selection().unwrap());
    assert_eq!(s.composite_pixel(g.coords_to_index(1, 1)), None);
    assert!(s.move_selection(2, 1));
    assert!(s.drop_selection().unwrap());

    assert_eq!(s.composite_pixel(g.coords_to_index(3, 2)), Some(c("#f00")));
    let sel = s.selection.as_ref().unwrap();
    assert_eq!(sel.rect, SelectionRect::new(2, 1, 3, 3));
    assert!(!sel.is_floating);
}

#[test]
fn test_store_cancel_floating_restores_source() {
    let mut s = PixelStore::new(6, 6);
    let g = s.grid;
    s.paint_cells(&[g.coords_to_index(2, 2)], &Some(c("#f00"))).unwrap();
    let before = s.active_pixels().unwrap().to_vec();
    s.define_selection(SelectionRect::new(1, 1, 3, 3)).unwrap();
    s.lift_selection().unwrap();
    s.move_selection(2, 2);
    assert!(s.cancel_selection().unwrap());
    assert!(s.selection.is_none());
    assert_eq!(s.active_pixels().unwrap(), &before[..]);
}

#[test]
fn test_store_delete_selection_clears_footprint() {
    let mut s = PixelStore::new(4, 4);
    let g = s.grid;
    s.paint_cells(&[g.coords_to_index(0, 0)], &Some(c("#f00"))).unwrap();
    s.paint_cells(&[g.coords_to_index(3, 3)], &Some(c("#00f"))).unwrap();
    s.define_selection(SelectionRect::new(0, 0, 2, 2)).unwrap();
    assert!(s.delete_selection().unwrap());
    assert_eq!(s.composite_pixel(0), None);
    assert_eq!(s.composite_pixel(15), Some(c("#00f")));
    assert!(!s.delete_selection().unwrap());
}

#[test]
fn test_store_clear_all_layers() {
    let mut s = PixelStore::new(2, 2);
    assert!(!s.clear_all_layers());
    s.paint_cells(&[0, 3], &Some(c("#fff"))).unwrap();
    assert!(s.clear_all_layers());
    assert!(s.composite.iter().all(Option::is_none));
}
