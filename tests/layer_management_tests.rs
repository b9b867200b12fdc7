use pxgrid_engine::app::commands::EditorCommand;
use pxgrid_engine::app::engine::EditorEngine;
use pxgrid_engine::app::events::{EngineEffect, PointerInput};
use pxgrid_engine::core::color::{Color, Pixel};
use pxgrid_engine::core::config::EditorConfig;

fn setup() -> EditorEngine {
    let config = EditorConfig { width: 4, height: 4, ..EditorConfig::default() };
    EditorEngine::new(config).unwrap()
}

fn paint(app: &mut EditorEngine, x: i32, y: i32, token: &str) {
    app.set_color(Color::new(token));
    let p = PointerInput::at_cell(app.grid(), x, y);
    app.pointer_down(p.clone());
    app.pointer_up(p);
}

fn top_pixel(app: &EditorEngine, idx: usize) -> Pixel {
    app.composite()[idx].clone()
}

#[test]
fn test_default_layer_names() {
    let mut app = setup();
    assert_eq!(app.layers().len(), 1);
    assert_eq!(app.layers()[0].name, "Layer 1");
    app.add_layer().unwrap();
    app.add_layer().unwrap();
    let names: Vec<_> = app.layers().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Layer 1", "Layer 2", "Layer 3"]);
}

#[test]
fn test_new_layer_becomes_active_on_top() {
    let mut app = setup();
    let id = app.add_layer().unwrap();
    assert_eq!(app.active_layer_id(), id);
    assert_eq!(app.layers().last().unwrap().id, id);
}

#[test]
fn test_last_layer_cannot_be_deleted() {
    let mut app = setup();
    let id = app.layers()[0].id.clone();
    assert!(!app.delete_layer(&id).unwrap());
    assert_eq!(app.layers().len(), 1);
    assert!(!app.can_undo());
}

#[test]
fn test_deleting_active_falls_back_to_top() {
    let mut app = setup();
    let bottom = app.layers()[0].id.clone();
    let middle = app.add_layer().unwrap();
    let top = app.add_layer().unwrap();
    app.set_active_layer(&middle).unwrap();

    assert!(app.delete_layer(&middle).unwrap());
    assert_eq!(app.active_layer_id(), top);
    assert!(app.undo());
    assert_eq!(app.layers().len(), 3);
    assert_eq!(app.active_layer_id(), middle);
    assert_eq!(app.layers()[0].id, bottom);
}

#[test]
fn test_visibility_and_order_drive_composite() {
    let mut app = setup();
    paint(&mut app, 0, 0, "#ff0000");
    let top = app.add_layer().unwrap();
    paint(&mut app, 0, 0, "#0000ff");
    assert_eq!(top_pixel(&app, 0), Some(Color::new("#0000ff")));

    app.toggle_layer_visibility(&top).unwrap();
    assert_eq!(top_pixel(&app, 0), Some(Color::new("#ff0000")));
    app.toggle_layer_visibility(&top).unwrap();

    assert_eq!(app.execute(EditorCommand::ReorderLayer(1, 0)), EngineEffect::RedrawCanvas);
    assert_eq!(top_pixel(&app, 0), Some(Color::new("#ff0000")));
    assert!(app.undo());
    assert_eq!(top_pixel(&app, 0), Some(Color::new("#0000ff")));
}

#[test]
fn test_painting_hidden_layer_keeps_composite() {
    let mut app = setup();
    let id = app.layers()[0].id.clone();
    app.toggle_layer_visibility(&id).unwrap();
    paint(&mut app, 1, 1, "#ff0000");
    assert!(app.composite().iter().all(|p| p.is_none()));
    assert_eq!(app.layers()[0].painted_count(), 1);
}

#[test]
fn test_rename_and_duplicate() {
    let mut app = setup();
    let id = app.layers()[0].id.clone();
    paint(&mut app, 2, 2, "#ff0000");
    assert!(app.rename_layer(&id, "Sketch").unwrap());
    assert!(!app.rename_layer(&id, "Sketch").unwrap());

    let copy = app.duplicate_layer(&id).unwrap().unwrap();
    assert_eq!(app.layers().len(), 2);
    assert_eq!(app.layers()[1].id, copy);
    assert_eq!(app.layers()[1].name, "Sketch copy");
    assert_eq!(app.layers()[1].pixels, app.layers()[0].pixels);
    assert_eq!(app.active_layer_id(), copy);
}

#[test]
fn test_stale_layer_id_is_noop() {
    let mut app = setup();
    assert!(!app.set_active_layer("nope").unwrap());
    assert!(!app.toggle_layer_visibility("nope").unwrap());
    assert!(app.duplicate_layer("nope").unwrap().is_none());
    assert_eq!(app.execute(EditorCommand::RenameLayer("nope".into(), "x".into())), EngineEffect::None);
    assert!(!app.can_undo());
}

#[test]
fn test_reorder_out_of_range_is_noop() {
    let mut app = setup();
    app.add_layer().unwrap();
    assert!(!app.reorder_layer(0, 5).unwrap());
    assert!(!app.reorder_layer(1, 1).unwrap());
}

#[test]
fn test_reset_clears_every_layer() {
    let mut app = setup();
    paint(&mut app, 0, 0, "#ff0000");
    app.add_layer().unwrap();
    paint(&mut app, 1, 0, "#00ff00");
    assert!(app.execute(EditorCommand::Reset) == EngineEffect::RedrawCanvas);
    assert!(app.layers().iter().all(|l| l.is_blank()));
    assert_eq!(app.layers().len(), 2);
}
