use pxgrid_engine::app::commands::EditorCommand;
use pxgrid_engine::app::engine::EditorEngine;
use pxgrid_engine::app::events::{InputEvent, Modifiers, PointerInput};
use pxgrid_engine::app::state::ToolType;
use pxgrid_engine::core::color::{is_painted, Color, Pixel};
use pxgrid_engine::core::config::EditorConfig;
use pxgrid_engine::core::selection::SelectionRect;

fn at(app: &EditorEngine, x: i32, y: i32) -> PointerInput {
    PointerInput::at_cell(app.grid(), x, y)
}

fn green() -> Pixel {
    Some(Color::new("#00ff00"))
}

/// 8x8 canvas with green at (1,1) and (2,1), selected by a drag.
fn setup() -> EditorEngine {
    let config = EditorConfig { width: 8, height: 8, ..EditorConfig::default() };
    let mut app = EditorEngine::new(config).unwrap();
    app.set_color(Color::new("#00ff00"));
    for x in [1, 2] {
        let p = at(&app, x, 1);
        app.pointer_down(p.clone());
        app.pointer_up(p);
    }
    app.set_tool(ToolType::RectSelect).unwrap();
    app.pointer_down(at(&app, 1, 1));
    app.pointer_move(at(&app, 2, 1));
    app.pointer_up(at(&app, 2, 1));
    app
}

fn pixel(app: &EditorEngine, x: i32, y: i32) -> Pixel {
    app.composite()[app.grid().coords_to_index(x, y)].clone()
}

fn escape(app: &mut EditorEngine) {
    app.handle_input(InputEvent::Key { key: "Escape".into(), modifiers: Modifiers::none() });
}

#[test]
fn test_drag_defines_selection() {
    let app = setup();
    let sel = app.selection().unwrap();
    assert_eq!(sel.rect, SelectionRect::new(1, 1, 2, 1));
    assert_eq!(sel.pixels.len(), 2);
    assert!(!sel.is_floating);
}

#[test]
fn test_click_without_drag_deselects() {
    let mut app = setup();
    let p = at(&app, 6, 6);
    app.pointer_down(p.clone());
    app.pointer_up(p);
    assert!(app.selection().is_none());
    assert_eq!(pixel(&app, 1, 1), green());
}

#[test]
fn test_commit_moves_not_copies() {
    let mut app = setup();
    app.pointer_down(at(&app, 1, 1));
    app.pointer_move(at(&app, 3, 2));
    assert!(app.selection().unwrap().is_floating);
    app.pointer_up(at(&app, 4, 4));

    assert_eq!(pixel(&app, 1, 1), None);
    assert_eq!(pixel(&app, 2, 1), None);
    assert_eq!(pixel(&app, 4, 4), green());
    assert_eq!(pixel(&app, 5, 4), green());
    assert_eq!(app.composite().iter().filter(|p| is_painted(p)).count(), 2);

    let sel = app.selection().unwrap();
    assert_eq!(sel.rect, SelectionRect::new(4, 4, 2, 1));
    assert!(!sel.is_floating);
}

#[test]
fn test_move_then_escape_restores() {
    let mut app = setup();
    let before = app.composite().to_vec();
    app.pointer_down(at(&app, 2, 1));
    app.pointer_move(at(&app, 6, 6));
    escape(&mut app);

    assert!(!app.is_gesture_active());
    assert_eq!(app.composite(), &before[..]);
    // A later stray pointer-up changes nothing.
    app.pointer_up(at(&app, 6, 6));
    assert_eq!(app.composite(), &before[..]);
}

#[test]
fn test_cells_moved_off_canvas_are_dropped() {
    let mut app = setup();
    app.pointer_down(at(&app, 1, 1));
    app.pointer_move(at(&app, 30, 30));
    assert_eq!(app.selection().unwrap().offset, (6, 6));
    app.pointer_up(at(&app, 7, 7));

    assert_eq!(pixel(&app, 7, 7), green());
    assert_eq!(app.composite().iter().filter(|p| is_painted(p)).count(), 1);
    assert_eq!(app.selection().unwrap().pixels.len(), 1);
}

#[test]
fn test_move_undo_restores_source() {
    let mut app = setup();
    let before = app.composite().to_vec();
    app.pointer_down(at(&app, 1, 1));
    app.pointer_up(at(&app, 1, 5));
    assert!(app.undo());
    assert_eq!(app.composite(), &before[..]);
    assert_eq!(app.selection().map(|s| s.rect), Some(SelectionRect::new(1, 1, 2, 1)));
}

#[test]
fn test_delete_key_clears_selected_cells() {
    let mut app = setup();
    app.handle_input(InputEvent::Key { key: "Delete".into(), modifiers: Modifiers::none() });
    assert!(app.selection().is_none());
    assert_eq!(app.composite().iter().filter(|p| is_painted(p)).count(), 0);
    assert!(app.undo());
    assert_eq!(pixel(&app, 2, 1), green());
}

#[test]
fn test_select_all_then_move() {
    let mut app = setup();
    app.execute(EditorCommand::SelectAll);
    assert_eq!(app.selection().unwrap().rect, SelectionRect::new(0, 0, 8, 8));
    app.pointer_down(at(&app, 0, 0));
    app.pointer_up(at(&app, 3, 3));
    assert_eq!(pixel(&app, 1, 1), None);
    assert_eq!(pixel(&app, 4, 4), green());
    assert_eq!(pixel(&app, 5, 4), green());
}

#[test]
fn test_tool_switch_mid_move_cancels() {
    let mut app = setup();
    let before = app.composite().to_vec();
    app.pointer_down(at(&app, 1, 1));
    app.pointer_move(at(&app, 5, 5));
    app.set_tool(ToolType::Pencil).unwrap();
    assert_eq!(app.composite(), &before[..]);
    assert!(app.selection().is_none());
}

#[test]
fn test_switching_layer_releases_selection() {
    let mut app = setup();
    let bottom = app.layers()[0].id.clone();
    let top = app.add_layer().unwrap();
    assert!(app.selection().is_none());

    app.set_tool(ToolType::Pencil).unwrap();
    app.set_color(Color::new("#ff0000"));
    let p = at(&app, 1, 1);
    app.pointer_down(p.clone());
    app.pointer_up(p);

    // Select on the bottom layer, then hand the canvas to the top one.
    app.set_active_layer(&bottom).unwrap();
    app.set_tool(ToolType::RectSelect).unwrap();
    app.pointer_down(at(&app, 1, 1));
    app.pointer_move(at(&app, 2, 2));
    app.pointer_up(at(&app, 2, 2));
    assert!(app.selection().is_some());
    app.set_active_layer(&top).unwrap();
    assert!(app.selection().is_none());

    app.pointer_down(at(&app, 1, 1));
    app.pointer_move(at(&app, 5, 5));
    app.pointer_up(at(&app, 5, 5));

    let grid = app.grid();
    let (src, dst) = (grid.coords_to_index(1, 1), grid.coords_to_index(5, 5));
    assert_eq!(app.layers()[1].pixels[src], Some(Color::new("#ff0000")));
    assert_eq!(app.layers()[1].pixels[dst], None);
    assert_eq!(app.layers()[0].pixels[src], green());
    assert_eq!(app.layers()[0].painted_count(), 2);
}

#[test]
fn test_layer_edits_release_selection_as_one_step() {
    let mut app = setup();
    let base = app.layers()[0].id.clone();
    let copy = app.duplicate_layer(&base).unwrap().unwrap();
    assert!(app.selection().is_none());
    assert!(app.undo());
    assert_eq!(app.layers().len(), 1);
    assert_eq!(app.selection().map(|s| s.rect), Some(SelectionRect::new(1, 1, 2, 1)));
    assert!(app.redo());

    // Deleting the active copy hands over to the base layer.
    app.select_entire_canvas().unwrap();
    assert!(app.delete_layer(&copy).unwrap());
    assert!(app.selection().is_none());
    assert_eq!(app.active_layer_id(), base);
    assert_eq!(pixel(&app, 1, 1), green());
}
