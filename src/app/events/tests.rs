use super::*;

#[test]
fn test_effect_merge_prefers_error() {
    let e = EngineEffect::RedrawCanvas.merge(EngineEffect::Error(CoreError::InvalidConfig("x".into())));
    assert!(matches!(e, EngineEffect::Error(_)));
}

#[test]
fn test_effect_merge_ordering() {
    assert_eq!(EngineEffect::None.merge(EngineEffect::RedrawOverlay), EngineEffect::RedrawOverlay);
    assert_eq!(EngineEffect::RedrawCanvas.merge(EngineEffect::RedrawOverlay), EngineEffect::RedrawCanvas);
    assert_eq!(EngineEffect::ViewChanged.merge(EngineEffect::None), EngineEffect::ViewChanged);
}

#[test]
fn test_pointer_erase_convention() {
    let g = GridGeometry::new(4, 4);
    let p = PointerInput::at_cell(g, 1, 1);
    assert!(!p.wants_erase());
    assert!(p.with_button(PointerButton::Secondary).wants_erase());
    assert!(p.with_modifiers(Modifiers::ctrl()).wants_erase());
    assert!(p.with_modifiers(Modifiers::alt()).wants_erase());
    assert!(p.with_modifiers(Modifiers { meta: true, ..Modifiers::none() }).wants_erase());
    assert!(!p.with_modifiers(Modifiers::shift()).wants_erase());
}

#[test]
fn test_pointer_grid_point_off_canvas() {
    let g = GridGeometry::new(4, 4);
    let p = PointerInput::at_world(g, -1.5, 2.2);
    assert_eq!(p.cell, None);
    assert_eq!(p.grid_point(g), Some((-2, 2)));
    assert_eq!(PointerInput::detached().grid_point(g), None);
}
