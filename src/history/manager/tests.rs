use super::*;
use crate::core::color::{Color, Pixel};

fn paint(s: &mut PixelStore, idx: usize, token: &str) {
    s.paint_cells(&[idx], &Some(Color::new(token))).unwrap();
}

fn pixels(s: &PixelStore) -> Vec<Pixel> {
    s.active_pixels().unwrap().to_vec()
}

#[test]
fn test_history_undo_redo_round_trip() {
    let mut s = PixelStore::new(4, 4);
    let mut h = HistoryManager::new(15);
    let original = pixels(&s);

    for i in 0..3 {
        h.begin_action(&s);
        paint(&mut s, i, "#f00");
        h.finalize_action(&s);
    }
    let edited = pixels(&s);

    for _ in 0..3 {
        assert!(h.undo(&mut s));
    }
    assert_eq!(pixels(&s), original);
    assert!(!h.can_undo());

    for _ in 0..3 {
        assert!(h.redo(&mut s));
    }
    assert_eq!(pixels(&s), edited);
}

#[test]
fn test_history_noop_action_is_coalesced() {
    let s = PixelStore::new(4, 4);
    let mut h = HistoryManager::new(15);
    h.begin_action(&s);
    h.finalize_action(&s);
    assert!(!h.can_undo());
}

#[test]
fn test_history_noop_action_keeps_redo() {
    let mut s = PixelStore::new(4, 4);
    let mut h = HistoryManager::new(15);
    h.begin_action(&s);
    paint(&mut s, 0, "#f00");
    h.finalize_action(&s);
    h.undo(&mut s);
    assert!(h.can_redo());

    h.begin_action(&s);
    h.finalize_action(&s);
    assert!(h.can_redo());
    assert!(!h.can_undo());
}

#[test]
fn test_history_new_action_clears_redo() {
    let mut s = PixelStore::new(4, 4);
    let mut h = HistoryManager::new(15);
    h.begin_action(&s);
    paint(&mut s, 0, "#f00");
    h.finalize_action(&s);
    h.undo(&mut s);

    h.begin_action(&s);
    paint(&mut s, 1, "#0f0");
    h.finalize_action(&s);
    assert!(!h.can_redo());
}

#[test]
fn test_history_bound_evicts_oldest() {
    let mut s = PixelStore::new(8, 8);
    let mut h = HistoryManager::new(15);
    for i in 0..16 {
        h.begin_action(&s);
        paint(&mut s, i, "#f00");
        h.finalize_action(&s);
    }
    assert_eq!(h.undo_stack.len(), 15);
    for _ in 0..15 {
        assert!(h.undo(&mut s));
    }
    assert!(!h.undo(&mut s));
    // The very first stroke is no longer undoable.
    assert_eq!(s.active_pixels().unwrap()[0], Some(Color::new("#f00")));
    assert_eq!(s.active_pixels().unwrap()[1], None);
}

#[test]
fn test_history_noop_at_capacity_restores_evicted() {
    let mut s = PixelStore::new(4, 4);
    let mut h = HistoryManager::new(2);
    for i in 0..2 {
        h.begin_action(&s);
        paint(&mut s, i, "#f00");
        h.finalize_action(&s);
    }
    let before: Vec<_> = h.undo_stack.iter().cloned().collect();
    h.begin_action(&s);
    h.finalize_action(&s);
    let after: Vec<_> = h.undo_stack.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_history_blocked_while_in_progress() {
    let mut s = PixelStore::new(4, 4);
    let mut h = HistoryManager::new(15);
    h.begin_action(&s);
    paint(&mut s, 0, "#f00");
    h.finalize_action(&s);

    h.begin_action(&s);
    assert!(h.is_in_progress());
    assert!(!h.undo(&mut s));
    h.begin_action(&s);
    h.finalize_action(&s);
    assert!(!h.is_in_progress());
    assert!(h.undo(&mut s));
}

#[test]
fn test_history_finalize_without_begin_is_noop() {
    let s = PixelStore::new(2, 2);
    let mut h = HistoryManager::new(15);
    h.finalize_action(&s);
    assert!(!h.can_undo());
}

#[test]
fn test_history_record_snapshot_coalesces() {
    let s = PixelStore::new(2, 2);
    let mut h = HistoryManager::new(15);
    assert!(h.record_snapshot(&s));
    assert!(!h.record_snapshot(&s));
    assert_eq!(h.undo_stack.len(), 1);
}
