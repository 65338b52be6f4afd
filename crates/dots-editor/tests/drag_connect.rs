//! Integration tests: pointer input → session → board (dots-editor).
//!
//! Drives whole gestures through `Session::handle` and checks the resulting
//! links, dot states, and displayed lines across crate boundaries.

use dots_core::{DotState, GridConfig, GridCoord, GridError, LineTone, Vec2};
use dots_editor::input::InputEvent;
use dots_editor::session::Session;
use dots_render::{DisplayList, Theme, paint_board};
use pretty_assertions::assert_eq;

fn session(rows: u32, columns: u32) -> Session {
    Session::new(GridConfig {
        rows,
        columns,
        ..GridConfig::default()
    })
    .expect("valid dimensions")
}

/// World position of a dot under the default layout.
fn at(x: u32, y: u32) -> (f64, f64) {
    (-100.0 + 60.0 * x as f64, -100.0 + 60.0 * y as f64)
}

fn drag(s: &mut Session, from: (f64, f64), to: (f64, f64)) {
    s.handle(&InputEvent::PointerDown {
        x: from.0,
        y: from.1,
    });
    let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    s.handle(&InputEvent::PointerMove { x: mid.0, y: mid.1 });
    s.handle(&InputEvent::PointerMove { x: to.0, y: to.1 });
    s.handle(&InputEvent::PointerUp { x: to.0, y: to.1 });
}

// ─── Connecting ─────────────────────────────────────────────────────────

#[test]
fn drag_between_adjacent_dots_connects_them() {
    let mut s = session(3, 3);
    drag(&mut s, at(0, 0), at(1, 0));

    let a = GridCoord::new(0, 0);
    let b = GridCoord::new(1, 0);
    let board = s.board();
    assert_eq!(board.dot(a).unwrap().state(), DotState::Connected);
    assert_eq!(board.dot(b).unwrap().state(), DotState::Connected);
    assert_eq!(board.neighbors(a).iter().filter(|&&n| n == b).count(), 1);

    let sketch = board.dot(a).unwrap().sketch.unwrap();
    assert_eq!(sketch.tone, LineTone::Committed);
    assert_eq!(sketch.to, Vec2::new(60.0, 0.0));
}

#[test]
fn dragging_the_same_edge_twice_keeps_one_link() {
    let mut s = session(3, 3);
    drag(&mut s, at(1, 1), at(1, 2));
    drag(&mut s, at(1, 2), at(1, 1));

    assert_eq!(s.board().link_count(), 1);
    let back = s.board().dot(GridCoord::new(1, 2)).unwrap().sketch.unwrap();
    assert_eq!(back.tone, LineTone::Rejected);
}

#[test]
fn non_adjacent_drag_leaves_dots_untouched() {
    let mut s = session(3, 3);
    drag(&mut s, at(0, 0), at(2, 0));

    let board = s.board();
    assert_eq!(board.link_count(), 0);
    assert_eq!(board.dot(GridCoord::new(0, 0)).unwrap().state(), DotState::Active);
    assert_eq!(board.dot(GridCoord::new(2, 0)).unwrap().state(), DotState::Active);
    let sketch = board.dot(GridCoord::new(0, 0)).unwrap().sketch.unwrap();
    assert_eq!(sketch.tone, LineTone::Rejected);
    assert_eq!(sketch.to, Vec2::new(120.0, 0.0));
}

#[test]
fn provisional_line_follows_pointer() {
    let mut s = session(2, 2);
    let (x, y) = at(0, 0);
    s.handle(&InputEvent::PointerDown { x, y });
    assert!(s.handle(&InputEvent::PointerMove {
        x: x + 25.0,
        y: y + 5.0
    }));

    let sketch = s.board().dot(GridCoord::new(0, 0)).unwrap().sketch.unwrap();
    assert_eq!(sketch.tone, LineTone::Provisional);
    assert_eq!(sketch.to, Vec2::new(25.0, 5.0));
    assert!(s.handler(GridCoord::new(0, 0)).unwrap().is_dragging());
}

// ─── Cancelling ─────────────────────────────────────────────────────────

#[test]
fn pointer_cancel_reverts_without_connecting() {
    let mut s = session(2, 2);
    let (x, y) = at(0, 0);
    s.handle(&InputEvent::PointerDown { x, y });
    s.handle(&InputEvent::PointerMove { x: x + 60.0, y });
    s.handle(&InputEvent::PointerCancel);
    // Release after cancel must not connect.
    s.handle(&InputEvent::PointerUp { x: x + 60.0, y });

    assert_eq!(s.board().link_count(), 0);
    let sketch = s.board().dot(GridCoord::new(0, 0)).unwrap().sketch.unwrap();
    assert_eq!(sketch.tone, LineTone::Rejected);
}

#[test]
fn cancel_all_reaches_every_dragging_dot() {
    let mut s = session(2, 2);
    let (x, y) = at(1, 1);
    s.handle(&InputEvent::PointerDown { x, y });
    s.handle(&InputEvent::PointerMove { x: x - 10.0, y });

    assert!(s.cancel_all());
    assert_eq!(s.pointer_owner(), None);
    assert!(s.board().dots().iter().all(|d| {
        d.sketch
            .map(|sk| sk.tone == LineTone::Rejected)
            .unwrap_or(true)
    }));
    assert!(!s.handler(GridCoord::new(1, 1)).unwrap().is_dragging());
}

// ─── Setup form ─────────────────────────────────────────────────────────

#[test]
fn submit_respawns_grid_and_locks_form() {
    let mut s = session(3, 3);
    drag(&mut s, at(0, 0), at(0, 1));
    assert_eq!(s.board().link_count(), 1);

    s.form_mut().set_rows_text("4");
    s.form_mut().set_columns_text(" 2 ");
    let dims = s.submit().unwrap();

    assert_eq!((dims.rows, dims.columns), (4, 2));
    assert_eq!(s.board().len(), 8);
    assert_eq!(s.board().lattice_edge_count(), 10);
    assert_eq!(s.board().link_count(), 0);
    assert!(s.form().is_locked());
    assert!(!s.form().is_visible());
    assert!(s.handler(GridCoord::new(3, 1)).is_some());
}

#[test]
fn bad_submit_keeps_current_grid() {
    let mut s = session(3, 3);
    s.form_mut().set_rows_text("three");
    s.form_mut().set_columns_text("3");
    assert!(s.submit().is_err());
    assert_eq!(s.board().len(), 9);
    assert!(s.form().is_visible());
}

#[test]
fn oversized_submit_is_rejected_without_respawn() {
    let mut s = session(3, 3);
    s.form_mut().set_rows_text("100000");
    s.form_mut().set_columns_text("100000");
    assert!(matches!(
        s.submit(),
        Err(GridError::InvalidDimensions { rows: 100000, .. })
    ));
    assert_eq!(s.board().len(), 9);
    assert!(!s.form().is_locked());
}

#[test]
fn resubmitting_locked_form_keeps_links() {
    let mut s = session(2, 2);
    s.form_mut().set_rows_text("3");
    s.form_mut().set_columns_text("3");
    s.submit().unwrap();
    drag(&mut s, at(0, 0), at(1, 0));
    assert_eq!(s.board().link_count(), 1);

    assert_eq!(s.submit(), Err(GridError::FormLocked));
    assert_eq!(s.board().link_count(), 1);
    assert_eq!(
        s.board().dot(GridCoord::new(1, 0)).unwrap().state(),
        DotState::Connected
    );
}

// ─── Painting ───────────────────────────────────────────────────────────

#[test]
fn painted_board_shows_grid_and_committed_line() {
    let mut s = session(2, 2);
    drag(&mut s, at(0, 0), at(1, 0));

    let mut list = DisplayList::new();
    paint_board(&mut list, s.board(), &Theme::default());
    // 2 column lines, 2 row lines, 1 committed connection
    assert_eq!(list.segments().len(), 5);
}
